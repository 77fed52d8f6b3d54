//! This file defines the vertical navigation bar shown beside every page.

use maud::{Markup, html};

use crate::{routing::RoutePath, session::Session};

/// Template for an icon link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link {
    route: RoutePath,
    title: &'static str,
    test_id: &'static str,
    icon: fn() -> Markup,
    is_current: bool,
}

impl Link {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "layout-icon active-icon flex items-center justify-center w-12 h-12 rounded-lg \
            bg-blue-700 text-white dark:bg-blue-600"
        } else {
            "layout-icon flex items-center justify-center w-12 h-12 rounded-lg \
            text-gray-400 hover:bg-gray-800 hover:text-white"
        };

        html!(
            a
                href=(self.route.as_str())
                class=(style)
                title=(self.title)
                data-testid=(self.test_id)
                aria-current=[self.is_current.then_some("page")]
            {
                ((self.icon)())
                span class="sr-only" { (self.title) }
            }
        )
    }
}

/// The navigation bar on the left of the page, with a link to each page
/// available to the user.
pub struct VerticalLayout {
    links: Vec<Link>,
}

impl VerticalLayout {
    /// Get the navigation bar for the user of `session`.
    ///
    /// Employees get a link to their bills and to the new bill page, the link
    /// to `active_route` is marked as active. Administrators only get the
    /// app title.
    pub fn new(active_route: RoutePath, session: &Session) -> Self {
        if !session.is_employee() {
            return Self { links: Vec::new() };
        }

        let links = vec![
            Link {
                route: RoutePath::Bills,
                title: "Mes notes de frais",
                test_id: "icon-window",
                icon: window_icon,
                is_current: active_route == RoutePath::Bills,
            },
            Link {
                route: RoutePath::NewBill,
                title: "Nouvelle note de frais",
                test_id: "icon-mail",
                icon: mail_icon,
                is_current: active_route == RoutePath::NewBill,
            },
        ];

        Self { links }
    }

    /// Render the navigation bar beside the page `content`.
    pub fn into_html(self, content: &Markup) -> Markup {
        html!(
            div class="flex min-h-screen"
            {
                nav
                    class="vertical-navbar flex flex-col items-center gap-6 w-24 py-6 bg-gray-900"
                    data-testid="vertical-navbar"
                {
                    a
                        href=(RoutePath::Root.as_str())
                        class="layout-title text-xl font-semibold text-white"
                    {
                        "Billed"
                    }

                    @for link in self.links {
                        (link.into_html())
                    }
                }

                main class="flex-1 min-w-0"
                {
                    (content)
                }
            }
        )
    }
}

fn window_icon() -> Markup {
    html!(
        svg
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
            class="w-6 h-6"
            fill="none"
            viewBox="0 0 24 24"
        {
            path
                stroke="currentColor"
                stroke-width="2"
                d="M4 5h16v14H4zM4 9h16" {}
        }
    )
}

fn mail_icon() -> Markup {
    html!(
        svg
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
            class="w-6 h-6"
            fill="none"
            viewBox="0 0 24 24"
        {
            path
                stroke="currentColor"
                stroke-width="2"
                d="M4 6h16v12H4zM4 6l8 7 8-7" {}
        }
    )
}
