//! Defines the route handler for the page for submitting a new bill.

use axum::{
    Extension,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    html::{PAGE_CONTAINER_STYLE, base},
    navigation::VerticalLayout,
    routing::RoutePath,
    session::Session,
};

fn new_bill_view(session: &Session) -> Markup {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" data-testid="form-new-bill-title"
            {
                "Envoyer une note de frais"
            }
        }
    };

    base(
        "Nouvelle note de frais",
        &VerticalLayout::new(RoutePath::NewBill, session).into_html(&content),
    )
}

/// Renders the page for submitting a new bill.
pub async fn get_new_bill_page(Extension(session): Extension<Session>) -> Response {
    new_bill_view(&session).into_response()
}
