//! Application router configuration and navigation between pages.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_htmx::HxRedirect;
use tower_http::services::ServeDir;

use crate::{
    AppState,
    bill::{
        get_bills_content, get_bills_page, get_new_bill_page, get_receipt_modal, post_new_bill,
    },
    endpoints,
    not_found::get_404_not_found,
    session::session_guard,
};

/// The pages a user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    /// The root page, which redirects to the bills page.
    Root,
    /// The list of the connected employee's bills.
    Bills,
    /// The page for submitting a new bill.
    NewBill,
}

impl RoutePath {
    /// The URI of the page.
    pub fn as_str(self) -> &'static str {
        match self {
            RoutePath::Root => endpoints::ROOT,
            RoutePath::Bills => endpoints::BILLS_VIEW,
            RoutePath::NewBill => endpoints::NEW_BILL_VIEW,
        }
    }

    /// Get the page served at `path`, ignoring any query string.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or(path);

        [RoutePath::Root, RoutePath::Bills, RoutePath::NewBill]
            .into_iter()
            .find(|route| route.as_str() == path)
    }
}

/// Changes the page shown to the user.
pub trait Navigator {
    /// Get the response that takes the user to `path`.
    fn navigate(&self, path: RoutePath) -> Response;
}

/// Navigates with the `HX-Redirect` header, for requests made by HTMX.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmxNavigator;

impl Navigator for HtmxNavigator {
    fn navigate(&self, path: RoutePath) -> Response {
        tracing::debug!("navigating to {}", path.as_str());

        (HxRedirect(path.as_str().to_owned()), StatusCode::OK).into_response()
    }
}

/// Return a router with all the app's routes.
///
/// Every page requires a session, paths that match no route get the 404 page.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BILLS_VIEW, get(get_bills_page))
        .route(endpoints::NEW_BILL_VIEW, get(get_new_bill_page))
        .route(endpoints::BILLS_API, get(get_bills_content))
        .route(endpoints::RECEIPT_API, get(get_receipt_modal))
        .route(endpoints::NEW_BILL_API, post(post_new_bill))
        .layer(middleware::from_fn_with_state(state.clone(), session_guard))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the bills page.
async fn get_index_page() -> Redirect {
    Redirect::to(RoutePath::Bills.as_str())
}
