//! Defines the route handlers for the bills page and its actions.

use std::{
    cmp::Reverse,
    sync::{Arc, Mutex},
};

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState,
    bill::{
        BillRow, BillStore, Bills, FormattedBill, SqliteBillStore,
        view::{BillsViewState, bills_content, bills_view},
    },
    formatting::parse_iso_date,
    routing::{HtmxNavigator, Navigator},
    session::Session,
};

/// The state needed for the bills page.
#[derive(Debug, Clone)]
pub struct BillsPageState {
    /// The database connection for reading bills.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BillsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A container for the actions that do not read bills.
fn bills_without_store(session: Session) -> Bills<SqliteBillStore, HtmxNavigator> {
    Bills::new(None, HtmxNavigator, session)
}

/// Sort `rows` so that the most recent bills come first.
///
/// Rows with a date that cannot be parsed go last, in their original order.
pub(crate) fn sort_newest_first(rows: &mut [BillRow]) {
    rows.sort_by_cached_key(|row| Reverse(parse_iso_date(&row.raw_date).ok()));
}

/// Retrieve the bills and turn the outcome into what the bills page shows.
pub(crate) async fn load_bills_view_state<S, N>(bills: &Bills<S, N>) -> BillsViewState
where
    S: BillStore,
    N: Navigator,
{
    match bills.get_bills().await {
        Ok(bills) => {
            let mut rows: Vec<BillRow> = bills.into_iter().map(FormattedBill::into_row).collect();
            sort_newest_first(&mut rows);

            BillsViewState::Loaded(rows)
        }
        Err(error) => {
            tracing::error!(
                email = %bills.session().email,
                "could not load the bills page: {error}"
            );

            BillsViewState::Error(error.to_string())
        }
    }
}

/// Renders the bills page, which loads the bills once it is displayed.
pub async fn get_bills_page(Extension(session): Extension<Session>) -> Response {
    bills_view(&BillsViewState::Loading, &session).into_response()
}

/// Renders the list of bills of the connected user.
///
/// HTMX requests get the content to swap into the bills page, other requests
/// get the full page.
pub async fn get_bills_content(
    State(state): State<BillsPageState>,
    Extension(session): Extension<Session>,
    HxRequest(is_htmx_request): HxRequest,
) -> Response {
    let store = SqliteBillStore::for_session(state.db_connection, &session);
    let bills = Bills::new(Some(store), HtmxNavigator, session);

    let view_state = load_bills_view_state(&bills).await;

    if is_htmx_request {
        bills_content(&view_state).into_response()
    } else {
        bills_view(&view_state, bills.session()).into_response()
    }
}

/// The query sent when the eye icon of a bill is clicked.
#[derive(Debug, Deserialize)]
pub struct ReceiptQuery {
    /// The URL of the receipt image, empty if the bill has none.
    pub file_url: Option<String>,
}

/// Renders the receipt modal for the clicked bill.
///
/// Answers `204 No Content` when the bill has no receipt, which leaves the
/// page unchanged.
pub async fn get_receipt_modal(
    Query(query): Query<ReceiptQuery>,
    Extension(session): Extension<Session>,
) -> Response {
    match bills_without_store(session).handle_click_icon_eye(query.file_url.as_deref()) {
        Some(modal) => modal.into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Takes the user to the new bill page.
pub async fn post_new_bill(Extension(session): Extension<Session>) -> Response {
    bills_without_store(session).handle_click_new_bill()
}

#[cfg(test)]
mod sort_tests {
    use crate::bill::{BillRow, bills_page::sort_newest_first};

    fn row_with_date(raw_date: &str) -> BillRow {
        BillRow {
            id: raw_date.to_owned(),
            expense_type: "Transports".to_owned(),
            name: raw_date.to_owned(),
            raw_date: raw_date.to_owned(),
            date: raw_date.to_owned(),
            amount: "1.00 €".to_owned(),
            status: "En attente".to_owned(),
            file_url: None,
        }
    }

    #[test]
    fn sorts_newest_first_with_unparseable_dates_last() {
        let mut rows: Vec<_> = ["2001-01-01", "oops", "2004-04-04", "", "2002-02-02"]
            .into_iter()
            .map(row_with_date)
            .collect();

        sort_newest_first(&mut rows);

        let got: Vec<_> = rows.iter().map(|row| row.raw_date.as_str()).collect();
        assert_eq!(got, ["2004-04-04", "2002-02-02", "2001-01-01", "oops", ""]);
    }
}
