//! The bills container: retrieves the user's bills, formats them for display
//! and handles the clicks on the bills page.

use axum::response::Response;
use maud::Markup;

use crate::{
    Error,
    bill::{BillRecord, BillStore, view::receipt_modal},
    formatting::{FormatError, format_amount, format_date, format_status},
    routing::{Navigator, RoutePath},
    session::Session,
};

/// A bill ready to be displayed in the bills table.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    /// The ID of the bill in the store.
    pub id: String,
    /// The expense category, e.g. "Transports".
    pub expense_type: String,
    /// The name the employee gave the bill.
    pub name: String,
    /// The date as stored, used for sorting and the `datetime` attribute.
    pub raw_date: String,
    /// The date shown to the user, e.g. "4 Avr. 04", or the stored date if it
    /// could not be formatted.
    pub date: String,
    /// The amount shown to the user, e.g. "400.00 €".
    pub amount: String,
    /// The status label shown to the user, e.g. "En attente".
    pub status: String,
    /// Where the receipt image is stored.
    pub file_url: Option<String>,
}

/// The result of formatting one bill.
///
/// A bill that cannot be fully formatted is still displayed, with its stored
/// values in place of the fields that failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedBill {
    /// Every field was formatted.
    Formatted(BillRow),
    /// Some fields kept their stored values.
    Degraded {
        /// The row to display.
        row: BillRow,
        /// Why the fields could not be formatted.
        warnings: Vec<FormatError>,
    },
}

impl FormattedBill {
    /// The row to display.
    pub fn row(&self) -> &BillRow {
        match self {
            FormattedBill::Formatted(row) => row,
            FormattedBill::Degraded { row, .. } => row,
        }
    }

    /// Take the row to display.
    pub fn into_row(self) -> BillRow {
        match self {
            FormattedBill::Formatted(row) => row,
            FormattedBill::Degraded { row, .. } => row,
        }
    }
}

/// Format the date, status and amount of `bill`, keeping the stored value of
/// any field that cannot be formatted.
fn format_bill(bill: BillRecord) -> FormattedBill {
    let BillRecord { id, data } = bill;
    let mut warnings = Vec::new();

    let date = format_date(&data.date).unwrap_or_else(|error| {
        warnings.push(error);
        data.date.clone()
    });
    let status = match format_status(&data.status) {
        Ok(label) => label.to_owned(),
        Err(error) => {
            warnings.push(error);
            data.status.clone()
        }
    };
    let amount = format_amount(data.amount).unwrap_or_else(|error| {
        warnings.push(error);
        data.amount.to_string()
    });

    let row = BillRow {
        id,
        expense_type: data.expense_type,
        name: data.name,
        raw_date: data.date,
        date,
        amount,
        status,
        file_url: data.file_url,
    };

    if warnings.is_empty() {
        FormattedBill::Formatted(row)
    } else {
        for warning in &warnings {
            tracing::warn!(bill_id = %row.id, "displaying stored value: {warning}");
        }

        FormattedBill::Degraded { row, warnings }
    }
}

/// Retrieves the bills of the connected user and handles the actions on the
/// bills page.
#[derive(Debug, Clone)]
pub struct Bills<S, N> {
    store: Option<S>,
    navigator: N,
    session: Session,
}

impl<S, N> Bills<S, N>
where
    S: BillStore,
    N: Navigator,
{
    /// Create a container for the user of `session`.
    ///
    /// Without a `store`, [Bills::get_bills] returns an empty list.
    pub fn new(store: Option<S>, navigator: N, session: Session) -> Self {
        Self {
            store,
            navigator,
            session,
        }
    }

    /// The session of the user the container was created for.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Retrieve the bills and format them for display, in the order the store
    /// returned them.
    ///
    /// # Errors
    /// Returns the store's error if the bills could not be retrieved.
    pub async fn get_bills(&self) -> Result<Vec<FormattedBill>, Error> {
        let Some(store) = &self.store else {
            tracing::debug!(email = %self.session.email, "no bill store configured");
            return Ok(Vec::new());
        };

        let bills = store.list().await.inspect_err(|error| {
            tracing::error!(email = %self.session.email, "could not list bills: {error}")
        })?;

        Ok(bills.into_iter().map(format_bill).collect())
    }

    /// Get the receipt modal showing the image at `file_url`.
    ///
    /// Returns `None` if the clicked icon has no file URL.
    pub fn handle_click_icon_eye(&self, file_url: Option<&str>) -> Option<Markup> {
        match file_url.map(str::trim) {
            Some(file_url) if !file_url.is_empty() => Some(receipt_modal(Some(file_url))),
            _ => {
                tracing::warn!(
                    email = %self.session.email,
                    "eye icon clicked without a file URL, not opening the receipt modal"
                );
                None
            }
        }
    }

    /// Take the user to the new bill page.
    pub fn handle_click_new_bill(&self) -> Response {
        self.navigator.navigate(RoutePath::NewBill)
    }
}


#[cfg(test)]
mod bills_tests {
    use scraper::{Html, Selector};

    use crate::{
        Error,
        bill::{
            Bills, FormattedBill,
            test_utils::{RecordingNavigator, StubBillStore, employee_session, fixture_bills},
        },
        routing::RoutePath,
    };

    fn get_bills_container(store: Option<StubBillStore>) -> Bills<StubBillStore, RecordingNavigator> {
        Bills::new(store, RecordingNavigator::default(), employee_session())
    }

    #[tokio::test]
    async fn returns_bills_in_store_order() {
        let bills = get_bills_container(Some(StubBillStore::with_bills(fixture_bills())));

        let got = bills.get_bills().await.expect("Could not get bills");

        let names: Vec<_> = got.iter().map(|bill| bill.row().name.as_str()).collect();
        assert_eq!(names, ["encore", "test1", "test3", "test2"]);
        assert!(
            got.iter()
                .all(|bill| matches!(bill, FormattedBill::Formatted(_)))
        );
    }

    #[tokio::test]
    async fn includes_bill_with_corrupted_date() {
        let mut corrupted = fixture_bills().remove(0);
        corrupted.data.date = "pas une date".to_owned();
        let bills = get_bills_container(Some(StubBillStore::with_bills(vec![corrupted])));

        let got = bills.get_bills().await.expect("Could not get bills");

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].row().date, "pas une date");
    }

    #[tokio::test]
    async fn propagates_store_error() {
        let bills = get_bills_container(Some(StubBillStore::failing("Erreur 404")));

        let got = bills.get_bills().await;

        assert_eq!(got, Err(Error::Fetch("Erreur 404".to_owned())));
        assert_eq!(got.unwrap_err().to_string(), "Erreur 404");
    }

    #[tokio::test]
    async fn returns_empty_list_without_store() {
        let bills = get_bills_container(None);

        let got = bills.get_bills().await;

        assert_eq!(got, Ok(Vec::new()));
    }

    #[test]
    fn new_bill_click_navigates_once() {
        let bills = get_bills_container(None);

        bills.handle_click_new_bill();

        assert_eq!(bills.navigator.calls(), [RoutePath::NewBill]);
    }

    #[test]
    fn eye_click_shows_receipt_modal() {
        let bills = get_bills_container(None);
        let file_url = "https://test.storage.tld/justificatifs/1592770761.jpeg";

        let modal = bills
            .handle_click_icon_eye(Some(file_url))
            .expect("want receipt modal");

        let html = Html::parse_fragment(&modal.into_string());
        let modal = html
            .select(&Selector::parse("[data-testid=\"modaleFile\"]").unwrap())
            .next()
            .expect("No receipt modal found");
        assert!(modal.value().classes().any(|class| class == "show"));
        let image = html
            .select(&Selector::parse("#modaleFile img").unwrap())
            .next()
            .expect("No receipt image found");
        assert_eq!(image.value().attr("src"), Some(file_url));
    }

    #[test]
    fn eye_click_without_file_url_does_nothing() {
        let bills = get_bills_container(None);

        assert!(bills.handle_click_icon_eye(None).is_none());
        assert!(bills.handle_click_icon_eye(Some("")).is_none());
        assert!(bills.handle_click_icon_eye(Some("  ")).is_none());
    }
}
