//! Employee bills: retrieval, formatting and the bills pages.

mod bills_page;
mod container;
mod domain;
mod new_bill_page;
mod store;
mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bills_page::{get_bills_content, get_bills_page, get_receipt_modal, post_new_bill};
pub use container::{BillRow, Bills, FormattedBill};
pub use domain::{BillData, BillRecord, BillStatus};
pub use new_bill_page::get_new_bill_page;
pub use store::{BillStore, SqliteBillStore, create_bill, create_bill_table};
pub use view::BillsViewState;
