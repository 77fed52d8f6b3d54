//! The URIs of the pages and API endpoints.

/// The root route which redirects to the bills page.
pub const ROOT: &str = "/";
/// The page listing the connected employee's bills.
pub const BILLS_VIEW: &str = "/employee/bills";
/// The page for submitting a new bill.
pub const NEW_BILL_VIEW: &str = "/employee/bill/new";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for the content of the bills page, loaded after the page shell.
pub const BILLS_API: &str = "/api/bills";
/// The route for the receipt preview modal of a bill.
pub const RECEIPT_API: &str = "/api/bills/receipt";
/// The route hit by the new bill button, answers with a redirect.
pub const NEW_BILL_API: &str = "/api/bills/new";
