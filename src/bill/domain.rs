//! The bill records returned by a [BillStore](crate::bill::BillStore).

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::formatting::FormatError;

/// The review status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatus {
    /// The bill has not been reviewed by an administrator yet.
    Pending,
    /// The bill was accepted by an administrator.
    Accepted,
    /// The bill was refused by an administrator.
    Refused,
}

impl BillStatus {
    /// The status code as stored by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    /// The label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }
}

impl FromStr for BillStatus {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BillStatus::Pending),
            "accepted" => Ok(BillStatus::Accepted),
            "refused" => Ok(BillStatus::Refused),
            other => Err(FormatError::UnknownStatus(other.to_owned())),
        }
    }
}

impl Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fields of a submitted bill, in the JSON shape used by the backend.
///
/// `date` and `status` are kept as the raw strings sent by the backend so that
/// a malformed record can still be displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillData {
    /// The email of the employee who submitted the bill.
    #[serde(default)]
    pub email: String,
    /// The kind of expense, e.g. "Transports".
    #[serde(rename = "type", default)]
    pub expense_type: String,
    /// A short name for the expense.
    #[serde(default)]
    pub name: String,
    /// The date of the expense as an ISO 8601 string.
    #[serde(default)]
    pub date: String,
    /// The amount including VAT, in euros.
    #[serde(default)]
    pub amount: f64,
    /// The VAT amount as entered by the employee.
    #[serde(default)]
    pub vat: Option<String>,
    /// The VAT rate in percent.
    #[serde(default)]
    pub pct: Option<u32>,
    /// A comment from the employee.
    #[serde(default)]
    pub commentary: Option<String>,
    /// The status code, one of "pending", "accepted" or "refused".
    #[serde(default)]
    pub status: String,
    /// A comment from the administrator who reviewed the bill.
    #[serde(default)]
    pub comment_admin: Option<String>,
    /// The URL of the receipt image.
    #[serde(default)]
    pub file_url: Option<String>,
    /// The file name of the receipt image.
    #[serde(default)]
    pub file_name: Option<String>,
}

/// A bill as returned by a [BillStore](crate::bill::BillStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    /// The ID of the bill in the store.
    pub id: String,
    /// The fields of the bill.
    #[serde(flatten)]
    pub data: BillData,
}

impl BillRecord {
    /// Create a record for the bill `id` with `data`.
    pub fn new(id: impl Into<String>, data: BillData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// The fields of the bill.
    pub fn data(&self) -> &BillData {
        &self.data
    }
}
