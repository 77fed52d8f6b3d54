//! Display formatting for bill dates, statuses and amounts.
//!
//! Every function here reports failure through [FormatError] instead of
//! panicking so that callers can fall back to the raw value.

use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

use crate::bill::BillStatus;

/// A value of a bill that could not be formatted for display.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The date is not an ISO 8601 calendar date, e.g. "2004-04-04".
    #[error("could not parse \"{0}\" as an ISO 8601 date")]
    InvalidDate(String),

    /// The status is not one of "pending", "accepted" or "refused".
    #[error("unknown bill status \"{0}\"")]
    UnknownStatus(String),

    /// The amount is NaN, infinite or too large to count in cents.
    #[error("{0} is not a valid amount")]
    InvalidAmount(f64),
}

const ISO_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month padding:zero]-[day padding:zero]");

/// Parse the date part of an ISO 8601 string.
///
/// A time part after a 'T' is ignored, so "2004-04-04T10:00:00Z" parses as
/// the 4th of April 2004.
pub fn parse_iso_date(raw: &str) -> Result<Date, FormatError> {
    let date_part = raw.split('T').next().unwrap_or(raw).trim();

    Date::parse(date_part, ISO_DATE_FORMAT).map_err(|_| FormatError::InvalidDate(raw.to_owned()))
}

/// Format an ISO 8601 date as a short French date, e.g. "2004-04-04" becomes "4 Avr. 04".
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    let date = parse_iso_date(raw)?;

    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        short_month_name(date.month()),
        date.year().rem_euclid(100)
    ))
}

fn short_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Fév",
        Month::March => "Mar",
        Month::April => "Avr",
        Month::May => "Mai",
        Month::June => "Jui",
        Month::July => "Jui",
        Month::August => "Aoû",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Déc",
    }
}

/// Map a status code to the label shown to the user.
pub fn format_status(raw: &str) -> Result<&'static str, FormatError> {
    raw.parse::<BillStatus>().map(BillStatus::label)
}

/// Format an amount rounded to the cent, with a euro suffix, e.g. "348.00 €".
///
/// Halves round away from zero and amounts that round to zero are shown as
/// "0.00 €", never "-0.00 €".
pub fn format_amount(amount: f64) -> Result<String, FormatError> {
    let cents = (amount * 100.0).round();

    if !cents.is_finite() {
        return Err(FormatError::InvalidAmount(amount));
    }

    let cents = if cents == 0.0 { 0.0 } else { cents };

    Ok(format!("{:.2} €", cents / 100.0))
}
