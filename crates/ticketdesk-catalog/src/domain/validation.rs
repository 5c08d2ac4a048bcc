//! Field validation shared by the command handlers.

use chrono::NaiveDate;
use ticketdesk_core::error::DomainError;

/// Accepted spellings for date fields: `12-12-2020`, `2020-12-12` and
/// `5 Oct 2020`.
const DATE_FORMATS: [&str; 3] = ["%d-%m-%Y", "%Y-%m-%d", "%d %b %Y"];

/// Highest accepted discount, in percent.
pub const MAX_DISCOUNT: i32 = 100;

/// Rejects empty or whitespace-only values.
///
/// # Errors
///
/// Returns `DomainError::Validation` naming `field` if `value` is blank.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Checks a discount lies in `0..=MAX_DISCOUNT`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the discount is out of range.
pub fn validate_discount(discount: i32) -> Result<(), DomainError> {
    if !(0..=MAX_DISCOUNT).contains(&discount) {
        return Err(DomainError::Validation(format!(
            "discount must be between 0 and {MAX_DISCOUNT}, got {discount}"
        )));
    }
    Ok(())
}

/// Rejects negative monetary amounts.
///
/// # Errors
///
/// Returns `DomainError::Validation` naming `field` if `amount` is negative.
pub fn require_non_negative(field: &str, amount: i64) -> Result<(), DomainError> {
    if amount < 0 {
        return Err(DomainError::Validation(format!(
            "{field} must not be negative, got {amount}"
        )));
    }
    Ok(())
}

/// Parses a date field in any of the accepted formats.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no format matches.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, DomainError> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| DomainError::Validation(format!("{field} is not a valid date: {value:?}")))
}

/// Checks both dates parse and `start_date` is not after `end_date`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if either date is malformed or the
/// range is inverted.
pub fn validate_date_range(start_date: &str, end_date: &str) -> Result<(), DomainError> {
    let start = parse_date("start_date", start_date)?;
    let end = parse_date("end_date", end_date)?;
    if start > end {
        return Err(DomainError::Validation(format!(
            "start_date {start} is after end_date {end}"
        )));
    }
    Ok(())
}
