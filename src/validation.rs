//! Helpers for turning raw form fields into validated values.

use crate::{Error, ledger::Amount};

/// Get the trimmed text of a required field.
///
/// # Errors
/// Returns [Error::MissingField] if the field is absent or only whitespace.
pub fn required(value: Option<String>, field: &'static str) -> Result<String, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_owned()),
        _ => Err(Error::MissingField(field)),
    }
}

/// Get the trimmed text of an optional field, treating blank text as absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// Parse the required amount field, which must be greater than zero.
///
/// # Errors
/// Returns:
/// - [Error::MissingField] if the field is absent,
/// - [Error::InvalidAmount] if it is not a decimal with at most two decimal places,
/// - [Error::NonPositiveAmount] if it is zero or negative.
pub fn positive_amount(value: Option<String>) -> Result<Amount, Error> {
    let amount: Amount = required(value, "amount")?.parse()?;

    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(Error::NonPositiveAmount(amount))
    }
}
