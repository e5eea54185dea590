//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    html::format_currency,
    internal_server_error::InternalServerError,
    ledger::{Amount, BalanceExceeded},
    not_found::NotFoundError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required form field was missing or empty.
    ///
    /// Holds the name of the form field.
    #[error("the field \"{0}\" is required")]
    MissingField(&'static str),

    /// The submitted amount is not a number with at most two decimal places.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The submitted amount was zero or negative.
    #[error("{0} is not greater than zero")]
    NonPositiveAmount(Amount),

    /// The submitted payment method is not one of the supported methods.
    #[error("\"{0}\" is not a supported payment method")]
    InvalidPaymentMethod(String),

    /// A distribution was larger than the available balance.
    ///
    /// Nothing was written to the database.
    #[error(transparent)]
    BalanceExceeded(#[from] BalanceExceeded),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Whether the error is an expected rejection of user input, as opposed
    /// to a fault in the server.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::MissingField(_)
                | Error::InvalidAmount(_)
                | Error::NonPositiveAmount(_)
                | Error::InvalidPaymentMethod(_)
                | Error::BalanceExceeded(_)
        )
    }

    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Please fill in all required fields".to_owned(),
                    details: format!("The {} field cannot be empty.", field.replace('_', " ")),
                },
            ),
            Error::InvalidAmount(text) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "\"{text}\" is not a valid amount. \
                        Enter a number with at most two decimal places, e.g. 1000.50."
                    ),
                },
            ),
            Error::NonPositiveAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "The amount must be greater than zero, got {}.",
                        format_currency(amount)
                    ),
                },
            ),
            Error::InvalidPaymentMethod(method) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid payment method".to_owned(),
                    details: format!(
                        "\"{method}\" is not a supported payment method. \
                        Choose UPI, card or net banking."
                    ),
                },
            ),
            Error::BalanceExceeded(BalanceExceeded {
                requested,
                available,
            }) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Insufficient balance".to_owned(),
                    details: format!(
                        "Distribution amount ({}) exceeds available balance ({})",
                        format_currency(requested),
                        format_currency(available)
                    ),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
