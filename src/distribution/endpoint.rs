//! Defines the endpoint for recording a distribution.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{Form, PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::Alert,
    distribution::{DEFAULT_PAYMENT_MODE, NewDistribution, record_distribution},
    endpoints,
    flash::set_flash,
    ledger::StatusFilter,
    validation::{optional, positive_amount, required},
};

/// The state needed to record a distribution.
#[derive(Debug, Clone)]
pub struct CreateDistributionState {
    /// The key for encrypting the flash cookie.
    pub cookie_key: Key,
    /// The records the distribution is checked against.
    pub balance_filter: StatusFilter,
    /// The database connection for storing distributions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateDistributionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            balance_filter: state.policy.balance,
            db_connection: state.db_connection.clone(),
        }
    }
}

impl FromRef<CreateDistributionState> for Key {
    fn from_ref(state: &CreateDistributionState) -> Self {
        state.cookie_key.clone()
    }
}

/// The form data for a distribution.
#[derive(Debug, Default, Deserialize)]
pub struct DistributionForm {
    pub beneficiary_name: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub purpose: Option<String>,
    pub payment_mode: Option<String>,
}

impl TryFrom<DistributionForm> for NewDistribution {
    type Error = Error;

    fn try_from(form: DistributionForm) -> Result<Self, Self::Error> {
        let beneficiary_name = required(form.beneficiary_name, "beneficiary_name")?;
        let amount = positive_amount(form.amount)?;
        let category = required(form.category, "category")?;
        let purpose = required(form.purpose, "purpose")?;
        let payment_mode =
            optional(form.payment_mode).unwrap_or_else(|| DEFAULT_PAYMENT_MODE.to_owned());

        Ok(NewDistribution {
            beneficiary_name,
            amount,
            category,
            purpose,
            payment_mode,
        })
    }
}

/// A route handler for recording a distribution, redirects to the overview page on success.
///
/// The form is validated before the balance is checked. A distribution larger
/// than the available balance is rejected and nothing is stored.
pub async fn create_distribution_endpoint(
    State(state): State<CreateDistributionState>,
    jar: PrivateCookieJar,
    Form(form): Form<DistributionForm>,
) -> Response {
    let new_distribution = match NewDistribution::try_from(form) {
        Ok(new_distribution) => new_distribution,
        Err(error) => {
            tracing::debug!("rejected distribution form: {error}");
            return error.into_alert_response();
        }
    };

    let result = {
        let connection = match state.db_connection.lock() {
            Ok(connection) => connection,
            Err(error) => {
                tracing::error!("could not acquire database lock: {error}");
                return Error::DatabaseLockError.into_alert_response();
            }
        };

        record_distribution(new_distribution, state.balance_filter, &connection)
    };

    let distribution = match result {
        Ok(distribution) => distribution,
        Err(error) if error.is_rejection() => {
            tracing::info!("rejected distribution: {error}");
            return error.into_alert_response();
        }
        Err(error) => {
            tracing::error!("could not record distribution: {error}");
            return error.into_alert_response();
        }
    };

    tracing::info!(
        "recorded distribution {} of {} for {}",
        distribution.id,
        distribution.amount,
        distribution.category
    );

    let alert = Alert::Success {
        message: "Distribution recorded successfully!".to_owned(),
        details: String::new(),
    };

    let jar = match set_flash(jar, &alert) {
        Ok(jar) => jar,
        Err(error) => {
            tracing::error!("could not set flash alert: {error}");
            return error.into_alert_response();
        }
    };

    (
        jar,
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod distribution_form_tests {
    use crate::{Error, distribution::NewDistribution, ledger::Amount};

    use super::DistributionForm;

    fn valid_form() -> DistributionForm {
        DistributionForm {
            beneficiary_name: Some("Ravi".to_owned()),
            amount: Some("99.99".to_owned()),
            category: Some("healthcare".to_owned()),
            purpose: Some("Medicine".to_owned()),
            payment_mode: Some("bank transfer".to_owned()),
        }
    }

    #[test]
    fn valid_form_becomes_distribution() {
        assert_eq!(
            NewDistribution::try_from(valid_form()),
            Ok(NewDistribution {
                beneficiary_name: "Ravi".to_owned(),
                amount: Amount::from_paise(9_999),
                category: "healthcare".to_owned(),
                purpose: "Medicine".to_owned(),
                payment_mode: "bank transfer".to_owned(),
            })
        );
    }

    #[test]
    fn payment_mode_defaults_to_cash() {
        let form = DistributionForm {
            payment_mode: None,
            ..valid_form()
        };

        let distribution = NewDistribution::try_from(form).unwrap();

        assert_eq!(distribution.payment_mode, "cash");
    }

    #[test]
    fn missing_fields_are_rejected() {
        let cases = [
            (
                DistributionForm {
                    beneficiary_name: None,
                    ..valid_form()
                },
                "beneficiary_name",
            ),
            (
                DistributionForm {
                    amount: None,
                    ..valid_form()
                },
                "amount",
            ),
            (
                DistributionForm {
                    category: None,
                    ..valid_form()
                },
                "category",
            ),
            (
                DistributionForm {
                    purpose: Some("  ".to_owned()),
                    ..valid_form()
                },
                "purpose",
            ),
        ];

        for (form, field) in cases {
            assert_eq!(
                NewDistribution::try_from(form),
                Err(Error::MissingField(field))
            );
        }
    }
}
