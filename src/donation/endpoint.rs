//! Defines the endpoint for recording a donation.
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
    donation::{NewDonation, PaymentMethod, create_donation},
    endpoints,
    flash::set_flash,
    ledger::PaymentStatus,
    validation::{optional, positive_amount, required},
};

/// The state needed to record a donation.
#[derive(Debug, Clone)]
pub struct CreateDonationState {
    /// The key for encrypting the flash cookie.
    pub cookie_key: Key,
    /// The database connection for storing donations.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateDonationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

impl FromRef<CreateDonationState> for Key {
    fn from_ref(state: &CreateDonationState) -> Self {
        state.cookie_key.clone()
    }
}

/// The form data for a donation.
///
/// Every field is optional here so that missing fields are reported as
/// validation errors rather than as a failure to parse the form.
#[derive(Debug, Default, Deserialize)]
pub struct DonationForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub payment_method: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<DonationForm> for NewDonation {
    type Error = Error;

    fn try_from(form: DonationForm) -> Result<Self, Self::Error> {
        let donor_name = required(form.name, "name")?;
        let donor_email = required(form.email, "email")?;
        let amount = positive_amount(form.amount)?;
        let category = required(form.category, "category")?;
        let payment_method = match optional(form.payment_method) {
            Some(method) => method.parse()?,
            None => PaymentMethod::default(),
        };

        Ok(NewDonation {
            donor_name,
            donor_email,
            amount,
            category,
            payment_method,
            payment_status: PaymentStatus::Pending,
            message: optional(form.message),
        })
    }
}

/// A route handler for recording a donation, redirects to the overview page on success.
///
/// The donation is stored as pending and the donor is shown how to pay for it.
pub async fn create_donation_endpoint(
    State(state): State<CreateDonationState>,
    jar: PrivateCookieJar,
    Form(form): Form<DonationForm>,
) -> Response {
    let new_donation = match NewDonation::try_from(form) {
        Ok(new_donation) => new_donation,
        Err(error) => {
            tracing::debug!("rejected donation form: {error}");
            return error.into_alert_response();
        }
    };

    let donation = {
        let connection = match state.db_connection.lock() {
            Ok(connection) => connection,
            Err(error) => {
                tracing::error!("could not acquire database lock: {error}");
                return Error::DatabaseLockError.into_alert_response();
            }
        };

        match create_donation(new_donation, &connection) {
            Ok(donation) => donation,
            Err(error) => {
                tracing::error!("could not create donation: {error}");
                return error.into_alert_response();
            }
        }
    };

    tracing::info!(
        "recorded donation {} of {} for {}",
        donation.id,
        donation.amount,
        donation.category
    );

    let alert = Alert::Info {
        message: "Thank you for your donation!".to_owned(),
        details: donation.payment_method.instructions().to_owned(),
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
mod create_donation_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::{Form, PrivateCookieJar};
    use rusqlite::Connection;

    use crate::{
        app_state::create_cookie_key,
        db::initialize,
        donation::{DonationForm, create_donation_endpoint, list_donations},
        endpoints,
        ledger::{Amount, PaymentStatus},
        test_utils::{
            assert_hx_redirect, assert_sets_flash_cookie, assert_valid_html, parse_html_fragment,
        },
    };

    use super::CreateDonationState;

    fn get_test_state() -> CreateDonationState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateDonationState {
            cookie_key: create_cookie_key("nafstenoas"),
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn form(amount: &str) -> DonationForm {
        DonationForm {
            name: Some("Asha".to_owned()),
            email: Some("asha@example.com".to_owned()),
            amount: Some(amount.to_owned()),
            category: Some("food".to_owned()),
            payment_method: None,
            message: None,
        }
    }

    #[tokio::test]
    async fn records_pending_donation_and_redirects() {
        let state = get_test_state();
        let jar = PrivateCookieJar::new(state.cookie_key.clone());

        let response = create_donation_endpoint(State(state.clone()), jar, Form(form("250")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::ROOT);
        assert_sets_flash_cookie(&response);

        let connection = state.db_connection.lock().unwrap();
        let donations = list_donations(None, &connection).unwrap();
        assert_eq!(donations.len(), 1);
        assert_eq!(donations[0].amount, Amount::from_rupees(250));
        assert_eq!(donations[0].payment_status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn rejects_non_positive_amount_without_writing() {
        let state = get_test_state();
        let jar = PrivateCookieJar::new(state.cookie_key.clone());

        let response = create_donation_endpoint(State(state.clone()), jar, Form(form("-5")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("The amount must be greater than zero"), "got {text:?}");

        let connection = state.db_connection.lock().unwrap();
        assert!(list_donations(None, &connection).unwrap().is_empty());
    }
}
