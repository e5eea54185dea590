//! JSON summary of the fund for API clients.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    distribution::list_distributions,
    donation::list_donations,
    ledger::{Amount, StatusFilter, balance, total},
};

/// The state needed for the stats API.
#[derive(Debug, Clone)]
pub struct StatsState {
    /// The records counted towards the totals.
    pub balance_filter: StatusFilter,
    /// The database connection for reading donations and distributions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for StatsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            balance_filter: state.policy.balance,
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The fund's totals in rupees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// The sum of all counted donations.
    pub total_donations: Amount,
    /// The sum of all counted distributions.
    pub total_distributions: Amount,
    /// Donations less distributions.
    pub balance: Amount,
}

/// Get the fund's totals as JSON, counting the records selected by the balance policy.
pub async fn get_stats(State(state): State<StatsState>) -> Result<Json<Stats>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let status = state.balance_filter.status();
    let donations = list_donations(status, &connection)
        .inspect_err(|error| tracing::error!("could not get donations: {error}"))?;
    let distributions = list_distributions(status, &connection)
        .inspect_err(|error| tracing::error!("could not get distributions: {error}"))?;

    Ok(Json(Stats {
        total_donations: total(&donations),
        total_distributions: total(&distributions),
        balance: balance(&donations, &distributions),
    }))
}
