//! Overview HTTP handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use maud::{Markup, html};
use rusqlite::Connection;
use time::UtcOffset;

use crate::{
    AppState, Error,
    alert::Alert,
    distribution::{Distribution, list_distributions},
    donation::{Donation, list_donations},
    endpoints,
    flash::take_flash,
    html::{PAGE_CONTAINER_STYLE, base, link},
    ledger::{StatusFilter, summarize},
    navigation::NavBar,
    overview::{
        cards::{category_breakdown_view, totals_cards_view},
        tables::{distributions_table, donations_table},
    },
    timezone::get_local_offset,
};

/// The state needed for displaying the overview page.
#[derive(Debug, Clone)]
pub struct OverviewState {
    /// The key for decrypting the flash cookie.
    pub cookie_key: Key,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
    /// The records shown and summed on the page.
    pub overview_filter: StatusFilter,
    /// The database connection for reading donations and distributions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for OverviewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            local_timezone: state.local_timezone.clone(),
            overview_filter: state.policy.overview,
            db_connection: state.db_connection.clone(),
        }
    }
}

impl FromRef<OverviewState> for Key {
    fn from_ref(state: &OverviewState) -> Self {
        state.cookie_key.clone()
    }
}

/// Display the fund's totals, the category breakdown and the recorded donations and distributions.
///
/// Shows and clears any pending flash alert.
pub async fn get_overview_page(
    State(state): State<OverviewState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let (donations, distributions) = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        let status = state.overview_filter.status();
        let donations = list_donations(status, &connection)
            .inspect_err(|error| tracing::error!("could not get donations: {error}"))?;
        let distributions = list_distributions(status, &connection)
            .inspect_err(|error| tracing::error!("could not get distributions: {error}"))?;

        (donations, distributions)
    };

    let (jar, flash) = take_flash(jar);

    let page = overview_view(
        &donations,
        &distributions,
        state.overview_filter,
        flash,
        local_offset,
    );

    Ok((jar, page).into_response())
}

fn overview_view(
    donations: &[Donation],
    distributions: &[Distribution],
    filter: StatusFilter,
    flash: Option<Alert>,
    local_offset: UtcOffset,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();
    let summary = summarize(donations, distributions);

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl"
            {
                @if let Some(alert) = flash {
                    div id="flash" { (alert.into_html()) }
                }

                div class="flex justify-between items-baseline mb-4"
                {
                    h2 class="text-2xl font-bold" { "Overview" }
                    span id="policy-caption" class="text-sm text-gray-600 dark:text-gray-400"
                    {
                        "Totals include " (filter.describe())
                    }
                }

                (totals_cards_view(&summary))
                (category_breakdown_view(&summary))

                @if donations.is_empty() && distributions.is_empty() {
                    p class="mb-8"
                    {
                        "Nothing has been recorded yet. "
                        (link(endpoints::DONATE, "Make the first donation"))
                        "."
                    }
                }

                (donations_table(donations, local_offset))
                (distributions_table(distributions, local_offset))
            }
        }
    };

    base("Overview", &[], &content)
}
