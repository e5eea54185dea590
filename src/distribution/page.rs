//! Defines the route handler for the distribution form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    distribution::{DEFAULT_PAYMENT_MODE, available_balance},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        format_currency, loading_spinner, rupee_input_styles,
    },
    ledger::{Amount, Category, StatusFilter},
    navigation::NavBar,
};

fn distribute_view(available: Amount, filter: StatusFilter) -> Markup {
    let nav_bar = NavBar::new(endpoints::DISTRIBUTE).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=(endpoints::DISTRIBUTE)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Record a Distribution" }

                p id="available-balance" class="text-sm text-gray-600 dark:text-gray-400"
                {
                    "Available balance: "
                    span class="font-semibold" { (format_currency(available)) }
                    " (" (filter.describe()) ")"
                }

                div
                {
                    label for="beneficiary_name" class=(FORM_LABEL_STYLE) { "Beneficiary name" }

                    input
                        name="beneficiary_name"
                        id="beneficiary_name"
                        type="text"
                        placeholder="Beneficiary name"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    div class="input-wrapper w-full"
                    {
                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            placeholder="0.00"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select
                        name="category"
                        id="category"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" { "Select a category" }

                        @for category in Category::ALL {
                            option value=(category.as_str()) { (category.label()) }
                        }
                    }
                }

                div
                {
                    label for="purpose" class=(FORM_LABEL_STYLE) { "Purpose" }

                    textarea
                        name="purpose"
                        id="purpose"
                        rows="3"
                        placeholder="What the money is for"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {}
                }

                div
                {
                    label for="payment_mode" class=(FORM_LABEL_STYLE) { "Payment mode" }

                    input
                        name="payment_mode"
                        id="payment_mode"
                        type="text"
                        value=(DEFAULT_PAYMENT_MODE)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " Record Distribution"
                }
            }
        }
    };

    base("Distribute", &[rupee_input_styles()], &content)
}

/// The state needed for the distribution form.
#[derive(Debug, Clone)]
pub struct DistributePageState {
    /// The records the available balance is computed over.
    pub balance_filter: StatusFilter,
    /// The database connection for computing the available balance.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DistributePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            balance_filter: state.policy.balance,
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Renders the distribution form with the balance available for distribution.
pub async fn get_distribute_page(
    State(state): State<DistributePageState>,
) -> Result<Response, Error> {
    let available = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        available_balance(state.balance_filter, &connection).inspect_err(|error| {
            tracing::error!("Failed to compute the balance for the distribution page: {error}")
        })?
    };

    Ok(distribute_view(available, state.balance_filter).into_response())
}
