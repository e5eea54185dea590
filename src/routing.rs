//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    distribution::{create_distribution_endpoint, get_distribute_page},
    donation::{create_donation_endpoint, get_donate_page},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    overview::get_overview_page,
    stats::get_stats,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_overview_page))
        .route(
            endpoints::DONATE,
            get(get_donate_page).post(create_donation_endpoint),
        )
        .route(
            endpoints::DISTRIBUTE,
            get(get_distribute_page).post(create_distribution_endpoint),
        )
        .route(endpoints::STATS_API, get(get_stats))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
