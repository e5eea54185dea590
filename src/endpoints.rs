//! The endpoint URIs.

/// The overview page with the fund's totals and records.
pub const ROOT: &str = "/";
/// The donation form (GET) and the route that records a donation (POST).
pub const DONATE: &str = "/donate";
/// The distribution form (GET) and the route that records a distribution (POST).
pub const DISTRIBUTE: &str = "/distribute";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for the fund's totals as JSON.
pub const STATS_API: &str = "/api/stats";
