//! Overview module
//!
//! The landing page: the fund's totals, the breakdown by category and the
//! recorded donations and distributions.

mod cards;
mod handlers;
mod tables;

pub use handlers::get_overview_page;
