//! Distributions from the fund to beneficiaries.
//!
//! This module contains the `Distribution` model and its storage, the
//! balance-checked write, the distribution form and its endpoint.

mod core;
mod endpoint;
mod page;

pub use core::{
    DEFAULT_PAYMENT_MODE, Distribution, NewDistribution, available_balance, create_distribution,
    create_distribution_table, list_distributions, record_distribution,
};
pub use endpoint::{DistributionForm, create_distribution_endpoint};
pub use page::get_distribute_page;

#[cfg(test)]
pub(crate) use core::test_distributions;
