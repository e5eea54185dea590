//! Donations to the fund.
//!
//! This module contains the `Donation` model and its storage, the donation
//! form and the endpoint that records a donation.

mod core;
mod endpoint;
mod page;

pub use core::{
    Donation, NewDonation, PaymentMethod, create_donation, create_donation_table, list_donations,
};
pub use endpoint::{DonationForm, create_donation_endpoint};
pub use page::get_donate_page;

#[cfg(test)]
pub(crate) use core::test_donations;
