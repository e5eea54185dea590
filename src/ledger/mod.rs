//! Ledger accounting: amounts, categories, aggregation and the distribution guard.
//!
//! Everything in this module is pure. The store and web layers fetch a
//! snapshot of records and hand it to these functions.

mod amount;
mod category;
mod guard;
mod policy;
mod status;
mod summary;

pub use amount::Amount;
pub use category::Category;
pub use guard::{BalanceExceeded, authorize};
pub use policy::{LedgerPolicy, StatusFilter};
pub use status::PaymentStatus;
pub use summary::{CategoryTotals, LedgerEntry, LedgerSummary, balance, summarize, total};

#[cfg(test)]
pub(crate) use summary::test_entries;
