//! Which records each view of the ledger is computed over.

use clap::ValueEnum;

use crate::ledger::PaymentStatus;

/// Selects the records that a ledger view sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    /// Every record, whatever its payment status.
    All,
    /// Only records whose payment status is completed.
    Completed,
}

impl StatusFilter {
    /// The status to filter store queries by, `None` meaning no filter.
    pub fn status(self) -> Option<PaymentStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some(PaymentStatus::Completed),
        }
    }

    /// A short description for page captions.
    pub fn describe(self) -> &'static str {
        match self {
            StatusFilter::All => "all records",
            StatusFilter::Completed => "completed records only",
        }
    }
}

/// The status filtering used by the overview page and by the balance checks.
///
/// The default sums every record on the overview page, while the
/// distribution guard and the stats API only count completed records. Since
/// nothing marks a donation as completed, that default leaves the guard with
/// a balance of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPolicy {
    /// The records shown and summed on the overview page.
    pub overview: StatusFilter,
    /// The records used by the distribution guard and the stats API.
    pub balance: StatusFilter,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            overview: StatusFilter::All,
            balance: StatusFilter::Completed,
        }
    }
}

impl LedgerPolicy {
    /// Whether the guard can ever see a donation under this policy.
    ///
    /// Donations are only ever written as pending, so a completed-only
    /// balance never includes any of them.
    pub fn guard_ignores_new_donations(&self) -> bool {
        self.balance == StatusFilter::Completed
    }
}
