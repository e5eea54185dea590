//! The check that stops a distribution from overdrawing the fund.

use crate::ledger::{Amount, LedgerEntry, summary::balance};

/// A distribution was rejected because it is larger than the available balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("distribution amount ({requested}) exceeds available balance ({available})")]
pub struct BalanceExceeded {
    /// The amount that was asked for.
    pub requested: Amount,
    /// The balance at the time of the request.
    pub available: Amount,
}

/// Check whether `proposed` can be paid out of the balance of `donations`
/// minus `distributions`.
///
/// The caller decides which records make up the snapshot, normally only the
/// completed ones. A distribution equal to the balance is allowed.
///
/// # Errors
///
/// Returns [BalanceExceeded] with the current balance if `proposed` is larger
/// than the balance.
pub fn authorize<D, T>(
    proposed: Amount,
    donations: &[D],
    distributions: &[T],
) -> Result<(), BalanceExceeded>
where
    D: LedgerEntry,
    T: LedgerEntry,
{
    let available = balance(donations, distributions);

    if proposed > available {
        return Err(BalanceExceeded {
            requested: proposed,
            available,
        });
    }

    Ok(())
}
