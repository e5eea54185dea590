//! Distribution records, their storage and the guarded write.

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    donation::list_donations,
    ledger::{Amount, LedgerEntry, PaymentStatus, StatusFilter, authorize, balance},
};

pub type DistributionId = i64;

/// The payment mode used when the form leaves it blank.
pub const DEFAULT_PAYMENT_MODE: &str = "cash";

/// Money paid out of the fund to a beneficiary.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub id: DistributionId,
    pub beneficiary_name: String,
    pub amount: Amount,
    /// The category as submitted, which may not be one of the known categories.
    pub category: String,
    pub purpose: String,
    pub status: PaymentStatus,
    /// How the beneficiary was paid, e.g. "cash" or "bank transfer".
    pub payment_mode: String,
    /// When the distribution was recorded, in UTC.
    pub created_at: OffsetDateTime,
}

impl LedgerEntry for Distribution {
    fn amount(&self) -> Amount {
        self.amount
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A distribution that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDistribution {
    pub beneficiary_name: String,
    pub amount: Amount,
    pub category: String,
    pub purpose: String,
    pub payment_mode: String,
}

pub fn create_distribution_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS distribution (
            id INTEGER PRIMARY KEY,
            beneficiary_name TEXT NOT NULL,
            amount INTEGER NOT NULL,
            category TEXT NOT NULL,
            purpose TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            payment_mode TEXT NOT NULL DEFAULT 'cash',
            created_at TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Store a new distribution as completed, stamped with the current UTC time.
///
/// This does not check the balance, use [record_distribution] for that.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn create_distribution(
    distribution: NewDistribution,
    connection: &Connection,
) -> Result<Distribution, Error> {
    let created_at = OffsetDateTime::now_utc();
    let status = PaymentStatus::Completed;

    connection.execute(
        "INSERT INTO distribution (beneficiary_name, amount, category, purpose, status, payment_mode, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        (
            &distribution.beneficiary_name,
            distribution.amount,
            &distribution.category,
            &distribution.purpose,
            status,
            &distribution.payment_mode,
            created_at,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Distribution {
        id,
        beneficiary_name: distribution.beneficiary_name,
        amount: distribution.amount,
        category: distribution.category,
        purpose: distribution.purpose,
        status,
        payment_mode: distribution.payment_mode,
        created_at,
    })
}

/// Get distributions, newest first.
///
/// If `status` is given, only distributions with that status are returned.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn list_distributions(
    status: Option<PaymentStatus>,
    connection: &Connection,
) -> Result<Vec<Distribution>, Error> {
    connection
        .prepare(
            "SELECT id, beneficiary_name, amount, category, purpose, status, payment_mode, created_at
            FROM distribution
            WHERE ?1 IS NULL OR status = ?1
            ORDER BY created_at DESC, id DESC",
        )?
        .query_map((status,), map_distribution_row)?
        .map(|maybe_distribution| maybe_distribution.map_err(Error::from))
        .collect()
}

fn map_distribution_row(row: &rusqlite::Row) -> Result<Distribution, rusqlite::Error> {
    Ok(Distribution {
        id: row.get(0)?,
        beneficiary_name: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        purpose: row.get(4)?,
        status: row.get(5)?,
        payment_mode: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// The balance that distributions are checked against.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn available_balance(filter: StatusFilter, connection: &Connection) -> Result<Amount, Error> {
    let donations = list_donations(filter.status(), connection)?;
    let distributions = list_distributions(filter.status(), connection)?;

    Ok(balance(&donations, &distributions))
}

/// Store a distribution if the fund can cover it.
///
/// The balance is computed over the records selected by `filter`. Reading the
/// balance and inserting the distribution happen in one SQL transaction, so
/// nothing is written when the distribution is rejected.
///
/// # Errors
/// Returns:
/// - [Error::BalanceExceeded] if the amount is greater than the available balance,
/// - [Error::SqlError] if there is an SQL error.
pub fn record_distribution(
    distribution: NewDistribution,
    filter: StatusFilter,
    connection: &Connection,
) -> Result<Distribution, Error> {
    let transaction = connection.unchecked_transaction()?;

    let donations = list_donations(filter.status(), &transaction)?;
    let distributions = list_distributions(filter.status(), &transaction)?;
    authorize(distribution.amount, &donations, &distributions)?;

    let distribution = create_distribution(distribution, &transaction)?;

    transaction.commit()?;

    Ok(distribution)
}




#[cfg(test)]
mod record_distribution_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        donation::test_donations::insert_donation,
        ledger::{Amount, BalanceExceeded, PaymentStatus, StatusFilter},
    };

    use super::{
        available_balance, list_distributions, record_distribution,
        test_distributions::new_distribution,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn accepts_amount_equal_to_balance() {
        let conn = get_test_connection();
        insert_donation(1000, "education", PaymentStatus::Completed, &conn);

        let got = record_distribution(
            new_distribution(Amount::from_rupees(1000), "education"),
            StatusFilter::Completed,
            &conn,
        );

        assert!(got.is_ok(), "got {got:?}");
        assert_eq!(
            available_balance(StatusFilter::Completed, &conn),
            Ok(Amount::ZERO)
        );
    }

    #[test]
    fn rejects_amount_over_balance_without_writing() {
        let conn = get_test_connection();
        insert_donation(1000, "education", PaymentStatus::Completed, &conn);

        let got = record_distribution(
            new_distribution(Amount::from_paise(100_001), "education"),
            StatusFilter::Completed,
            &conn,
        );

        assert_eq!(
            got,
            Err(Error::BalanceExceeded(BalanceExceeded {
                requested: Amount::from_paise(100_001),
                available: Amount::from_rupees(1000),
            }))
        );
        assert!(list_distributions(None, &conn).unwrap().is_empty());
    }

    #[test]
    fn completed_filter_ignores_pending_donations() {
        let conn = get_test_connection();
        insert_donation(1000, "education", PaymentStatus::Pending, &conn);

        let got = record_distribution(
            new_distribution(Amount::from_rupees(1), "education"),
            StatusFilter::Completed,
            &conn,
        );

        assert_eq!(
            got.map(|distribution| distribution.id),
            Err(Error::BalanceExceeded(BalanceExceeded {
                requested: Amount::from_rupees(1),
                available: Amount::ZERO,
            }))
        );
    }

    #[test]
    fn all_filter_counts_pending_donations() {
        let conn = get_test_connection();
        insert_donation(1000, "education", PaymentStatus::Pending, &conn);

        let got = record_distribution(
            new_distribution(Amount::from_rupees(600), "education"),
            StatusFilter::All,
            &conn,
        );

        assert!(got.is_ok(), "got {got:?}");
        assert_eq!(
            available_balance(StatusFilter::All, &conn),
            Ok(Amount::from_rupees(400))
        );
    }

    #[test]
    fn earlier_distributions_reduce_the_balance() {
        let conn = get_test_connection();
        insert_donation(1000, "food", PaymentStatus::Completed, &conn);
        record_distribution(
            new_distribution(Amount::from_rupees(700), "food"),
            StatusFilter::Completed,
            &conn,
        )
        .unwrap();

        let got = record_distribution(
            new_distribution(Amount::from_rupees(301), "food"),
            StatusFilter::Completed,
            &conn,
        );

        assert!(matches!(got, Err(Error::BalanceExceeded(_))));
        assert_eq!(list_distributions(None, &conn).unwrap().len(), 1);
    }
}
