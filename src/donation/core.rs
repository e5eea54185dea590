//! Donation records and their storage.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    ledger::{Amount, LedgerEntry, PaymentStatus},
};

pub type DonationId = i64;

/// How a donor pays for a donation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Unified Payments Interface, paid by scanning a QR code.
    #[default]
    Upi,
    /// Credit or debit card through a payment gateway.
    Card,
    /// A transfer through the donor's online banking.
    NetBanking,
}

impl PaymentMethod {
    /// The payment methods in the order they are offered on the donation form.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Upi,
        PaymentMethod::Card,
        PaymentMethod::NetBanking,
    ];

    /// The value submitted by forms and stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
            PaymentMethod::NetBanking => "netbanking",
        }
    }

    /// The name shown to donors.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }

    /// What the donor should do next to complete the payment.
    ///
    /// No payment is taken by the app, the donor is only told how to pay.
    pub fn instructions(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "Please complete your UPI payment using the QR code.",
            PaymentMethod::Card => "You will be redirected to the secure payment gateway.",
            PaymentMethod::NetBanking => "Please complete your payment using net banking.",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == text)
            .ok_or_else(|| Error::InvalidPaymentMethod(text.to_owned()))
    }
}

impl ToSql for PaymentMethod {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for PaymentMethod {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;

        text.parse()
            .map_err(|_| FromSqlError::Other(format!("unknown payment method {text:?}").into()))
    }
}

/// Money pledged to the fund by a donor.
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: DonationId,
    pub donor_name: String,
    pub donor_email: String,
    pub amount: Amount,
    /// The category as submitted, which may not be one of the known categories.
    pub category: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// When the donation was recorded, in UTC.
    pub created_at: OffsetDateTime,
    pub message: Option<String>,
}

impl LedgerEntry for Donation {
    fn amount(&self) -> Amount {
        self.amount
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A donation that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    /// Who made the donation.
    pub donor_name: String,
    /// How to reach the donor.
    pub donor_email: String,
    /// How much was donated, always positive.
    pub amount: Amount,
    /// The category the donation is for, stored verbatim.
    pub category: String,
    /// How the donor chose to pay.
    pub payment_method: PaymentMethod,
    /// Donations submitted through the web form are always pending.
    pub payment_status: PaymentStatus,
    /// An optional note from the donor.
    pub message: Option<String>,
}

pub fn create_donation_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS donation (
            id INTEGER PRIMARY KEY,
            donor_name TEXT NOT NULL,
            donor_email TEXT NOT NULL,
            amount INTEGER NOT NULL,
            category TEXT NOT NULL,
            payment_method TEXT NOT NULL DEFAULT 'upi',
            payment_status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL,
            message TEXT
        )",
        (),
    )?;

    Ok(())
}

/// Store a new donation, stamped with the current UTC time.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn create_donation(donation: NewDonation, connection: &Connection) -> Result<Donation, Error> {
    let created_at = OffsetDateTime::now_utc();

    connection.execute(
        "INSERT INTO donation (donor_name, donor_email, amount, category, payment_method, payment_status, created_at, message)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        (
            &donation.donor_name,
            &donation.donor_email,
            donation.amount,
            &donation.category,
            donation.payment_method,
            donation.payment_status,
            created_at,
            &donation.message,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Donation {
        id,
        donor_name: donation.donor_name,
        donor_email: donation.donor_email,
        amount: donation.amount,
        category: donation.category,
        payment_method: donation.payment_method,
        payment_status: donation.payment_status,
        created_at,
        message: donation.message,
    })
}

/// Get donations, newest first.
///
/// If `status` is given, only donations with that payment status are returned.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn list_donations(
    status: Option<PaymentStatus>,
    connection: &Connection,
) -> Result<Vec<Donation>, Error> {
    connection
        .prepare(
            "SELECT id, donor_name, donor_email, amount, category, payment_method, payment_status, created_at, message
            FROM donation
            WHERE ?1 IS NULL OR payment_status = ?1
            ORDER BY created_at DESC, id DESC",
        )?
        .query_map((status,), map_donation_row)?
        .map(|maybe_donation| maybe_donation.map_err(Error::from))
        .collect()
}

fn map_donation_row(row: &rusqlite::Row) -> Result<Donation, rusqlite::Error> {
    Ok(Donation {
        id: row.get(0)?,
        donor_name: row.get(1)?,
        donor_email: row.get(2)?,
        amount: row.get(3)?,
        category: row.get(4)?,
        payment_method: row.get(5)?,
        payment_status: row.get(6)?,
        created_at: row.get(7)?,
        message: row.get(8)?,
    })
}


#[cfg(test)]
mod payment_method_tests {
    use crate::Error;

    use super::PaymentMethod;

    #[test]
    fn parses_form_values() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
    }

    #[test]
    fn rejects_unknown_method() {
        assert_eq!(
            "cheque".parse::<PaymentMethod>(),
            Err(Error::InvalidPaymentMethod("cheque".to_owned()))
        );
    }

    #[test]
    fn default_is_upi() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Upi);
    }

    #[test]
    fn each_method_has_instructions() {
        assert_eq!(
            PaymentMethod::Upi.instructions(),
            "Please complete your UPI payment using the QR code."
        );
        assert_eq!(
            PaymentMethod::Card.instructions(),
            "You will be redirected to the secure payment gateway."
        );
        assert_eq!(
            PaymentMethod::NetBanking.instructions(),
            "Please complete your payment using net banking."
        );
    }
}
