//! Database schema creation.

use rusqlite::Connection;

use crate::{distribution::create_distribution_table, donation::create_donation_table};

/// Create the tables for donations and distributions if they do not exist.
///
/// Both tables are created in a single transaction.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = connection.unchecked_transaction()?;

    create_donation_table(&transaction)?;
    create_distribution_table(&transaction)?;

    transaction.commit()
}
