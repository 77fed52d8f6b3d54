//! Sets up the application's SQLite database.

use rusqlite::Connection;

use crate::{Error, bill::create_bill_table};

/// Create the tables for the domain models.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an [Error::SqlError] if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_bill_table(connection)
        .inspect_err(|error| tracing::error!("could not create the bill table: {error}"))?;

    Ok(())
}
