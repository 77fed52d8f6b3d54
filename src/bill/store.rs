//! Defines the bill store trait and its SQLite implementation.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    bill::{BillData, BillRecord},
    session::{Session, UserType},
};

/// The source of the bills shown on the bills page.
pub trait BillStore {
    /// Retrieve the bills visible to the store's user, in the order they are stored.
    ///
    /// # Errors
    /// Implementers should return an error describing why the bills could not
    /// be retrieved. The error message may be shown to the user.
    fn list(&self) -> impl Future<Output = Result<Vec<BillRecord>, Error>> + Send;
}

/// Which bills a [SqliteBillStore] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BillScope {
    /// Only the bills submitted by the employee with this email.
    Owner(String),
    /// Every bill.
    All,
}

/// Stores bills in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteBillStore {
    connection: Arc<Mutex<Connection>>,
    scope: BillScope,
}

impl SqliteBillStore {
    /// Create a store for the user of `session`.
    ///
    /// Employees see their own bills, administrators see every bill.
    pub fn for_session(connection: Arc<Mutex<Connection>>, session: &Session) -> Self {
        let scope = match session.user_type {
            UserType::Employee => BillScope::Owner(session.email.clone()),
            UserType::Administrator => BillScope::All,
        };

        Self { connection, scope }
    }

    fn query_bills(&self) -> Result<Vec<BillRecord>, Error> {
        let connection = self
            .connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        let columns = "id, email, type, name, date, amount, vat, pct, commentary, status, \
            comment_admin, file_url, file_name";

        let bills = match &self.scope {
            BillScope::Owner(email) => connection
                .prepare(&format!(
                    "SELECT {columns} FROM bill WHERE email = ?1 ORDER BY rowid ASC"
                ))?
                .query_map([email], map_bill_row)?
                .map(|bill| bill.map_err(Error::from))
                .collect(),
            BillScope::All => connection
                .prepare(&format!("SELECT {columns} FROM bill ORDER BY rowid ASC"))?
                .query_map([], map_bill_row)?
                .map(|bill| bill.map_err(Error::from))
                .collect(),
        };

        bills
    }
}

impl BillStore for SqliteBillStore {
    fn list(&self) -> impl Future<Output = Result<Vec<BillRecord>, Error>> + Send {
        let bills = self.query_bills();

        async move { bills }
    }
}

/// Create the bill table.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_bill_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS bill (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL,
            type TEXT NOT NULL,
            name TEXT NOT NULL,
            date TEXT NOT NULL,
            amount REAL NOT NULL,
            vat TEXT,
            pct INTEGER,
            commentary TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            comment_admin TEXT,
            file_url TEXT,
            file_name TEXT
        )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_bill_email ON bill(email)",
        (),
    )?;

    Ok(())
}

/// Insert `bill` into the bill table.
///
/// # Errors
/// Returns an [Error::DuplicateBillId] if a bill with the same ID exists, or
/// an [Error::SqlError] for any other SQL error.
pub fn create_bill(bill: &BillRecord, connection: &Connection) -> Result<(), Error> {
    let data = bill.data();

    connection
        .execute(
            "INSERT INTO bill (id, email, type, name, date, amount, vat, pct, commentary, status,
                comment_admin, file_url, file_name)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            rusqlite::params![
                bill.id,
                data.email,
                data.expense_type,
                data.name,
                data.date,
                data.amount,
                data.vat,
                data.pct,
                data.commentary,
                data.status,
                data.comment_admin,
                data.file_url,
                data.file_name,
            ],
        )
        .map_err(|error| match error {
            // Codes 1555 and 2067 occur when a PRIMARY KEY or UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _)
                if sql_error.extended_code == 1555 || sql_error.extended_code == 2067 =>
            {
                Error::DuplicateBillId(bill.id.clone())
            }
            error => error.into(),
        })?;

    Ok(())
}

fn map_bill_row(row: &Row) -> Result<BillRecord, rusqlite::Error> {
    let id: String = row.get(0)?;

    Ok(BillRecord::new(
        id,
        BillData {
            email: row.get(1)?,
            expense_type: row.get(2)?,
            name: row.get(3)?,
            date: row.get(4)?,
            amount: row.get(5)?,
            vat: row.get(6)?,
            pct: row.get(7)?,
            commentary: row.get(8)?,
            status: row.get(9)?,
            comment_admin: row.get(10)?,
            file_url: row.get(11)?,
            file_name: row.get(12)?,
        },
    ))
}
