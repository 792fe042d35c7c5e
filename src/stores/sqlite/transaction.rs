//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Transaction, YearMonth},
    stores::TransactionStore,
};

impl CreateTable for Transaction {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        // category_id deliberately has no foreign key so that transactions
        // from older backups can be restored before their categories exist.
        connection.execute(
            "CREATE TABLE IF NOT EXISTS transactions (
                    id TEXT PRIMARY KEY,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL,
                    amount REAL NOT NULL,
                    transaction_type TEXT NOT NULL,
                    date TEXT NOT NULL,
                    category_id TEXT
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for Transaction {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id: String = row.get(offset)?;
        let title: String = row.get(offset + 1)?;
        let description: String = row.get(offset + 2)?;
        let amount: f64 = row.get(offset + 3)?;
        let transaction_type = row.get(offset + 4)?;
        let date = row.get(offset + 5)?;
        let category_id: Option<String> = row.get(offset + 6)?;

        Ok(Transaction::build(id, title, amount, transaction_type, date)
            .description(description)
            .category_id(category_id)
            .finalise())
    }
}

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Store `transaction` in the database, replacing any stored transaction
    /// with the same ID.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn upsert(&mut self, transaction: &Transaction) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT OR REPLACE INTO transactions (id, title, description, amount, transaction_type, date, category_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                transaction.id(),
                transaction.title(),
                transaction.description(),
                transaction.amount(),
                transaction.transaction_type(),
                transaction.date(),
                transaction.category_id(),
            ),
        )?;

        Ok(())
    }

    /// Store many transactions from a backup in one SQL transaction.
    ///
    /// Transactions whose IDs already exist in the database are skipped.
    /// Returns the number of transactions actually inserted.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn import(&mut self, transactions: Vec<Transaction>) -> Result<usize, Error> {
        let connection = self.connection.lock().unwrap();

        let tx = connection.unchecked_transaction()?;
        let mut imported = 0;

        let mut statement = tx.prepare(
            "INSERT OR IGNORE INTO transactions (id, title, description, amount, transaction_type, date, category_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;

        for transaction in &transactions {
            imported += statement.execute((
                transaction.id(),
                transaction.title(),
                transaction.description(),
                transaction.amount(),
                transaction.transaction_type(),
                transaction.date(),
                transaction.category_id(),
            ))?;
        }

        drop(statement);

        tx.commit()?;

        Ok(imported)
    }

    /// Retrieve the transaction with `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a stored transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: &str) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();

        let transaction = connection
            .prepare(
                "SELECT id, title, description, amount, transaction_type, date, category_id
                 FROM transactions
                 WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Transaction::map_row)?;

        Ok(transaction)
    }

    /// Retrieve every transaction in the database, newest first.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .prepare(
                "SELECT id, title, description, amount, transaction_type, date, category_id
                 FROM transactions
                 ORDER BY date DESC",
            )?
            .query_map([], Transaction::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Retrieve the transactions that happened in `month`, newest first.
    ///
    /// Dates are stored as `YYYY-MM-DD` text, so a month is selected with a
    /// prefix match.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn get_by_month(&self, month: &YearMonth) -> Result<Vec<Transaction>, Error> {
        let connection = self.connection.lock().unwrap();
        let prefix = format!("{month}%");

        connection
            .prepare(
                "SELECT id, title, description, amount, transaction_type, date, category_id
                 FROM transactions
                 WHERE date LIKE :prefix
                 ORDER BY date DESC",
            )?
            .query_map(&[(":prefix", &prefix)], Transaction::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Delete the transaction with `id` from the database.
    ///
    /// Deleting an ID that is not in the database is not an error.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn delete(&mut self, id: &str) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute("DELETE FROM transactions WHERE id = ?1", [id])?;

        Ok(())
    }

    /// Delete every transaction from the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn delete_all(&mut self) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute("DELETE FROM transactions", ())?;

        Ok(())
    }

    /// Clear the category from every transaction that has `category_id`.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn unlink_category(&mut self, category_id: &str) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "UPDATE transactions SET category_id = NULL WHERE category_id = ?1",
            [category_id],
        )?;

        Ok(())
    }
}
