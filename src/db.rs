/*! This module defines traits for interacting with the application's SQLite
database and the function that sets up the schema. */

use rusqlite::{Connection, Error, Row};

use crate::models::{Budget, Category, Transaction};

/// Create the table for a model.
pub trait CreateTable {
    /// Create the table for the model if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), Error>;
}

/// Convert a SQL row into a model type.
pub trait MapRow {
    /// The type the row is converted into.
    type ReturnType;

    /// Convert a SQL row into the model type, assuming the columns start at
    /// index zero.
    ///
    /// # Errors
    /// Returns an error if a column is missing or cannot be converted.
    fn map_row(row: &Row) -> Result<Self::ReturnType, Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Convert a SQL row into the model type with the columns starting at
    /// `offset`.
    ///
    /// # Errors
    /// Returns an error if a column is missing or cannot be converted.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, Error>;
}

/// Create the application tables in the database if they do not exist.
///
/// Also enables foreign key enforcement so that deleting a category deletes
/// its budgets.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    Category::create_table(connection)?;
    Transaction::create_table(connection)?;
    Budget::create_table(connection)?;

    Ok(())
}
