//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, CategoryName},
    stores::CategoryStore,
};

impl CreateTable for Category {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    icon_name TEXT NOT NULL,
                    color_hex TEXT NOT NULL,
                    transaction_type TEXT NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for Category {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id: String = row.get(offset)?;
        let name: String = row.get(offset + 1)?;
        let icon_name: String = row.get(offset + 2)?;
        let color_hex: String = row.get(offset + 3)?;
        let transaction_type = row.get(offset + 4)?;

        Ok(Category::new(
            id,
            CategoryName::new_unchecked(&name),
            icon_name,
            color_hex,
            transaction_type,
        ))
    }
}

/// Stores categories in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Store `category` in the database, replacing any stored category with
    /// the same ID.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn upsert(&mut self, category: &Category) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT OR REPLACE INTO category (id, name, icon_name, color_hex, transaction_type)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                category.id(),
                category.name().as_ref(),
                category.icon_name(),
                category.color_hex(),
                category.transaction_type(),
            ),
        )?;

        Ok(())
    }

    /// Retrieve every category in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .prepare(
                "SELECT id, name, icon_name, color_hex, transaction_type
                 FROM category
                 ORDER BY name",
            )?
            .query_map([], Category::map_row)?
            .map(|maybe_category| maybe_category.map_err(Error::from))
            .collect()
    }

    /// Delete the category with `id` along with its budgets.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn delete(&mut self, id: &str) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute("DELETE FROM category WHERE id = ?1", [id])?;

        Ok(())
    }
}
