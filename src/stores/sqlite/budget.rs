//! Implements a SQLite backed budget store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Budget, YearMonth},
    stores::BudgetStore,
};

impl CreateTable for Budget {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS budgets (
                    year_month TEXT NOT NULL,
                    category_id TEXT NOT NULL,
                    amount REAL NOT NULL,
                    PRIMARY KEY (year_month, category_id),
                    FOREIGN KEY (category_id) REFERENCES category(id) ON DELETE CASCADE
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for Budget {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let year_month: String = row.get(offset)?;
        let category_id: String = row.get(offset + 1)?;
        let amount: f64 = row.get(offset + 2)?;

        Ok(Budget::new(
            YearMonth::new_unchecked(&year_month),
            category_id,
            amount,
        ))
    }
}

/// Stores monthly budgets in a SQLite database.
///
/// Budgets reference categories, so the [Category](crate::models::Category)
/// table must be set up and populated first.
#[derive(Debug, Clone)]
pub struct SQLiteBudgetStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBudgetStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl BudgetStore for SQLiteBudgetStore {
    /// Store `budget` in the database, replacing any stored budget for the
    /// same month and category.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error,
    /// including setting a budget for a category that does not exist.
    fn set(&mut self, budget: &Budget) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT OR REPLACE INTO budgets (year_month, category_id, amount)
             VALUES (?1, ?2, ?3)",
            (
                budget.year_month().as_ref(),
                budget.category_id(),
                budget.amount(),
            ),
        )?;

        Ok(())
    }

    /// Retrieve the budgets set for `month`.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn budgets_for_month(&self, month: &YearMonth) -> Result<Vec<Budget>, Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .prepare(
                "SELECT year_month, category_id, amount
                 FROM budgets
                 WHERE year_month = :year_month",
            )?
            .query_map(&[(":year_month", &month.as_ref())], Budget::map_row)?
            .map(|maybe_budget| maybe_budget.map_err(Error::from))
            .collect()
    }
}

#[cfg(test)]
mod sqlite_budget_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        db::initialize,
        models::{Budget, Category, CategoryName, TransactionType, YearMonth},
        stores::{BudgetStore, CategoryStore, sqlite::SQLiteCategoryStore},
    };

    use super::SQLiteBudgetStore;

    fn get_stores() -> (SQLiteBudgetStore, SQLiteCategoryStore) {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory database");
        initialize(&connection).expect("Could not initialize database");
        let connection = Arc::new(Mutex::new(connection));

        (
            SQLiteBudgetStore::new(connection.clone()),
            SQLiteCategoryStore::new(connection),
        )
    }

    fn month(text: &str) -> YearMonth {
        YearMonth::new(text).expect("Could not create year-month")
    }

    fn add_category(store: &mut impl CategoryStore, id: &str) {
        let category = Category::new(
            id,
            CategoryName::new("Groceries").expect("Could not create category name"),
            "shopping_cart",
            "#FF5722",
            TransactionType::Expense,
        );
        store.upsert(&category).expect("Could not store category");
    }

    #[test]
    fn set_then_get_returns_budgets_for_month_only() {
        let (mut budget_store, mut category_store) = get_stores();
        add_category(&mut category_store, "cat1");
        budget_store
            .set(&Budget::new(month("2026-02"), "cat1", 250.0))
            .expect("Could not set budget");
        budget_store
            .set(&Budget::new(month("2026-03"), "cat1", 300.0))
            .expect("Could not set budget");

        let result = budget_store
            .budgets_for_month(&month("2026-02"))
            .expect("Could not get budgets");

        assert_eq!(result, vec![Budget::new(month("2026-02"), "cat1", 250.0)]);
    }

    #[test]
    fn set_replaces_budget_for_same_month_and_category() {
        let (mut budget_store, mut category_store) = get_stores();
        add_category(&mut category_store, "cat1");
        budget_store
            .set(&Budget::new(month("2026-02"), "cat1", 250.0))
            .expect("Could not set budget");
        budget_store
            .set(&Budget::new(month("2026-02"), "cat1", 400.0))
            .expect("Could not set budget");

        let result = budget_store
            .budgets_for_month(&month("2026-02"))
            .expect("Could not get budgets");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount(), 400.0);
    }

    #[test]
    fn deleting_category_deletes_its_budgets() {
        let (mut budget_store, mut category_store) = get_stores();
        add_category(&mut category_store, "cat1");
        budget_store
            .set(&Budget::new(month("2026-02"), "cat1", 250.0))
            .expect("Could not set budget");

        category_store
            .delete("cat1")
            .expect("Could not delete category");

        assert!(
            budget_store
                .budgets_for_month(&month("2026-02"))
                .expect("Could not get budgets")
                .is_empty()
        );
    }

    #[test]
    fn set_rejects_unknown_category() {
        let (mut budget_store, _category_store) = get_stores();

        let result = budget_store.set(&Budget::new(month("2026-02"), "nope", 250.0));

        assert!(result.is_err());
    }
}
