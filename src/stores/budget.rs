//! Defines the budget store trait.

use crate::{
    Error,
    models::{Budget, YearMonth},
};

/// Handles the storage and retrieval of monthly budgets.
pub trait BudgetStore {
    /// Store `budget`, replacing any stored budget for the same month and
    /// category.
    fn set(&mut self, budget: &Budget) -> Result<(), Error>;

    /// Retrieve the budgets set for `month`.
    ///
    /// An empty vector is returned if no budgets are set for the month.
    fn budgets_for_month(&self, month: &YearMonth) -> Result<Vec<Budget>, Error>;
}
