//! SQLite backed implementations of the store traits.

mod budget;
mod category;
mod transaction;

pub use budget::SQLiteBudgetStore;
pub use category::SQLiteCategoryStore;
pub use transaction::SQLiteTransactionStore;
