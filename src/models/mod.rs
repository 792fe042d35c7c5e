//! Defines the domain models of the finance tracker.

mod budget;
mod category;
mod transaction;

pub use budget::{Budget, YearMonth};
pub use category::{Category, CategoryName};
pub use transaction::{Transaction, TransactionBuilder, TransactionType};
