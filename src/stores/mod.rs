//! Contains traits and implementations for objects that store the domain
//! [models](crate::models).

mod budget;
mod category;
mod transaction;

pub mod sqlite;

pub use budget::BudgetStore;
pub use category::CategoryStore;
pub use transaction::TransactionStore;
