//! Pocketledger is the storage and backup core of a personal finance tracker:
//! transactions, categories and monthly budgets kept in a SQLite database,
//! with a CSV text format for moving transaction backups between devices.
//!
//! The CSV format is fixed and intentionally forgiving on import: rows that
//! cannot be converted into a transaction are skipped rather than failing the
//! whole backup, so a hand-edited or partially corrupted file still restores
//! as much data as possible. See [csv_to_transactions] and
//! [transactions_to_csv] for the exact rules.

#![warn(missing_docs)]

mod backup;
mod csv;
pub mod db;
mod error;
pub mod models;
pub mod stores;

pub use backup::{export_transactions, import_transactions};
pub use csv::{csv_to_transactions, transactions_to_csv};
pub use db::initialize as initialize_db;
pub use error::Error;
