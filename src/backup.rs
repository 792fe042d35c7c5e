//! Importing and exporting transaction backups.
//!
//! These functions work on in-memory text rather than files or streams: the
//! calling layer owns acquiring and releasing whatever the backup is read
//! from or written to, so the worst that can happen here is a database error.

use crate::{
    Error,
    csv::{csv_to_transactions, transactions_to_csv},
    stores::TransactionStore,
};

/// Encode every transaction in `store` as a CSV document, newest first.
///
/// # Errors
/// Returns an [Error::SqlError] if the transactions cannot be read from the
/// store.
pub fn export_transactions(store: &impl TransactionStore) -> Result<String, Error> {
    let transactions = store.get_all()?;

    tracing::debug!("Exporting {} transactions", transactions.len());

    Ok(transactions_to_csv(&transactions))
}

/// Decode the CSV document `csv_text` and add its transactions to `store`.
///
/// Rows that cannot be parsed are skipped, and transactions whose IDs already
/// exist in the store are left untouched, so importing an old backup never
/// loses or overwrites newer data. Returns the number of transactions
/// actually added, for the caller to report.
///
/// # Errors
/// Returns an [Error::SqlError] if the transactions cannot be written to the
/// store.
pub fn import_transactions(
    store: &mut impl TransactionStore,
    csv_text: &str,
) -> Result<usize, Error> {
    let transactions = csv_to_transactions(csv_text);

    store.import(transactions)
}
