//! Defines the transaction store trait.

use crate::{
    Error,
    models::{Transaction, YearMonth},
};

/// Handles the storage and retrieval of transactions.
pub trait TransactionStore {
    /// Store `transaction`, replacing any stored transaction with the same
    /// ID.
    ///
    /// Used for both creating and editing transactions.
    fn upsert(&mut self, transaction: &Transaction) -> Result<(), Error>;

    /// Store many transactions from a backup in one go.
    ///
    /// Implementers should ignore transactions whose IDs already exist in
    /// the store, so that importing a backup never overwrites newer local
    /// edits.
    ///
    /// Returns the number of transactions actually added.
    fn import(&mut self, transactions: Vec<Transaction>) -> Result<usize, Error>;

    /// Retrieve the transaction with `id`.
    fn get(&self, id: &str) -> Result<Transaction, Error>;

    /// Retrieve every transaction, newest first.
    ///
    /// An empty vector is returned if there are no transactions.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve the transactions that happened in `month`, newest first.
    fn get_by_month(&self, month: &YearMonth) -> Result<Vec<Transaction>, Error>;

    /// Delete the transaction with `id`.
    ///
    /// Deleting an ID that is not in the store is not an error.
    fn delete(&mut self, id: &str) -> Result<(), Error>;

    /// Delete every transaction (the 'clear all data' feature).
    fn delete_all(&mut self) -> Result<(), Error>;

    /// Clear the category from every transaction that has `category_id`.
    ///
    /// Used before deleting a category so that transaction history is
    /// preserved.
    fn unlink_category(&mut self, category_id: &str) -> Result<(), Error>;
}
