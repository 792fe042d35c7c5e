//! Defines the category store trait.

use crate::{Error, models::Category};

/// Handles the storage and retrieval of categories.
pub trait CategoryStore {
    /// Store `category`, replacing any stored category with the same ID.
    fn upsert(&mut self, category: &Category) -> Result<(), Error>;

    /// Retrieve every category.
    ///
    /// An empty vector is returned if there are no categories.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Delete the category with `id` along with its budgets.
    ///
    /// Callers should first call
    /// [TransactionStore::unlink_category](crate::stores::TransactionStore::unlink_category)
    /// so that the category's transactions are kept.
    fn delete(&mut self, id: &str) -> Result<(), Error>;
}
