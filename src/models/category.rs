//! This file defines the `Category` type. A category acts like a tag for a
//! transaction, however a transaction may only have one category.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, models::TransactionType};

/// The name of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    /// Returns an [Error::EmptyCategoryName] if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty. This is
    /// intended for values read back from the database, which were validated
    /// when they were stored.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A category for expenses and income, e.g. 'Groceries', 'Eating Out',
/// 'Wages'.
///
/// The icon name and colour are presentation hints for the UI layer, stored
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    id: String,
    name: CategoryName,
    icon_name: String,
    color_hex: String,
    transaction_type: TransactionType,
}

impl Category {
    /// Create a new category.
    pub fn new(
        id: impl Into<String>,
        name: CategoryName,
        icon_name: impl Into<String>,
        color_hex: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            icon_name: icon_name.into(),
            color_hex: color_hex.into(),
            transaction_type,
        }
    }

    /// The unique ID of the category.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The name of the category.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// The name of the icon shown next to the category, e.g. 'shopping_cart'.
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    /// The display colour of the category as a hex string, e.g. '#FF5722'.
    pub fn color_hex(&self) -> &str {
        &self.color_hex
    }

    /// Whether the category applies to income or expense transactions.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }
}

#[cfg(test)]
mod category_name_tests {
    use crate::Error;

    use super::CategoryName;

    #[test]
    fn new_accepts_non_empty_name() {
        let result = CategoryName::new("Groceries").expect("Could not create category name");

        assert_eq!(result.as_ref(), "Groceries");
    }

    #[test]
    fn new_rejects_empty_name() {
        assert_eq!(CategoryName::new(""), Err(Error::EmptyCategoryName));
    }
}
