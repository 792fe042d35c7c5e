//! This file defines the type `Transaction`, the core type of the finance
//! tracker, and `TransactionType`, the label that tells income and expenses
//! apart.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Whether a transaction brought money in or took money out.
///
/// The text labels `INCOME` and `EXPENSE` are part of the backup format and
/// the database schema, so [Display] and [FromStr] must stay exact inverses
/// of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money received, e.g. wages.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        })
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    /// Parse a transaction type from its text label.
    ///
    /// # Errors
    /// Returns an [Error::InvalidTransactionType] unless `text` is exactly
    /// `INCOME` or `EXPENSE`. Matching is case-sensitive.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}

/// An income or expense recorded by the user.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    title: String,
    description: String,
    amount: f64,
    transaction_type: TransactionType,
    date: Date,
    category_id: Option<String>,
}

impl Transaction {
    /// Start building a transaction from its required fields.
    ///
    /// Shortcut for [TransactionBuilder::new] for discoverability.
    pub fn build(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
        transaction_type: TransactionType,
        date: Date,
    ) -> TransactionBuilder {
        TransactionBuilder::new(id, title, amount, transaction_type, date)
    }

    /// The unique ID of the transaction.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// A short label for the transaction, e.g. 'Milk'.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// A longer text description of what the transaction was for, possibly
    /// empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount of money spent or earned in this transaction.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Whether this transaction is an income or an expense.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// When the transaction happened.
    pub fn date(&self) -> &Date {
        &self.date
    }

    /// The ID of the category assigned to this transaction, if any.
    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }
}

/// Builder for creating a new [Transaction].
///
/// The description defaults to an empty string and the category to none,
/// matching how quick-added transactions are created. The function for
/// finalising the builder is [TransactionBuilder::finalise].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    id: String,
    title: String,
    description: String,
    amount: f64,
    transaction_type: TransactionType,
    date: Date,
    category_id: Option<String>,
}

impl TransactionBuilder {
    /// Create a builder with the required transaction fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
        transaction_type: TransactionType,
        date: Date,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            amount,
            transaction_type,
            date,
            category_id: None,
        }
    }

    /// Set the text description of the transaction.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set or clear the category the transaction belongs to.
    pub fn category_id(mut self, category_id: Option<String>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Build the [Transaction].
    pub fn finalise(self) -> Transaction {
        Transaction {
            id: self.id,
            title: self.title,
            description: self.description,
            amount: self.amount,
            transaction_type: self.transaction_type,
            date: self.date,
            category_id: self.category_id,
        }
    }
}


#[cfg(test)]
mod transaction_builder_tests {
    use time::macros::date;

    use super::{Transaction, TransactionType};

    #[test]
    fn builder_defaults_to_empty_description_and_no_category() {
        let transaction = Transaction::build(
            "1",
            "Milk",
            5.5,
            TransactionType::Expense,
            date!(2026 - 02 - 10),
        )
        .finalise();

        assert_eq!(transaction.id(), "1");
        assert_eq!(transaction.title(), "Milk");
        assert_eq!(transaction.description(), "");
        assert_eq!(transaction.amount(), 5.5);
        assert_eq!(transaction.transaction_type(), TransactionType::Expense);
        assert_eq!(*transaction.date(), date!(2026 - 02 - 10));
        assert_eq!(transaction.category_id(), None);
    }

    #[test]
    fn builder_sets_optional_fields() {
        let transaction = Transaction::build(
            "2",
            "Salary",
            5000.0,
            TransactionType::Income,
            date!(2026 - 02 - 11),
        )
        .description("Monthly pay")
        .category_id(Some("cat1".to_owned()))
        .finalise();

        assert_eq!(transaction.description(), "Monthly pay");
        assert_eq!(transaction.category_id(), Some("cat1"));
    }
}
