//! This file defines the `Budget` type, a monthly spending limit for a
//! category.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A calendar month in the `YYYY-MM` text form used to key budgets, e.g.
/// '2026-02'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct YearMonth(String);

impl YearMonth {
    /// Create a year-month from its text form.
    ///
    /// # Errors
    /// Returns an [Error::InvalidYearMonth] unless `text` is a four digit
    /// year and a two digit month between 01 and 12, separated by a hyphen.
    pub fn new(text: &str) -> Result<Self, Error> {
        let error = || Error::InvalidYearMonth(text.to_owned());

        let (year, month) = text.split_once('-').ok_or_else(error)?;

        if year.len() != 4 || !year.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(error());
        }

        if month.len() != 2 || !month.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(error());
        }

        let month_number: u8 = month.parse().map_err(|_| error())?;

        if !(1..=12).contains(&month_number) {
            return Err(error());
        }

        Ok(Self(text.to_string()))
    }

    /// Create a year-month without validation.
    ///
    /// The caller should ensure that the string has the `YYYY-MM` format.
    /// This is intended for values read back from the database, which were
    /// validated when they were stored.
    pub fn new_unchecked(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for YearMonth {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A spending limit for one category in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    year_month: YearMonth,
    category_id: String,
    amount: f64,
}

impl Budget {
    /// Create a new budget.
    pub fn new(year_month: YearMonth, category_id: impl Into<String>, amount: f64) -> Self {
        Self {
            year_month,
            category_id: category_id.into(),
            amount,
        }
    }

    /// The month the budget applies to.
    pub fn year_month(&self) -> &YearMonth {
        &self.year_month
    }

    /// The ID of the category the budget applies to.
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// The spending limit for the month.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}
