//! Defines the crate level error type.

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A CSV row had fewer fields than the minimum needed to build a
    /// transaction.
    ///
    /// During a backup import this error is consumed internally and the row
    /// is skipped.
    #[error("expected at least 6 fields, got {0}")]
    CsvRowTooShort(usize),

    /// A string did not match a transaction type label exactly.
    ///
    /// The accepted labels are `INCOME` and `EXPENSE`, case-sensitive.
    #[error("'{0}' is not a valid transaction type")]
    InvalidTransactionType(String),

    /// A string could not be parsed as a `YYYY-MM-DD` calendar date.
    ///
    /// Callers should pass in the date string that caused the error and the
    /// original error as a string.
    #[error("could not parse '{0}' as a date: {1}")]
    InvalidDate(String, String),

    /// An empty string was used to create a category name.
    #[error("an empty string is not a valid category name")]
    EmptyCategoryName,

    /// A string did not match the `YYYY-MM` format used to key budgets.
    #[error("'{0}' is not a valid year-month, the expected format is YYYY-MM")]
    InvalidYearMonth(String),

    /// The requested record was not found in the database.
    #[error("the requested record could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        match error {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {error}");
                Error::SqlError(error)
            }
        }
    }
}
