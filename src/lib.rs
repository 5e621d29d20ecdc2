//! Expensify is a personal expense tracker.
//!
//! This library provides the expense actions, the asynchronous tasks that keep
//! a keyed record store and the in-process expense list in step, and the HTML
//! page for editing or removing an expense.

#![warn(missing_docs)]

mod app_state;
mod dispatch;
mod endpoints;
mod expense;
mod html;
mod logging;
mod navigation;
mod record_store;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use dispatch::{Dispatch, ExpenseStore};
pub use endpoints::{EDIT_EXPENSE_VIEW, ROOT, format_endpoint};
pub use expense::{
    EXPENSES_PATH, EditExpensePage, Expense, ExpenseAction, ExpenseData, ExpenseForm, ExpenseId,
    PartialExpense, add_expense, edit_expense, expenses_reducer, remove_expense, set_expenses,
    start_add_expense, start_edit_expense, start_remove_expense, start_set_expenses,
};
pub use html::format_currency;
pub use logging::setup_logging;
pub use navigation::{History, MemoryHistory};
pub use record_store::{RecordStore, Snapshot, SqliteRecordStore, create_record_table};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The record path was empty where a key was needed, contained an empty
    /// segment, or used one of the reserved characters `.`, `#`, `$`, `[`
    /// or `]`.
    #[error("invalid record path \"{0}\"")]
    InvalidPath(String),

    /// A value could not be converted to or from its JSON record form.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not convert record: {0}")]
    InvalidRecord(String),

    /// A submitted form was missing a field or could not be parsed.
    #[error("invalid form: {0}")]
    InvalidForm(String),

    /// The amount entered in a form was not a non-negative dollar amount with
    /// at most two decimal places.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidRecord(value.to_string())
    }
}
