//! Implements a struct that holds the state shared by the expense commands.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    dispatch::ExpenseStore,
    record_store::{SqliteRecordStore, create_record_table},
};

/// The record store and the in-process list of expenses.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store that expenses are saved to.
    pub record_store: SqliteRecordStore,

    /// The expenses as of the last dispatched action.
    pub expenses: Arc<ExpenseStore>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the record table.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        create_record_table(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self {
            record_store: SqliteRecordStore::new(connection),
            expenses: Arc::new(ExpenseStore::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{expense::start_set_expenses, test_utils::MockDispatcher};

    use super::AppState;

    #[tokio::test]
    async fn new_state_has_empty_store() {
        let connection = Connection::open_in_memory().unwrap();

        let state = AppState::new(connection).expect("Could not create app state");

        let expenses = start_set_expenses(&state.record_store, &MockDispatcher::new())
            .await
            .expect("Could not read expenses");
        assert!(expenses.is_empty());
        assert!(state.expenses.expenses().is_empty());
    }
}
