use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use serde_json::{Map, Value};

use crate::{
    Error,
    dispatch::Dispatch,
    expense::{EXPENSES_PATH, ExpenseAction},
    record_store::{RecordStore, Snapshot, SqliteRecordStore, create_record_table},
    test_utils::fixture_expenses,
};

/// Records every dispatched action instead of applying it.
#[derive(Debug, Default)]
pub(crate) struct MockDispatcher {
    actions: Mutex<Vec<ExpenseAction>>,
}

impl MockDispatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn actions(&self) -> Vec<ExpenseAction> {
        self.actions.lock().unwrap().clone()
    }
}

impl Dispatch for MockDispatcher {
    fn dispatch(&self, action: ExpenseAction) {
        self.actions.lock().unwrap().push(action);
    }
}

/// A record store where every call fails as if the store were unreachable.
pub(crate) struct FailingRecordStore;

impl RecordStore for FailingRecordStore {
    async fn set(&self, _path: &str, _value: Value) -> Result<(), Error> {
        Err(Error::DatabaseLockError)
    }

    async fn update(&self, _path: &str, _values: Map<String, Value>) -> Result<(), Error> {
        Err(Error::DatabaseLockError)
    }

    async fn once(&self, _path: &str) -> Result<Snapshot, Error> {
        Err(Error::DatabaseLockError)
    }
}

/// An in-memory record store holding [fixture_expenses] under [EXPENSES_PATH].
pub(crate) async fn seeded_record_store() -> SqliteRecordStore {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    create_record_table(&connection).expect("could not create record table");
    let store = SqliteRecordStore::new(Arc::new(Mutex::new(connection)));

    let expenses: Map<String, Value> = fixture_expenses()
        .into_iter()
        .map(|expense| {
            let data = serde_json::to_value(expense.data()).expect("could not serialize expense");
            (expense.id.to_string(), data)
        })
        .collect();

    store
        .set(EXPENSES_PATH, Value::Object(expenses))
        .await
        .expect("could not seed expenses");

    store
}
