//! A record store kept in a SQLite database.
//!
//! Each leaf value (string, number or boolean) is one row keyed by its full
//! path and holding its JSON encoding. Objects are flattened into leaves on
//! write and rebuilt on read.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Transaction as SqlTransaction};
use serde_json::{Map, Value};

use crate::{
    Error,
    record_store::{RecordPath, RecordStore, Snapshot},
};

/// A [RecordStore] backed by a shared SQLite connection.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteRecordStore {
    /// Create a store over `connection`.
    ///
    /// The caller should make sure the record table exists, see
    /// [create_record_table].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl RecordStore for SqliteRecordStore {
    async fn set(&self, path: &str, value: Value) -> Result<(), Error> {
        let path = RecordPath::parse(path)?;
        let leaves = flatten(&path, value)?;

        let mut connection = self.lock()?;
        let transaction = connection.transaction()?;
        replace_subtree(&transaction, &path, &leaves)?;
        transaction.commit()?;

        tracing::debug!("Set {} leaf values at \"{path}\"", leaves.len());

        Ok(())
    }

    async fn update(&self, path: &str, values: Map<String, Value>) -> Result<(), Error> {
        let path = RecordPath::parse(path)?;

        let writes = values
            .into_iter()
            .map(|(key, value)| -> Result<_, Error> {
                let child = path.child(&key)?;
                let leaves = flatten(&child, value)?;
                Ok((child, leaves))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut connection = self.lock()?;
        let transaction = connection.transaction()?;
        for (child, leaves) in &writes {
            replace_subtree(&transaction, child, leaves)?;
        }
        transaction.commit()?;

        tracing::debug!("Updated {} children of \"{path}\"", writes.len());

        Ok(())
    }

    async fn once(&self, path: &str) -> Result<Snapshot, Error> {
        let path = RecordPath::parse(path)?;
        let rows = {
            let connection = self.lock()?;
            select_subtree(&connection, &path)?
        };

        let prefix = path.to_string();
        let mut value = Value::Null;

        for (row_path, raw_value) in rows {
            let leaf: Value = serde_json::from_str(&raw_value)?;
            let relative = row_path[prefix.len()..].trim_start_matches('/');

            if relative.is_empty() {
                value = leaf;
            } else {
                insert_leaf(&mut value, relative.split('/'), leaf);
            }
        }

        Ok(Snapshot::new(path.key().map(str::to_owned), value))
    }
}

/// Initialize the record table.
pub fn create_record_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS record (
            path TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;

    Ok(())
}

type Leaf = (String, String);

fn flatten(path: &RecordPath, value: Value) -> Result<Vec<Leaf>, Error> {
    let mut leaves = Vec::new();
    flatten_into(path, value, &mut leaves)?;

    Ok(leaves)
}

fn flatten_into(path: &RecordPath, value: Value, leaves: &mut Vec<Leaf>) -> Result<(), Error> {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(&path.child(&key)?, child, leaves)?;
            }
        }
        Value::Array(items) => {
            for (index, child) in items.into_iter().enumerate() {
                flatten_into(&path.child(&index.to_string())?, child, leaves)?;
            }
        }
        leaf => {
            // The root can only hold a mapping.
            if path.is_root() {
                return Err(Error::InvalidPath(String::new()));
            }

            leaves.push((path.to_string(), serde_json::to_string(&leaf)?));
        }
    }

    Ok(())
}

fn replace_subtree(
    transaction: &SqlTransaction,
    path: &RecordPath,
    leaves: &[Leaf],
) -> Result<(), Error> {
    if path.is_root() {
        transaction.execute("DELETE FROM record;", [])?;
    } else {
        let path_text = path.to_string();
        transaction.execute(
            "DELETE FROM record \
            WHERE path = ?1 OR substr(path, 1, length(?1) + 1) = ?1 || '/';",
            (path_text.as_str(),),
        )?;

        // A leaf stored at an ancestor would shadow the new subtree.
        for ancestor in path.ancestors() {
            transaction.execute(
                "DELETE FROM record WHERE path = ?1;",
                (ancestor.to_string(),),
            )?;
        }
    }

    let mut statement = transaction.prepare("INSERT INTO record (path, value) VALUES (?1, ?2);")?;
    for (leaf_path, leaf_value) in leaves {
        statement.execute((leaf_path.as_str(), leaf_value.as_str()))?;
    }

    Ok(())
}

fn select_subtree(connection: &Connection, path: &RecordPath) -> Result<Vec<Leaf>, Error> {
    if path.is_root() {
        return connection
            .prepare("SELECT path, value FROM record ORDER BY path ASC;")?
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .map(|maybe_row| maybe_row.map_err(Error::from))
            .collect();
    }

    connection
        .prepare(
            "SELECT path, value FROM record \
            WHERE path = ?1 OR substr(path, 1, length(?1) + 1) = ?1 || '/' \
            ORDER BY path ASC;",
        )?
        .query_map((path.to_string(),), |row| Ok((row.get(0)?, row.get(1)?)))?
        .map(|maybe_row| maybe_row.map_err(Error::from))
        .collect()
}

fn insert_leaf<'a>(value: &mut Value, mut segments: impl Iterator<Item = &'a str>, leaf: Value) {
    let Some(segment) = segments.next() else {
        *value = leaf;
        return;
    };

    if !value.is_object() {
        *value = Value::Object(Map::new());
    }

    if let Value::Object(map) = value {
        let child = map.entry(segment.to_owned()).or_insert(Value::Null);
        insert_leaf(child, segments, leaf);
    }
}
