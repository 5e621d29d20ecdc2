//! The keyed record store that holds expense records.
//!
//! Records are addressed by slash separated paths, e.g. `expenses/abc123`.
//! Writing an object at a path replaces everything below that path, and
//! reading an interior path returns the keyed mapping of everything below it.

mod path;
mod snapshot;
mod sqlite;

use serde_json::{Map, Value};

use crate::Error;

pub use path::RecordPath;
pub use snapshot::Snapshot;
pub use sqlite::{SqliteRecordStore, create_record_table};

/// A remote keyed store of JSON records.
///
/// Every method is a single round trip to the store. Implementations must not
/// leave a partial write behind when a method returns an error.
pub trait RecordStore {
    /// Replace the value at `path` with `value`.
    ///
    /// Setting [Value::Null] (or an empty object) deletes the value at `path`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPath] if `path` or a key inside `value` is not a
    /// valid path, or an error from the underlying store.
    fn set(&self, path: &str, value: Value) -> impl Future<Output = Result<(), Error>> + Send;

    /// Set each key of `values` as a child of `path`, leaving the other
    /// children of `path` untouched.
    ///
    /// # Errors
    ///
    /// Same as [RecordStore::set]. Either all of `values` are written or none
    /// are.
    fn update(
        &self,
        path: &str,
        values: Map<String, Value>,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Delete the value at `path` and everything below it.
    ///
    /// Removing a path that holds nothing is not an error.
    fn remove(&self, path: &str) -> impl Future<Output = Result<(), Error>> + Send {
        self.set(path, Value::Null)
    }

    /// Read the value at `path` once.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPath] if `path` is not a valid path, or an error
    /// from the underlying store.
    fn once(&self, path: &str) -> impl Future<Output = Result<Snapshot, Error>> + Send;
}
