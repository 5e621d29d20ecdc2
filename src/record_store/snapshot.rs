//! Point-in-time reads from the record store.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

/// The value at a path at the moment it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    key: Option<String>,
    value: Value,
}

impl Snapshot {
    /// Create a snapshot of `value` read at a path ending in `key`.
    ///
    /// `key` is `None` for a read of the store root.
    pub fn new(key: Option<String>, value: Value) -> Self {
        Self { key, value }
    }

    /// The last segment of the path that was read.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The value that was read, [Value::Null] if nothing was stored.
    pub fn val(&self) -> &Value {
        &self.value
    }

    /// Whether anything was stored at the path.
    pub fn exists(&self) -> bool {
        !self.value.is_null()
    }

    /// Deserialize the value into `T`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidRecord] if the value does not have the shape of `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(self.value.clone()).map_err(Error::from)
    }

    /// A snapshot of each child, in ascending key order.
    ///
    /// Leaf values and empty reads have no children.
    pub fn children(&self) -> Vec<Snapshot> {
        match &self.value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| Snapshot::new(Some(key.clone()), value.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Snapshot;

    #[test]
    fn children_are_in_key_order() {
        let snapshot = Snapshot::new(
            Some("expenses".to_owned()),
            json!({ "b": { "amount": 2 }, "a": { "amount": 1 } }),
        );

        let keys: Vec<_> = snapshot
            .children()
            .iter()
            .map(|child| child.key().unwrap().to_owned())
            .collect();

        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn leaf_has_no_children() {
        let snapshot = Snapshot::new(Some("note".to_owned()), json!("hello"));

        assert!(snapshot.children().is_empty());
        assert!(snapshot.exists());
    }

    #[test]
    fn null_does_not_exist() {
        let snapshot = Snapshot::new(None, serde_json::Value::Null);

        assert!(!snapshot.exists());
    }
}
