//! The navigation handle pages use to move to another page.

use std::sync::{Mutex, PoisonError};

/// A navigation history that pages can push new locations onto.
pub trait History {
    /// Navigate to `path`.
    fn push(&self, path: &str);
}

/// A [History] that keeps the visited paths in memory.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    /// Create a history with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path pushed so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recently pushed path.
    pub fn location(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl History for MemoryHistory {
    fn push(&self, path: &str) {
        tracing::debug!("Navigating to {path}");

        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::{History, MemoryHistory};

    #[test]
    fn push_records_location() {
        let history = MemoryHistory::new();

        history.push("/edit/1");
        history.push("/");

        assert_eq!(history.entries(), vec!["/edit/1", "/"]);
        assert_eq!(history.location(), Some("/".to_owned()));
    }

    #[test]
    fn new_history_has_no_location() {
        assert_eq!(MemoryHistory::new().location(), None);
    }
}
