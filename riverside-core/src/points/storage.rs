//! Key-value persistence seam for the points balance.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure reported by a [`PointsStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write rejected: {0}")]
    Write(String),
}

/// Durable string storage local to one origin.
///
/// Platform-specific implementations should provide this; the browser build
/// wraps `localStorage`, tests use [`MemoryPointsStorage`].
pub trait PointsStorage {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same map, which makes it usable as a
/// stand-in for two tabs of the same origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryPointsStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPointsStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw stored value, bypassing any store logic.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Overwrite the raw value, simulating a write from another tab.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Remove a key, simulating the user clearing site data.
    pub fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl PointsStorage for MemoryPointsStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
