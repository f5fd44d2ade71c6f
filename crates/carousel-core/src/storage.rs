//! Key-value store wrapper with automatic serialization.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{StorageError, StructuredLogger};

/// Raw string key-value storage, e.g. the browser's `localStorage`.
pub trait KvBackend {
    /// Read the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a raw value under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw entry.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Reject every write, like a storage whose quota is exhausted.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KvBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Backend(format!("write rejected for {}", key)));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Type-safe store over a [`KvBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Store<B> {
    backend: B,
    logger: Option<StructuredLogger>,
}

impl<B: KvBackend> Store<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            logger: None,
        }
    }

    /// Report unreadable entries through `logger`.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Logger attached with [`Store::with_logger`].
    pub fn logger(&self) -> Option<&StructuredLogger> {
        self.logger.as_ref()
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Get a value, degrading to `T::default()` when the key is missing,
    /// the storage is unavailable or the stored JSON does not parse.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) | Err(StorageError::Unavailable) => T::default(),
            Err(e) => {
                if let Some(logger) = &self.logger {
                    logger
                        .warn_builder("Discarding unreadable stored value")
                        .field("key", key)
                        .field("error", e.to_string())
                        .emit();
                }
                T::default()
            }
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = Store::new(MemoryBackend::new());
        store.set("favorites", &vec![1, 2, 3]).unwrap();

        let ids: Option<Vec<i32>> = store.get("favorites").unwrap();
        assert_eq!(ids, Some(vec![1, 2, 3]));
        assert_eq!(store.backend().raw("favorites").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_missing_key() {
        let store = Store::new(MemoryBackend::new());
        let value: Option<Vec<i32>> = store.get("products").unwrap();

        assert!(value.is_none());
        assert!(store.backend().raw("products").is_none());
    }

    #[test]
    fn test_corrupt_value_is_an_error_for_get() {
        let store = Store::new(MemoryBackend::new().with_entry("favorites", "[1, 2"));
        let result: Result<Option<Vec<i32>>, _> = store.get("favorites");

        assert!(matches!(result, Err(StorageError::Serialize(_))));
    }

    #[test]
    fn test_corrupt_value_defaults() {
        let store = Store::new(MemoryBackend::new().with_entry("favorites", "{not json"));
        let ids: Vec<i32> = store.get_or_default("favorites");

        assert!(ids.is_empty());
    }

    #[test]
    fn test_read_only_backend_rejects_writes() {
        let store = Store::new(MemoryBackend::new().read_only());
        let result = store.set("favorites", &vec![1]);

        assert!(matches!(result, Err(StorageError::Backend(_))));
    }

    #[test]
    fn test_clones_share_entries() {
        let backend = MemoryBackend::new();
        let store = Store::new(backend.clone());
        store.set("k", "v").unwrap();

        assert_eq!(backend.raw("k").as_deref(), Some("\"v\""));
    }
}
