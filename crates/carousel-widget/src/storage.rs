//! `localStorage` backend.

use carousel_core::{KvBackend, StorageError};
use wasm_bindgen::JsValue;

/// [`KvBackend`] over the browser's `localStorage`.
///
/// When storage is disabled (privacy modes, sandboxed frames) every
/// operation reports [`StorageError::Unavailable`].
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Open the window's `localStorage`.
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KvBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(backend_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(backend_error)
    }
}

fn backend_error(value: JsValue) -> StorageError {
    StorageError::Backend(crate::dom::describe_js(&value))
}
