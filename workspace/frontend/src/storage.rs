use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write {0}")]
    Write(String),
}

/// Key/value persistence used for client preferences.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Every call degrades to "missing" when the browser
/// refuses access (private mode, sandboxed iframe).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| {
            log::warn!("Could not persist {}", key);
            StorageError::Write(key.to_string())
        })
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("stash-theme"), None);
        store.set("stash-theme", "light").unwrap();
        assert_eq!(store.get("stash-theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_memory_store_seeded() {
        let store = MemoryStore::with(&[("a", "1"), ("b", "2")]);
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }
}
