//! Persistence Adapter
//!
//! The todo list lives under a single key of a string key-value store
//! (`window.localStorage` in the browser) as a JSON array of items.

use crate::error::{StorageError, StorageResult};
use crate::models::TodoItem;

/// String key-value backing store
pub trait KeyValueStorage {
    /// `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every call so the handle stays `Copy + Send`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn backend() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::backend()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::backend()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Reads and writes the serialized todo list under one key
#[derive(Debug, Clone, Copy)]
pub struct TodoRepository<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> TodoRepository<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Stored list, `Ok(None)` if nothing was saved yet
    pub fn try_load(&self) -> StorageResult<Option<Vec<TodoItem>>> {
        match self.storage.get(self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Stored list, or empty when absent, unreadable or malformed
    pub fn load(&self) -> Vec<TodoItem> {
        match self.try_load() {
            Ok(Some(items)) => items,
            Ok(None) => {
                log::debug!("[STORAGE] No saved todos under '{}'", self.key);
                Vec::new()
            }
            Err(e) => {
                log::warn!("[STORAGE] Ignoring saved todos: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, items: &[TodoItem]) -> StorageResult<()> {
        let raw = serde_json::to_string(items)?;
        self.storage.set(self.key, &raw)?;
        log::debug!("[STORAGE] Saved {} todos", items.len());
        Ok(())
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    read_only: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write fails, like a full or locked-down localStorage
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStorage for &MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "todos";

    #[test]
    fn test_load_absent_is_empty() {
        let storage = MemoryStorage::new();
        let repo = TodoRepository::new(&storage, KEY);
        assert!(repo.try_load().unwrap().is_none());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"id\":1}", "[{\"text\":\"no id\"}]", "null"] {
            let storage = MemoryStorage::with_entry(KEY, raw);
            let repo = TodoRepository::new(&storage, KEY);
            assert!(matches!(repo.try_load(), Err(StorageError::Json(_))), "{}", raw);
            assert!(repo.load().is_empty(), "{}", raw);
        }
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let repo = TodoRepository::new(&storage, KEY);
        let mut second = TodoItem::new(2, "walk the dog");
        second.done = true;
        let items = vec![TodoItem::new(5, "buy milk"), second, TodoItem::new(1, "call mum")];

        repo.save(&items).unwrap();
        assert_eq!(repo.load(), items);
    }

    #[test]
    fn test_reads_original_layout() {
        let raw = r#"[{"id":1700000000000,"text":"buy milk"},{"id":1700000000500,"text":"pay rent","done":true}]"#;
        let storage = MemoryStorage::with_entry(KEY, raw);
        let items = TodoRepository::new(&storage, KEY).load();

        assert_eq!(items.len(), 2);
        assert!(!items[0].done);
        assert!(items[1].done);
        assert_eq!(items[1].text, "pay rent");
    }

    #[test]
    fn test_save_writes_json_array() {
        let storage = MemoryStorage::new();
        TodoRepository::new(&storage, KEY)
            .save(&[TodoItem::new(1, "x")])
            .unwrap();
        assert_eq!(storage.raw(KEY).unwrap(), r#"[{"id":1,"text":"x","done":false}]"#);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let storage = MemoryStorage::read_only();
        let repo = TodoRepository::new(&storage, KEY);
        let err = repo.save(&[TodoItem::new(1, "x")]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(err.to_string().contains("todos"));
    }
}
