use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::error;

use crate::{Store, StoredValue};

/// A process-local store backed by a hash map.
///
/// Values live as long as the store does. This is the default standard store and the usual store
/// for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, StoredValue>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").field("len", &self.len()).finish()
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.read_values().map_or(0, |values| values.len())
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.read_values()
            .is_some_and(|values| values.contains_key(key))
    }

    fn read_values(&self) -> Option<RwLockReadGuard<'_, HashMap<String, StoredValue>>> {
        match self.values.read() {
            Ok(values) => Some(values),
            Err(_) => {
                error!("MemoryStore lock is poisoned");
                None
            }
        }
    }

    fn write_values(&self) -> Option<RwLockWriteGuard<'_, HashMap<String, StoredValue>>> {
        match self.values.write() {
            Ok(values) => Some(values),
            Err(_) => {
                error!("MemoryStore lock is poisoned");
                None
            }
        }
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Option<StoredValue> {
        self.read_values()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: StoredValue) {
        if let Some(mut values) = self.write_values() {
            values.insert(key.to_owned(), value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(mut values) = self.write_values() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_read_write_delete() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.read("retry_count"), None);

        store.write("retry_count", StoredValue::Integer(5));
        assert_eq!(store.read("retry_count"), Some(StoredValue::Integer(5)));
        assert!(store.contains_key("retry_count"));
        assert_eq!(store.len(), 1);

        store.write("retry_count", StoredValue::String("five".to_string()));
        assert_eq!(
            store.read("retry_count"),
            Some(StoredValue::String("five".to_string()))
        );
        assert_eq!(store.len(), 1);

        store.delete("retry_count");
        assert_eq!(store.read("retry_count"), None);
        assert!(!store.contains_key("retry_count"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_missing_key() {
        let store = MemoryStore::new();
        store.delete("missing");
        assert!(store.is_empty());
    }

    #[test]
    fn test_poisoned_lock_reads_as_absent() {
        let store = Arc::new(MemoryStore::new());
        store.write("retry_count", StoredValue::Integer(5));

        let poisoner = Arc::clone(&store);
        let result = std::thread::spawn(move || {
            let _values = poisoner.values.write().unwrap();
            panic!("panic while holding the lock");
        })
        .join();
        assert!(result.is_err());
        assert!(store.values.is_poisoned());

        assert_eq!(store.read("retry_count"), None);
        store.write("retry_count", StoredValue::Integer(6));
        store.delete("retry_count");
        assert_eq!(store.read("retry_count"), None);
        assert_eq!(store.len(), 0);
        assert!(!store.contains_key("retry_count"));
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        store.write("a", StoredValue::Bool(true));
        store.write("b", StoredValue::Float(1.5));
        store.delete("a");

        assert_eq!(store.read("a"), None);
        assert_eq!(store.read("b"), Some(StoredValue::Float(1.5)));
    }
}
