use std::cell::RefCell;
use std::collections::HashMap;

use super::{KeyValueStore, StorageError, StoreKey};

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<StoreKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        Ok(self.records.borrow().get(&key).cloned())
    }

    fn write(&self, key: StoreKey, contents: &str) -> Result<(), StorageError> {
        self.records.borrow_mut().insert(key, contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_unknown_key() {
        let store = MemoryStore::new();
        assert!(store.read(StoreKey::FoodEntries).unwrap().is_none());
    }

    #[test]
    fn test_write_and_read() {
        let store = MemoryStore::new();
        store.write(StoreKey::WaterGoal, "10").unwrap();
        assert_eq!(
            store.read(StoreKey::WaterGoal).unwrap(),
            Some("10".to_string())
        );
    }
}
