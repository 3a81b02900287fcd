use std::collections::HashMap;

use parking_lot::RwLock;

use crate::errors::Result;
use crate::storage::KeyValueStore;

/// In-process key-value store. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryKvStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let store = MemoryKvStore::new();
        assert!(store.get_item("urls").unwrap().is_none());

        store.set_item("urls", "[]").unwrap();
        store.set_item("urls", "[1]").unwrap();

        assert_eq!(store.items.read().len(), 1);
        assert_eq!(store.get_item("urls").unwrap().as_deref(), Some("[1]"));
    }
}
