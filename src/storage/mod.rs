//! Storage port and key-value backends
//!
//! `LinkStore` talks only to [`LinkStorage`], which reads and writes the whole
//! collection at once. [`KvLinkStorage`] implements that port on top of any
//! [`KeyValueStore`], keeping the collection as one JSON document under a
//! single key.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::StaticConfig;
use crate::errors::{QuickLinkError, Result};

pub mod backends;
pub mod converters;
pub mod models;

pub use backends::{FileKvStore, MemoryKvStore};
pub use models::{LinkRecord, VisitEvent};

/// Whole-collection port used by `LinkStore`.
///
/// There is no compare-and-swap between `read` and `write`: two writers that
/// interleave lose one update, and the later snapshot wins.
pub trait LinkStorage: Send + Sync {
    /// Current collection in storage order. Unavailable or unparsable
    /// storage yields an empty collection.
    fn read(&self) -> Vec<LinkRecord>;

    /// Replace the stored collection.
    fn write(&self, links: &[LinkRecord]) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

/// String key-value store, shaped like browser `localStorage`.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}

/// Fully-qualified short link for a code.
pub fn short_link(origin: &str, code: &str) -> String {
    format!("{}/#/{}", origin.trim_end_matches('/'), code)
}

pub struct KvLinkStorage {
    store: Arc<dyn KeyValueStore>,
    key: String,
    origin: String,
}

impl KvLinkStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            origin: origin.into(),
        }
    }

    /// Raw stored document, bypassing decoding.
    pub fn raw(&self) -> Result<Option<String>> {
        self.store.get_item(&self.key)
    }
}

impl LinkStorage for KvLinkStorage {
    fn read(&self) -> Vec<LinkRecord> {
        match self.store.get_item(&self.key) {
            Ok(Some(raw)) => converters::decode_collection(&raw, &self.origin),
            Ok(None) => {
                debug!("No collection stored under '{}'", self.key);
                Vec::new()
            }
            Err(e) => {
                warn!("Storage unavailable, treating collection as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn write(&self, links: &[LinkRecord]) -> Result<()> {
        let encoded = converters::encode_collection(links)?;
        self.store.set_item(&self.key, &encoded)?;
        debug!(
            "Wrote {} links to '{}' ({} backend)",
            links.len(),
            self.key,
            self.store.backend_name()
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create_kv(config: &StaticConfig) -> Result<Arc<dyn KeyValueStore>> {
        let store: Arc<dyn KeyValueStore> = match config.store.backend.as_str() {
            "file" => Arc::new(FileKvStore::new(&config.store.path)?),
            "memory" => Arc::new(MemoryKvStore::new()),
            other => {
                return Err(QuickLinkError::storage_backend_not_found(format!(
                    "Unknown storage backend: '{}'. Valid: file, memory",
                    other
                )));
            }
        };
        Ok(store)
    }

    pub fn create(config: &StaticConfig) -> Result<Arc<dyn LinkStorage>> {
        let kv = Self::create_kv(config)?;
        Ok(Arc::new(KvLinkStorage::new(
            kv,
            config.store.key.clone(),
            config.app.origin.clone(),
        )))
    }
}
