//! Link record lifecycle
//!
//! Every operation starts from a fresh `LinkStorage::read`; nothing is cached
//! between calls. Mutations are read-modify-write of the whole collection
//! with no lock held across the pair, so concurrent writers sharing one
//! store keep only the last snapshot.

use std::sync::Arc;

use chrono::{Duration, SubsecRound};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::errors::{QuickLinkError, Result};
use crate::storage::{self, LinkRecord, LinkStorage, StorageFactory, VisitEvent};
use crate::utils::{Clock, SystemClock, generate_random_code};

pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;
pub const DEFAULT_CODE_LENGTH: usize = 6;
/// Upper bound accepted from the CLI and configuration (100 years)
pub const MAX_VALIDITY_MINUTES: i64 = 60 * 24 * 366 * 100;

pub struct LinkStore {
    storage: Arc<dyn LinkStorage>,
    clock: Arc<dyn Clock>,
    origin: String,
    code_length: usize,
}

impl LinkStore {
    pub fn new(storage: Arc<dyn LinkStorage>, origin: impl Into<String>) -> Self {
        Self {
            storage,
            clock: Arc::new(SystemClock),
            origin: origin.into(),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Build the store and its backend from static configuration
    pub fn from_config(config: &StaticConfig) -> Result<Self> {
        let storage = StorageFactory::create(config)?;
        info!(
            "LinkStore using {} backend, key '{}'",
            storage.backend_name(),
            config.store.key
        );
        Ok(Self::new(storage, config.app.origin.clone()).with_code_length(config.links.code_length))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn backend_name(&self) -> &'static str {
        self.storage.backend_name()
    }

    /// Create a record and append it to the stored collection.
    ///
    /// `original` is stored as given. An empty or absent `custom_code` means
    /// a random code; either way no uniqueness check is made. A validity
    /// whose expiry falls outside the representable range is a validation
    /// error and nothing is written.
    pub fn create(
        &self,
        original: &str,
        validity_minutes: i64,
        custom_code: Option<&str>,
    ) -> Result<LinkRecord> {
        let code = match custom_code.filter(|c| !c.is_empty()) {
            Some(c) => c.to_string(),
            None => generate_random_code(self.code_length),
        };

        // 持久化格式只保留毫秒
        let now = self.clock.now().trunc_subsecs(3);
        let expiry = Duration::try_minutes(validity_minutes)
            .and_then(|validity| now.checked_add_signed(validity))
            .ok_or_else(|| {
                QuickLinkError::validation(format!(
                    "Validity of {} minutes is out of range",
                    validity_minutes
                ))
            })?;
        let link = LinkRecord {
            id: now.timestamp_millis(),
            original: original.to_string(),
            short: storage::short_link(&self.origin, &code),
            code,
            expiry,
            clicks: 0,
            history: Vec::new(),
        };

        let mut links = self.storage.read();
        links.push(link.clone());
        self.storage.write(&links)?;

        info!("Created link '{}' -> '{}'", link.code, link.original);
        Ok(link)
    }

    /// First record whose code matches, read fresh from storage.
    pub fn lookup(&self, code: &str) -> Option<LinkRecord> {
        self.storage.read().into_iter().find(|link| link.code == code)
    }

    /// Count a visit and return the original URL.
    ///
    /// Unknown codes return `Ok(None)` without touching storage. Expired
    /// links still resolve; `expiry` is informational.
    pub fn record_visit(&self, code: &str, referrer: &str) -> Result<Option<String>> {
        let mut links = self.storage.read();

        let Some(link) = links.iter_mut().find(|link| link.code == code) else {
            debug!("No link for code '{}'", code);
            return Ok(None);
        };

        link.history.push(VisitEvent {
            time: self.clock.now().trunc_subsecs(3),
            referrer: referrer.to_string(),
        });
        link.clicks += 1;
        let original = link.original.clone();
        let clicks = link.clicks;

        self.storage.write(&links)?;

        debug!("Visit recorded for '{}' ({} clicks)", code, clicks);
        Ok(Some(original))
    }

    /// All records in storage order.
    pub fn list_all(&self) -> Vec<LinkRecord> {
        self.storage.read()
    }
}
