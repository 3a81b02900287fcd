use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to in-memory defaults when `init_config` was never called,
/// so library users that build their own `LinkStore` are not forced to
/// touch the global.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (default `quicklink.toml`) overlaid with
/// `QL__*` environment variables. A second call replaces the stored value.
pub fn init_config(path: Option<&str>) -> crate::errors::Result<Arc<StaticConfig>> {
    let loaded = StaticConfig::load(path)?;
    let slot = CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()));
    slot.store(Arc::new(loaded));
    Ok(slot.load_full())
}
