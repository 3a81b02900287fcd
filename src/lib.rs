//! QuickLink - a local-first URL shortener
//!
//! Short links, simulated redirects and click statistics kept in a local
//! key-value store. There is no server: the whole collection lives under one
//! key and every operation reads it fresh.
//!
//! # Architecture
//! - `services`: `LinkStore` (record lifecycle) and fragment routing
//! - `storage`: the storage port, record models and key-value backends
//! - `config`: static configuration (TOML + `QL__*` environment)
//! - `system`: logging initialization
//! - `interfaces`: command-line front end (feature `cli`)
//! - `utils`: code generation, URL validation, clocks

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;

pub use errors::{QuickLinkError, Result};
pub use services::LinkStore;
pub use storage::{LinkRecord, VisitEvent};
