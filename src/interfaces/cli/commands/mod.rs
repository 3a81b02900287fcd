//! CLI command implementations

mod config_gen;
mod open;
mod shorten;
mod stats;

pub use config_gen::*;
pub use open::*;
pub use shorten::*;
pub use stats::*;
