//! Command-line interface definitions using clap
//!
//! Each subcommand stands in for one page of the link shortener: `shorten`
//! is the form, `stats` the statistics table, `open` the `/:code` redirect
//! page and `route` dispatches an arbitrary fragment path.

use clap::{Parser, Subcommand};

use crate::services::MAX_VALIDITY_MINUTES;

/// QuickLink - a local-first URL shortener
#[derive(Parser, Debug)]
#[command(name = "quicklink")]
#[command(version)]
#[command(about = "Shorten URLs, resolve short codes and view click statistics", long_about = None)]
pub struct Cli {
    /// Configuration file (default: quicklink.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a short link
    Shorten {
        /// Absolute URL to shorten
        url: String,

        /// Minutes until the link's expiry timestamp (default from config)
        #[arg(long, short = 'v', value_parser = clap::value_parser!(i64).range(1..=MAX_VALIDITY_MINUTES))]
        validity: Option<i64>,

        /// Custom short code (random when omitted)
        #[arg(long)]
        code: Option<String>,
    },

    /// Show the statistics table for every link
    Stats,

    /// Show one link and its visit history
    Show {
        code: String,
    },

    /// Resolve a short code, counting the visit
    Open {
        code: String,

        /// Referrer recorded with the visit
        #[arg(long, default_value = "")]
        referrer: String,
    },

    /// Dispatch a fragment route (`/`, `/stats`, `/<code>`) or a full short link
    Route {
        path: String,

        /// Referrer recorded when the route resolves a code
        #[arg(long, default_value = "")]
        referrer: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: quicklink.example.toml)
        output_path: Option<String>,
    },
}
