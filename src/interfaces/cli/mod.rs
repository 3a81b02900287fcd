//! CLI interface module
//!
//! Thin presentation layer over `LinkStore`: input validation, formatting and
//! nothing else.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::services::LinkStore;
use crate::utils::url_validator::{UrlValidationError, validation_error_message};
use commands::{generate_config, open_link, route_path, show_link, shorten_url, show_stats};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    InvalidUrl(UrlValidationError),
    CommandError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::InvalidUrl(err) => format!("{}: {}", validation_error_message(err), err),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::InvalidUrl(err) => {
                let label = format!("{}:", validation_error_message(err));
                format!("{} {}", label.red().bold(), err.to_string().white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::QuickLinkError> for CliError {
    fn from(err: crate::errors::QuickLinkError) -> Self {
        CliError::StorageError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // config generate 不需要存储
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path } = action;
        return generate_config(output_path);
    }

    let store = LinkStore::from_config(config)?;

    match cmd {
        Commands::Shorten {
            url,
            validity,
            code,
        } => {
            let validity = validity.unwrap_or(config.links.default_validity);
            shorten_url(&store, &url, validity, code.as_deref())
        }
        Commands::Stats => show_stats(&store),
        Commands::Show { code } => show_link(&store, &code),
        Commands::Open { code, referrer } => open_link(&store, &code, &referrer),
        Commands::Route { path, referrer } => route_path(&store, &path, &referrer),
        Commands::Config { .. } => unreachable!("handled above"),
    }
}
