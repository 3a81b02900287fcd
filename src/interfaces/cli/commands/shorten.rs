//! Shorten command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkStore;
use crate::storage::LinkRecord;
use crate::utils::url_validator::validate_url;

/// Validate `url` and create a link; `create` is never reached for invalid input.
pub fn create_validated(
    store: &LinkStore,
    url: &str,
    validity: i64,
    code: Option<&str>,
) -> Result<LinkRecord, CliError> {
    validate_url(url).map_err(CliError::InvalidUrl)?;
    Ok(store.create(url, validity, code)?)
}

pub fn shorten_url(
    store: &LinkStore,
    url: &str,
    validity: i64,
    code: Option<&str>,
) -> Result<(), CliError> {
    let link = create_validated(store, url, validity, code)?;

    println!("{} Short URL:", "✅".bold().green());
    println!("  {}", link.short.cyan().underline());
    println!(
        "  {} {}",
        "Expires:".dimmed(),
        link.expiry
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .yellow()
    );
    Ok(())
}
