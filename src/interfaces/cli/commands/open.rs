//! Redirect page and route dispatch

use colored::Colorize;

use super::stats::render_stats_table;
use crate::interfaces::cli::CliError;
use crate::services::{RedirectService, Route, RouteOutcome, LinkStore, STATS_PATH};

pub fn open_link(store: &LinkStore, code: &str, referrer: &str) -> Result<(), CliError> {
    let outcome = RedirectService::handle_redirect(store, code, referrer)?;
    print_outcome(&outcome);
    Ok(())
}

pub fn route_path(store: &LinkStore, path: &str, referrer: &str) -> Result<(), CliError> {
    let outcome = RedirectService::dispatch(store, Route::parse(path), referrer)?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &RouteOutcome) {
    match outcome {
        RouteOutcome::ShortenForm => {
            println!(
                "{} Create a short URL with: {}",
                "🔨".bold(),
                "quicklink shorten <URL> [--validity MIN] [--code CODE]".cyan()
            );
        }
        RouteOutcome::Stats(links) => {
            println!("{} {}", "📊".bold(), STATS_PATH.dimmed());
            println!("{}", render_stats_table(links));
        }
        RouteOutcome::Redirect(target) => {
            println!("{} Redirecting to destination... 🔁", "→".bold().green());
            println!("{}", target);
        }
        RouteOutcome::Navigate(path) => {
            println!(
                "{} Unknown short code, returning to {}",
                "⚠".bold().yellow(),
                path.cyan()
            );
        }
        RouteOutcome::Unmatched(path) => {
            println!("{} No route matches {}", "⚠".bold().yellow(), path.cyan());
        }
    }
}
