//! Statistics commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkStore;
use crate::storage::LinkRecord;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Plain-text statistics table: short, original, clicks, expiry.
pub fn render_stats_table(links: &[LinkRecord]) -> String {
    if links.is_empty() {
        return "No URLs yet.".to_string();
    }

    let headers = ["Short", "Original", "Clicks", "Expiry"];
    let rows: Vec<[String; 4]> = links
        .iter()
        .map(|link| {
            [
                link.short.clone(),
                link.original.clone(),
                link.clicks.to_string(),
                link.expiry.format(TIME_FORMAT).to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers));
    lines.push(widths.map(|w| "-".repeat(w)).join("  "));
    for row in &rows {
        lines.push(format_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]));
    }
    lines.join("\n")
}

pub fn show_stats(store: &LinkStore) -> Result<(), CliError> {
    let links = store.list_all();
    println!("{}", "URL Statistics".bold().green());
    println!();
    println!("{}", render_stats_table(&links));
    if !links.is_empty() {
        println!();
        println!(
            "{} Total {} short links",
            "ℹ".bold().blue(),
            links.len().to_string().green()
        );
    }
    Ok(())
}

pub fn show_link(store: &LinkStore, code: &str) -> Result<(), CliError> {
    let link = store
        .lookup(code)
        .ok_or_else(|| CliError::CommandError(format!("Short link not found: {}", code)))?;

    println!(
        "{} -> {}",
        link.short.cyan(),
        link.original.blue().underline()
    );
    println!(
        "  {} {}",
        "Created:".dimmed(),
        link.created_at().format(TIME_FORMAT)
    );
    println!(
        "  {} {}",
        "Expires:".dimmed(),
        link.expiry.format(TIME_FORMAT).to_string().yellow()
    );
    println!("  {} {}", "Clicks:".dimmed(), link.clicks.to_string().green());

    for visit in &link.history {
        let referrer = if visit.referrer.is_empty() {
            "(direct)".dimmed().to_string()
        } else {
            visit.referrer.clone()
        };
        println!("    {}  {}", visit.time.format(TIME_FORMAT), referrer);
    }
    Ok(())
}
