use anyhow::Context;
use clap::Parser;

use quicklink::cli::Cli;
use quicklink::config;
use quicklink::interfaces::cli::run_cli_command;
use quicklink::system::init_logging;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::init_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    if let Err(e) = run_cli_command(cli.command, &config) {
        eprintln!("{}", e.format_colored());
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}
