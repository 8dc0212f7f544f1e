//! tlsdelta CLI - Extract TLS handshake timing datasets from exported captures.

use anyhow::Context;
use clap::Parser;
use tlsdelta_cli::commands;
use tlsdelta_cli::{Cli, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .init();

    // Load config file (defaults when absent)
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.defaults.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.defaults.color;

    let formatter = Formatter::new(format, color_enabled);

    commands::execute_run(&cli, &config, &formatter).await?;

    Ok(())
}
