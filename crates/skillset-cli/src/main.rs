mod cli;
mod commands;
mod settings;
mod system;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use cli::{Cli, Command};
use commands::Commands;
use settings::Settings;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; broken tool settings must not block the helpers
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| settings.logging.level.clone());
    skillset_logging::init_logging(&level)?;

    if let Some(e) = settings_error {
        warn!("Ignoring invalid skillset settings, using defaults: {e:#}");
    }

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    Commands::new(root, settings)
        .run(cli.command.unwrap_or(Command::Config))
        .await
}
