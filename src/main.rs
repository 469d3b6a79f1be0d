// Titanic Viewer - browse Titanic passengers from a passenger API
//
// Fetches passengers matching a name search, shows them in a table and
// charts how many men and women travelled in each ticket class.
//
// Architecture:
// - Client (reqwest): GET/POST against the passenger API
// - Chart: Aggregates passengers into per-class male/female buckets
// - View: Search/fetch state machine, latest search wins
// - TUI (ratatui): Search bar, bar chart, table, detail modal
// - CLI (clap): Non-interactive list/show/add/config subcommands

mod chart;
mod cli;
mod client;
mod config;
mod error;
mod logging;
mod model;
mod tui;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use client::PassengerClient;
use config::Config;
use logging::{LogBuffer, LogMode};
use tui::theme::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: --url > env > config file > defaults
    let mut config = Config::from_env();
    if let Some(url) = cli.url {
        config.base_url = url;
    }

    let log_buffer = LogBuffer::new();
    let mode = if cli.command.is_some() {
        LogMode::Cli
    } else {
        LogMode::Tui
    };
    // Held until exit so buffered file logs are flushed
    let _file_guard = logging::init(&config.logging, mode, &log_buffer);

    match cli.command {
        Some(command) => {
            if !command.is_offline() {
                tracing::debug!(base_url = %config.base_url, "Using passenger API");
            }
            cli::run_command(command, &config).await
        }
        None => {
            let client = PassengerClient::new(&config.client_config())
                .with_context(|| format!("Invalid API base URL {:?}", config.base_url))?;
            tracing::info!(
                base_url = %client.base_url(),
                timeout_secs = config.timeout_secs,
                "Starting titanic-viewer"
            );
            tui::run_tui(client, Theme::by_name(&config.theme), log_buffer).await
        }
    }
}
