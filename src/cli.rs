// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the interactive view starts. Subcommands:
// - list: Print passengers matching a search, then the class breakdown
// - show: Print one passenger
// - add: Create a passenger from a JSON file
// - config --show|--path|--reset: Configuration management

use crate::chart::{aggregate, ClassBreakdown};
use crate::client::PassengerClient;
use crate::config::{Config, VERSION};
use crate::model::{NewPassenger, Passenger, Sex, COLUMNS};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Titanic passenger viewer - browse passengers and their class breakdown
#[derive(Parser)]
#[command(name = "titanic-viewer")]
#[command(version = VERSION)]
#[command(about = "Browse Titanic passengers by name, class and sex", long_about = None)]
pub struct Cli {
    /// Passenger API base URL (overrides config and TITANIC_VIEWER_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print passengers whose name matches a search
    List {
        /// Search value; empty lists everyone
        #[arg(long, short, default_value = "")]
        search: String,

        /// Print raw records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single passenger
    Show {
        /// Passenger ID
        id: i64,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a passenger from a JSON file
    Add {
        /// Path to a JSON object with the new passenger's fields
        #[arg(long)]
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Commands {
    /// Commands that never talk to the API
    pub fn is_offline(&self) -> bool {
        matches!(self, Commands::Config { .. })
    }
}

/// Run a subcommand to completion
pub async fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::List { search, json } => handle_list(config, &search, json).await,
        Commands::Show { id, json } => handle_show(config, id, json).await,
        Commands::Add { file } => handle_add(config, &file).await,
        Commands::Config { show, path, reset } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show(config);
                Ok(())
            } else if reset {
                handle_config_reset()
            } else {
                println!("Usage: titanic-viewer config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
                Ok(())
            }
        }
    }
}

fn client(config: &Config) -> Result<PassengerClient> {
    PassengerClient::new(&config.client_config()).context("Invalid API base URL")
}

async fn handle_list(config: &Config, search: &str, json: bool) -> Result<()> {
    let client = client(config)?;
    let passengers = client
        .fetch_passengers(search)
        .await
        .with_context(|| format!("Failed to fetch passengers from {}", client.base_url()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&passengers)?);
        return Ok(());
    }

    let breakdown = aggregate(&passengers);
    println!("{}", passenger_table(&passengers));
    println!();
    println!("{}", breakdown_table(&breakdown));
    if breakdown.skipped > 0 {
        println!(
            "({} passengers without a class 1-3 not counted)",
            breakdown.skipped
        );
    }
    Ok(())
}

async fn handle_show(config: &Config, id: i64, json: bool) -> Result<()> {
    let client = client(config)?;
    let passenger = client
        .fetch_passenger(id)
        .await
        .with_context(|| format!("Failed to fetch passenger {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&passenger)?);
    } else {
        for (label, value) in COLUMNS.iter().zip(passenger.cells()) {
            println!("{:<20}{}", label, value);
        }
    }
    Ok(())
}

async fn handle_add(config: &Config, file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let new: NewPassenger = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid passenger", file.display()))?;
    new.validate()?;

    let client = client(config)?;
    let created = client
        .create_passenger(&new)
        .await
        .context("Failed to create passenger")?;

    println!("Created passenger #{} ({})", created.passenger_id, created.name);
    Ok(())
}

/// One row per passenger, every column, missing values as empty cells
fn passenger_table(passengers: &[Passenger]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(COLUMNS.iter().map(|h| Cell::new(h).fg(Color::White)));

    for passenger in passengers {
        let cells = passenger.cells();
        let sex_color = match passenger.sex {
            Some(Sex::Male) => Color::Blue,
            Some(Sex::Female) => Color::Green,
            _ => Color::White,
        };
        table.add_row(cells.into_iter().enumerate().map(|(i, value)| match i {
            0 => Cell::new(value).fg(Color::Yellow),
            3 => Cell::new(value).fg(sex_color),
            _ => Cell::new(value),
        }));
    }
    table
}

fn breakdown_table(breakdown: &ClassBreakdown) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            Cell::new("Class").fg(Color::White),
            Cell::new("Male").fg(Color::Blue),
            Cell::new("Female").fg(Color::Green),
        ]);

    for bucket in &breakdown.buckets {
        table.add_row(vec![
            Cell::new(bucket.p_class),
            Cell::new(bucket.male).set_alignment(CellAlignment::Right),
            Cell::new(bucket.female).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (cli > env > file > defaults)");
    println!();
    println!("base_url = {:?}", config.base_url);
    println!("timeout_secs = {}", config.timeout_secs);
    println!("theme = {:?}", config.theme);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
