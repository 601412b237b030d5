//! Gridlock - Unified CLI
//!
//! Interactive play and batch simulation.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gridlock::cli::{Cli, Command};
use gridlock::{GameConfig, presenter, simulate};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let overrides = cli.command.overrides();

    match cli.command {
        Command::Play { config, .. } => {
            let config = GameConfig::load(config.as_deref())?.with_overrides(&overrides);
            run_play(config).await
        }
        Command::Simulate { games, json, .. } => {
            let config = GameConfig::default().with_overrides(&overrides);
            run_simulate(config, games, json)
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Run an interactive game, logging to a file so output stays readable
async fn run_play(config: GameConfig) -> Result<()> {
    init_file_logging(config.log_file())?;
    info!(?config, "Starting interactive game");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    presenter::run(config, stdin, std::io::stdout()).await
}

fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Run computer-vs-computer games and print the tally
fn run_simulate(config: GameConfig, games: u32, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        // Per-move logs would drown the tally
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();

    info!(games, difficulties = ?config.difficulties(), "Starting simulation");
    let tally = simulate::run(games, config.difficulties(), *config.seed());

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{tally}");
    }
    Ok(())
}
