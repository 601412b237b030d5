//! Command-line interface for gridlock.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use gridlock_tictactoe::{Difficulty, GameMode, Player};

/// Gridlock - tic-tac-toe against random, heuristic or perfect opponents
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Terminal tic-tac-toe with computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Game mode (human_vs_human, human_vs_ai, ai_vs_ai)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Seat the human takes against the computer (x or o)
        #[arg(long)]
        human_seat: Option<Player>,

        /// Pause before showing a computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Play computer-vs-computer games and report the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Difficulty and seed flags shared by both commands.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Difficulty for X (random, heuristic, exhaustive_search)
    #[arg(long = "x")]
    pub x_difficulty: Option<Difficulty>,

    /// Difficulty for O (random, heuristic, exhaustive_search)
    #[arg(long = "o")]
    pub o_difficulty: Option<Difficulty>,

    /// Seed for the random tiers
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Command {
    /// Collects the flags that override config-file values.
    pub fn overrides(&self) -> Overrides {
        match self {
            Command::Play {
                mode,
                human_seat,
                delay_ms,
                engine,
                ..
            } => Overrides {
                mode: *mode,
                x_difficulty: engine.x_difficulty,
                o_difficulty: engine.o_difficulty,
                human_seat: *human_seat,
                ai_delay_ms: *delay_ms,
                seed: engine.seed,
            },
            Command::Simulate { engine, .. } => Overrides {
                mode: Some(GameMode::AiVsAi),
                x_difficulty: engine.x_difficulty,
                o_difficulty: engine.o_difficulty,
                ai_delay_ms: Some(0),
                seed: engine.seed,
                ..Overrides::default()
            },
        }
    }
}
