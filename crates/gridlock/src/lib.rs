//! Gridlock - terminal tic-tac-toe front end
//!
//! Wraps the [`gridlock_tictactoe`] core with a command-line interface,
//! TOML configuration and an interactive terminal loop.
//!
//! # Architecture
//!
//! - **Config**: file settings plus command-line overrides
//! - **Presenter**: line-based play with delayed computer moves
//! - **Simulate**: batch computer-vs-computer games
//!
//! # Example
//!
//! ```
//! use gridlock::simulate;
//! use gridlock_tictactoe::{Difficulties, Difficulty};
//!
//! let tally = simulate::run(2, Difficulties::uniform(Difficulty::Heuristic), Some(7));
//! assert_eq!(tally.games, 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod presenter;
pub mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Overrides};

// Crate-level exports - Simulation
pub use simulate::Tally;
