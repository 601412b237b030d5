//! Tic-tac-toe game core.
//!
//! Pure game logic for a 3x3 board with optional computer opponents.
//!
//! # Architecture
//!
//! - **Board**: immutable 9-square value type ([`Board`], [`Square`], [`Player`])
//! - **Rules**: outcome evaluation and move enumeration ([`evaluate`], [`legal_moves`])
//! - **Engine**: three move selectors behind one signature ([`select_move`], [`Difficulty`])
//! - **Session**: turn alternation and AI triggering ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use gridlock_tictactoe::{Difficulties, Difficulty, GameMode, GameSession, Outcome};
//!
//! let mut session = GameSession::new(
//!     GameMode::AiVsAi,
//!     Difficulties::uniform(Difficulty::ExhaustiveSearch),
//! );
//! while session.play_ai_turn() {}
//! assert_eq!(session.view().outcome, Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod outcome;
mod position;
mod rules;
mod session;
mod types;

pub use engine::{
    Difficulty, HeuristicSelector, MinimaxSelector, MoveSelector, RandomSelector, select_move,
};
pub use error::{BoardError, EngineError};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LINES, check_winner, evaluate, is_full, legal_moves};
pub use session::{Control, Difficulties, GameMode, GameSession, GameView, ScheduledMove};
pub use types::{BOARD_SIZE, Board, Player, Square};
