//! Move selection for computer-controlled seats.
//!
//! Three tiers share one signature: given the mover and a board, return the
//! index to play. The tiers differ only in how much they look ahead.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicSelector;
pub use minimax::MinimaxSelector;
pub use random::RandomSelector;

use crate::error::EngineError;
use crate::types::{Board, Player};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A strategy that picks a move for `player` on `board`.
pub trait MoveSelector {
    /// Chooses an empty square for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMoves`] if the board is full.
    fn select(
        &self,
        player: Player,
        board: &Board,
        rng: &mut dyn RngCore,
    ) -> Result<usize, EngineError>;
}

/// Strength of a computer-controlled seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    /// Uniformly random legal move.
    Random,
    /// Win if possible, otherwise block, otherwise random.
    Heuristic,
    /// Full minimax search; never loses.
    #[default]
    ExhaustiveSearch,
}

impl Difficulty {
    /// Returns the selector implementing this tier.
    pub fn selector(self) -> &'static dyn MoveSelector {
        match self {
            Difficulty::Random => &RandomSelector,
            Difficulty::Heuristic => &HeuristicSelector,
            Difficulty::ExhaustiveSearch => &MinimaxSelector,
        }
    }
}

/// Picks a move for `player` using the given difficulty tier.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMoves`] if the board is full.
#[instrument(skip(board, rng), fields(occupied = board.occupied_count()))]
pub fn select_move(
    difficulty: Difficulty,
    player: Player,
    board: &Board,
    rng: &mut dyn RngCore,
) -> Result<usize, EngineError> {
    let index = difficulty.selector().select(player, board, rng)?;
    debug!(index, "Engine chose move");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_tier_rejects_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in Difficulty::iter() {
            assert_eq!(
                select_move(difficulty, Player::X, &board, &mut rng),
                Err(EngineError::NoLegalMoves)
            );
        }
    }

    #[test]
    fn test_every_tier_returns_empty_square() {
        let board: Board = "XO./.X./O..".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for difficulty in Difficulty::iter() {
            let index = select_move(difficulty, Player::O, &board, &mut rng).unwrap();
            assert!(board.is_empty(index), "{difficulty} picked occupied {index}");
        }
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::ExhaustiveSearch.to_string(), "exhaustive_search");
        assert_eq!("heuristic".parse::<Difficulty>(), Ok(Difficulty::Heuristic));
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
