//! Tier 3: exhaustive minimax search.
//!
//! Scores are always from the searching player's point of view: +1 for a
//! win, -1 for a loss, 0 for a draw. The tree is small enough (under 9!
//! leaves) that no pruning or caching is done.

use super::MoveSelector;
use crate::error::EngineError;
use crate::outcome::Outcome;
use crate::rules::{evaluate, legal_moves};
use crate::types::{Board, Player};
use rand::RngCore;

/// Optimal play by full game-tree search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSelector;

impl MinimaxSelector {
    /// Scores every legal move for `player`, in ascending index order.
    ///
    /// Useful for explaining a choice; [`MoveSelector::select`] keeps the
    /// first move with the best score.
    pub fn scored_moves(player: Player, board: &Board) -> Vec<(usize, i8)> {
        legal_moves(board)
            .into_iter()
            .filter_map(|index| {
                let next = board.place(index, player).ok()?;
                Some((index, minimax(&next, player.opponent(), player)))
            })
            .collect()
    }
}

impl MoveSelector for MinimaxSelector {
    fn select(
        &self,
        player: Player,
        board: &Board,
        _rng: &mut dyn RngCore,
    ) -> Result<usize, EngineError> {
        let mut best: Option<(usize, i8)> = None;
        for (index, score) in Self::scored_moves(player, board) {
            // Strict comparison keeps the lowest index among equal scores.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| index).ok_or(EngineError::NoLegalMoves)
    }
}

/// Value of `board` for `me` with `to_move` about to play.
fn minimax(board: &Board, to_move: Player, me: Player) -> i8 {
    match evaluate(board) {
        Outcome::Won(winner) if winner == me => return 1,
        Outcome::Won(_) => return -1,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let scores = legal_moves(board).into_iter().filter_map(|index| {
        let next = board.place(index, to_move).ok()?;
        Some(minimax(&next, to_move.opponent(), me))
    });

    let best = if to_move == me {
        scores.max()
    } else {
        scores.min()
    };
    // InProgress guarantees at least one child.
    best.unwrap_or(0)
}
