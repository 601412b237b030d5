//! Tier 2: one-ply lookahead.
//!
//! Takes an immediate win, otherwise blocks an immediate loss, otherwise
//! plays randomly. Forks and deeper traps go unnoticed.

use super::MoveSelector;
use super::random::RandomSelector;
use crate::error::EngineError;
use crate::rules::{check_winner, legal_moves};
use crate::types::{Board, Player};
use rand::RngCore;

/// Win, block, or fall back to random.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSelector;

/// First empty square (ascending) where `player` completes a line.
fn completing_move(player: Player, board: &Board, moves: &[usize]) -> Option<usize> {
    moves.iter().copied().find(|&index| {
        board
            .place(index, player)
            .is_ok_and(|next| check_winner(&next) == Some(player))
    })
}

impl MoveSelector for HeuristicSelector {
    fn select(
        &self,
        player: Player,
        board: &Board,
        rng: &mut dyn RngCore,
    ) -> Result<usize, EngineError> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        if let Some(index) = completing_move(player, board, &moves) {
            return Ok(index);
        }
        if let Some(index) = completing_move(player.opponent(), board, &moves) {
            return Ok(index);
        }
        RandomSelector.select(player, board, rng)
    }
}
