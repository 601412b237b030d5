//! Tier 1: uniformly random play.

use super::MoveSelector;
use crate::error::EngineError;
use crate::rules::legal_moves;
use crate::types::{Board, Player};
use rand::RngCore;
use rand::seq::IndexedRandom;

/// Plays any empty square with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    fn select(
        &self,
        _player: Player,
        board: &Board,
        rng: &mut dyn RngCore,
    ) -> Result<usize, EngineError> {
        legal_moves(board)
            .choose(rng)
            .copied()
            .ok_or(EngineError::NoLegalMoves)
    }
}
