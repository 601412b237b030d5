//! Move enumeration.

use crate::types::{BOARD_SIZE, Board};

/// Lists the empty squares in ascending index order.
///
/// An empty vector means the board is full.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..BOARD_SIZE).filter(|&i| board.is_empty(i)).collect()
}
