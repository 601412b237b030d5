//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: who has won, whether the board is full,
//! and which squares are still playable. Nothing here mutates state.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::legal_moves;
pub use win::{LINES, check_winner};

use crate::outcome::Outcome;
use crate::types::Board;

/// Evaluates a board.
///
/// Lines are scanned in [`LINES`] order and the first complete one decides
/// the winner. A full board without a complete line is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_win() {
        let board: Board = "O.X/.OX/..O".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Player::O));
    }

    #[test]
    fn test_evaluate_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_evaluate_win_on_full_board_is_not_draw() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_first_line_wins_on_hypothetical_board() {
        // Unreachable in play: both players own a row. Row 0 is scanned first.
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Player::O));
    }
}
