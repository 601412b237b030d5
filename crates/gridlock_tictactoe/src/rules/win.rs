//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};

/// The 8 winning lines, in evaluation order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first complete line,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[a] == squares[b] && squares[a] == squares[c] => {
            Some(player)
        }
        _ => None,
    })
}
