//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (first seat, moves first).
    X,
    /// Player O (second seat).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark character drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: [`Board::place`] returns a new board and leaves the
/// receiver untouched, so search code can branch freely from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit squares.
    ///
    /// No consistency check is made, so hypothetical positions (including
    /// unreachable ones) can be built for analysis.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if `index > 8`.
    pub fn get(&self, index: usize) -> Result<Square, BoardError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfRange { index })
    }

    /// Returns a new board with `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if `index > 8` and
    /// [`BoardError::CellOccupied`] if the square already holds a mark.
    pub fn place(&self, index: usize, player: Player) -> Result<Board, BoardError> {
        match self.get(index)? {
            Square::Empty => {
                let mut next = *self;
                next.squares[index] = Square::Occupied(player);
                Ok(next)
            }
            Square::Occupied(_) => Err(BoardError::CellOccupied { index }),
        }
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Ok(Square::Empty))
    }

    /// Counts the squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| matches!(s, Square::Occupied(_)))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so players can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from_digit((pos + 1) as u32, 10).unwrap_or('?'),
                    Square::Occupied(player) => player.symbol(),
                };
                result.push(' ');
                result.push(symbol);
                result.push(' ');
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses compact notation: `X`, `O` for marks, `.` or `-` for empty.
/// Whitespace, `|` and `/` are ignored, so `"XO./.X./..O"` is accepted.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(BOARD_SIZE);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' => Square::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                found => return Err(BoardError::InvalidNotation { found }),
            };
            squares.push(square);
        }

        let len = squares.len();
        let squares: [Square; BOARD_SIZE] = squares
            .try_into()
            .map_err(|_| BoardError::WrongLength { len })?;
        Ok(Self { squares })
    }
}
