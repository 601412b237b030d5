//! Error types for board access and move selection.

/// Error that can occur when reading or placing on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The index does not name one of the 9 squares.
    #[display("Index {index} is outside the board (0-8)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },

    /// The square at the index already holds a mark.
    #[display("Square {index} is already occupied")]
    CellOccupied {
        /// The occupied index.
        index: usize,
    },

    /// Board notation contained a character that is not a mark.
    #[display("Unexpected character {found:?} in board notation")]
    InvalidNotation {
        /// The rejected character.
        found: char,
    },

    /// Board notation did not describe exactly 9 squares.
    #[display("Board notation has {len} squares, expected 9")]
    WrongLength {
        /// Number of squares found.
        len: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error that can occur when asking the engine for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The board is full, so there is nothing to choose from.
    #[display("No legal moves on a full board")]
    NoLegalMoves,
}

impl std::error::Error for EngineError {}
