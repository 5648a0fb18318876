//! Error types for board access, move application, and configuration.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Error raised by board access and board notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A coordinate component fell outside `1..=size`.
    #[display("Coordinates should be from 1 to {size}! (got {column} {row})")]
    OutOfRange {
        /// Requested column.
        column: i64,
        /// Requested row.
        row: i64,
        /// Board dimension.
        size: u8,
    },

    /// Board dimension outside the supported range.
    #[display("Board size must be from 1 to {max}, got {size}")]
    InvalidSize {
        /// Requested dimension.
        size: u8,
        /// Largest supported dimension.
        max: u8,
    },

    /// Board notation contained a character outside the symbol table.
    #[display("Unknown cell symbol {symbol:?} at index {index}")]
    InvalidSymbol {
        /// Offending character.
        symbol: char,
        /// Zero-based index into the notation string.
        index: usize,
    },

    /// Board notation had the wrong number of cells.
    #[display("Expected {expected} cells, got {got}")]
    InvalidLength {
        /// Cells needed for the board dimension.
        expected: usize,
        /// Cells supplied.
        got: usize,
    },
}

/// Error raised when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The coordinate does not address a cell.
    #[display("{_0}")]
    Board(BoardError),

    /// The addressed cell already holds a mark.
    #[from(ignore)]
    #[display("This cell is occupied! ({column} {row})")]
    CellOccupied {
        /// Column of the occupied cell.
        column: u8,
        /// Row of the occupied cell.
        row: u8,
    },
}

/// Error raised by the interactive console.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[display("Console I/O failed: {_0}")]
    Io(std::io::Error),

    /// Input ended before the game finished.
    #[from(ignore)]
    #[display("Input ended before the game finished")]
    InputClosed,

    /// A validated move was still refused by the session.
    #[display("{_0}")]
    Move(MoveError),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
