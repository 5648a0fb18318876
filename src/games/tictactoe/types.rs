//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first by default).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// State of a single board cell.
///
/// Displays as its entry in [`SYMBOLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CellState {
    /// Nobody has played here.
    #[display("_")]
    Empty,
    /// Cell holds a mark.
    #[display("{_0}")]
    Occupied(Mark),
}

impl CellState {
    /// Display character for this state.
    pub fn symbol(self) -> char {
        SYMBOLS
            .iter()
            .find(|(state, _)| *state == self)
            .map(|(_, symbol)| *symbol)
            .unwrap_or('?')
    }

    /// Looks up the state rendered as `symbol`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        SYMBOLS
            .iter()
            .find(|(_, s)| *s == symbol)
            .map(|(state, _)| *state)
    }
}

impl From<Mark> for CellState {
    fn from(mark: Mark) -> Self {
        CellState::Occupied(mark)
    }
}

/// Symbol table shared by rendering and board notation.
pub const SYMBOLS: [(CellState, char); 3] = [
    (CellState::Empty, '_'),
    (CellState::Occupied(Mark::X), 'X'),
    (CellState::Occupied(Mark::O), 'O'),
];

/// Outcome of evaluating a board.
///
/// The `Display` text is what the console prints once play stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    #[display("Game not finished")]
    InProgress,
    /// Board is full with no winner.
    #[display("Draw")]
    Draw,
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// Board cannot arise from legal alternating play.
    #[display("Impossible")]
    Impossible,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Status naming `mark` as the winner.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => GameStatus::XWins,
            Mark::O => GameStatus::OWins,
        }
    }
}
