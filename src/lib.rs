//! Strictly Console - two-player tic-tac-toe rules engine with a text shell
//!
//! Two people take turns entering coordinates for X and O; the engine
//! tracks the board, rejects illegal moves, and reports the outcome.
//!
//! # Architecture
//!
//! - **Games**: board storage, coordinates, and pure rule evaluation
//! - **Session**: turn order and move application over one board
//! - **Console**: prompt/render loop over injected input and output streams
//! - **Config**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use strictly_console::{Coordinate, GameSession, GameStatus};
//!
//! # fn example() -> Result<(), strictly_console::MoveError> {
//! let mut session = GameSession::new(3, 3)?;
//! session.apply_move(Coordinate::new(2, 2, 3)?)?;
//! assert_eq!(session.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod error;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::GameConfig;

// Crate-level exports - Console shell
pub use console::{Console, NOT_A_NUMBER, OCCUPIED, PROMPT, Tokens, read_coordinate, render};

// Crate-level exports - Errors
pub use error::{BoardError, ConfigError, ConsoleError, MoveError};

// Crate-level exports - Session
pub use session::GameSession;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CellState, Coordinate, DEFAULT_SIZE, GameStatus, MAX_SIZE, Mark, SYMBOLS, rules,
};
