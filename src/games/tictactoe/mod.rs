mod board;
mod coordinate;
pub mod rules;
mod types;

pub use board::{Board, DEFAULT_SIZE, MAX_SIZE};
pub use coordinate::Coordinate;
pub use types::{CellState, GameStatus, Mark, SYMBOLS};
