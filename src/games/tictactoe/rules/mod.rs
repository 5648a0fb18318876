//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so the session and the console both reach the same verdicts.

pub mod run;
pub mod status;

pub use run::{contains_run, lines};
pub use status::evaluate;
