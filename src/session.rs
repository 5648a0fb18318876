//! Turn-by-turn game session.

use crate::config::GameConfig;
use crate::error::{BoardError, MoveError};
use crate::games::tictactoe::{Board, Coordinate, DEFAULT_SIZE, GameStatus, Mark, rules};
use tracing::{debug, info, instrument, warn};

/// A single game: the board, the winning run length, and whose turn it is.
///
/// Status is never cached; every call to [`GameSession::status`] derives it
/// from the board, so sessions built from loaded boards report the same
/// verdicts as sessions built move by move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    required_run: usize,
    current_mark: Mark,
}

impl GameSession {
    /// Starts a game on an empty board with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if the board cannot be built.
    #[instrument]
    pub fn new(size: u8, required_run: usize) -> Result<Self, BoardError> {
        let board = Board::new(size)?;
        info!(size, required_run, "Starting new game session");
        Ok(Self {
            board,
            required_run,
            current_mark: Mark::X,
        })
    }

    /// Starts a game described by a configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        let mut session = Self::new(*config.size(), usize::from(config.required_run()))?;
        session.current_mark = *config.first_mark();
        Ok(session)
    }

    /// Wraps an existing board, for positions loaded from notation.
    #[instrument(skip(board), fields(board = %board.to_notation()))]
    pub fn with_board(board: Board, required_run: usize, current_mark: Mark) -> Self {
        Self {
            board,
            required_run,
            current_mark,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marks in one line needed to win.
    pub fn required_run(&self) -> usize {
        self.required_run
    }

    /// Mark that moves next.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Checks if the addressed cell is on the board and empty.
    pub fn can_occupy(&self, coord: Coordinate) -> bool {
        self.board.is_empty(coord).unwrap_or(false)
    }

    /// Places the current mark at `coord` and hands the turn over.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the cell already holds a mark
    /// and [`MoveError::Board`] if the coordinate is off the board. The
    /// session is unchanged on error.
    #[instrument(skip(self), fields(mark = %self.current_mark, coord = %coord))]
    pub fn apply_move(&mut self, coord: Coordinate) -> Result<(), MoveError> {
        if !self.board.is_empty(coord)? {
            warn!("Cell already occupied");
            return Err(MoveError::CellOccupied {
                column: coord.column(),
                row: coord.row(),
            });
        }

        self.board.set(coord, self.current_mark)?;
        self.current_mark = self.current_mark.opponent();
        debug!(next = %self.current_mark, "Move applied");
        Ok(())
    }

    /// Derives the game status from the current board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board, self.required_run)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_board(Board::default(), usize::from(DEFAULT_SIZE), Mark::X)
    }
}
