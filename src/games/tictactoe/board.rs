//! Square grid storage for tic-tac-toe.

use super::coordinate::Coordinate;
use super::rules;
use super::types::{CellState, Mark};
use crate::error::BoardError;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Dimension of the classic board.
pub const DEFAULT_SIZE: u8 = 3;

/// Largest dimension the console and notation support (single-digit input).
pub const MAX_SIZE: u8 = 9;

/// N×N tic-tac-toe board.
///
/// Cells are stored row-major starting from the top printed row, so index 0
/// is coordinate `(1, N)`. The dimension never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] unless `size` is in `1..=MAX_SIZE`.
    #[instrument]
    pub fn new(size: u8) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self::empty(size))
    }

    fn empty(size: u8) -> Self {
        let len = usize::from(size) * usize::from(size);
        Self {
            size,
            cells: vec![CellState::Empty; len],
        }
    }

    /// Parses board notation: `size * size` symbols, top row first.
    ///
    /// `"XO_______"` on a 3×3 board puts X at `(1, 3)` and O at `(2, 3)`.
    #[instrument]
    pub fn from_cells(notation: &str, size: u8) -> Result<Self, BoardError> {
        check_size(size)?;
        let expected = usize::from(size) * usize::from(size);
        let got = notation.chars().count();
        if got != expected {
            return Err(BoardError::InvalidLength { expected, got });
        }

        let cells = notation
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                CellState::from_symbol(symbol).ok_or(BoardError::InvalidSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(size, "Parsed board notation");
        Ok(Self { size, cells })
    }

    /// Board dimension N.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// All cells, top printed row first.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Returns the state of the addressed cell.
    pub fn get(&self, coord: Coordinate) -> Result<CellState, BoardError> {
        let index = self.index(coord)?;
        Ok(self.cells[index])
    }

    /// Overwrites the addressed cell.
    ///
    /// No occupancy check happens here; callers decide whether the write is
    /// legal.
    #[instrument(skip(self, state), fields(coord = %coord))]
    pub fn set(&mut self, coord: Coordinate, state: impl Into<CellState>) -> Result<(), BoardError> {
        let index = self.index(coord)?;
        self.cells[index] = state.into();
        Ok(())
    }

    /// Checks if the addressed cell is empty.
    pub fn is_empty(&self, coord: Coordinate) -> Result<bool, BoardError> {
        Ok(self.get(coord)? == CellState::Empty)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Checks whether some row, column, or main diagonal holds at least
    /// `length` cells marked `mark`.
    ///
    /// Marks are counted anywhere along the line; they need not be adjacent.
    #[instrument(skip(self))]
    pub fn has_run(&self, length: usize, mark: Mark) -> bool {
        rules::contains_run(self, length, mark)
    }

    /// Checks if the board has no empty cells left.
    pub fn is_full(&self) -> bool {
        self.count(CellState::Empty) == 0
    }

    /// Coordinates of every empty cell, top printed row first.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = usize::from(self.size);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CellState::Empty)
            .map(move |(index, _)| {
                let column = (index % size + 1) as u8;
                let row = (size - index / size) as u8;
                Coordinate::unchecked(column, row)
            })
    }

    /// Renders the board back into notation accepted by [`Board::from_cells`].
    pub fn to_notation(&self) -> String {
        self.cells.iter().map(|s| s.symbol()).collect()
    }

    /// Cell lookup for coordinates produced by the rules scanner.
    pub(crate) fn at(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).ok().map(|i| self.cells[i])
    }

    fn index(&self, coord: Coordinate) -> Result<usize, BoardError> {
        let coord = coord.check(self.size)?;
        let size = usize::from(self.size);
        let row_from_top = size - usize::from(coord.row());
        Ok(row_from_top * size + usize::from(coord.column()) - 1)
    }
}

fn check_size(size: u8) -> Result<(), BoardError> {
    if (1..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::InvalidSize {
            size,
            max: MAX_SIZE,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_SIZE)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses notation for a board of [`DEFAULT_SIZE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cells(s, DEFAULT_SIZE)
    }
}
