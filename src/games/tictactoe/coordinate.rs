//! Board addresses.

use crate::error::BoardError;
use derive_more::Display;
use tracing::instrument;

/// A 1-based `(column, row)` board address.
///
/// Column 1 is the left edge and row 1 the bottom edge, so `(1, N)` is the
/// top-left cell as printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({column}, {row})")]
pub struct Coordinate {
    column: u8,
    row: u8,
}

impl Coordinate {
    /// Creates a coordinate after checking both components lie in `1..=size`.
    ///
    /// Components arrive as wide signed integers because they usually come
    /// straight from user input.
    #[instrument]
    pub fn new(column: i64, row: i64, size: u8) -> Result<Self, BoardError> {
        let in_range = |v: i64| (1..=i64::from(size)).contains(&v);
        if !in_range(column) || !in_range(row) {
            return Err(BoardError::OutOfRange { column, row, size });
        }
        // Both fit in u8 because size does.
        Ok(Self {
            column: column as u8,
            row: row as u8,
        })
    }

    /// Column, counted from the left.
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Row, counted from the bottom.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Checks that this coordinate addresses a cell on a `size` board.
    pub fn check(self, size: u8) -> Result<Self, BoardError> {
        Self::new(i64::from(self.column), i64::from(self.row), size)
    }

    /// Builds a coordinate without range checks.
    ///
    /// Board accessors still reject it if it falls outside the grid.
    pub(crate) const fn unchecked(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}
