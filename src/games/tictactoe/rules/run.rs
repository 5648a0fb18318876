//! Line scanning for win detection.

use super::super::{Board, CellState, Coordinate, Mark};
use tracing::instrument;

/// Every scanned line of a `size` board: rows, then columns, then the two
/// main diagonals.
pub fn lines(size: u8) -> impl Iterator<Item = Vec<Coordinate>> {
    let rows = (1..=size).map(move |row| {
        (1..=size)
            .map(|column| Coordinate::unchecked(column, row))
            .collect::<Vec<_>>()
    });
    let columns = (1..=size).map(move |column| {
        (1..=size)
            .map(|row| Coordinate::unchecked(column, row))
            .collect::<Vec<_>>()
    });
    let diagonals = [
        (1..=size).map(|i| Coordinate::unchecked(i, i)).collect::<Vec<_>>(),
        (1..=size)
            .zip((1..=size).rev())
            .map(|(column, row)| Coordinate::unchecked(column, row))
            .collect::<Vec<_>>(),
    ];
    rows.chain(columns).chain(diagonals)
}

/// Checks whether any single line holds `length` or more cells with `mark`.
///
/// Occurrences are tallied along the whole line without resetting, so
/// `X O X` counts two X's. A zero `length` never matches: a line only
/// qualifies once a mark has been counted.
#[instrument(skip(board))]
pub fn contains_run(board: &Board, length: usize, mark: Mark) -> bool {
    if length == 0 {
        return false;
    }
    let target = CellState::Occupied(mark);
    lines(board.size()).any(|line| {
        line.iter()
            .filter(|&&coord| board.at(coord) == Some(target))
            .count()
            >= length
    })
}
