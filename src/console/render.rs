//! Text rendering of the board.

use crate::games::tictactoe::{Board, Coordinate};
use std::io::{self, Write};

/// Writes the board framed by dashed borders, top row first.
///
/// ```text
/// ---------
/// | X _ O |
/// | _ X _ |
/// | _ _ _ |
/// ---------
/// ```
pub fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let size = board.size();
    let border = "-".repeat(usize::from(size) * 2 + 3);

    writeln!(out, "{border}")?;
    for row in (1..=size).rev() {
        write!(out, "| ")?;
        for column in 1..=size {
            // Every (column, row) here lies on the board.
            let cell = board
                .get(Coordinate::unchecked(column, row))
                .map_err(io::Error::other)?;
            write!(out, "{} ", cell.symbol())?;
        }
        writeln!(out, "|")?;
    }
    writeln!(out, "{border}")
}
