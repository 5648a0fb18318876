//! Coordinate entry from a line-oriented input stream.

use crate::error::ConsoleError;
use crate::games::tictactoe::Coordinate;
use crate::session::GameSession;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, instrument, warn};

/// Prompt shown before each coordinate pair.
pub const PROMPT: &str = "Enter the coordinates: ";

/// Message for input that is not an integer.
pub const NOT_A_NUMBER: &str = "You should enter numbers!";

/// Message for a cell that already holds a mark.
pub const OCCUPIED: &str = "This cell is occupied! Choose another one!";

/// Splits an input stream into whitespace-separated tokens.
///
/// Tokens may span lines: `1` on one line and `3` on the next form a pair.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, reading more lines as needed.
    pub fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads the next token as an integer.
    ///
    /// Returns `Ok(None)` for a non-numeric token and drops whatever else
    /// was typed on that line. Numbers too large for `i64` saturate, so
    /// they still read as out of range rather than as non-numeric.
    pub fn next_integer(&mut self) -> Result<Option<i64>, ConsoleError> {
        let token = self.next_token()?;
        match token.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Some(i64::MAX)),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(Some(i64::MIN)),
            Err(_) => {
                debug!(%token, "Discarding non-numeric input");
                self.pending.clear();
                Ok(None)
            }
        }
    }
}

/// Prompts until the user names an empty cell on the session's board.
///
/// Out-of-range, non-numeric, and occupied entries are reported on `out`
/// and the prompt repeats.
#[instrument(skip_all, fields(mark = %session.current_mark()))]
pub fn read_coordinate<R: BufRead>(
    tokens: &mut Tokens<R>,
    out: &mut impl Write,
    session: &GameSession,
) -> Result<Coordinate, ConsoleError> {
    let size = session.board().size();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(column) = tokens.next_integer()? else {
            writeln!(out, "{NOT_A_NUMBER}")?;
            continue;
        };
        let Some(row) = tokens.next_integer()? else {
            writeln!(out, "{NOT_A_NUMBER}")?;
            continue;
        };

        let coord = match Coordinate::new(column, row, size) {
            Ok(coord) => coord,
            Err(e) => {
                warn!(error = %e, "Coordinate out of range");
                writeln!(out, "Coordinates should be from 1 to {size}!")?;
                continue;
            }
        };

        if !session.can_occupy(coord) {
            warn!(%coord, "Cell already occupied");
            writeln!(out, "{OCCUPIED}")?;
            continue;
        }

        debug!(%coord, "Read coordinate");
        return Ok(coord);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;
    use std::io::Cursor;

    fn read(input: &str, session: &GameSession) -> (Result<Coordinate, ConsoleError>, String) {
        let mut tokens = Tokens::new(Cursor::new(input.to_string()));
        let mut out = Vec::new();
        let result = read_coordinate(&mut tokens, &mut out, session);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut tokens = Tokens::new(Cursor::new("1\n  3 \n"));
        assert_eq!(tokens.next_token().unwrap(), "1");
        assert_eq!(tokens.next_token().unwrap(), "3");
        assert!(matches!(tokens.next_token(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_reads_valid_pair() {
        let (coord, out) = read("2 3\n", &GameSession::default());
        assert_eq!(coord.unwrap(), Coordinate::new(2, 3, 3).unwrap());
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn test_reprompts_on_range_error() {
        let (coord, out) = read("0 1\n4 2\n1 1\n", &GameSession::default());
        assert_eq!(coord.unwrap(), Coordinate::new(1, 1, 3).unwrap());
        assert_eq!(out.matches("Coordinates should be from 1 to 3!").count(), 2);
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[test]
    fn test_reprompts_on_non_numeric() {
        let (coord, out) = read("one two\n3 3\n", &GameSession::default());
        assert_eq!(coord.unwrap(), Coordinate::new(3, 3, 3).unwrap());
        assert!(out.contains(NOT_A_NUMBER));
    }

    #[test]
    fn test_huge_numbers_are_out_of_range() {
        let input = "99999999999999999999 1\n-99999999999999999999 2\n2 2\n";
        let (coord, out) = read(input, &GameSession::default());
        assert_eq!(coord.unwrap(), Coordinate::new(2, 2, 3).unwrap());
        assert_eq!(out.matches("Coordinates should be from 1 to 3!").count(), 2);
        assert!(!out.contains(NOT_A_NUMBER));
    }

    #[test]
    fn test_reprompts_on_occupied() {
        let board = "____X____".parse().unwrap();
        let session = GameSession::with_board(board, 3, Mark::O);
        let (coord, out) = read("2 2\n1 2\n", &session);
        assert_eq!(coord.unwrap(), Coordinate::new(1, 2, 3).unwrap());
        assert!(out.contains(OCCUPIED));
    }

    #[test]
    fn test_closed_input() {
        let (coord, _) = read("1\n", &GameSession::default());
        assert!(matches!(coord, Err(ConsoleError::InputClosed)));
    }
}
