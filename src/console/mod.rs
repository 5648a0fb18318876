//! Interactive text console around a [`GameSession`].
//!
//! Input and output are injected, so the same loop runs against stdin and
//! stdout or against in-memory buffers in tests.

mod input;
mod render;

pub use input::{NOT_A_NUMBER, OCCUPIED, PROMPT, Tokens, read_coordinate};
pub use render::render;

use crate::error::ConsoleError;
use crate::games::tictactoe::GameStatus;
use crate::session::GameSession;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Text console bound to an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    tokens: Tokens<R>,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            tokens: Tokens::new(input),
            output,
        }
    }

    /// Plays `session` to completion and returns the final status.
    ///
    /// The board is shown before every move and once more at the end,
    /// followed by the status text.
    #[instrument(skip_all)]
    pub fn play(&mut self, session: &mut GameSession) -> Result<GameStatus, ConsoleError> {
        while !session.status().is_terminal() {
            render(session.board(), &mut self.output)?;
            let coord = read_coordinate(&mut self.tokens, &mut self.output, session)?;
            session.apply_move(coord)?;
        }
        self.report(session)
    }

    /// Shows the board and its status without asking for moves.
    #[instrument(skip_all)]
    pub fn report(&mut self, session: &GameSession) -> Result<GameStatus, ConsoleError> {
        render(session.board(), &mut self.output)?;
        let status = session.status();
        writeln!(self.output, "{status}")?;
        self.output.flush()?;
        info!(%status, "Reported status");
        Ok(status)
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
