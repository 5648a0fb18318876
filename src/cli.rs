//! Command-line interface for strictly_console.

use clap::{Args, Parser, Subcommand};
use strictly_console::Mark;

/// Strictly Console - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_console")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Board and rule settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Print the status of a board given in notation
    Evaluate {
        /// Cells row by row from the top, using `X`, `O` and `_`
        #[arg(short, long)]
        cells: String,

        /// Board and rule settings
        #[command(flatten)]
        game: GameArgs,
    },
}

/// Settings shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub struct GameArgs {
    /// Path to a TOML game config
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Board dimension N
    #[arg(short, long)]
    pub size: Option<u8>,

    /// Marks in one line needed to win (defaults to N)
    #[arg(short, long)]
    pub required_run: Option<u8>,

    /// Mark that moves first (X or O)
    #[arg(short, long)]
    pub first: Option<Mark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["strictly_console"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_evaluate_args() {
        let cli = Cli::try_parse_from([
            "strictly_console",
            "evaluate",
            "--cells",
            "XXXOO____",
            "--first",
            "o",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Command::Evaluate { cells, game }) => {
                assert_eq!(cells, "XXXOO____");
                assert_eq!(game.first, Some(Mark::O));
                assert_eq!(game.size, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_play_overrides() {
        let cli =
            Cli::try_parse_from(["strictly_console", "play", "--size", "4", "-r", "3"]).unwrap();
        match cli.command {
            Some(Command::Play { game }) => {
                assert_eq!(game.size, Some(4));
                assert_eq!(game.required_run, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
