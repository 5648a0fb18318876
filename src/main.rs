//! Strictly Console - Unified CLI
//!
//! Two-player tic-tac-toe on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use std::io;
use strictly_console::{Board, Console, GameConfig, GameSession};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Play {
        game: GameArgs::default(),
    }) {
        Command::Play { game } => run_play(&game),
        Command::Evaluate { cells, game } => run_evaluate(&cells, &game),
    }
}

/// Sends logs to stderr so stdout carries only the game.
fn initialize_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game
#[instrument(skip_all)]
fn run_play(args: &GameArgs) -> Result<()> {
    let config = load_config(args)?;
    let mut session = GameSession::from_config(&config)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    let status = console.play(&mut session)?;

    info!(%status, "Game finished");
    Ok(())
}

/// Print the status of a board given in notation
#[instrument(skip_all, fields(cells = %cells))]
fn run_evaluate(cells: &str, args: &GameArgs) -> Result<()> {
    let config = load_config(args)?;
    let board = Board::from_cells(cells.trim(), *config.size())
        .with_context(|| format!("Invalid board notation {:?}", cells))?;
    let session = GameSession::with_board(
        board,
        usize::from(config.required_run()),
        *config.first_mark(),
    );

    let mut console = Console::new(io::empty(), io::stdout().lock());
    console.report(&session)?;
    Ok(())
}

#[instrument(skip(args))]
fn load_config(args: &GameArgs) -> Result<GameConfig> {
    let base = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            GameConfig::default()
        }
    };
    let config = base.with_overrides(args.size, args.required_run, args.first)?;
    info!(
        size = *config.size(),
        required_run = config.required_run(),
        first_mark = %config.first_mark(),
        "Game configured"
    );
    Ok(config)
}
