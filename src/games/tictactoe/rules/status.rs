//! Outcome evaluation for tic-tac-toe.

use super::super::{Board, CellState, GameStatus, Mark};
use tracing::{debug, instrument};

/// Derives the status of `board` when `required_run` marks in a line win.
///
/// The checks run in a fixed order: mark counts that differ by more than
/// one, then simultaneous winners, then a single winner, then a full board.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn evaluate(board: &Board, required_run: usize) -> GameStatus {
    let x_count = board.count(CellState::Occupied(Mark::X));
    let o_count = board.count(CellState::Occupied(Mark::O));
    if x_count.abs_diff(o_count) > 1 {
        debug!(x_count, o_count, "Mark counts cannot come from alternating play");
        return GameStatus::Impossible;
    }

    let can_win = |mark: Mark, count: usize| count >= required_run && board.has_run(required_run, mark);
    let status = match (can_win(Mark::X, x_count), can_win(Mark::O, o_count)) {
        (true, true) => GameStatus::Impossible,
        (true, false) => GameStatus::XWins,
        (false, true) => GameStatus::OWins,
        (false, false) if board.is_full() => GameStatus::Draw,
        (false, false) => GameStatus::InProgress,
    };

    debug!(%status, "Evaluated board");
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(notation: &str) -> GameStatus {
        evaluate(&notation.parse().unwrap(), 3)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(status_of("_________"), GameStatus::InProgress);
    }

    #[test]
    fn test_top_row_x_wins() {
        assert_eq!(status_of("XXXOO____"), GameStatus::XWins);
    }

    #[test]
    fn test_o_wins_column() {
        assert_eq!(status_of("XOXXO__O_"), GameStatus::OWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(status_of("XOXXOOOXX"), GameStatus::Draw);
    }

    #[test]
    fn test_lopsided_counts_impossible() {
        assert_eq!(status_of("XXX______"), GameStatus::Impossible);
        assert_eq!(status_of("OO_______"), GameStatus::Impossible);
    }

    #[test]
    fn test_two_winners_impossible() {
        assert_eq!(status_of("XXXOOO___"), GameStatus::Impossible);
    }

    #[test]
    fn test_count_gate_blocks_small_boards_of_marks() {
        // Fewer marks than the required run can never win.
        assert_eq!(status_of("X___O____"), GameStatus::InProgress);
    }

    #[test]
    fn test_winner_beats_full_board() {
        assert_eq!(status_of("XXXOOXOXO"), GameStatus::XWins);
    }
}
