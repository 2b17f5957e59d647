//! Executes scenario commands against a board.

use crate::config::{RunnerConfig, SuiteRange};
use crate::scenario::{Command, Scenario, ScenarioError};
use chess_core::Square;
use chess_rules::Board;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Outcome of running one scenario.
#[derive(Debug, Clone)]
pub struct Report {
    /// One line per command, in order.
    pub lines: Vec<String>,
    /// Final board state.
    pub board: Board,
}

/// Runs every command of a scenario on a fresh board.
pub fn run_scenario(scenario: &Scenario) -> Result<Report, ScenarioError> {
    let mut board = scenario.build_board()?;
    info!(
        rows = scenario.rows,
        cols = scenario.cols,
        pieces = scenario.pieces.len(),
        expected_score = scenario.expected_score,
        "board ready"
    );

    let lines = scenario
        .commands
        .iter()
        .map(|command| execute(&mut board, command))
        .collect();

    Ok(Report { lines, board })
}

/// Runs a single command and formats its report line.
pub fn execute(board: &mut Board, command: &Command) -> String {
    let name = command.name();
    match *command {
        Command::IsValidScan => {
            let squares: Vec<Square> = board.squares().collect();
            for &from in &squares {
                for &to in &squares {
                    board.is_valid_move(from, to);
                }
            }
            format!("[OK] {name}")
        }
        Command::UnderThreatScan => {
            for sq in board.squares().collect::<Vec<_>>() {
                board.is_piece_under_threat(sq);
            }
            format!("[OK] {name}")
        }
        Command::MovePiece { from, to } => {
            if board.move_piece(from, to) {
                format!("[OK] {name}")
            } else {
                format!("[FAIL] {name}")
            }
        }
        Command::ScoreBoard => format!("[OK] {name} {:.1}", board.score_board()),
        Command::BestNextScore => format!("[OK] {name} {:.1}", board.best_next_score()),
    }
}

/// Loads and runs a scenario file.
pub fn run_file(path: &Path) -> Result<Report, ScenarioError> {
    info!(path = %path.display(), "running scenario");
    let scenario = Scenario::load(path)?;
    run_scenario(&scenario)
}

/// Runs every scenario of a suite, in order. A failing file does not stop
/// the suite.
pub fn run_suite(
    config: &RunnerConfig,
    dir: &Path,
    size: &str,
    range: SuiteRange,
) -> Vec<(PathBuf, Result<Report, ScenarioError>)> {
    range
        .iter()
        .map(|number| {
            let path = config.scenario_path(dir, size, number);
            let result = run_file(&path);
            if let Err(e) = &result {
                error!(path = %path.display(), error = %e, "scenario failed");
            }
            (path, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Piece};

    fn board_with(pieces: &[(Color, Piece, (i32, i32))]) -> Board {
        let mut board = Board::new(4, 4).unwrap();
        for &(color, piece, sq) in pieces {
            board.create_piece(color, piece, sq.into()).unwrap();
        }
        board
    }

    fn move_command(from: (i32, i32), to: (i32, i32)) -> Command {
        Command::MovePiece {
            from: from.into(),
            to: to.into(),
        }
    }

    #[test]
    fn scans_leave_board_unchanged() {
        let mut board = board_with(&[
            (Color::White, Piece::King, (3, 2)),
            (Color::White, Piece::Rook, (3, 3)),
            (Color::Black, Piece::Queen, (0, 0)),
        ]);
        let before = board.clone();

        let valid = execute(&mut board, &Command::IsValidScan);
        assert_eq!(valid, "[OK] isValidScan");
        let threat = execute(&mut board, &Command::UnderThreatScan);
        assert_eq!(threat, "[OK] underThreatScan");
        assert_eq!(board, before);
    }

    #[test]
    fn move_piece_reports_ok_and_fail() {
        let mut board = board_with(&[
            (Color::White, Piece::King, (3, 0)),
            (Color::Black, Piece::King, (0, 3)),
        ]);

        let legal = move_command((3, 0), (2, 0));
        assert_eq!(execute(&mut board, &legal), "[OK] movePiece");

        // White already moved, so this is the wrong side.
        let again = move_command((2, 0), (1, 0));
        assert_eq!(execute(&mut board, &again), "[FAIL] movePiece");
    }

    #[test]
    fn score_lines_use_one_decimal() {
        let mut board = board_with(&[
            (Color::White, Piece::King, (3, 0)),
            (Color::Black, Piece::King, (0, 3)),
        ]);
        // Both kings have three destinations in their corners.
        let score = execute(&mut board, &Command::ScoreBoard);
        assert_eq!(score, "[OK] scoreBoard 0.0");
        let best = execute(&mut board, &Command::BestNextScore);
        assert!(best.starts_with("[OK] bestNextScore "));
    }

    #[test]
    fn run_scenario_collects_lines() {
        let scenario: Scenario = "0 4 4 w k 3 0 b k 0 3 ~ movePiece 3 0 2 0 scoreBoard"
            .parse()
            .unwrap();
        let report = run_scenario(&scenario).unwrap();
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0], "[OK] movePiece");
        assert_eq!(report.board.turn(), Color::Black);
        assert!(report.board.piece_at(Square::new(2, 0)).is_some());
    }
}
