//! Scenario file parsing.
//!
//! A scenario is a whitespace separated token stream:
//!
//! ```text
//! <expected score> <rows> <cols>
//! <color> <kind> <row> <col>    (repeated)
//! ~
//! <command> [args]              (repeated)
//! ```

use chess_core::{Color, ParseError, Piece, Square};
use chess_rules::{Board, BoardError};
use std::path::{Path, PathBuf};
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

/// Marks the end of the piece list.
const PIECES_END: &str = "~";

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing or malformed header: expected `<score> <rows> <cols>`")]
    MissingHeader,
    #[error("malformed piece line: {0}")]
    PieceLine(String),
    #[error("invalid piece: {0}")]
    Piece(#[from] ParseError),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("malformed arguments for {0}")]
    CommandArgs(&'static str),
    #[error("cannot place piece: {0}")]
    Placement(#[from] BoardError),
}

/// A piece listed in the scenario header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub color: Color,
    pub piece: Piece,
    pub square: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Query legality of every (from, to) pair on the board.
    IsValidScan,
    /// Query threat status of every square on the board.
    UnderThreatScan,
    MovePiece { from: Square, to: Square },
    ScoreBoard,
    BestNextScore,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::IsValidScan => "isValidScan",
            Command::UnderThreatScan => "underThreatScan",
            Command::MovePiece { .. } => "movePiece",
            Command::ScoreBoard => "scoreBoard",
            Command::BestNextScore => "bestNextScore",
        }
    }
}

/// A parsed scenario file.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Score recorded in the header. Informational only.
    pub expected_score: f64,
    pub rows: i32,
    pub cols: i32,
    pub pieces: Vec<Placement>,
    pub commands: Vec<Command>,
}

impl Scenario {
    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Builds the starting board with White to move.
    pub fn build_board(&self) -> Result<Board, ScenarioError> {
        let mut board = Board::new(self.rows, self.cols)?;
        for p in &self.pieces {
            board.create_piece(p.color, p.piece, p.square)?;
        }
        Ok(board)
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let expected_score = header_field(&mut tokens)?;
        let rows = header_field(&mut tokens)?;
        let cols = header_field(&mut tokens)?;

        let mut pieces = Vec::new();
        loop {
            // A missing terminator means the file has no commands.
            let Some(color) = tokens.next() else { break };
            if color == PIECES_END {
                break;
            }
            pieces.push(parse_placement(color, &mut tokens)?);
        }

        let mut commands = Vec::new();
        while let Some(name) = tokens.next() {
            let command = match name {
                "isValidScan" => Command::IsValidScan,
                "underThreatScan" => Command::UnderThreatScan,
                "scoreBoard" => Command::ScoreBoard,
                "bestNextScore" => Command::BestNextScore,
                "movePiece" => {
                    let mut args = [0; 4];
                    for arg in &mut args {
                        *arg = move_arg(&mut tokens)?;
                    }
                    let [from_row, from_col, to_row, to_col] = args;
                    Command::MovePiece {
                        from: Square::new(from_row, from_col),
                        to: Square::new(to_row, to_col),
                    }
                }
                other => return Err(ScenarioError::UnknownCommand(other.to_string())),
            };
            commands.push(command);
        }

        Ok(Scenario {
            expected_score,
            rows,
            cols,
            pieces,
            commands,
        })
    }
}

fn next_number<T: FromStr>(tokens: &mut SplitWhitespace<'_>) -> Option<T> {
    tokens.next()?.parse().ok()
}

fn header_field<T: FromStr>(tokens: &mut SplitWhitespace<'_>) -> Result<T, ScenarioError> {
    next_number(tokens).ok_or(ScenarioError::MissingHeader)
}

fn move_arg(tokens: &mut SplitWhitespace<'_>) -> Result<i32, ScenarioError> {
    next_number(tokens).ok_or(ScenarioError::CommandArgs("movePiece"))
}

fn parse_placement(
    color: &str,
    tokens: &mut SplitWhitespace<'_>,
) -> Result<Placement, ScenarioError> {
    let color: Color = color.parse()?;
    let kind = tokens
        .next()
        .ok_or_else(|| ScenarioError::PieceLine("missing piece kind".to_string()))?;
    let piece: Piece = kind.parse()?;
    match (next_number(tokens), next_number(tokens)) {
        (Some(row), Some(col)) => Ok(Placement {
            color,
            piece,
            square: Square::new(row, col),
        }),
        _ => Err(ScenarioError::PieceLine(format!(
            "{kind} is missing a numeric row and column"
        ))),
    }
}
