//! Text parsing for colors and piece kinds.

use std::str::FromStr;

use thiserror::Error;

use crate::{Color, Piece};

/// Errors that can occur when parsing colors or pieces from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty color token")]
    EmptyColor,

    #[error("invalid piece: expected one of p, n, b, r, q, k, got '{0}'")]
    InvalidPiece(String),
}

impl FromStr for Color {
    type Err = ParseError;

    /// Tokens starting with `w` or `W` are White; any other non-empty token
    /// is Black.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some('w') | Some('W') => Ok(Color::White),
            Some(_) => Ok(Color::Black),
            None => Err(ParseError::EmptyColor),
        }
    }
}

impl FromStr for Piece {
    type Err = ParseError;

    /// Only the first character is significant, so `k` and `King` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .next()
            .and_then(Piece::from_char)
            .ok_or_else(|| ParseError::InvalidPiece(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color() {
        assert_eq!("w".parse::<Color>(), Ok(Color::White));
        assert_eq!("White".parse::<Color>(), Ok(Color::White));
        assert_eq!("b".parse::<Color>(), Ok(Color::Black));
        assert_eq!("x".parse::<Color>(), Ok(Color::Black));
        assert_eq!("".parse::<Color>(), Err(ParseError::EmptyColor));
    }

    #[test]
    fn parse_piece() {
        assert_eq!("p".parse::<Piece>(), Ok(Piece::Pawn));
        assert_eq!("Rook".parse::<Piece>(), Ok(Piece::Rook));
        assert_eq!("q".parse::<Piece>(), Ok(Piece::Queen));
        assert_eq!(
            "z".parse::<Piece>(),
            Err(ParseError::InvalidPiece("z".to_string()))
        );
        assert_eq!(
            "".parse::<Piece>(),
            Err(ParseError::InvalidPiece(String::new()))
        );
    }
}
