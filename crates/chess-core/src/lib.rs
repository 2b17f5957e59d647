//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rules engine and
//! the scenario runner:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates on boards of any size
//! - [`Move`] and [`MoveFlag`] for move representation
//! - Text parsing of colors and piece kinds

mod color;
mod mov;
mod parse;
mod piece;
mod square;

pub use color::Color;
pub use mov::{Move, MoveFlag};
pub use parse::ParseError;
pub use piece::Piece;
pub use square::Square;
