//! Chess rules engine for rectangular boards of any size.
//!
//! This crate provides:
//! - [`Board`] - the grid of pieces, side to move and en passant target
//! - [`geometry`] - per-piece movement shapes
//! - Threat detection ([`Board::is_square_attacked`],
//!   [`Board::is_piece_under_threat`])
//! - Legality ([`Board::is_valid_move`], [`Board::is_valid_castling`])
//! - Execution ([`Board::move_piece`], [`Board::try_move`])
//! - Evaluation ([`Board::score_board`], [`Board::best_next_score`])
//!
//! # Architecture
//!
//! The board owns every piece; pieces hold no reference back to it. Checking
//! whether a move exposes the king plays the move on the board and takes it
//! back, so the checking methods take `&mut Board` and leave it exactly as
//! they found it.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Piece, Square};
//! use chess_rules::Board;
//!
//! let mut board = Board::new(4, 4).unwrap();
//! board.create_piece(Color::White, Piece::King, Square::new(3, 0)).unwrap();
//! board.create_piece(Color::White, Piece::Rook, Square::new(3, 3)).unwrap();
//! board.create_piece(Color::Black, Piece::King, Square::new(0, 3)).unwrap();
//!
//! assert!(board.is_valid_castling(Square::new(3, 0), Square::new(3, 2)));
//! assert!(board.move_piece(Square::new(3, 0), Square::new(3, 2)));
//! println!("{}", board);
//! ```

mod attacks;
mod board;
mod eval;
mod execute;
pub mod geometry;
mod legality;

pub use board::{Board, BoardError, BoardPiece};
pub use eval::MOBILITY_WEIGHT;
pub use execute::MoveError;
