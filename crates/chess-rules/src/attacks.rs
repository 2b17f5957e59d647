//! Threat detection.

use chess_core::{Color, Piece, Square};

use crate::geometry::pawn_attacks;
use crate::Board;

impl Board {
    /// Returns true if any piece of `by` attacks the given square.
    ///
    /// Pawns attack both forward diagonals whether or not the square is
    /// occupied, which differs from where they may move. Every other piece
    /// attacks the squares it could move to, obstruction included.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        if !self.contains(target) {
            return false;
        }

        self.pieces()
            .filter(|p| p.color == by)
            .any(|p| match p.piece {
                Piece::Pawn => pawn_attacks(by, p.square, target),
                _ => self.is_pseudo_legal(p.square, target),
            })
    }

    /// Returns true if the piece on the square is attacked by the opposing
    /// side. Empty and off-board squares are never under threat.
    pub fn is_piece_under_threat(&self, sq: Square) -> bool {
        match self.piece_at(sq) {
            Some(p) => self.is_square_attacked(sq, p.color.opposite()),
            None => false,
        }
    }

    /// Returns true if the king of the given color is attacked.
    ///
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opposite()))
    }
}
