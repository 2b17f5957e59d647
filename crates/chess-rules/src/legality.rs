//! Move legality.
//!
//! Legality is layered:
//! 1. [`Board::is_pseudo_legal`] checks bounds, occupancy, piece geometry
//!    and obstruction of sliding pieces.
//! 2. [`Board::leaves_king_in_check`] plays the move on the board, asks
//!    whether the mover's king is attacked, and takes the move back.
//! 3. [`Board::is_valid_castling`] handles the two-column king shift,
//!    which never goes through the first two layers.
//!
//! [`Board::is_valid_move`] combines them. None of these look at the side
//! to move; that is enforced when a move is executed.

use chess_core::{Piece, Square};

use crate::geometry::{can_reach, is_castling_shape};
use crate::Board;

impl Board {
    /// Returns true if the move obeys the piece's shape, does not land on a
    /// piece of the same color and, for sliding pieces, does not pass
    /// through an occupied square.
    ///
    /// Whether the move exposes the mover's king is not considered.
    pub fn is_pseudo_legal(&self, from: Square, to: Square) -> bool {
        if !self.contains(from) || !self.contains(to) || from == to {
            return false;
        }

        let Some(mover) = self.piece_at(from) else {
            return false;
        };

        if self.piece_at(to).is_some_and(|p| p.color == mover.color) {
            return false;
        }

        if !can_reach(self, mover.piece, mover.color, from, to) {
            return false;
        }

        !mover.piece.is_slider() || self.is_path_clear(from, to)
    }

    /// Returns true if playing the move would leave the mover's king
    /// attacked.
    ///
    /// The move is played on the board and taken back before returning, so
    /// the board is unchanged afterwards. The source square must hold a
    /// piece.
    pub fn leaves_king_in_check(&mut self, from: Square, to: Square) -> bool {
        debug_assert!(
            self.piece_at(from).is_some(),
            "leaves_king_in_check called on empty square {from}"
        );
        if !self.contains(to) {
            return false;
        }
        let (Some(mover), Some(mv)) = (self.piece_at(from).copied(), self.classify(from, to))
        else {
            return false;
        };

        self.with_move(mv, |board| {
            let king = if mover.piece == Piece::King {
                Some(to)
            } else {
                board.find_king(mover.color)
            };
            king.is_some_and(|sq| board.is_square_attacked(sq, mover.color.opposite()))
        })
        .unwrap_or(false)
    }

    /// Returns true if the king on `from` may castle to `to`.
    ///
    /// The king shifts two columns toward the rook in the corner of its row
    /// (column 0 or the last column). Both pieces must be unmoved, every
    /// square between them empty, and neither the king's square, the square
    /// it crosses nor its destination may be attacked.
    pub fn is_valid_castling(&self, from: Square, to: Square) -> bool {
        let Some(king) = self.piece_at(from) else {
            return false;
        };
        if !self.contains(to) || !is_castling_shape(king.piece, from, to) || king.has_moved {
            return false;
        }

        let enemy = king.color.opposite();
        if self.is_square_attacked(from, enemy) {
            return false;
        }

        let step = (to.col - from.col).signum();
        let rook_sq = Square::new(from.row, if step > 0 { self.cols() - 1 } else { 0 });
        let rook_ready = self
            .piece_at(rook_sq)
            .is_some_and(|r| r.is(Piece::Rook, king.color) && !r.has_moved);
        if !rook_ready {
            return false;
        }

        let mut sq = from.offset(0, step);
        while sq != rook_sq {
            if !self.is_empty(sq) {
                return false;
            }
            sq = sq.offset(0, step);
        }

        // The rook may sit on the destination on narrow boards.
        if !self.is_empty(to) {
            return false;
        }

        let crossed = from.offset(0, step);
        !self.is_square_attacked(crossed, enemy) && !self.is_square_attacked(to, enemy)
    }

    /// Returns true if the piece on `from` may legally move to `to`,
    /// ignoring whose turn it is.
    pub fn is_valid_move(&mut self, from: Square, to: Square) -> bool {
        if !self.contains(to) {
            return false;
        }
        let Some(mover) = self.piece_at(from) else {
            return false;
        };

        if is_castling_shape(mover.piece, from, to) {
            return self.is_valid_castling(from, to);
        }

        self.is_pseudo_legal(from, to) && !self.leaves_king_in_check(from, to)
    }

    /// Returns true if every square strictly between `from` and `to` is
    /// empty. The squares must share a row, column or diagonal.
    fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let (drow, dcol) = from.delta(to);
        let (srow, scol) = (drow.signum(), dcol.signum());

        let mut sq = from.offset(srow, scol);
        while sq != to {
            if self.piece_at(sq).is_some() {
                return false;
            }
            sq = sq.offset(srow, scol);
        }
        true
    }
}
