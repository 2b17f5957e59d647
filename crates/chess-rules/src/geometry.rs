//! Per-piece movement shapes.
//!
//! Geometry answers whether a piece could travel from one square to another
//! by its movement pattern alone. It does not look at the side to move, at
//! pieces standing in the way of sliders, or at the safety of the king. The
//! only occupancy it consults is the pawn's, since a pawn's shape depends on
//! what stands on the destination.

use chess_core::{Color, Piece, Square};

use crate::Board;

/// Returns true if `piece` of `color` standing on `from` can reach `to` by
/// its movement shape.
///
/// The two-column king shift used by castling is not part of the king's
/// shape; castling is validated separately.
pub fn can_reach(board: &Board, piece: Piece, color: Color, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta(to);
    if drow == 0 && dcol == 0 {
        return false;
    }

    match piece {
        Piece::Pawn => pawn_can_reach(board, color, from, to),
        Piece::Rook => is_straight(drow, dcol),
        Piece::Bishop => is_diagonal(drow, dcol),
        Piece::Knight => matches!((drow.abs(), dcol.abs()), (1, 2) | (2, 1)),
        Piece::Queen => is_straight(drow, dcol) || is_diagonal(drow, dcol),
        Piece::King => drow.abs() <= 1 && dcol.abs() <= 1,
    }
}

/// Returns true if a pawn on `from` attacks `target`, whether or not
/// anything stands there.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (drow, dcol) = from.delta(target);
    drow == color.pawn_direction() && dcol.abs() == 1
}

/// Returns true if the move is a king shifting two columns along its row.
#[inline]
pub fn is_castling_shape(piece: Piece, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta(to);
    piece == Piece::King && drow == 0 && dcol.abs() == 2
}

#[inline]
fn is_straight(drow: i32, dcol: i32) -> bool {
    (drow == 0) != (dcol == 0)
}

#[inline]
fn is_diagonal(drow: i32, dcol: i32) -> bool {
    drow != 0 && drow.abs() == dcol.abs()
}

fn pawn_can_reach(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dir = color.pawn_direction();
    let (drow, dcol) = from.delta(to);

    if dcol == 0 {
        if drow == dir {
            return board.is_empty(to);
        }
        if drow == 2 * dir && from.row == color.pawn_start_row(board.rows()) {
            return board.is_empty(from.offset(dir, 0)) && board.is_empty(to);
        }
        return false;
    }

    if drow != dir || dcol.abs() != 1 {
        return false;
    }

    match board.piece_at(to) {
        Some(target) => target.color != color,
        None => board.en_passant() == Some(to),
    }
}
