//! Move execution and single-move simulation.

use chess_core::{Color, Move, MoveFlag, Piece, Square};
use thiserror::Error;

use crate::geometry::is_castling_shape;
use crate::{Board, BoardPiece};

/// Reasons a move is rejected by [`Board::try_move`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("move {from} -> {to} leaves the board")]
    OutOfBounds { from: Square, to: Square },

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece on {square} belongs to {color}, but it is not {color}'s turn")]
    WrongTurn { square: Square, color: Color },

    #[error("illegal move {from} -> {to}")]
    Illegal { from: Square, to: Square },
}

/// Everything needed to take a move back.
#[derive(Debug, Clone)]
pub(crate) struct Undo {
    mv: Move,
    /// The mover as it stood before the move.
    mover: BoardPiece,
    /// The captured piece, en passant victims included.
    captured: Option<BoardPiece>,
    /// The castling rook as it stood before the move.
    rook: Option<BoardPiece>,
    en_passant: Option<Square>,
    turn: Color,
}

impl Board {
    /// Moves the piece on `from` to `to` if it belongs to the side to move
    /// and the move is legal. Returns false, leaving the board untouched,
    /// otherwise.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        match self.try_move(from, to) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "move rejected");
                false
            }
        }
    }

    /// Moves the piece on `from` to `to`, reporting why the move was
    /// rejected if it was. A rejected move leaves the board untouched.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        if !self.contains(from) || !self.contains(to) {
            return Err(MoveError::OutOfBounds { from, to });
        }

        let mover = self.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        if mover.color != self.turn {
            return Err(MoveError::WrongTurn {
                square: from,
                color: mover.color,
            });
        }

        if !self.is_valid_move(from, to) {
            return Err(MoveError::Illegal { from, to });
        }

        let mv = self
            .classify(from, to)
            .ok_or(MoveError::EmptySquare(from))?;
        self.make_move(mv);
        tracing::debug!(%mv, flag = ?mv.flag(), "move played");
        Ok(mv)
    }

    /// Plays `mv`, runs `f` on the resulting board and takes the move back.
    ///
    /// The board is restored exactly, whatever `f` computes. Returns `None`
    /// without calling `f` if the source square is empty. The side to move
    /// is flipped while `f` runs.
    pub fn with_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        let undo = self.make_move(mv)?;
        let result = f(self);
        self.unmake_move(undo);
        Some(result)
    }

    /// Builds the move from `from` to `to`, flagging castling, en passant,
    /// promotion and pawn double pushes. The move is not validated.
    pub(crate) fn classify(&self, from: Square, to: Square) -> Option<Move> {
        let mover = self.piece_at(from)?;
        let (drow, dcol) = from.delta(to);

        let flag = match mover.piece {
            Piece::King if is_castling_shape(mover.piece, from, to) => {
                if dcol > 0 {
                    MoveFlag::CastleKingside
                } else {
                    MoveFlag::CastleQueenside
                }
            }
            Piece::Pawn if dcol != 0 && self.piece_at(to).is_none() => MoveFlag::EnPassant,
            Piece::Pawn if to.row == mover.color.promotion_row(self.rows()) => MoveFlag::Promotion,
            Piece::Pawn if drow.abs() == 2 => MoveFlag::DoublePush,
            _ => MoveFlag::Normal,
        };

        Some(Move::new(from, to, flag))
    }

    /// Plays a move without validating it.
    pub(crate) fn make_move(&mut self, mv: Move) -> Option<Undo> {
        let (from, to) = (mv.from(), mv.to());
        let mover = self.take(from)?;
        let en_passant = self.en_passant;
        let turn = self.turn;

        let (rook_from, rook_to) = self.castling_rook_squares(mv);
        let rook = if mv.flag().is_castling() && self.is_empty(rook_to) {
            let rook = self.take(rook_from);
            if let Some(mut moved) = rook {
                moved.has_moved = true;
                self.put(rook_to, Some(moved));
            }
            rook
        } else {
            None
        };

        let captured = if mv.flag() == MoveFlag::EnPassant {
            // The target can be claimed with no enemy beside the mover.
            let victim = Square::new(from.row, to.col);
            match self.piece_at(victim) {
                Some(p) if p.color != mover.color => self.take(victim),
                _ => None,
            }
        } else {
            self.take(to)
        };

        let mut moved = mover;
        moved.has_moved = true;
        if mover.piece == Piece::Pawn && to.row == mover.color.promotion_row(self.rows()) {
            moved = BoardPiece::new(Piece::Queen, mover.color, to);
        }
        self.put(to, Some(moved));

        let (drow, _) = from.delta(to);
        self.en_passant = (mover.piece == Piece::Pawn && drow.abs() == 2)
            .then(|| from.offset(mover.color.pawn_direction(), 0));

        self.turn = turn.opposite();

        Some(Undo {
            mv,
            mover,
            captured,
            rook,
            en_passant,
            turn,
        })
    }

    /// Takes back a move played by [`Board::make_move`].
    pub(crate) fn unmake_move(&mut self, undo: Undo) {
        let Undo {
            mv,
            mover,
            captured,
            rook,
            en_passant,
            turn,
        } = undo;

        self.take(mv.to());
        self.put(mover.square, Some(mover));

        if let Some(rook) = rook {
            let (_, rook_to) = self.castling_rook_squares(mv);
            self.take(rook_to);
            self.put(rook.square, Some(rook));
        }

        if let Some(captured) = captured {
            self.put(captured.square, Some(captured));
        }

        self.en_passant = en_passant;
        self.turn = turn;
    }

    /// Returns where the castling rook starts and where it lands. It starts
    /// in the corner of the king's row toward which the king moves, and
    /// lands on the square the king crossed.
    fn castling_rook_squares(&self, mv: Move) -> (Square, Square) {
        let (row, to) = (mv.from().row, mv.to());
        match mv.flag() {
            MoveFlag::CastleQueenside => (Square::new(row, 0), to.offset(0, 1)),
            _ => (Square::new(row, self.cols() - 1), to.offset(0, -1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rows: i32, cols: i32, pieces: &[(Color, Piece, (i32, i32))]) -> Board {
        let mut board = Board::new(rows, cols).unwrap();
        for &(color, piece, sq) in pieces {
            board.create_piece(color, piece, sq.into()).unwrap();
        }
        board
    }

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn classify_flags() {
        let mut board = board_with(
            8,
            8,
            &[
                (Color::White, Piece::King, (7, 4)),
                (Color::White, Piece::Pawn, (6, 0)),
                (Color::White, Piece::Pawn, (1, 3)),
                (Color::White, Piece::Pawn, (3, 5)),
            ],
        );
        board.en_passant = Some(sq(2, 6));

        let flag = |b: &Board, from, to| b.classify(from, to).map(|m| m.flag());
        assert_eq!(flag(&board, sq(7, 4), sq(7, 6)), Some(MoveFlag::CastleKingside));
        assert_eq!(flag(&board, sq(7, 4), sq(7, 2)), Some(MoveFlag::CastleQueenside));
        assert_eq!(flag(&board, sq(7, 4), sq(6, 4)), Some(MoveFlag::Normal));
        assert_eq!(flag(&board, sq(6, 0), sq(4, 0)), Some(MoveFlag::DoublePush));
        assert_eq!(flag(&board, sq(6, 0), sq(5, 0)), Some(MoveFlag::Normal));
        assert_eq!(flag(&board, sq(1, 3), sq(0, 3)), Some(MoveFlag::Promotion));
        assert_eq!(flag(&board, sq(3, 5), sq(2, 6)), Some(MoveFlag::EnPassant));
        assert_eq!(flag(&board, sq(4, 4), sq(3, 4)), None);
    }

    #[test]
    fn simple_move_and_capture() {
        let mut board = board_with(
            4,
            4,
            &[
                (Color::White, Piece::Rook, (3, 0)),
                (Color::Black, Piece::Bishop, (0, 0)),
            ],
        );
        assert!(board.move_piece(sq(3, 0), sq(0, 0)));

        let rook = board.piece_at(sq(0, 0)).unwrap();
        assert!(rook.is(Piece::Rook, Color::White));
        assert!(rook.has_moved);
        assert_eq!(rook.square, sq(0, 0));
        assert!(board.piece_at(sq(3, 0)).is_none());
        assert_eq!(board.pieces().count(), 1);
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn try_move_reports_reason() {
        let mut board = board_with(
            4,
            4,
            &[
                (Color::White, Piece::Rook, (3, 0)),
                (Color::Black, Piece::Rook, (0, 3)),
            ],
        );
        assert_eq!(
            board.try_move(sq(3, 0), sq(4, 0)),
            Err(MoveError::OutOfBounds {
                from: sq(3, 0),
                to: sq(4, 0)
            })
        );
        assert_eq!(
            board.try_move(sq(2, 2), sq(1, 2)),
            Err(MoveError::EmptySquare(sq(2, 2)))
        );
        assert_eq!(
            board.try_move(sq(0, 3), sq(1, 3)),
            Err(MoveError::WrongTurn {
                square: sq(0, 3),
                color: Color::Black
            })
        );
        assert_eq!(
            board.try_move(sq(3, 0), sq(2, 1)),
            Err(MoveError::Illegal {
                from: sq(3, 0),
                to: sq(2, 1)
            })
        );
        assert_eq!(board.try_move(sq(3, 0), sq(2, 0)).map(|m| m.to()), Ok(sq(2, 0)));
    }

    #[test]
    fn rejected_move_leaves_board_untouched() {
        let mut board = board_with(
            4,
            4,
            &[
                (Color::White, Piece::King, (3, 0)),
                (Color::Black, Piece::Rook, (0, 1)),
            ],
        );
        let before = board.clone();
        assert!(!board.move_piece(sq(3, 0), sq(3, 1)));
        assert!(!board.move_piece(sq(0, 1), sq(0, 0)));
        assert!(!board.move_piece(sq(1, 1), sq(2, 2)));
        assert_eq!(board, before);
    }

    #[test]
    fn castling_moves_rook() {
        let mut board = board_with(
            8,
            8,
            &[
                (Color::White, Piece::King, (7, 4)),
                (Color::White, Piece::Rook, (7, 0)),
                (Color::White, Piece::Rook, (7, 7)),
            ],
        );
        assert!(board.move_piece(sq(7, 4), sq(7, 2)));

        assert!(board.piece_at(sq(7, 2)).unwrap().is(Piece::King, Color::White));
        let rook = board.piece_at(sq(7, 3)).unwrap();
        assert!(rook.is(Piece::Rook, Color::White));
        assert!(rook.has_moved);
        assert!(board.piece_at(sq(7, 0)).is_none());
        assert!(board.piece_at(sq(7, 4)).is_none());
        assert!(!board.piece_at(sq(7, 7)).unwrap().has_moved);
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut board = board_with(
            6,
            6,
            &[
                (Color::White, Piece::Pawn, (4, 2)),
                (Color::Black, Piece::Pawn, (1, 3)),
            ],
        );
        assert!(board.move_piece(sq(4, 2), sq(2, 2)));
        assert_eq!(board.en_passant(), Some(sq(3, 2)));

        assert!(board.move_piece(sq(1, 3), sq(2, 3)));
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn en_passant_removes_victim() {
        let mut board = board_with(
            6,
            6,
            &[
                (Color::White, Piece::Pawn, (4, 2)),
                (Color::Black, Piece::Pawn, (2, 3)),
            ],
        );
        assert!(board.move_piece(sq(4, 2), sq(2, 2)));
        assert!(board.move_piece(sq(2, 3), sq(3, 2)));

        assert!(board.piece_at(sq(2, 2)).is_none());
        assert!(board.piece_at(sq(3, 2)).unwrap().is(Piece::Pawn, Color::Black));
        assert_eq!(board.pieces().count(), 1);
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn en_passant_target_taken_by_neighbour_of_same_side() {
        let mut board = board_with(
            8,
            8,
            &[
                (Color::White, Piece::Pawn, (6, 4)),
                (Color::White, Piece::Pawn, (6, 5)),
                (Color::White, Piece::King, (7, 0)),
                (Color::Black, Piece::King, (0, 0)),
            ],
        );
        assert!(board.move_piece(sq(6, 4), sq(4, 4)));
        assert_eq!(board.en_passant(), Some(sq(5, 4)));
        assert!(board.is_valid_move(sq(6, 5), sq(5, 4)));
        assert!(board.legal_destinations(sq(6, 5)).contains(&sq(5, 4)));

        // Played out of turn through the simulator: nothing but the mover moves.
        let mv = board.classify(sq(6, 5), sq(5, 4)).unwrap();
        assert_eq!(mv.flag(), MoveFlag::EnPassant);
        let before = board.clone();
        let count = board.with_move(mv, |b| b.pieces().count()).unwrap();
        assert_eq!(count, 4);
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_never_removes_own_piece() {
        let mut board = board_with(
            8,
            8,
            &[
                (Color::White, Piece::Pawn, (6, 5)),
                (Color::White, Piece::Knight, (6, 4)),
                (Color::Black, Piece::King, (0, 0)),
            ],
        );
        board.en_passant = Some(sq(5, 4));
        assert!(board.move_piece(sq(6, 5), sq(5, 4)));

        assert!(board.piece_at(sq(6, 4)).unwrap().is(Piece::Knight, Color::White));
        assert!(board.piece_at(sq(5, 4)).unwrap().is(Piece::Pawn, Color::White));
        assert_eq!(board.pieces().count(), 3);
    }

    #[test]
    fn pawn_promotes_to_queen() {
        let mut board = board_with(
            4,
            4,
            &[
                (Color::White, Piece::Pawn, (1, 1)),
                (Color::Black, Piece::Pawn, (2, 3)),
            ],
        );
        assert!(board.move_piece(sq(1, 1), sq(0, 1)));
        let queen = board.piece_at(sq(0, 1)).unwrap();
        assert!(queen.is(Piece::Queen, Color::White));
        assert_eq!(queen.square, sq(0, 1));

        assert!(board.move_piece(sq(2, 3), sq(3, 3)));
        assert!(board.piece_at(sq(3, 3)).unwrap().is(Piece::Queen, Color::Black));
    }

    #[test]
    fn make_unmake_roundtrip() {
        let mut board = board_with(
            8,
            8,
            &[
                (Color::White, Piece::King, (7, 4)),
                (Color::White, Piece::Rook, (7, 7)),
                (Color::White, Piece::Pawn, (1, 0)),
                (Color::White, Piece::Pawn, (3, 4)),
                (Color::Black, Piece::Pawn, (3, 5)),
                (Color::Black, Piece::Knight, (0, 1)),
            ],
        );
        board.en_passant = Some(sq(2, 5));
        let before = board.clone();

        for (from, to) in [
            (sq(7, 4), sq(7, 6)),
            (sq(1, 0), sq(0, 1)),
            (sq(1, 0), sq(0, 0)),
            (sq(3, 4), sq(2, 5)),
            (sq(7, 7), sq(3, 7)),
        ] {
            let mv = board.classify(from, to).unwrap();
            let changed = board.with_move(mv, |b| b.clone()).unwrap();
            assert_ne!(changed, before);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn with_move_on_empty_square() {
        let mut board = board_with(4, 4, &[]);
        let mv = Move::normal(sq(0, 0), sq(1, 1));
        assert_eq!(board.with_move(mv, |_| 1), None);
    }
}
