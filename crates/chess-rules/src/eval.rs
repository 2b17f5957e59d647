//! Static evaluation and one-ply lookahead.
//!
//! A side's total is the material value of its pieces plus a mobility term
//! of [`MOBILITY_WEIGHT`] per fully legal destination of each piece.
//! Mobility is counted by asking [`Board::is_valid_move`] about every square
//! for every piece, so a single evaluation runs a king-safety simulation
//! per (piece, square) pair.

use chess_core::{Color, Move, Square};

use crate::Board;

/// Score contributed by each legal destination of a piece.
pub const MOBILITY_WEIGHT: f64 = 0.1;

impl Board {
    /// Returns every square the piece on `from` may legally move to, in
    /// row-major order. Castling destinations are included.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        let squares: Vec<Square> = self.squares().collect();
        squares
            .into_iter()
            .filter(|&to| self.is_valid_move(from, to))
            .collect()
    }

    /// Returns every legal move of the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.squares_of(self.turn) {
            for to in self.legal_destinations(from) {
                if let Some(mv) = self.classify(from, to) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Scores the position from the point of view of the side to move.
    pub fn score_board(&mut self) -> f64 {
        self.score_for(self.turn)
    }

    /// Plays every legal move of the side to move, scores each resulting
    /// position from the mover's point of view and returns the best score.
    ///
    /// Returns [`Board::score_board`] when there is no legal move. The board
    /// is unchanged afterwards.
    pub fn best_next_score(&mut self) -> f64 {
        let mover = self.turn;
        let mut best: Option<f64> = None;

        for mv in self.legal_moves() {
            let Some(score) = self.with_move(mv, |board| board.score_for(mover)) else {
                continue;
            };
            tracing::trace!(%mv, score, "scored candidate");
            best = Some(best.map_or(score, |b| b.max(score)));
        }

        best.unwrap_or_else(|| self.score_board())
    }

    /// Returns `color`'s total minus the opponent's total.
    fn score_for(&mut self, color: Color) -> f64 {
        self.side_total(color) - self.side_total(color.opposite())
    }

    fn side_total(&mut self, color: Color) -> f64 {
        let mut material = 0u32;
        let mut mobility = 0usize;

        for sq in self.squares_of(color) {
            if let Some(piece) = self.piece_at(sq) {
                material += piece.piece.value();
            }
            mobility += self.legal_destinations(sq).len();
        }

        f64::from(material) + MOBILITY_WEIGHT * mobility as f64
    }
}
