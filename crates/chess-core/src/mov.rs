//! Moves between two squares.

use crate::Square;
use std::fmt;

/// What kind of move a [`Move`] is, beyond relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    /// Plain relocation, capturing whatever stands on the destination.
    Normal,
    /// Pawn advancing two rows from its start row.
    DoublePush,
    /// King shifting two columns toward the last column, rook following.
    CastleKingside,
    /// King shifting two columns toward column 0, rook following.
    CastleQueenside,
    /// Pawn capturing the double-pushed pawn beside it.
    EnPassant,
    /// Pawn reaching its promotion row and becoming a queen.
    Promotion,
}

impl MoveFlag {
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }
}

/// A move from one square to another.
///
/// A move carries no piece; it is interpreted against the board it is
/// played on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    flag: MoveFlag,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move { from, to, flag }
    }

    /// Shorthand for a [`MoveFlag::Normal`] move.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveFlag::Normal)
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn flag(self) -> MoveFlag {
        self.flag
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}, {:?})", self.flag)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
