//! The two sides and the board edges they play from.

use std::fmt;

/// A side in the game.
///
/// Rows are numbered from Black's edge: Black's pawns start next to row 0
/// and march toward the last row, White's march the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row from which this side's pawns may double-push on a board with
    /// `rows` rows.
    #[inline]
    pub const fn pawn_start_row(self, rows: i32) -> i32 {
        match self {
            Color::White => rows - 2,
            Color::Black => 1,
        }
    }

    /// Far row for this side's pawns, where they become queens.
    #[inline]
    pub const fn promotion_row(self, rows: i32) -> i32 {
        self.opposite().home_row(rows)
    }

    /// Edge row this side's pieces start from.
    #[inline]
    pub const fn home_row(self, rows: i32) -> i32 {
        match self {
            Color::White => rows - 1,
            Color::Black => 0,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
