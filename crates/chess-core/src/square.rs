//! Board square representation.

use std::fmt;

/// A square on a rectangular board, addressed by row and column.
///
/// Coordinates are signed so that off-board squares can be expressed; a
/// board decides whether a square lies within its bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    /// Creates a square from row and column.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    /// Returns the square displaced by the given row and column deltas.
    ///
    /// Arithmetic wraps, so extreme off-board squares never panic.
    #[inline]
    pub const fn offset(self, drow: i32, dcol: i32) -> Self {
        Square::new(self.row.wrapping_add(drow), self.col.wrapping_add(dcol))
    }

    /// Returns `(to.row - self.row, to.col - self.col)`, wrapping on
    /// overflow.
    #[inline]
    pub const fn delta(self, to: Square) -> (i32, i32) {
        (to.row.wrapping_sub(self.row), to.col.wrapping_sub(self.col))
    }

    /// Returns true if the square lies within `[0, rows) x [0, cols)`.
    #[inline]
    pub const fn within(self, rows: i32, cols: i32) -> bool {
        self.row >= 0 && self.row < rows && self.col >= 0 && self.col < cols
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Square::new(row, col)
    }
}
