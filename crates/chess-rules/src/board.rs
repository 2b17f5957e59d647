//! Board state: the grid of pieces, side to move and en passant target.

use std::fmt;

use chess_core::{Color, Piece, Square};
use thiserror::Error;

/// Errors raised while setting up a board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("square {0} is outside the board")]
    OutOfBounds(Square),
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPiece {
    /// The kind of piece.
    pub piece: Piece,
    /// The side owning the piece.
    pub color: Color,
    /// The square the piece stands on. Always matches its slot in the grid.
    pub square: Square,
    /// Whether the piece has moved since it was placed.
    pub has_moved: bool,
}

impl BoardPiece {
    /// Creates an unmoved piece on the given square.
    pub const fn new(piece: Piece, color: Color, square: Square) -> Self {
        BoardPiece {
            piece,
            color,
            square,
            has_moved: false,
        }
    }

    /// Returns true if this is a piece of the given kind and color.
    #[inline]
    pub fn is(&self, piece: Piece, color: Color) -> bool {
        self.piece == piece && self.color == color
    }
}

/// A rectangular chess board.
///
/// The board owns every piece. Rows grow from Black's home edge (row 0) to
/// White's home edge (the last row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: i32,
    cols: i32,
    squares: Vec<Option<BoardPiece>>,
    pub(crate) turn: Color,
    pub(crate) en_passant: Option<Square>,
}

impl Board {
    /// Creates an empty board with White to move.
    pub fn new(rows: i32, cols: i32) -> Result<Self, BoardError> {
        let area = match rows.checked_mul(cols) {
            Some(area) if rows > 0 && cols > 0 => area,
            _ => return Err(BoardError::InvalidDimensions { rows, cols }),
        };
        Ok(Board {
            rows,
            cols,
            squares: vec![None; area as usize],
            turn: Color::White,
            en_passant: None,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the en passant target square, if the previous move was a
    /// pawn double push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns true if the square lies on the board.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.within(self.rows, self.cols)
    }

    /// Places a new, unmoved piece, replacing any occupant of the square.
    pub fn create_piece(
        &mut self,
        color: Color,
        piece: Piece,
        sq: Square,
    ) -> Result<(), BoardError> {
        let idx = self.index(sq).ok_or(BoardError::OutOfBounds(sq))?;
        self.squares[idx] = Some(BoardPiece::new(piece, color, sq));
        Ok(())
    }

    /// Returns the piece on the given square, if any.
    ///
    /// Off-board squares are reported as empty.
    pub fn piece_at(&self, sq: Square) -> Option<&BoardPiece> {
        self.index(sq).and_then(|idx| self.squares[idx].as_ref())
    }

    /// Returns true if the square is on the board and holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.contains(sq) && self.piece_at(sq).is_none()
    }

    /// Iterates over every piece on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &BoardPiece> {
        self.squares.iter().flatten()
    }

    /// Iterates over every square of the board in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Square::new(row, col)))
    }

    /// Returns the squares holding pieces of the given color.
    pub fn squares_of(&self, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|p| p.color == color)
            .map(|p| p.square)
            .collect()
    }

    /// Returns the square of the king of the given color.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.is(Piece::King, color))
            .map(|p| p.square)
    }

    /// Renders the board as text with row and column indices.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Removes and returns the piece on the square.
    pub(crate) fn take(&mut self, sq: Square) -> Option<BoardPiece> {
        let idx = self.index(sq)?;
        self.squares[idx].take()
    }

    /// Puts a piece on the square, keeping its stored square in sync.
    pub(crate) fn put(&mut self, sq: Square, piece: Option<BoardPiece>) {
        if let Some(idx) = self.index(sq) {
            self.squares[idx] = piece.map(|mut p| {
                p.square = sq;
                p
            });
        }
    }

    fn index(&self, sq: Square) -> Option<usize> {
        self.contains(sq).then(|| (sq.row * self.cols + sq.col) as usize)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.cols {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;
        write_border(f, self.cols)?;

        for row in 0..self.rows {
            write!(f, "{}|", row)?;
            for col in 0..self.cols {
                match self.piece_at(Square::new(row, col)) {
                    Some(p) => write!(f, "{} ", p.piece.glyph(p.color))?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f, "|")?;
        }

        write_border(f, self.cols)
    }
}

fn write_border(f: &mut fmt::Formatter<'_>, cols: i32) -> fmt::Result {
    write!(f, "  ")?;
    for _ in 0..cols {
        write!(f, "– ")?;
    }
    writeln!(f)
}
