//! Core value types for the mailbox board representation.
//!
//! Squares are `(row, col)` pairs with row 0 holding the black back rank and
//! row 7 the white back rank, so the board reads top-to-bottom from black's
//! side. Col 0 is the a-file.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move, or owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance.
    #[inline]
    pub const fn pawn_forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color starts on (and may double-advance from).
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this color promotes.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn short_name(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used in move transcripts (`P` for pawns).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parses one of the promotion letters `Q R N B` (case sensitive).
    pub fn from_promotion_letter(letter: &str) -> Option<Self> {
        match letter {
            "Q" => Some(PieceKind::Queen),
            "R" => Some(PieceKind::Rook),
            "N" => Some(PieceKind::Knight),
            "B" => Some(PieceKind::Bishop),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A board coordinate. Always on the board once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Builds a square from indices already known to be in `0..=7`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    /// Checked constructor for indices coming from outside the engine.
    #[inline]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Steps `distance` times along `direction`, or `None` off the board.
    #[inline]
    pub fn offset(self, direction: Direction, distance: i8) -> Option<Self> {
        Self::try_new(
            self.row as i8 + direction.d_row * distance,
            self.col as i8 + direction.d_col * distance,
        )
    }
}

/// A unit step (or knight jump) on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }

    /// True when `other` runs along the same line, in either sense.
    #[inline]
    pub fn is_parallel_to(self, other: Direction) -> bool {
        self == other || self == other.reversed()
    }
}

/// Outcome of the position as of the last legal-move enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Checkmate {
        winner: Color,
    },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate {
                winner: Color::White,
            } => write!(f, "checkmate, white wins"),
            GameStatus::Checkmate {
                winner: Color::Black,
            } => write!(f, "checkmate, black wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// 8x8 grid of square contents, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    /// Row-major view for renderers.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }

    /// Every occupied square with its piece, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }
}
