//! Move values and the coarse (start, end) key used to match them.
//!
//! A `Move` snapshots the moved and captured pieces from the board when it is
//! built, so it stays valid after the board changes and can be undone without
//! looking anything up. Equality deliberately ignores everything but the
//! start and end squares: a driver builds a `MoveKey` from two clicks (or from
//! `e2e4` text) and finds the matching entry in the legal-move list, whatever
//! its promotion choice or flags.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Move intent: just the origin and destination squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveKey {
    pub start: Square,
    pub end: Square,
}

impl MoveKey {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }

    /// Parses coordinate text such as `e2e4`. A trailing promotion letter
    /// (`q`, `r`, `n` or `b`) is accepted and dropped, since the piece is
    /// not part of the key.
    pub fn parse(text: &str) -> Result<Self, ChessErrors> {
        let x = text.trim();
        if !(x.len() == 4 || x.len() == 5) || !x.is_ascii() {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
        }
        if x.len() == 5 && !matches!(x.as_bytes()[4], b'q' | b'r' | b'n' | b'b') {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
        }
        let start = algebraic_to_square(&x[0..2])?;
        let end = algebraic_to_square(&x[2..4])?;
        Ok(Self::new(start, end))
    }
}

impl FromStr for MoveKey {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveKey::parse(s)
    }
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

/// One ply, fully resolved against the board it was generated on.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the opposing pawn, which does not stand on
    /// `end`.
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    /// Only meaningful when `is_promotion`; set by the driver before `apply`.
    pub promotion_kind: PieceKind,
}

impl Move {
    /// Snapshots the pieces on `start` and `end`. Returns `None` when `start`
    /// is empty.
    pub fn new(start: Square, end: Square, board: &Board, is_en_passant: bool) -> Option<Self> {
        let piece_moved = board.get(start)?;
        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && end.row == piece_moved.color.promotion_row();
        let piece_captured = if is_en_passant {
            Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn))
        } else {
            board.get(end)
        };

        Some(Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant,
            is_promotion,
            promotion_kind: PieceKind::Queen,
        })
    }

    #[inline]
    pub fn key(&self) -> MoveKey {
        MoveKey::new(self.start, self.end)
    }

    /// Returns a copy carrying `kind` as its promotion choice.
    #[inline]
    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion_kind = kind;
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// True for a pawn advancing two rows.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row.abs_diff(self.end.row) == 2
    }

    /// Square actually vacated by an en passant capture: same row as the
    /// capturing pawn's start, same column as its destination.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        Square::new(self.start.row, self.end.col)
    }

    /// Piece standing on `end` once the move is applied.
    #[inline]
    pub fn piece_after_move(&self) -> Piece {
        if self.is_promotion {
            Piece::new(self.piece_moved.color, self.promotion_kind)
        } else {
            self.piece_moved
        }
    }

    /// Display notation such as `e2 -> e4`.
    pub fn to_notation(&self) -> String {
        format!(
            "{} -> {}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }

    /// Long algebraic form (`e2e4`, `e7e8q`).
    pub fn to_long_algebraic(&self) -> String {
        let base = self.key().to_string();
        if self.is_promotion {
            format!("{}{}", base, self.promotion_kind.letter().to_ascii_lowercase())
        } else {
            base
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialEq<MoveKey> for Move {
    fn eq(&self, other: &MoveKey) -> bool {
        self.key() == *other
    }
}
