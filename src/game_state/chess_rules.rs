//! Canonical chess-rule constants.
//!
//! Direction tables, knight offsets, promotion choices and the standard
//! starting layout used to initialize game state.

use crate::game_state::chess_types::{Color, Direction, PieceKind};

/// Ray directions from a King. Indices 0..=3 are orthogonal, 4..=7 diagonal;
/// the pawn-attack rules in check detection depend on this order.
pub const RAY_DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    RAY_DIRECTIONS[0],
    RAY_DIRECTIONS[1],
    RAY_DIRECTIONS[2],
    RAY_DIRECTIONS[3],
];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    RAY_DIRECTIONS[4],
    RAY_DIRECTIONS[5],
    RAY_DIRECTIONS[6],
    RAY_DIRECTIONS[7],
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
];

/// Pieces a pawn may promote to.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
];

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row of a color's back rank in row0=rank8 indexing.
#[inline]
pub const fn back_rank_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Diagonal ray indices along which an enemy pawn of `attacker` color,
/// standing one step away, attacks the King.
#[inline]
pub const fn pawn_attack_ray_indices(attacker: Color) -> [usize; 2] {
    match attacker {
        // Black pawns capture toward higher rows, so they sit above the King.
        Color::Black => [4, 5],
        Color::White => [6, 7],
    }
}
