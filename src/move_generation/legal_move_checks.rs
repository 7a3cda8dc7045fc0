//! Pin and check detection by ray-casting from a King square.
//!
//! Eight rays leave the King (orthogonal indices 0..=3, diagonal 4..=7, see
//! `RAY_DIRECTIONS`). Along each ray the first friendly piece is a possible
//! pin; a second friendly piece closes the ray. The first enemy piece either
//! attacks along the ray, which makes it a checker (nothing in between) or
//! confirms the pin (one friendly piece in between), or it closes the ray.
//! Knight checks are found separately by probing the eight knight offsets.

use crate::game_state::chess_rules::{pawn_attack_ray_indices, KNIGHT_OFFSETS, RAY_DIRECTIONS};
use crate::game_state::chess_types::*;

/// A friendly piece that may only move along `direction` (either sense).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Direction from the King toward the pinned piece.
    pub direction: Direction,
}

/// An enemy piece attacking the King.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checker {
    pub square: Square,
    /// Ray direction from the King, or the knight offset for knight checks.
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checkers: Vec<Checker>,
}

impl CheckInfo {
    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checkers.len() >= 2
    }
}

/// Runs pin/check detection for the `color` King standing on `king_square`.
///
/// `board` is read as given; when probing a hypothetical King square the
/// caller passes a board with the King already relocated.
pub fn find_pins_and_checks(board: &Board, king_square: Square, color: Color) -> CheckInfo {
    let enemy = color.opposite();
    let mut info = CheckInfo::default();

    for (ray_index, direction) in RAY_DIRECTIONS.iter().copied().enumerate() {
        let mut possible_pin: Option<Square> = None;

        for distance in 1..8i8 {
            let Some(square) = king_square.offset(direction, distance) else {
                break;
            };
            let Some(piece) = board.get(square) else {
                continue;
            };

            if piece.color == color {
                if possible_pin.is_none() {
                    possible_pin = Some(square);
                    continue;
                }
                // Two friendly pieces: no pin and no check on this ray.
                break;
            }

            if attacks_along_ray(piece, enemy, ray_index, distance) {
                match possible_pin {
                    None => {
                        info.in_check = true;
                        info.checkers.push(Checker { square, direction });
                    }
                    Some(pinned) => info.pins.push(Pin {
                        square: pinned,
                        direction,
                    }),
                }
            }
            break;
        }
    }

    for offset in KNIGHT_OFFSETS {
        let Some(square) = king_square.offset(offset, 1) else {
            continue;
        };
        if board.get(square) == Some(Piece::new(enemy, PieceKind::Knight)) {
            info.in_check = true;
            info.checkers.push(Checker {
                square,
                direction: offset,
            });
        }
    }

    info
}

/// Whether an enemy `piece` found `distance` steps along ray `ray_index`
/// attacks the ray's origin.
fn attacks_along_ray(piece: Piece, enemy: Color, ray_index: usize, distance: i8) -> bool {
    let orthogonal = ray_index <= 3;
    match piece.kind {
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => distance == 1 && pawn_attack_ray_indices(enemy).contains(&ray_index),
        PieceKind::Knight => false,
    }
}

/// Whether any `by_color` piece attacks `square` on `board`.
///
/// Pure query: the caller builds whatever hypothetical board it needs, and
/// the side to move of any game state is never consulted.
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    find_pins_and_checks(board, square, by_color.opposite()).in_check
}
