//! Rook move generation.
//!
//! Slides along ranks and files until blocked, including the first enemy
//! square, restricted to the pin axis when the rook is pinned.

use crate::game_state::chess_rules::ORTHOGONAL_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_slider_moves, GenerationContext, PinList};
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(
    ctx: &GenerationContext,
    from: Square,
    pins: &mut PinList,
    out: &mut Vec<Move>,
) {
    let pin = pins.take(from);
    generate_slider_moves(ctx, from, &ORTHOGONAL_DIRECTIONS, pin, out);
}
