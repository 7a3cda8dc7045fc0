//! Bishop move generation.
//!
//! Slides along the four diagonals, restricted to the pin axis when the
//! bishop is pinned (a bishop pinned on a file or rank cannot move).

use crate::game_state::chess_rules::DIAGONAL_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_slider_moves, GenerationContext, PinList};
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(
    ctx: &GenerationContext,
    from: Square,
    pins: &mut PinList,
    out: &mut Vec<Move>,
) {
    let pin = pins.take(from);
    generate_slider_moves(ctx, from, &DIAGONAL_DIRECTIONS, pin, out);
}
