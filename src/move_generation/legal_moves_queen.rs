use crate::game_state::chess_rules::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_slider_moves, GenerationContext, PinList};
use crate::moves::move_descriptions::Move;

/// Union of bishop and rook generation. The pin entry is taken once and the
/// axis handed to both halves.
pub fn generate_queen_moves(
    ctx: &GenerationContext,
    from: Square,
    pins: &mut PinList,
    out: &mut Vec<Move>,
) {
    let pin = pins.take(from);
    generate_slider_moves(ctx, from, &DIAGONAL_DIRECTIONS, pin, out);
    generate_slider_moves(ctx, from, &ORTHOGONAL_DIRECTIONS, pin, out);
}
