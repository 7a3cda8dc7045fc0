use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_move, GenerationContext, PinList};
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(
    ctx: &GenerationContext,
    from: Square,
    pins: &mut PinList,
    out: &mut Vec<Move>,
) {
    // A knight never stays on its pin axis, so a pinned knight has no moves.
    if pins.take(from).is_some() {
        return;
    }

    for offset in KNIGHT_OFFSETS {
        let Some(to) = from.offset(offset, 1) else {
            continue;
        };
        if !ctx.is_friendly(to) {
            push_move(ctx, from, to, out);
        }
    }
}
