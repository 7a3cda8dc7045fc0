//! King move generation.
//!
//! Each neighbouring square is tried on a copy of the board with the King
//! relocated there, and kept only when no enemy piece attacks it. King moves
//! are therefore legal on their own and need no check filtering afterwards.

use crate::game_state::chess_rules::RAY_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_move, GenerationContext};
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(ctx: &GenerationContext, from: Square, out: &mut Vec<Move>) {
    let Some(king) = ctx.board.get(from) else {
        return;
    };
    let enemy = ctx.side.opposite();

    for direction in RAY_DIRECTIONS {
        let Some(to) = from.offset(direction, 1) else {
            continue;
        };
        if ctx.is_friendly(to) {
            continue;
        }

        let mut relocated = *ctx.board;
        relocated.set(from, None);
        relocated.set(to, Some(king));
        if !is_square_attacked(&relocated, to, enemy) {
            push_move(ctx, from, to, out);
        }
    }
}
