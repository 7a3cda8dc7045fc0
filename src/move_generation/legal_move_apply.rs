//! In-place move application and its exact inverse.
//!
//! `apply_move` trusts its input: the move must come from the latest
//! legal-move list, with any promotion choice already stored on it. Every
//! field `apply_move` writes is restored by `undo_move`, either from the
//! logged move's snapshots or from the matching `UndoState`.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

pub fn apply_move(game_state: &mut GameState, mv: Move) {
    let mover = mv.piece_moved.color;

    game_state.undo_stack.push(UndoState {
        prev_en_passant_target: game_state.en_passant_target,
    });

    game_state.board.set(mv.start, None);
    game_state.board.set(mv.end, Some(mv.piece_after_move()));

    // The captured pawn sits beside the start square, not on the destination.
    if mv.is_en_passant {
        game_state.board.set(mv.en_passant_victim_square(), None);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.end;
    }

    game_state.en_passant_target = if mv.is_double_pawn_push() {
        Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
    } else {
        None
    };

    game_state.side_to_move = mover.opposite();
    game_state.move_log.push(mv);
}

pub fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let mv = game_state.move_log.pop()?;
    // `apply_move` pushes one record per logged move.
    let undo = game_state.undo_stack.pop();
    debug_assert!(undo.is_some(), "undo stack out of step with the move log");

    game_state.board.set(mv.start, Some(mv.piece_moved));
    if mv.is_en_passant {
        game_state.board.set(mv.end, None);
        game_state
            .board
            .set(mv.en_passant_victim_square(), mv.piece_captured);
    } else {
        game_state.board.set(mv.end, mv.piece_captured);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mv.piece_moved.color.index()] = mv.start;
    }

    game_state.en_passant_target = undo.and_then(|undo| undo.prev_en_passant_target);

    game_state.side_to_move = mv.piece_moved.color;
    Some(mv)
}
