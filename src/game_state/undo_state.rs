use crate::game_state::chess_types::*;

/// Single undo record pushed by `apply` and popped by `undo`.
///
/// The logged move already snapshots the moved and captured pieces; this only
/// keeps state that `apply` overwrites and cannot rebuild from the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub prev_en_passant_target: Option<Square>,
}
