use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::Pin;
use crate::moves::move_descriptions::Move;

/// Read-only view a generator needs for one enumeration pass.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub board: &'a Board,
    pub side: Color,
    pub king_square: Square,
    pub en_passant_target: Option<Square>,
}

impl<'a> GenerationContext<'a> {
    pub fn for_game(game_state: &'a GameState) -> Self {
        let side = game_state.side_to_move;
        Self {
            board: &game_state.board,
            side,
            king_square: game_state.king_square(side),
            en_passant_target: game_state.en_passant_target,
        }
    }

    #[inline]
    pub fn is_friendly(&self, square: Square) -> bool {
        matches!(self.board.get(square), Some(p) if p.color == self.side)
    }

    #[inline]
    pub fn is_enemy(&self, square: Square) -> bool {
        matches!(self.board.get(square), Some(p) if p.color != self.side)
    }
}

/// Pins found for one enumeration pass. Each pinned piece's entry is taken
/// exactly once, by the generator for that piece.
#[derive(Debug, Clone, Default)]
pub struct PinList {
    pins: Vec<Pin>,
}

impl PinList {
    pub fn new(pins: &[Pin]) -> Self {
        Self {
            pins: pins.to_vec(),
        }
    }

    /// Removes and returns the pin axis for `square`, if it is pinned.
    pub fn take(&mut self, square: Square) -> Option<Direction> {
        let index = self.pins.iter().position(|pin| pin.square == square)?;
        Some(self.pins.swap_remove(index).direction)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

/// True when a piece with `pin` may step in `direction`.
#[inline]
pub fn allowed_by_pin(pin: Option<Direction>, direction: Direction) -> bool {
    match pin {
        None => true,
        Some(axis) => axis.is_parallel_to(direction),
    }
}

#[inline]
pub fn push_move(ctx: &GenerationContext, from: Square, to: Square, out: &mut Vec<Move>) {
    if let Some(mv) = Move::new(from, to, ctx.board, false) {
        out.push(mv);
    }
}

/// Slides from `from` along each direction the pin allows, stopping at the
/// first occupied square and keeping it only when it holds an enemy piece.
pub fn generate_slider_moves(
    ctx: &GenerationContext,
    from: Square,
    directions: &[Direction],
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        if !allowed_by_pin(pin, direction) {
            continue;
        }
        for distance in 1..8i8 {
            let Some(to) = from.offset(direction, distance) else {
                break;
            };
            match ctx.board.get(to) {
                None => push_move(ctx, from, to, out),
                Some(piece) => {
                    if piece.color != ctx.side {
                        push_move(ctx, from, to, out);
                    }
                    break;
                }
            }
        }
    }
}
