//! Full legal move generation pipeline.
//!
//! Runs pin/check detection from the King of the side to move, then
//! dispatches to the per-piece generators. Pins are honoured inside the
//! generators and King moves are self-filtered, so the only filtering left
//! here is the single-check block set. Under double check only the King
//! generator runs.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{find_pins_and_checks, CheckInfo, Checker};
use crate::move_generation::legal_move_shared::{GenerationContext, PinList};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{
    GeneratedMoves, MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<GeneratedMoves> {
        let ctx = GenerationContext::for_game(game_state);
        if ctx.board.get(ctx.king_square) != Some(Piece::new(ctx.side, PieceKind::King)) {
            return Err(MoveGenerationError::KingCacheMismatch(ctx.king_square));
        }

        let check_info = find_pins_and_checks(ctx.board, ctx.king_square, ctx.side);

        let moves = match check_info.checkers.as_slice() {
            [] => generate_pseudo_legal_moves(&ctx, &check_info),
            [checker] => {
                let block = block_squares(ctx.board, ctx.king_square, *checker);
                generate_pseudo_legal_moves(&ctx, &check_info)
                    .into_iter()
                    .filter(|mv| resolves_single_check(mv, checker, &block))
                    .collect()
            }
            _ => {
                let mut out = Vec::new();
                generate_king_moves(&ctx, ctx.king_square, &mut out);
                out
            }
        };

        Ok(GeneratedMoves { moves, check_info })
    }
}

fn generate_pseudo_legal_moves(ctx: &GenerationContext, check_info: &CheckInfo) -> Vec<Move> {
    let mut pins = PinList::new(&check_info.pins);
    let mut out = Vec::with_capacity(64);

    for (from, piece) in ctx.board.pieces() {
        if piece.color != ctx.side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(ctx, from, &mut pins, &mut out),
            PieceKind::Knight => generate_knight_moves(ctx, from, &mut pins, &mut out),
            PieceKind::Bishop => generate_bishop_moves(ctx, from, &mut pins, &mut out),
            PieceKind::Rook => generate_rook_moves(ctx, from, &mut pins, &mut out),
            PieceKind::Queen => generate_queen_moves(ctx, from, &mut pins, &mut out),
            PieceKind::King => generate_king_moves(ctx, from, &mut out),
        }
    }

    debug_assert!(pins.is_empty(), "every pinned piece consumes its pin");
    out
}

/// Squares a non-King move may land on to answer `checker`: the squares
/// strictly between King and a sliding attacker plus the attacker's own
/// square, or just the attacker's square for a knight or pawn.
pub fn block_squares(board: &Board, king_square: Square, checker: Checker) -> Vec<Square> {
    let is_slider = board
        .get(checker.square)
        .is_some_and(|piece| piece.kind.is_slider());
    if !is_slider {
        return vec![checker.square];
    }

    let mut squares = Vec::with_capacity(7);
    for distance in 1..8i8 {
        let Some(square) = king_square.offset(checker.direction, distance) else {
            break;
        };
        squares.push(square);
        if square == checker.square {
            break;
        }
    }
    squares
}

fn resolves_single_check(mv: &Move, checker: &Checker, block: &[Square]) -> bool {
    mv.piece_moved.kind == PieceKind::King
        || block.contains(&mv.end)
        // En passant removes a checking pawn without landing on its square.
        || (mv.is_en_passant && mv.en_passant_victim_square() == checker.square)
}
