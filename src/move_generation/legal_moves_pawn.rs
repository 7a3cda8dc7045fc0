use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{
    allowed_by_pin, push_move, GenerationContext, PinList,
};
use crate::moves::move_descriptions::Move;

pub fn generate_pawn_moves(
    ctx: &GenerationContext,
    from: Square,
    pins: &mut PinList,
    out: &mut Vec<Move>,
) {
    let pin = pins.take(from);
    let forward = ctx.side.pawn_forward();

    // advances
    let advance = Direction::new(forward, 0);
    if allowed_by_pin(pin, advance) {
        if let Some(one_step) = from.offset(advance, 1) {
            if ctx.board.is_empty(one_step) {
                push_move(ctx, from, one_step, out);

                if from.row == ctx.side.pawn_start_row() {
                    if let Some(two_step) = from.offset(advance, 2) {
                        if ctx.board.is_empty(two_step) {
                            push_move(ctx, from, two_step, out);
                        }
                    }
                }
            }
        }
    }

    // captures and en passant
    for d_col in [-1i8, 1i8] {
        let capture = Direction::new(forward, d_col);
        if !allowed_by_pin(pin, capture) {
            continue;
        }
        let Some(to) = from.offset(capture, 1) else {
            continue;
        };

        if ctx.is_enemy(to) {
            push_move(ctx, from, to, out);
        } else if ctx.en_passant_target == Some(to) && en_passant_keeps_king_safe(ctx, from, to) {
            if let Some(mv) = Move::new(from, to, ctx.board, true) {
                out.push(mv);
            }
        }
    }
}

/// En passant empties two squares on the capturing pawn's row, which can
/// open a rank onto the King that no pin entry describes. Replays the capture
/// on a board copy and probes the King square.
fn en_passant_keeps_king_safe(ctx: &GenerationContext, from: Square, to: Square) -> bool {
    let mut after = *ctx.board;
    let pawn = after.get(from);
    after.set(from, None);
    after.set(Square::new(from.row, to.col), None);
    after.set(to, pawn);
    !is_square_attacked(&after, ctx.king_square, ctx.side.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::find_pins_and_checks;

    fn pawn_targets(game: &GameState, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        let mut pins = PinList::default();
        generate_pawn_moves(&GenerationContext::for_game(game), from, &mut pins, &mut out);
        out.iter().map(|m| m.end).collect()
    }

    /// Targets with the position's real pins applied, checked against the
    /// full legal-move list.
    fn pinned_pawn_targets(game: &mut GameState, from: Square) -> Vec<Square> {
        let side = game.side_to_move();
        let info = find_pins_and_checks(game.board(), game.king_square(side), side);
        assert!(info.pins.iter().any(|pin| pin.square == from));

        let mut out = Vec::new();
        let mut pins = PinList::new(&info.pins);
        generate_pawn_moves(&GenerationContext::for_game(game), from, &mut pins, &mut out);
        let targets: Vec<Square> = out.iter().map(|m| m.end).collect();

        let mut legal: Vec<Square> = game
            .legal_moves()
            .expect("move generation should succeed")
            .iter()
            .filter(|m| m.start == from)
            .map(|m| m.end)
            .collect();
        let mut sorted = targets.clone();
        sorted.sort();
        legal.sort();
        assert_eq!(sorted, legal);
        targets
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_advance() {
        let game = GameState::new_game();
        assert_eq!(
            pawn_targets(&game, Square::new(6, 4)),
            vec![Square::new(5, 4), Square::new(4, 4)]
        );
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let game = GameState::from_placements(
            Color::White,
            &[
                (Square::new(7, 4), Piece::new(Color::White, PieceKind::King)),
                (Square::new(0, 4), Piece::new(Color::Black, PieceKind::King)),
                (Square::new(6, 0), Piece::new(Color::White, PieceKind::Pawn)),
                (Square::new(5, 0), Piece::new(Color::Black, PieceKind::Knight)),
            ],
        )
        .expect("position should build");
        assert!(pawn_targets(&game, Square::new(6, 0)).is_empty());
    }

    #[test]
    fn black_pawn_captures_toward_higher_rows() {
        let game = GameState::from_placements(
            Color::Black,
            &[
                (Square::new(7, 4), Piece::new(Color::White, PieceKind::King)),
                (Square::new(0, 4), Piece::new(Color::Black, PieceKind::King)),
                (Square::new(3, 3), Piece::new(Color::Black, PieceKind::Pawn)),
                (Square::new(4, 2), Piece::new(Color::White, PieceKind::Rook)),
                (Square::new(4, 4), Piece::new(Color::Black, PieceKind::Knight)),
            ],
        )
        .expect("position should build");
        assert_eq!(
            pawn_targets(&game, Square::new(3, 3)),
            vec![Square::new(4, 3), Square::new(4, 2)]
        );
    }

    #[test]
    fn en_passant_that_exposes_the_king_on_its_rank_is_skipped() {
        // White king a5, pawn b5, black pawn c5 just double-pushed, black
        // rook h5. Capturing en passant would empty b5 and c5 together.
        let mut game = GameState::from_placements(
            Color::Black,
            &[
                (Square::new(3, 0), Piece::new(Color::White, PieceKind::King)),
                (Square::new(3, 1), Piece::new(Color::White, PieceKind::Pawn)),
                (Square::new(1, 2), Piece::new(Color::Black, PieceKind::Pawn)),
                (Square::new(3, 7), Piece::new(Color::Black, PieceKind::Rook)),
                (Square::new(0, 4), Piece::new(Color::Black, PieceKind::King)),
            ],
        )
        .expect("position should build");
        let push = Move::new(Square::new(1, 2), Square::new(3, 2), game.board(), false)
            .expect("pawn on c7");
        game.apply(push);
        assert_eq!(game.en_passant_target(), Some(Square::new(2, 2)));

        let targets = pawn_targets(&game, Square::new(3, 1));
        assert_eq!(targets, vec![Square::new(2, 1)]);
    }

    #[test]
    fn file_pinned_pawn_only_advances() {
        // Rook e8 pins e2 to the King on e1; the bishop on d3 stays uncaptured.
        let mut game = GameState::from_placements(
            Color::White,
            &[
                (Square::new(7, 4), Piece::new(Color::White, PieceKind::King)),
                (Square::new(6, 4), Piece::new(Color::White, PieceKind::Pawn)),
                (Square::new(0, 4), Piece::new(Color::Black, PieceKind::Rook)),
                (Square::new(5, 3), Piece::new(Color::Black, PieceKind::Bishop)),
                (Square::new(0, 0), Piece::new(Color::Black, PieceKind::King)),
            ],
        )
        .expect("position should build");
        assert_eq!(
            pinned_pawn_targets(&mut game, Square::new(6, 4)),
            vec![Square::new(5, 4), Square::new(4, 4)]
        );
    }

    #[test]
    fn diagonally_pinned_pawn_may_only_take_the_pinner() {
        // Bishop g3 pins f2 to e1. The knight on e3 is off the pin line.
        let mut game = GameState::from_placements(
            Color::White,
            &[
                (Square::new(7, 4), Piece::new(Color::White, PieceKind::King)),
                (Square::new(6, 5), Piece::new(Color::White, PieceKind::Pawn)),
                (Square::new(5, 6), Piece::new(Color::Black, PieceKind::Bishop)),
                (Square::new(5, 4), Piece::new(Color::Black, PieceKind::Knight)),
                (Square::new(0, 0), Piece::new(Color::Black, PieceKind::King)),
            ],
        )
        .expect("position should build");
        assert_eq!(
            pinned_pawn_targets(&mut game, Square::new(6, 5)),
            vec![Square::new(5, 6)]
        );
    }

    #[test]
    fn diagonally_pinned_pawn_cannot_capture_en_passant_off_the_line() {
        // Bishop f6 pins e5 to a1 along the long diagonal. After d7d5 the
        // en passant capture on d6 would leave that diagonal.
        let mut game = GameState::from_placements(
            Color::Black,
            &[
                (Square::new(7, 0), Piece::new(Color::White, PieceKind::King)),
                (Square::new(3, 4), Piece::new(Color::White, PieceKind::Pawn)),
                (Square::new(2, 5), Piece::new(Color::Black, PieceKind::Bishop)),
                (Square::new(1, 3), Piece::new(Color::Black, PieceKind::Pawn)),
                (Square::new(0, 7), Piece::new(Color::Black, PieceKind::King)),
            ],
        )
        .expect("position should build");
        let push = Move::new(Square::new(1, 3), Square::new(3, 3), game.board(), false)
            .expect("pawn on d7");
        game.apply(push);
        assert_eq!(game.en_passant_target(), Some(Square::new(2, 3)));

        assert_eq!(
            pinned_pawn_targets(&mut game, Square::new(3, 4)),
            vec![Square::new(2, 5)]
        );
    }
}
