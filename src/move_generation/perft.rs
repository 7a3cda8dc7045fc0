use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::find_pins_and_checks;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::{Move, MoveKey};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts leaf positions `depth` plies below `game_state`.
///
/// Each promotion counts as one node: the generator lists a promoting pawn
/// move once and the piece is chosen when it is applied.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut game = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut game, depth, &mut total)?;
    Ok(total)
}

/// Per-root-move breakdown of `perft`, sorted by move key.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<Vec<(MoveKey, PerftCounts)>> {
    let mut game = game_state.clone();
    let root_moves = generator.generate_legal_moves(&game)?.moves;
    let mut out = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut local = PerftCounts::default();
        game.apply(mv);
        let result = if depth <= 1 {
            count_leaf(generator, &game, &mv, &mut local)
        } else {
            perft_recurse(generator, &mut game, depth - 1, &mut local)
        };
        game.undo();
        result?;
        out.push((mv.key(), local));
    }

    out.sort_by_key(|(key, _)| *key);
    Ok(out)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let moves = generator.generate_legal_moves(game)?.moves;

    for mv in moves {
        game.apply(mv);
        let result = if depth == 1 {
            count_leaf(generator, game, &mv, counts)
        } else {
            let mut child = PerftCounts::default();
            let result = perft_recurse(generator, game, depth - 1, &mut child);
            counts.merge(child);
            result
        };
        game.undo();
        result?;
    }

    Ok(())
}

/// Tallies one leaf. `game` is the position after `mv`.
fn count_leaf<G: MoveGenerator>(
    generator: &G,
    game: &GameState,
    mv: &Move,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    counts.nodes += 1;

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_promotion {
        counts.promotions += 1;
    }

    let side = game.side_to_move();
    if find_pins_and_checks(game.board(), game.king_square(side), side).in_check {
        counts.checks += 1;
        if generator.generate_legal_moves(game)?.moves.is_empty() {
            counts.checkmates += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::utils::algebraic::algebraic_to_square;

    use super::*;

    fn place(text: &str, color: Color, kind: PieceKind) -> (crate::game_state::chess_types::Square, Piece) {
        (
            algebraic_to_square(text).expect("test square should parse"),
            Piece::new(color, kind),
        )
    }

    /// Endgame with en passant and rank pins but no castling rights:
    /// White Ka5 Rb4 Pb5 Pe2 Pg2, Black Kh4 Rh5 Pc7 Pd6 Pf4.
    fn rook_and_pawns_endgame() -> GameState {
        GameState::from_placements(
            Color::White,
            &[
                place("a5", Color::White, PieceKind::King),
                place("b4", Color::White, PieceKind::Rook),
                place("b5", Color::White, PieceKind::Pawn),
                place("e2", Color::White, PieceKind::Pawn),
                place("g2", Color::White, PieceKind::Pawn),
                place("h4", Color::Black, PieceKind::King),
                place("h5", Color::Black, PieceKind::Rook),
                place("c7", Color::Black, PieceKind::Pawn),
                place("d6", Color::Black, PieceKind::Pawn),
                place("f4", Color::Black, PieceKind::Pawn),
            ],
        )
        .expect("position should build")
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_start_position_matches_reference_counts() {
        let game = GameState::new_game();
        let generator = LegalMoveGenerator;

        assert_eq!(perft(&generator, &game, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&generator, &game, 2).expect("perft should run").nodes, 400);

        let depth_three = perft(&generator, &game, 3).expect("perft should run");
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.en_passant, 0);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    #[test]
    fn perft_endgame_matches_reference_counts() {
        let game = rook_and_pawns_endgame();
        let generator = LegalMoveGenerator;

        let depth_one = perft(&generator, &game, 1).expect("perft should run");
        assert_eq!(depth_one.nodes, 14);
        assert_eq!(depth_one.captures, 1);
        assert_eq!(depth_one.checks, 2);

        assert_eq!(perft(&generator, &game, 2).expect("perft should run").nodes, 191);

        let depth_three = perft(&generator, &game, 3).expect("perft should run");
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.captures, 209);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn perft_leaves_the_input_position_untouched() {
        let game = rook_and_pawns_endgame();
        let before = *game.board();
        perft(&LegalMoveGenerator, &game, 2).expect("perft should run");
        assert_eq!(*game.board(), before);
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let generator = LegalMoveGenerator;
        let divided = perft_divide(&generator, &game, 2).expect("divide should run");

        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, counts)| counts.nodes == 20));
        let total: usize = divided.iter().map(|(_, counts)| counts.nodes).sum();
        assert_eq!(total, 400);
        assert!(divided.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }
}
