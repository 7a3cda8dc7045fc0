//! Core mailbox game state.
//!
//! `GameState` is the central model for the engine. It owns the 8x8 board,
//! the side to move, the move log with its undo records, cached King squares,
//! the en passant target, and the check/pin caches filled by the last
//! legal-move enumeration. The board is only written by `apply`/`undo`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{back_rank_row, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{
    find_pins_and_checks, is_square_attacked, CheckInfo,
};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // --- History ---
    pub(crate) move_log: Vec<Move>,
    pub(crate) undo_stack: Vec<UndoState>,

    // --- Cached King squares, indexed by `Color::index` ---
    pub(crate) king_squares: [Square; 2],

    pub(crate) en_passant_target: Option<Square>,

    // --- Recomputed by every legal-move enumeration ---
    pub(crate) check_info: CheckInfo,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Standard initial position, White to move.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            let back = back_rank_row(color);
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.set(Square::new(back, col as u8), Some(Piece::new(color, *kind)));
                board.set(
                    Square::new(pawns, col as u8),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }

        Self {
            board,
            side_to_move: Color::White,
            move_log: Vec::new(),
            undo_stack: Vec::new(),
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
            en_passant_target: None,
            check_info: CheckInfo::default(),
            status: GameStatus::Ongoing,
        }
    }

    /// Builds a position from explicit placements.
    ///
    /// Requires exactly one King per color, at most one piece per square and
    /// no pawn on either back rank. The side that just moved may not be left
    /// in check.
    pub fn from_placements(
        side_to_move: Color,
        placements: &[(Square, Piece)],
    ) -> Result<Self, ChessErrors> {
        let mut board = Board::empty();
        let mut kings: [Option<Square>; 2] = [None, None];

        for &(square, piece) in placements {
            if !board.is_empty(square) {
                return Err(ChessErrors::InvalidPlacement(format!(
                    "two pieces on row {} col {}",
                    square.row, square.col
                )));
            }
            if piece.kind == PieceKind::Pawn && (square.row == 0 || square.row == 7) {
                return Err(ChessErrors::InvalidPlacement(format!(
                    "pawn on back rank at row {} col {}",
                    square.row, square.col
                )));
            }
            if piece.kind == PieceKind::King {
                if kings[piece.color.index()].is_some() {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "more than one {:?} king",
                        piece.color
                    )));
                }
                kings[piece.color.index()] = Some(square);
            }
            board.set(square, Some(piece));
        }

        let [Some(white_king), Some(black_king)] = kings else {
            return Err(ChessErrors::InvalidPlacement(
                "each side needs exactly one king".to_owned(),
            ));
        };

        let king_squares = [white_king, black_king];
        let waiting = side_to_move.opposite();
        if is_square_attacked(&board, king_squares[waiting.index()], side_to_move) {
            return Err(ChessErrors::InvalidPlacement(format!(
                "{waiting:?} king is in check with {side_to_move:?} to move"
            )));
        }

        Ok(Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            undo_stack: Vec::new(),
            king_squares,
            en_passant_target: None,
            check_info: CheckInfo::default(),
            status: GameStatus::Ongoing,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Check and pin state found by the last `legal_moves` call.
    #[inline]
    pub fn check_info(&self) -> &CheckInfo {
        &self.check_info
    }

    /// Status found by the last `legal_moves` call.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the side to move is in check right now. Does not touch the
    /// cached `check_info`.
    pub fn is_in_check(&self) -> bool {
        let side = self.side_to_move;
        find_pins_and_checks(&self.board, self.king_square(side), side).in_check
    }

    /// Legal moves for the side to move. Refreshes `check_info` and
    /// `status`; call once after construction and after every apply/undo.
    pub fn legal_moves(&mut self) -> MoveGenResult<Vec<Move>> {
        let generated = LegalMoveGenerator.generate_legal_moves(self)?;

        self.status = if !generated.moves.is_empty() {
            GameStatus::Ongoing
        } else if generated.check_info.in_check {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
        self.check_info = generated.check_info;

        Ok(generated.moves)
    }

    /// Applies a move taken from the latest `legal_moves` result. A
    /// promotion choice must already be stored in `mv.promotion_kind`.
    #[inline]
    pub fn apply(&mut self, mv: Move) {
        apply_move(self, mv);
    }

    /// Takes back the last move. Returns `None` (and changes nothing) when
    /// the log is empty.
    #[inline]
    pub fn undo(&mut self) -> Option<Move> {
        undo_move(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::MoveKey;

    #[test]
    fn new_game_layout() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.king_square(Color::White), Square::new(7, 4));
        assert_eq!(game.king_square(Color::Black), Square::new(0, 4));
        assert_eq!(
            game.board().get(Square::new(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            game.board().get(Square::new(1, 7)),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(game.board().pieces().count(), 32);
        assert_eq!(game.en_passant_target(), None);
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn new_game_reports_twenty_moves_and_no_check() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves().expect("move generation should succeed");
        assert_eq!(moves.len(), 20);
        assert!(!game.check_info().in_check);
        assert!(game.check_info().pins.is_empty());
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn placements_require_both_kings() {
        let only_white = [(
            Square::new(7, 4),
            Piece::new(Color::White, PieceKind::King),
        )];
        assert!(matches!(
            GameState::from_placements(Color::White, &only_white),
            Err(ChessErrors::InvalidPlacement(_))
        ));
    }

    #[test]
    fn placements_reject_overlaps_and_back_rank_pawns() {
        let king = Piece::new(Color::White, PieceKind::King);
        let overlap = [
            (Square::new(7, 4), king),
            (Square::new(7, 4), Piece::new(Color::Black, PieceKind::King)),
        ];
        assert!(GameState::from_placements(Color::White, &overlap).is_err());

        let pawn_on_back_rank = [
            (Square::new(7, 4), king),
            (Square::new(0, 4), Piece::new(Color::Black, PieceKind::King)),
            (Square::new(0, 0), Piece::new(Color::White, PieceKind::Pawn)),
        ];
        assert!(GameState::from_placements(Color::White, &pawn_on_back_rank).is_err());
    }

    #[test]
    fn placements_reject_a_capturable_king() {
        // White Ka1 Re1, Black Ke8: White to move could take the King.
        let exposed = [
            (Square::new(7, 0), Piece::new(Color::White, PieceKind::King)),
            (Square::new(7, 4), Piece::new(Color::White, PieceKind::Rook)),
            (Square::new(0, 4), Piece::new(Color::Black, PieceKind::King)),
        ];
        assert!(matches!(
            GameState::from_placements(Color::White, &exposed),
            Err(ChessErrors::InvalidPlacement(_))
        ));

        // The same position is fine with Black to move: Black is simply in check.
        let mut game = GameState::from_placements(Color::Black, &exposed)
            .expect("side to move may start in check");
        game.legal_moves().expect("move generation should succeed");
        assert!(game.check_info().in_check);

        let touching_kings = [
            (Square::new(4, 4), Piece::new(Color::White, PieceKind::King)),
            (Square::new(3, 4), Piece::new(Color::Black, PieceKind::King)),
        ];
        for side in [Color::White, Color::Black] {
            assert!(GameState::from_placements(side, &touching_kings).is_err());
        }
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let key: MoveKey = text.parse().expect("test move should parse");
            let moves = game.legal_moves().expect("move generation should succeed");
            let mv = *moves
                .iter()
                .find(|m| **m == key)
                .expect("test move should be legal");
            game.apply(mv);
        }
        let moves = game.legal_moves().expect("move generation should succeed");
        assert!(moves.is_empty());
        assert!(game.is_in_check());
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn cornered_king_without_checks_is_stalemate() {
        // Black king a8, white queen c7, white king c6 (standard stalemate).
        let placements = [
            (Square::new(0, 0), Piece::new(Color::Black, PieceKind::King)),
            (Square::new(1, 2), Piece::new(Color::White, PieceKind::Queen)),
            (Square::new(2, 2), Piece::new(Color::White, PieceKind::King)),
        ];
        let mut game = GameState::from_placements(Color::Black, &placements)
            .expect("position should build");
        let moves = game.legal_moves().expect("move generation should succeed");
        assert!(moves.is_empty());
        assert_eq!(game.status(), GameStatus::Stalemate);
    }
}
