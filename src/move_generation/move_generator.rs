use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::moves::move_descriptions::Move;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    /// The cached King square does not hold that side's King.
    KingCacheMismatch(Square),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::KingCacheMismatch(square) => write!(
                f,
                "king cache points at row {} col {}, which holds no king of the side to move",
                square.row, square.col
            ),
        }
    }
}

impl Error for MoveGenerationError {}

/// Result of one enumeration pass: the legal moves and the check/pin state
/// they were filtered against.
#[derive(Debug, Clone, Default)]
pub struct GeneratedMoves {
    pub moves: Vec<Move>,
    pub check_info: CheckInfo,
}

pub trait MoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<GeneratedMoves>;
}
