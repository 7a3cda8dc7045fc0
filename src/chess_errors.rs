//! Errors used by the driver-facing surface of the rules engine.
//!
//! The engine core does not fail: `apply` expects a move drawn from the
//! legal-move list and `undo` on an empty log is a no-op. `ChessErrors` covers
//! everything around that core where input comes from a person or a config
//! value: coordinate parsing, matching a requested move against the legal
//! set, promotion letters and position setup.
//!
//! Usage guidelines:
//! - Parsing and input variants (`InvalidAlgebraicString`,
//!   `InvalidAlgebraicChar`, `InvalidPromotionChoice`) are recoverable and
//!   suitable for showing to the user before asking again.
//! - `IllegalMove` and `GameOver` are game-level rejections; the position is
//!   unchanged when they are returned.
//! - `InvalidPlacement` means a position could not be built at all.
//! - `InvalidConfig` is reported once at startup by the terminal driver.

use std::fmt;

use crate::game_state::chess_types::GameStatus;
use crate::move_generation::move_generator::MoveGenerationError;
use crate::moves::move_descriptions::MoveKey;

/// Unified error type for the driver layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A single character used during algebraic parsing was invalid.
    ///
    /// Payload: the offending character (a file outside 'a'..'h' or a rank
    /// outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square or a move.
    InvalidAlgebraicString(String),

    /// The requested (start, end) pair is not in the current legal-move list.
    IllegalMove(MoveKey),

    /// `undo` was requested with an empty move log.
    NothingToUndo,

    /// A move was requested after checkmate or stalemate.
    GameOver(GameStatus),

    /// A promotion prompt answer other than `Q`, `R`, `N` or `B`.
    InvalidPromotionChoice(String),

    /// A position could not be assembled (missing or duplicate King, pawn on
    /// a back rank, two pieces on one square).
    InvalidPlacement(String),

    /// A command-line flag or environment variable had an unusable value.
    InvalidConfig(String),

    /// Reading from or writing to the terminal failed.
    Io(String),

    /// The position's internal caches were inconsistent during generation.
    MoveGeneration(MoveGenerationError),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicChar(c) => write!(f, "invalid algebraic character: {c}"),
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic string: {s}"),
            ChessErrors::IllegalMove(key) => write!(f, "illegal move: {key}"),
            ChessErrors::NothingToUndo => write!(f, "no moves to undo"),
            ChessErrors::GameOver(status) => write!(f, "game is over: {status}"),
            ChessErrors::InvalidPromotionChoice(s) => {
                write!(f, "invalid promotion choice: {s} (expected Q, R, N or B)")
            }
            ChessErrors::InvalidPlacement(msg) => write!(f, "invalid placement: {msg}"),
            ChessErrors::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            ChessErrors::Io(msg) => write!(f, "io error: {msg}"),
            ChessErrors::MoveGeneration(err) => write!(f, "move generation failed: {err}"),
        }
    }
}

impl std::error::Error for ChessErrors {}

impl From<std::io::Error> for ChessErrors {
    fn from(err: std::io::Error) -> Self {
        ChessErrors::Io(err.to_string())
    }
}

impl From<MoveGenerationError> for ChessErrors {
    fn from(value: MoveGenerationError) -> Self {
        ChessErrors::MoveGeneration(value)
    }
}
