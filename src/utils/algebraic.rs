//! Square conversions for algebraic coordinates.
//!
//! Maps between human-readable coordinates (e.g. `e4`) and `(row, col)`
//! squares. Row 0 is rank 8, so ranks run opposite to row indices.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    let col = file - b'a';
    let row = 7 - (rank - b'1');
    Ok(Square::new(row, col))
}

#[inline]
pub fn file_char(col: u8) -> char {
    char::from(b'a' + col)
}

#[inline]
pub fn rank_char(row: u8) -> char {
    char::from(b'8' - row)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_char(square.col), rank_char(square.row))
}
