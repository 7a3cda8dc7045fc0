//! Terminal-oriented Unicode board renderer.
//!
//! Draws the mailbox board with rank 8 on top, matching row 0 of `Board`.
//! Empty squares a selected piece may move to are marked with `+`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::rank_char;

const FILE_HEADER: &str = "  a b c d e f g h";

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    render_board(game_state.board(), &[])
}

/// Render `board`, marking each empty square in `targets`.
pub fn render_board(board: &Board, targets: &[Square]) -> String {
    let mut out = String::new();

    out.push_str(FILE_HEADER);
    out.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        let rank = rank_char(row as u8);
        out.push(rank);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            let square = Square::new(row as u8, col as u8);
            match cell {
                Some(piece) => out.push(piece_to_unicode(*piece)),
                None if targets.contains(&square) => out.push('+'),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILE_HEADER);

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_renders_rank_eight_first() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], FILE_HEADER);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[2], "7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[9], FILE_HEADER);
    }

    #[test]
    fn targets_mark_only_empty_squares() {
        let game = GameState::new_game();
        let text = render_board(
            game.board(),
            &[Square::new(5, 4), Square::new(4, 4), Square::new(0, 0)],
        );
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[5], "4 · · · · + · · · 4");
        assert_eq!(lines[6], "3 · · · · + · · · 3");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
    }
}
