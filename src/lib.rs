//! Crate root module declarations for the Plum rules engine.
//!
//! Exposes the mailbox game state, legal move generation with pin and check
//! detection, perft counting, the interactive driver layer and utility
//! helpers so the terminal binary, tests and benches share stable paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod driver {
    pub mod config;
    pub mod promotion;
    pub mod session;
    pub mod terminal;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
