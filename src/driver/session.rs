//! Interactive game session.
//!
//! `GameSession` wraps a `GameState` with the pieces a front end needs: the
//! cached legal-move list for the current turn, move matching by `MoveKey`,
//! two-click selection, promotion resolution and a running list of
//! `info string` diagnostics for the caller to flush.

use chrono::Local;

use crate::chess_errors::ChessErrors;
use crate::driver::promotion::PromotionChooser;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKey};
use crate::utils::algebraic::square_to_algebraic;

/// What a single click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The selected square was clicked again and the selection was cleared.
    Deselected,
    /// Nothing was selected and the square holds no piece of the side to move.
    Ignored,
    /// The second click completed a legal move, which has been applied.
    Moved(Move),
}

pub struct GameSession {
    game: GameState,
    legal_moves: Vec<Move>,
    selected: Option<Square>,
    info_lines: Vec<String>,
}

impl GameSession {
    pub fn new() -> Result<Self, ChessErrors> {
        Self::from_game(GameState::new_game())
    }

    pub fn from_game(game: GameState) -> Result<Self, ChessErrors> {
        let mut session = Self {
            game,
            legal_moves: Vec::new(),
            selected: None,
            info_lines: vec![format!(
                "info string session started {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            )],
        };
        session.refresh()?;
        Ok(session)
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Legal moves for the side to move, computed once per turn.
    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations of the legal moves starting on `square`, in board order.
    pub fn targets_from(&self, square: Square) -> Vec<Square> {
        let mut targets: Vec<Square> = self
            .legal_moves
            .iter()
            .filter(|mv| mv.start == square)
            .map(|mv| mv.end)
            .collect();
        targets.sort();
        targets
    }

    #[inline]
    pub fn info_lines(&self) -> &[String] {
        &self.info_lines
    }

    /// Hands over the accumulated diagnostics and clears them.
    pub fn drain_info_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.info_lines)
    }

    /// Plays the legal move matching `key`. A promoting move asks `chooser`
    /// for the piece before anything is applied.
    pub fn try_move(
        &mut self,
        key: MoveKey,
        chooser: &mut dyn PromotionChooser,
    ) -> Result<Move, ChessErrors> {
        let status = self.game.status();
        if status.is_over() {
            return Err(ChessErrors::GameOver(status));
        }

        let Some(mut mv) = self.legal_moves.iter().copied().find(|mv| *mv == key) else {
            return Err(ChessErrors::IllegalMove(key));
        };

        if mv.is_promotion {
            let kind = chooser.request_promotion_choice()?;
            mv = mv.with_promotion(kind);
        }

        self.game.apply(mv);
        self.selected = None;
        self.info_lines.push(format!(
            "info string session move {}: {}{}",
            mv.piece_moved.color.short_name(),
            mv.piece_after_move().kind.letter(),
            square_to_algebraic(mv.end)
        ));
        self.refresh()?;
        Ok(mv)
    }

    /// Two-click move entry. The first click selects a piece of the side to
    /// move; clicking it again deselects; clicking another friendly piece
    /// moves the selection there; any other square attempts the move.
    /// A rejected attempt clears the selection.
    pub fn click(
        &mut self,
        square: Square,
        chooser: &mut dyn PromotionChooser,
    ) -> Result<ClickOutcome, ChessErrors> {
        let side = self.game.side_to_move();
        let friendly = matches!(self.game.board().get(square), Some(p) if p.color == side);

        match self.selected {
            None if friendly => {
                self.selected = Some(square);
                Ok(ClickOutcome::Selected(square))
            }
            None => Ok(ClickOutcome::Ignored),
            Some(current) if current == square => {
                self.selected = None;
                Ok(ClickOutcome::Deselected)
            }
            Some(_) if friendly => {
                self.selected = Some(square);
                Ok(ClickOutcome::Selected(square))
            }
            Some(current) => {
                self.selected = None;
                self.try_move(MoveKey::new(current, square), chooser)
                    .map(ClickOutcome::Moved)
            }
        }
    }

    /// Takes back the last move, including after the game has ended.
    pub fn undo(&mut self) -> Result<Move, ChessErrors> {
        let mv = self.game.undo().ok_or(ChessErrors::NothingToUndo)?;
        self.selected = None;
        self.info_lines.push(format!(
            "info string session undo {}",
            mv.to_notation()
        ));
        self.refresh()?;
        Ok(mv)
    }

    fn refresh(&mut self) -> Result<(), ChessErrors> {
        self.legal_moves = self.game.legal_moves()?;

        let status = self.game.status();
        if status.is_over() {
            self.info_lines
                .push(format!("info string session status {status}"));
        } else if self.game.check_info().in_check {
            self.info_lines.push(format!(
                "info string session check {}",
                self.game.side_to_move().short_name()
            ));
        }
        Ok(())
    }
}
