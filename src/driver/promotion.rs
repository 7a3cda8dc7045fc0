//! Promotion piece selection.
//!
//! The generator lists a promoting pawn move once. Before the move is applied
//! the driver asks a `PromotionChooser` which piece the pawn becomes.

use std::io::{BufRead, Write};

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::PieceKind;

pub trait PromotionChooser {
    /// Returns Queen, Rook, Knight or Bishop.
    fn request_promotion_choice(&mut self) -> Result<PieceKind, ChessErrors>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn request_promotion_choice(&mut self) -> Result<PieceKind, ChessErrors> {
        Ok(PieceKind::Queen)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedPromotion {
    kind: PieceKind,
}

impl FixedPromotion {
    pub fn new(kind: PieceKind) -> Result<Self, ChessErrors> {
        if !PROMOTION_CHOICES.contains(&kind) {
            return Err(ChessErrors::InvalidPromotionChoice(format!("{kind:?}")));
        }
        Ok(Self { kind })
    }

    /// Parses one of `Q`, `R`, `N`, `B`.
    pub fn from_letter(letter: &str) -> Result<Self, ChessErrors> {
        PieceKind::from_promotion_letter(letter)
            .map(|kind| Self { kind })
            .ok_or_else(|| ChessErrors::InvalidPromotionChoice(letter.to_owned()))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }
}

impl PromotionChooser for FixedPromotion {
    fn request_promotion_choice(&mut self) -> Result<PieceKind, ChessErrors> {
        Ok(self.kind)
    }
}

/// Picks uniformly among the four promotion pieces.
pub struct RandomPromotion {
    rng: StdRng,
}

impl RandomPromotion {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PromotionChooser for RandomPromotion {
    fn request_promotion_choice(&mut self) -> Result<PieceKind, ChessErrors> {
        Ok(*PROMOTION_CHOICES
            .choose(&mut self.rng)
            .unwrap_or(&PieceKind::Queen))
    }
}

/// Asks on a line-oriented terminal until one of `Q R N B` is typed.
/// Letters are case sensitive. End of input is an error.
pub struct StdinPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> PromotionChooser for StdinPrompt<R, W> {
    fn request_promotion_choice(&mut self) -> Result<PieceKind, ChessErrors> {
        let mut line = String::new();
        loop {
            write!(self.output, "promote to (Q/R/N/B): ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ChessErrors::Io(
                    "input closed before a promotion piece was chosen".to_owned(),
                ));
            }

            let answer = line.trim();
            match PieceKind::from_promotion_letter(answer) {
                Some(kind) => return Ok(kind),
                None => writeln!(
                    self.output,
                    "info string promotion rejected {}",
                    ChessErrors::InvalidPromotionChoice(answer.to_owned())
                )?,
            }
        }
    }
}
