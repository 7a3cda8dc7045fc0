//! Line-oriented terminal front end.
//!
//! Interactive commands: `<from><to>` (for example `e2e4`), `click <square>`,
//! `undo`, `moves`, `board`, `quit`. Diagnostics from the session are
//! flushed as `info string` lines after every command. In auto-play mode
//! both sides pick uniformly random legal moves.

use std::io::{self, BufRead, Write};

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::driver::config::DriverConfig;
use crate::driver::promotion::{FixedPromotion, PromotionChooser, RandomPromotion, StdinPrompt};
use crate::driver::session::{ClickOutcome, GameSession};
use crate::game_state::chess_types::GameStatus;
use crate::moves::move_descriptions::MoveKey;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::render_game_state::{render_board, render_game_state};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Empty,
    Move(MoveKey),
    Click(crate::game_state::chess_types::Square),
    Undo,
    Moves,
    Board,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, ChessErrors> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(Command::Empty);
    };

    match cmd {
        "quit" | "exit" => Ok(Command::Quit),
        "undo" => Ok(Command::Undo),
        "moves" => Ok(Command::Moves),
        "board" => Ok(Command::Board),
        "click" => {
            let square = parts
                .next()
                .ok_or_else(|| ChessErrors::InvalidAlgebraicString(line.trim().to_owned()))?;
            Ok(Command::Click(algebraic_to_square(square)?))
        }
        text => Ok(Command::Move(text.parse()?)),
    }
}

pub fn run_stdio_loop(config: &DriverConfig) -> Result<(), ChessErrors> {
    let mut stdout = io::stdout();
    if config.auto_play {
        run_auto_play(config, &mut stdout)?;
        return Ok(());
    }
    let stdin = io::stdin();
    run_interactive(config, stdin.lock(), &mut stdout)
}

pub fn run_interactive<R: BufRead, W: Write>(
    config: &DriverConfig,
    mut input: R,
    out: &mut W,
) -> Result<(), ChessErrors> {
    let mut session = GameSession::new()?;
    let mut fixed = config.promotion.map(FixedPromotion::new).transpose()?;

    flush_info(&mut session, out)?;
    writeln!(out, "{}", render_game_state(session.game()))?;

    let mut line = String::new();
    loop {
        write!(
            out,
            "{} to move> ",
            session.game().side_to_move().short_name()
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "info string error {err}")?;
                continue;
            }
        };

        let result = match command {
            Command::Empty => Ok(()),
            Command::Quit => break,
            Command::Board => {
                let targets = session
                    .selected()
                    .map(|square| session.targets_from(square))
                    .unwrap_or_default();
                writeln!(out, "{}", render_board(session.game().board(), &targets))?;
                Ok(())
            }
            Command::Moves => {
                let mut keys: Vec<MoveKey> =
                    session.legal_moves().iter().map(|mv| mv.key()).collect();
                keys.sort();
                let listed: Vec<String> = keys.iter().map(|key| key.to_string()).collect();
                writeln!(out, "moves {}", listed.join(" "))?;
                Ok(())
            }
            Command::Undo => session.undo().map(|_| ()),
            Command::Move(key) => {
                with_chooser(&mut fixed, &mut input, out, |chooser| {
                    session.try_move(key, chooser)
                })
                .map(|_| ())
            }
            Command::Click(square) => {
                match with_chooser(&mut fixed, &mut input, out, |chooser| {
                    session.click(square, chooser)
                }) {
                    Ok(ClickOutcome::Selected(from)) => {
                        let targets = session.targets_from(from);
                        let listed: Vec<String> =
                            targets.iter().map(|sq| square_to_algebraic(*sq)).collect();
                        writeln!(
                            out,
                            "info string selected {} targets {}",
                            square_to_algebraic(from),
                            listed.join(" ")
                        )?;
                        writeln!(out, "{}", render_board(session.game().board(), &targets))?;
                        Ok(())
                    }
                    Ok(ClickOutcome::Deselected) => {
                        writeln!(out, "info string deselected")?;
                        Ok(())
                    }
                    Ok(ClickOutcome::Ignored) => {
                        writeln!(out, "info string nothing to select")?;
                        Ok(())
                    }
                    Ok(ClickOutcome::Moved(_)) => Ok(()),
                    Err(err) => Err(err),
                }
            }
        };

        if let Err(err) = result {
            writeln!(out, "info string error {err}")?;
        }
        if matches!(command, Command::Move(_) | Command::Undo | Command::Click(_))
            && flush_info(&mut session, out)? > 0
        {
            writeln!(out, "{}", render_game_state(session.game()))?;
        }
    }

    flush_info(&mut session, out)?;
    Ok(())
}

/// Plays random legal moves for both sides until the game ends or
/// `config.max_plies` plies have been played.
pub fn run_auto_play<W: Write>(config: &DriverConfig, out: &mut W) -> Result<GameStatus, ChessErrors> {
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut chooser: Box<dyn PromotionChooser> = match config.promotion {
        Some(kind) => Box::new(FixedPromotion::new(kind)?),
        None => Box::new(RandomPromotion::seeded(seed.wrapping_add(1))),
    };

    let mut session = GameSession::new()?;
    writeln!(out, "info string auto_play seed {seed}")?;
    flush_info(&mut session, out)?;

    let mut plies = 0usize;
    while plies < config.max_plies && !session.status().is_over() {
        let Some(picked) = session.legal_moves().choose(&mut rng).copied() else {
            break;
        };
        let played = session.try_move(picked.key(), chooser.as_mut())?;
        plies += 1;
        writeln!(out, "{plies:>3}. {}", played.to_long_algebraic())?;
        flush_info(&mut session, out)?;
    }

    writeln!(out, "{}", render_game_state(session.game()))?;
    writeln!(
        out,
        "info string auto_play result {} plies {plies}",
        session.status()
    )?;
    Ok(session.status())
}

/// Runs `f` with the configured fixed chooser, or with a prompt on the
/// driver's own input when none is configured.
fn with_chooser<R: BufRead, W: Write, T>(
    fixed: &mut Option<FixedPromotion>,
    input: &mut R,
    out: &mut W,
    f: impl FnOnce(&mut dyn PromotionChooser) -> T,
) -> T {
    match fixed {
        Some(chooser) => f(chooser),
        None => {
            let mut prompt = StdinPrompt::new(input, out);
            f(&mut prompt)
        }
    }
}

/// Writes and clears the session's pending diagnostics. Returns how many
/// lines were written.
fn flush_info<W: Write>(session: &mut GameSession, out: &mut W) -> Result<usize, ChessErrors> {
    let lines = session.drain_info_lines();
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    Ok(lines.len())
}
