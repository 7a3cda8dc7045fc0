//! Terminal driver configuration from flags and environment variables.
//!
//! Flags win over environment variables. Recognized inputs:
//! `--auto` / `PLUM_RULES_AUTO=1`, `--seed N` / `PLUM_RULES_SEED`,
//! `--max-plies N` and `--promotion Q|R|N|B`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;

pub const DEFAULT_MAX_PLIES: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Both sides play random legal moves without reading stdin.
    pub auto_play: bool,
    pub seed: Option<u64>,
    /// Auto-play stops after this many plies.
    pub max_plies: usize,
    /// Fixed promotion piece; `None` means ask on stdin (or pick at random
    /// in auto-play).
    pub promotion: Option<PieceKind>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            auto_play: false,
            seed: None,
            max_plies: DEFAULT_MAX_PLIES,
            promotion: None,
        }
    }
}

impl DriverConfig {
    /// Reads `std::env::args` (skipping the program name) and the process
    /// environment.
    pub fn from_env() -> Result<Self, ChessErrors> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |name| std::env::var(name).ok())
    }

    pub fn parse(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ChessErrors> {
        let mut config = Self::default();

        if let Some(value) = env("PLUM_RULES_AUTO") {
            config.auto_play = matches!(value.trim(), "1" | "true" | "yes");
        }
        if let Some(value) = env("PLUM_RULES_SEED") {
            config.seed = Some(parse_number(&value, "PLUM_RULES_SEED")?);
        }

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--auto" => config.auto_play = true,
                "--seed" => {
                    config.seed = Some(parse_number(flag_value(args, i)?, "--seed")?);
                    i += 1;
                }
                "--max-plies" => {
                    config.max_plies = parse_number(flag_value(args, i)?, "--max-plies")?;
                    i += 1;
                }
                "--promotion" => {
                    let letter = flag_value(args, i)?;
                    config.promotion = Some(
                        PieceKind::from_promotion_letter(letter)
                            .ok_or_else(|| ChessErrors::InvalidPromotionChoice(letter.to_owned()))?,
                    );
                    i += 1;
                }
                other => {
                    return Err(ChessErrors::InvalidConfig(format!("unknown argument {other}")));
                }
            }
            i += 1;
        }

        Ok(config)
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str, ChessErrors> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ChessErrors::InvalidConfig(format!("{} needs a value", args[i])))
}

fn parse_number<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, ChessErrors> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ChessErrors::InvalidConfig(format!("{name} expects a number, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_input() {
        let config = DriverConfig::parse(&[], no_env).expect("empty input is valid");
        assert_eq!(config, DriverConfig::default());
        assert_eq!(config.max_plies, 200);
    }

    #[test]
    fn flags_are_parsed() {
        let config = DriverConfig::parse(
            &args(&["--auto", "--seed", "42", "--max-plies", "12", "--promotion", "N"]),
            no_env,
        )
        .expect("flags are valid");
        assert!(config.auto_play);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_plies, 12);
        assert_eq!(config.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn environment_is_read_and_flags_override_it() {
        let env = |name: &str| match name {
            "PLUM_RULES_AUTO" => Some("1".to_owned()),
            "PLUM_RULES_SEED" => Some("7".to_owned()),
            _ => None,
        };
        let config = DriverConfig::parse(&args(&["--seed", "9"]), env).expect("valid");
        assert!(config.auto_play);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            DriverConfig::parse(&args(&["--seed"]), no_env),
            Err(ChessErrors::InvalidConfig(_))
        ));
        assert!(matches!(
            DriverConfig::parse(&args(&["--max-plies", "many"]), no_env),
            Err(ChessErrors::InvalidConfig(_))
        ));
        assert_eq!(
            DriverConfig::parse(&args(&["--promotion", "q"]), no_env),
            Err(ChessErrors::InvalidPromotionChoice("q".to_owned()))
        );
        assert!(matches!(
            DriverConfig::parse(&args(&["--fast"]), no_env),
            Err(ChessErrors::InvalidConfig(_))
        ));
    }
}
