use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How strong Black's starting army is.
///
/// Selected once per game, it decides the initial layout of the [`Board`][`crate::chess::Board`].
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// A single row of black pawns.
    #[default]
    #[display(fmt = "easy")]
    Easy,
    /// Two rows of black pawns.
    #[display(fmt = "hard")]
    Hard,
    /// A single row of black pawns and a sliding black queen.
    #[display(fmt = "stupid")]
    Stupid,
}

/// The reason why parsing [`Difficulty`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse difficulty, expected one of `easy`, `hard` or `stupid`")]
pub struct ParseDifficultyError;

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            "stupid" => Ok(Difficulty::Stupid),
            _ => Err(ParseDifficultyError),
        }
    }
}
