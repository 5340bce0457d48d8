use crate::chess::{Difficulty, Rules, Ruleset};
use crate::opponent::{Heuristic, Random};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

/// Runtime configuration for a [`Session`][`crate::game::Session`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The initial layout of the board.
    pub difficulty: Difficulty,

    /// Whether friendly fire is legal.
    pub ruleset: Ruleset,

    /// How long the opponent pauses before replying.
    #[serde(with = "humantime_serde")]
    #[cfg_attr(test, strategy(proptest::strategy::Strategy::prop_map(
        0u64..3_600_000,
        Duration::from_millis
    )))]
    pub pacing: Duration,

    /// Seeds the opponent's noise, drawn from system entropy if absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            difficulty: Difficulty::default(),
            ruleset: Ruleset::default(),
            pacing: Duration::from_millis(600),
            seed: None,
        }
    }
}

impl Config {
    /// The movement [`Rules`] implied by this configuration.
    pub fn rules(&self) -> Rules {
        Rules::new(self.ruleset)
    }

    /// The opponent implied by this configuration.
    pub fn opponent(&self) -> Heuristic {
        let random = match self.seed {
            Some(seed) => Random::seeded(seed),
            None => Random::default(),
        };

        Heuristic::new(self.rules(), random)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Config`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

impl FromStr for Config {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
