//! Match configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Two cards leave the shared deck every round.
pub const DECK_ROUNDS: u32 = 26;

/// Configuration for a match. Fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds played before the match ends.
    pub max_rounds: u32,
    /// Time units between automatic rounds.
    pub cadence: u32,
    /// Wall-clock length of one time unit, in milliseconds.
    pub unit_ms: u64,
    /// Name of the scripted opponent.
    pub opponent_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            cadence: 5,
            unit_ms: 1000,
            opponent_name: "AI Opponent".into(),
        }
    }
}

impl GameConfig {
    /// Reads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    /// Sets the round limit.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Sets the cadence, in time units.
    pub fn with_cadence(mut self, cadence: u32) -> Self {
        self.cadence = cadence;
        self
    }

    /// Sets the length of a time unit, in milliseconds.
    pub fn with_unit_ms(mut self, unit_ms: u64) -> Self {
        self.unit_ms = unit_ms;
        self
    }

    /// Checks that the configuration describes a playable match.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_rounds == 0 || self.max_rounds > DECK_ROUNDS {
            return Err(ConfigError::InvalidMaxRounds {
                got: self.max_rounds,
                max: DECK_ROUNDS,
            });
        }
        if self.cadence == 0 {
            return Err(ConfigError::InvalidCadence);
        }
        if self.unit_ms == 0 {
            return Err(ConfigError::InvalidUnit);
        }
        if self.round_period().is_none() {
            return Err(ConfigError::RoundPeriodOverflow {
                cadence: self.cadence,
                unit_ms: self.unit_ms,
            });
        }
        Ok(self)
    }

    /// Wall-clock time between automatic rounds, if it fits in a `Duration`.
    pub fn round_period(&self) -> Option<Duration> {
        self.unit().checked_mul(self.cadence)
    }

    /// Wall-clock length of one time unit.
    pub fn unit(&self) -> Duration {
        Duration::from_millis(self.unit_ms)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default().validate().unwrap();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.cadence, 5);
        assert_eq!(config.unit(), Duration::from_secs(1));
    }

    #[test]
    fn rejects_unplayable_limits() {
        assert_matches!(
            GameConfig::default().with_max_rounds(0).validate(),
            Err(ConfigError::InvalidMaxRounds { got: 0, .. })
        );
        assert_matches!(
            GameConfig::default().with_max_rounds(27).validate(),
            Err(ConfigError::InvalidMaxRounds { got: 27, max: 26 })
        );
        assert_matches!(
            GameConfig::default().with_cadence(0).validate(),
            Err(ConfigError::InvalidCadence)
        );
        assert_matches!(
            GameConfig::default().with_unit_ms(0).validate(),
            Err(ConfigError::InvalidUnit)
        );
        assert_matches!(
            GameConfig::default()
                .with_unit_ms(u64::MAX)
                .with_cadence(2000)
                .validate(),
            Err(ConfigError::RoundPeriodOverflow {
                cadence: 2000,
                unit_ms: u64::MAX
            })
        );
    }

    #[test]
    fn long_units_are_fine_when_the_period_fits() {
        let config = GameConfig::default()
            .with_unit_ms(u64::MAX)
            .with_cadence(1)
            .validate()
            .unwrap();
        assert_eq!(config.round_period(), Some(Duration::from_millis(u64::MAX)));
    }

    #[test]
    fn partial_json_takes_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"max_rounds": 3}"#).unwrap();
        assert_eq!(config, GameConfig::default().with_max_rounds(3));
    }
}
