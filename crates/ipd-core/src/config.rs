//! Match configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::random::SeededRng;

/// Settings for a single match between two strategies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of rounds to play.
    pub turns: u32,
    /// Randomness seed for stochastic strategies.
    pub seed: [u8; 32],
    /// Index of this match, mixed into the seed.
    pub match_index: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            turns: 200,
            seed: [0u8; 32],
            match_index: 0,
        }
    }
}

impl MatchConfig {
    pub fn new(turns: u32) -> Self {
        Self {
            turns,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: [u8; 32], match_index: u32) -> Self {
        self.seed = seed;
        self.match_index = match_index;
        self
    }

    /// Parse and validate a JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turns == 0 {
            return Err(ConfigError::Invalid("turns must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Private random stream for the player in `slot` (0 or 1).
    pub fn player_rng(&self, slot: u32) -> SeededRng {
        SeededRng::new(&self.seed, self.match_index).fork(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.turns, 200);
        assert_eq!(config.match_index, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = MatchConfig::from_json(r#"{"turns": 12}"#).unwrap();
        assert_eq!(config, MatchConfig::new(12));
    }

    #[test]
    fn test_from_json_rejects_zero_turns() {
        let err = MatchConfig::from_json(r#"{"turns": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let err = MatchConfig::from_json(r#"{"rounds": 5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_player_streams_differ() {
        let config = MatchConfig::new(10).with_seed([9u8; 32], 4);
        let mut a = config.player_rng(0);
        let mut b = config.player_rng(1);
        assert_ne!(a.next_u64(), b.next_u64());
        assert_eq!(config.player_rng(0), config.player_rng(0));
    }
}
