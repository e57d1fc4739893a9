//! Configuration for a command parser.

use serde::{Deserialize, Serialize};

/// Tunables for the parser and its typo corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// How many accepted verbs the command history remembers.
    pub history_capacity: usize,
    /// Whether misspelled verbs are corrected.
    pub typo_correction: bool,
    /// Tokens shorter than this are never corrected.
    pub min_correction_len: usize,
    /// Tokens at least this long use `max_distance_long`.
    pub long_token_len: usize,
    /// Largest edit distance accepted for tokens shorter than `long_token_len`.
    pub max_distance_short: usize,
    /// Largest edit distance accepted for long tokens.
    pub max_distance_long: usize,
    /// Leading characters a token must share with a candidate verb.
    pub shared_prefix_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            history_capacity: 20,
            typo_correction: true,
            min_correction_len: 4,
            long_token_len: 7,
            max_distance_short: 1,
            max_distance_long: 2,
            shared_prefix_len: 2,
        }
    }
}

impl ParserConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the command history capacity.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Enable or disable typo correction.
    pub fn with_typo_correction(mut self, enabled: bool) -> Self {
        self.typo_correction = enabled;
        self
    }

    /// Set the shortest token length eligible for correction.
    pub fn with_min_correction_len(mut self, len: usize) -> Self {
        self.min_correction_len = len;
        self
    }

    /// Set the edit distance limits for short and long tokens.
    pub fn with_max_distances(mut self, short: usize, long: usize) -> Self {
        self.max_distance_short = short;
        self.max_distance_long = long;
        self
    }

    /// Set the token length from which the long distance limit applies.
    pub fn with_long_token_len(mut self, len: usize) -> Self {
        self.long_token_len = len;
        self
    }

    /// Set how many leading characters a correction must keep.
    pub fn with_shared_prefix_len(mut self, len: usize) -> Self {
        self.shared_prefix_len = len;
        self
    }

    /// The largest edit distance accepted for a token of `len` characters,
    /// or `None` if the token is too short to correct.
    pub fn max_distance_for(&self, len: usize) -> Option<usize> {
        if !self.typo_correction || len < self.min_correction_len {
            None
        } else if len < self.long_token_len {
            Some(self.max_distance_short)
        } else {
            Some(self.max_distance_long)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ParserConfig::new();
        assert_eq!(config.history_capacity, 20);
        assert!(config.typo_correction);
        assert_eq!(config.min_correction_len, 4);
        assert_eq!(config.shared_prefix_len, 2);
    }

    #[test]
    fn builder_chain() {
        let config = ParserConfig::new()
            .with_history_capacity(5)
            .with_typo_correction(false)
            .with_min_correction_len(4)
            .with_max_distances(0, 1)
            .with_long_token_len(9)
            .with_shared_prefix_len(1);
        assert_eq!(config.history_capacity, 5);
        assert!(!config.typo_correction);
        assert_eq!(config.min_correction_len, 4);
        assert_eq!(config.max_distance_short, 0);
        assert_eq!(config.max_distance_long, 1);
        assert_eq!(config.long_token_len, 9);
        assert_eq!(config.shared_prefix_len, 1);
    }

    #[test]
    fn distance_by_length() {
        let config = ParserConfig::default();
        assert_eq!(config.max_distance_for(3), None);
        assert_eq!(config.max_distance_for(4), Some(1));
        assert_eq!(config.max_distance_for(6), Some(1));
        assert_eq!(config.max_distance_for(7), Some(2));
    }

    #[test]
    fn disabled_correction_has_no_distance() {
        let config = ParserConfig::default().with_typo_correction(false);
        assert_eq!(config.max_distance_for(8), None);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: ParserConfig = serde_json::from_str(r#"{ "history_capacity": 3 }"#).unwrap();
        assert_eq!(config.history_capacity, 3);
        assert!(config.typo_correction);
    }
}
