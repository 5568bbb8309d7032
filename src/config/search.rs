//! Search engine configuration module.
//!
//! Bounds applied by the prefix-search engine: accepted word length and the
//! number of results a single query may return.

use super::{ConfigResult, Validate};
use crate::data_structures::word_trie::DEFAULT_MAX_WORD_LENGTH;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest accepted `max_word_length`. Trie traversal and teardown recurse
/// once per character, so the bound also bounds stack depth.
pub const MAX_WORD_LENGTH_CEILING: usize = 1024;

/// Prefix-search engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Longest word the engine will store, in characters
    pub max_word_length: usize,

    /// Number of results returned when a query does not specify a limit
    pub default_limit: usize,

    /// Upper bound applied to explicitly requested limits
    pub max_limit: usize,

    /// Interval between background rebuilds from the store, in seconds (0 disables)
    pub rebuild_interval_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            default_limit: 10,
            max_limit: 1000,
            rebuild_interval_secs: 0,
        }
    }
}

impl SearchConfig {
    /// Background rebuild interval, if enabled.
    pub fn rebuild_interval(&self) -> Option<Duration> {
        (self.rebuild_interval_secs > 0).then(|| Duration::from_secs(self.rebuild_interval_secs))
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        if self.max_word_length > MAX_WORD_LENGTH_CEILING {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_word_length".to_string(),
                message: format!(
                    "must be at most {MAX_WORD_LENGTH_CEILING}, got {}",
                    self.max_word_length
                ),
            });
        }

        if self.default_limit == 0 {
            return Err(ConfigError::ValidationError(
                "default_limit must be greater than 0".to_string(),
            ));
        }

        if self.max_limit < self.default_limit {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_limit".to_string(),
                message: format!(
                    "must be at least default_limit ({}), got {}",
                    self.default_limit, self.max_limit
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_interval_disabled_by_zero() {
        let mut config = SearchConfig::default();
        assert_eq!(config.rebuild_interval(), None);

        config.rebuild_interval_secs = 30;
        assert_eq!(config.rebuild_interval(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_max_limit_below_default_is_rejected() {
        let config = SearchConfig {
            default_limit: 20,
            max_limit: 5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_max_word_length_is_bounded() {
        let mut config = SearchConfig {
            max_word_length: MAX_WORD_LENGTH_CEILING,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.max_word_length = MAX_WORD_LENGTH_CEILING + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));
    }
}
