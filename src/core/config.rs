//! Game configuration.
//!
//! The classic game uses secrets 1 to 99, i.e. the search range `[1, 100)`.
//! Both bounds and the RNG seed can be changed for testing or variants.

use serde::{Deserialize, Serialize};

use super::range::SearchRange;

/// Default inclusive lower bound.
pub const DEFAULT_LOWER: i32 = 1;

/// Default exclusive upper bound.
pub const DEFAULT_UPPER: i32 = 100;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest allowed secret, and the initial lower bound.
    pub lower: i32,

    /// One past the largest allowed secret, and the initial upper bound.
    pub upper: i32,

    /// Seed for guess sampling. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret bounds `[lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics unless the range has at least two values; with one value the
    /// first guess could not avoid the secret.
    #[must_use]
    pub fn with_bounds(mut self, lower: i32, upper: i32) -> Self {
        assert!(
            i64::from(upper) - i64::from(lower) >= 2,
            "Bounds [{}, {}) must hold at least 2 values",
            lower,
            upper
        );
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The range every new game starts from.
    #[must_use]
    pub fn initial_range(&self) -> SearchRange {
        SearchRange::new(self.lower, self.upper)
    }

    /// Largest allowed secret.
    #[must_use]
    pub fn max_secret(&self) -> i32 {
        self.upper - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.lower, 1);
        assert_eq!(config.upper, 100);
        assert_eq!(config.max_secret(), 99);
        assert_eq!(config.seed, None);
        assert_eq!(config.initial_range(), SearchRange::new(1, 100));
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new().with_bounds(10, 20).with_seed(7);
        assert_eq!(config.initial_range(), SearchRange::new(10, 20));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    #[should_panic(expected = "must hold at least 2 values")]
    fn test_config_single_value_bounds() {
        let _ = GameConfig::new().with_bounds(5, 6);
    }
}
