//! The number the player picks and the machine has to find.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::{GuessError, Result};

/// A validated secret, guaranteed to lie within the configured bounds.
///
/// The only way to obtain one is through [`SecretNumber::new`] or
/// [`SecretNumber::parse`], so the engine never has to re-check it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretNumber(i32);

impl SecretNumber {
    /// Validate a secret against the configured bounds.
    pub fn new(value: i32, config: &GameConfig) -> Result<Self> {
        if config.initial_range().contains(value) {
            Ok(Self(value))
        } else {
            Err(GuessError::SecretOutOfRange {
                value,
                lower: config.lower,
                upper: config.upper,
            })
        }
    }

    /// Parse player input, e.g. the text of a number field.
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self> {
        let trimmed = text.trim();
        let value = trimmed
            .parse::<i32>()
            .map_err(|_| GuessError::NotANumber(trimmed.to_string()))?;
        Self::new(value, config)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
