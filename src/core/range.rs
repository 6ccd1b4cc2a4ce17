//! Half-open search range.

use serde::{Deserialize, Serialize};

use super::error::{GuessError, Result};

/// The interval `[lower, upper)` believed to contain the secret.
///
/// Never empty: every constructor and mutator keeps `lower < upper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRange {
    lower: i32,
    upper: i32,
}

impl SearchRange {
    /// Create a new range.
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper`.
    #[must_use]
    pub fn new(lower: i32, upper: i32) -> Self {
        assert!(lower < upper, "Search range [{}, {}) is empty", lower, upper);
        Self { lower, upper }
    }

    /// Create a new range, or `EmptyRange` if `lower >= upper`.
    pub fn try_new(lower: i32, upper: i32) -> Result<Self> {
        if lower < upper {
            Ok(Self { lower, upper })
        } else {
            Err(GuessError::EmptyRange { lower, upper })
        }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn lower(&self) -> i32 {
        self.lower
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn upper(&self) -> i32 {
        self.upper
    }

    /// Number of candidate values.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.upper.abs_diff(self.lower)
    }

    /// Check if a value lies in the range.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        self.lower <= value && value < self.upper
    }

    /// The secret is below `guess`: keep `[lower, guess)`.
    pub fn narrow_below(&mut self, guess: i32) -> Result<()> {
        let narrowed = Self::try_new(self.lower, guess.min(self.upper))?;
        *self = narrowed;
        Ok(())
    }

    /// The secret is above `guess`: keep `[guess + 1, upper)`.
    pub fn narrow_above(&mut self, guess: i32) -> Result<()> {
        let narrowed = Self::try_new((guess + 1).max(self.lower), self.upper)?;
        *self = narrowed;
        Ok(())
    }
}

impl std::fmt::Display for SearchRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}
