//! Player feedback and round outcomes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GuessError;

/// The player's claim about where the secret lies relative to the guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// The secret is below the current guess.
    Lower,
    /// The secret is above the current guess.
    Greater,
}

impl Feedback {
    /// The honest answer for `guess` when the secret is `secret`.
    ///
    /// Returns `None` when the guess is correct.
    #[must_use]
    pub fn truthful(guess: i32, secret: i32) -> Option<Self> {
        match guess.cmp(&secret) {
            std::cmp::Ordering::Greater => Some(Feedback::Lower),
            std::cmp::Ordering::Less => Some(Feedback::Greater),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Check if this feedback is a lie about `guess`.
    ///
    /// Equality is not a contradiction; a correct guess ends the game before
    /// feedback is asked for.
    #[must_use]
    pub fn contradicts(self, guess: i32, secret: i32) -> bool {
        match self {
            Feedback::Lower => guess < secret,
            Feedback::Greater => guess > secret,
        }
    }
}

impl FromStr for Feedback {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "lower" | "-" => Ok(Feedback::Lower),
            "g" | "greater" | "h" | "higher" | "+" => Ok(Feedback::Greater),
            other => Err(GuessError::UnknownFeedback(other.to_string())),
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::Lower => write!(f, "lower"),
            Feedback::Greater => write!(f, "greater"),
        }
    }
}

/// Result of applying feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A new guess was drawn; the game goes on.
    Continue,
    /// The feedback contradicts the secret. Nothing changed.
    Invalid,
    /// The current guess is the secret.
    Won {
        /// Rounds played, equal to the history length.
        rounds: usize,
    },
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

/// Stored engine state. Rejected feedback is never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    /// Waiting for feedback on the current guess.
    Active,
    /// The secret was found; terminal.
    Won {
        /// Rounds played.
        rounds: usize,
    },
}
