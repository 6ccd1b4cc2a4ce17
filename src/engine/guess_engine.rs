//! The guessing state machine.
//!
//! ```text
//!   start ──► Active ──feedback──► Active   (Continue: narrowed + resampled)
//!               │  └──lie──────────► Active   (Invalid: unchanged)
//!               └──guess == secret──► Won     (terminal)
//! ```
//!
//! The engine never stores the secret. The caller passes it to `start` (to
//! keep it out of the first guess) and to every `apply_feedback` (to catch
//! lies and detect the win).

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::feedback::{EngineStatus, Feedback, Outcome};
use crate::core::{
    GameConfig, GameRng, GameRngState, RangeSampler, RoundHistory, SearchRange, SecretNumber,
};

/// Guess engine for one game.
///
/// Owns the search range, the current guess, the round history and the
/// sampler that produces guesses.
#[derive(Clone, Debug)]
pub struct GuessEngine<S = GameRng> {
    range: SearchRange,
    current_guess: i32,
    history: RoundHistory,
    status: EngineStatus,
    sampler: S,
}

impl<S: RangeSampler> GuessEngine<S> {
    /// Start a game: full range, first guess drawn anywhere but the secret.
    #[must_use]
    pub fn start(secret: SecretNumber, config: &GameConfig, mut sampler: S) -> Self {
        let range = config.initial_range();
        let first = sampler.sample(range.lower(), range.upper(), secret.value());
        info!("New game in {}, opening guess {}", range, first);

        Self {
            range,
            current_guess: first,
            history: RoundHistory::starting_with(first),
            status: EngineStatus::Active,
            sampler,
        }
    }

    /// Start over with a new secret, keeping the sampler.
    ///
    /// Every field is reinitialised; nothing from the previous game survives.
    pub fn reset(&mut self, secret: SecretNumber, config: &GameConfig) {
        let range = config.initial_range();
        let first = self.sampler.sample(range.lower(), range.upper(), secret.value());
        info!("Game reset to {}, opening guess {}", range, first);

        self.range = range;
        self.current_guess = first;
        self.history = RoundHistory::starting_with(first);
        self.status = EngineStatus::Active;
    }

    /// Apply the player's feedback on the current guess.
    ///
    /// - Lies return [`Outcome::Invalid`] and change nothing.
    /// - Honest feedback narrows the range, draws a new guess and appends it
    ///   to the history. If that guess is the secret the engine becomes Won.
    /// - Once Won, every call returns the same `Won` without mutation.
    pub fn apply_feedback(&mut self, feedback: Feedback, secret: SecretNumber) -> Outcome {
        if let EngineStatus::Won { rounds } = self.status {
            return Outcome::Won { rounds };
        }

        let guess = self.current_guess;
        if feedback.contradicts(guess, secret.value()) {
            warn!("Rejected feedback `{}` on guess {}", feedback, guess);
            return Outcome::Invalid;
        }

        let mut narrowed = self.range;
        let result = match feedback {
            Feedback::Lower => narrowed.narrow_below(guess),
            Feedback::Greater => narrowed.narrow_above(guess),
        };
        // Only reachable when the secret passed in is not the one this game
        // has been narrowing towards.
        if result.is_err() || !narrowed.contains(secret.value()) {
            warn!("Rejected feedback `{}` on guess {}: {} outside {}", feedback, guess, secret, self.range);
            return Outcome::Invalid;
        }
        self.range = narrowed;

        // The previous guess is outside the narrowed range, so the draw
        // cannot be degenerate.
        let next = self.sampler.sample(self.range.lower(), self.range.upper(), guess);
        debug!("Feedback `{}` on {}: range {}, next guess {}", feedback, guess, self.range, next);

        self.current_guess = next;
        self.history.push(next);
        self.settle(secret)
    }

    /// Sampler used for guesses.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    fn settle(&mut self, secret: SecretNumber) -> Outcome {
        match self.check_win(secret) {
            Some(rounds) => {
                info!("Found {} in {} rounds", secret, rounds);
                self.status = EngineStatus::Won { rounds };
                Outcome::Won { rounds }
            }
            None => Outcome::Continue,
        }
    }
}

impl<S> GuessEngine<S> {
    /// Terminal check: the round count if the current guess is the secret.
    #[must_use]
    pub fn check_win(&self, secret: SecretNumber) -> Option<usize> {
        (self.current_guess == secret.value()).then(|| self.history.len())
    }

    /// The guess currently shown to the player.
    #[must_use]
    pub fn current_guess(&self) -> i32 {
        self.current_guess
    }

    /// The live search range.
    #[must_use]
    pub fn range(&self) -> SearchRange {
        self.range
    }

    /// All guesses so far.
    #[must_use]
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Rounds played, including the current one.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// Stored status.
    #[must_use]
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Check if the secret has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self.status, EngineStatus::Won { .. })
    }
}

// === Snapshots ===

/// Serializable engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub range: SearchRange,
    pub current_guess: i32,
    pub history: RoundHistory,
    pub status: EngineStatus,
    pub rng: GameRngState,
}

impl GuessEngine<GameRng> {
    /// Capture the full state, RNG position included.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            range: self.range,
            current_guess: self.current_guess,
            history: self.history.clone(),
            status: self.status,
            rng: self.sampler.state(),
        }
    }

    /// Rebuild an engine that continues exactly where the snapshot left off.
    #[must_use]
    pub fn restore(snapshot: &EngineSnapshot) -> Self {
        Self {
            range: snapshot.range,
            current_guess: snapshot.current_guess,
            history: snapshot.history.clone(),
            status: snapshot.status,
            sampler: GameRng::from_state(&snapshot.rng),
        }
    }
}
