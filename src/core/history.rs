//! Round history: every guess made in the current game.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Append-only list of guesses in the order they were made.
///
/// Its length is the round count. Backed by `im::Vector` so snapshots of a
/// running game share structure instead of copying.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundHistory {
    guesses: Vector<i32>,
}

impl RoundHistory {
    /// Start a history with the opening guess.
    #[must_use]
    pub fn starting_with(guess: i32) -> Self {
        let mut guesses = Vector::new();
        guesses.push_back(guess);
        Self { guesses }
    }

    /// Record a new guess.
    pub fn push(&mut self, guess: i32) {
        self.guesses.push_back(guess);
    }

    /// Number of rounds played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    /// Check if no guess has been made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Most recent guess.
    #[must_use]
    pub fn last(&self) -> Option<i32> {
        self.guesses.last().copied()
    }

    /// Guesses in chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i32> + ExactSizeIterator + '_ {
        self.guesses.iter().copied()
    }

    /// Log entries most-recent-first, numbered from round 1.
    #[must_use]
    pub fn log(&self) -> Vec<GuessLogEntry> {
        self.iter()
            .enumerate()
            .rev()
            .map(|(index, guess)| GuessLogEntry { round: index + 1, guess })
            .collect()
    }
}

/// One line of the guess log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessLogEntry {
    /// Round number, starting at 1.
    pub round: usize,
    /// The guess made in that round.
    pub guess: i32,
}

impl std::fmt::Display for GuessLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} Opponent's guess: {}", self.round, self.guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_append() {
        let mut history = RoundHistory::starting_with(70);
        history.push(30);
        history.push(45);

        assert_eq!(history.len(), 3);
        assert!(!history.is_empty());
        assert_eq!(history.last(), Some(45));
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![70, 30, 45]);
    }

    #[test]
    fn test_history_log_most_recent_first() {
        let mut history = RoundHistory::starting_with(70);
        history.push(30);

        let log = history.log();
        assert_eq!(
            log,
            vec![
                GuessLogEntry { round: 2, guess: 30 },
                GuessLogEntry { round: 1, guess: 70 },
            ]
        );
        assert_eq!(log[1].to_string(), "#1 Opponent's guess: 70");
    }

    #[test]
    fn test_history_default_is_empty() {
        let history = RoundHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
        assert!(history.log().is_empty());
    }

    #[test]
    fn test_history_clone_is_independent() {
        let history = RoundHistory::starting_with(1);
        let mut copy = history.clone();
        copy.push(2);

        assert_eq!(history.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
