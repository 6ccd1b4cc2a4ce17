//! Error types for the guessing engine and its session controller.
//!
//! Dishonest feedback is not an error: it is reported as
//! [`Outcome::Invalid`](crate::engine::Outcome::Invalid) and the game carries on.
//! Everything here is either bad user input (recoverable) or a caller
//! asking for something the current screen cannot do.

/// Errors produced by the library.
#[derive(thiserror::Error, Debug)]
pub enum GuessError {
    /// The entered text is not an integer.
    #[error("Invalid number: `{0}` is not a number")]
    NotANumber(String),

    /// The secret lies outside the configured bounds.
    #[error("Invalid number: {value} must be between {lower} and {max}", max = .upper - 1)]
    SecretOutOfRange { value: i32, lower: i32, upper: i32 },

    /// A range operation would leave no candidate values.
    #[error("Empty search range [{lower}, {upper})")]
    EmptyRange { lower: i32, upper: i32 },

    /// The only candidate in range is the excluded value.
    #[error("Cannot sample from [{lower}, {upper}) excluding {exclude}")]
    DegenerateRange { lower: i32, upper: i32, exclude: i32 },

    /// Text that is neither "lower" nor "greater".
    #[error("Unknown feedback `{0}` (expected lower or greater)")]
    UnknownFeedback(String),

    /// Feedback was given while no game is in progress.
    #[error("No game in progress")]
    NotPlaying,

    /// A number was picked while a game is running.
    #[error("A game is already in progress")]
    GameInProgress,

    /// A number was picked while the result of the last game is shown.
    #[error("The game is over, start a new game first")]
    GameOver,

    /// A session snapshot could not be encoded or decoded.
    #[error("Snapshot error (error: {0})")]
    Snapshot(#[from] bincode::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GuessError>;
