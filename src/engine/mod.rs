//! Guess engine: range narrowing, lie detection and the win check.
//!
//! The engine is driven by a caller who knows the secret:
//! - `start` draws the opening guess, never equal to the secret
//! - `apply_feedback` validates, narrows and resamples
//! - `Outcome::Won` ends the game
//!
//! Presentation (showing guesses, collecting button presses) lives with the
//! caller; see `session` for the controller used by the terminal front end.

mod feedback;
mod guess_engine;

pub use feedback::{EngineStatus, Feedback, Outcome};
pub use guess_engine::{EngineSnapshot, GuessEngine};
