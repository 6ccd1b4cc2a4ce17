//! # guess-my-number
//!
//! The player picks a number from 1 to 99; the machine guesses it, narrowing
//! its search range on every "lower"/"greater" answer and refusing answers
//! that contradict the number.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Range, guess and history live in one
//!    `GuessEngine` value, built fresh for every game. Nothing resets
//!    implicitly.
//!
//! 2. **Always Terminates**: Guesses are drawn in O(1) from the range minus
//!    one excluded value, and every honest answer shrinks the range.
//!
//! 3. **Outcomes, Not Callbacks**: `apply_feedback` returns `Continue`,
//!    `Invalid` or `Won { rounds }` for the caller to act on.
//!
//! ## Modules
//!
//! - `core`: Secret, search range, history, RNG, sampling, configuration, errors
//! - `engine`: Guess engine state machine
//! - `session`: Screen controller driving the engine

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, GuessError, GuessLogEntry, MidpointSampler, RangeSampler, Result,
    RoundHistory, ScriptedSampler, SearchRange, SecretNumber,
};

pub use crate::engine::{EngineSnapshot, EngineStatus, Feedback, GuessEngine, Outcome};

pub use crate::session::{GameSession, GameSummary, Screen, SessionSnapshot};
