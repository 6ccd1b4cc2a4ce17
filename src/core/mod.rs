//! Core types: secret, search range, round history, RNG, sampling, configuration.
//!
//! These are small value types with their invariants enforced at construction.
//! The engine composes them; it never reaches around them.

pub mod config;
pub mod error;
pub mod history;
pub mod range;
pub mod rng;
pub mod sampler;
pub mod secret;

pub use config::{GameConfig, DEFAULT_LOWER, DEFAULT_UPPER};
pub use error::{GuessError, Result};
pub use history::{GuessLogEntry, RoundHistory};
pub use range::SearchRange;
pub use rng::{GameRng, GameRngState};
pub use sampler::{MidpointSampler, RangeSampler, ScriptedSampler};
pub use secret::SecretNumber;
