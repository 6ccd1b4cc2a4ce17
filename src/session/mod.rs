//! Game session: the controller between the player and the engine.
//!
//! Mirrors the three screens of the game:
//! - **StartGame**: the player enters a number from 1 to 99
//! - **Playing**: the engine guesses, the player answers lower or greater
//! - **GameOver**: rounds taken and the number, until a new game starts
//!
//! The session owns the secret; the engine only sees it per call.

mod controller;

pub use controller::{GameSession, GameSummary, Screen, ScreenSnapshot, SessionSnapshot};
