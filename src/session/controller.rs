//! Game session controller.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{
    GameConfig, GameRng, GameRngState, GuessError, GuessLogEntry, Result, RoundHistory,
    SecretNumber,
};
use crate::engine::{EngineSnapshot, Feedback, GuessEngine, Outcome};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Rounds the engine needed.
    pub rounds: usize,
    /// The number it was looking for.
    pub secret: SecretNumber,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Your phone needed {} rounds to guess the number {}",
            self.rounds, self.secret
        )
    }
}

/// Which screen the session is on.
#[derive(Clone, Debug)]
pub enum Screen {
    /// Waiting for the player to pick a number.
    StartGame,
    /// A game is running.
    Playing {
        secret: SecretNumber,
        engine: GuessEngine<GameRng>,
    },
    /// The engine found the number.
    GameOver {
        summary: GameSummary,
        history: RoundHistory,
    },
}

/// Owns the secret and the engine for the current game, and moves between
/// screens.
///
/// Each game gets a fresh engine seeded from a fork of the session RNG, so a
/// seeded session replays the same guesses game after game.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    screen: Screen,
}

impl GameSession {
    /// Create a session on the start screen.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!("Session seeded with {}", rng.seed());
        Self {
            config,
            rng,
            screen: Screen::StartGame,
        }
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current screen.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Pick the secret from player input and start a game.
    ///
    /// Returns the opening guess. Bad input leaves the session on the start
    /// screen.
    pub fn pick_number(&mut self, text: &str) -> Result<i32> {
        match self.screen {
            Screen::StartGame => {}
            Screen::Playing { .. } => return Err(GuessError::GameInProgress),
            Screen::GameOver { .. } => return Err(GuessError::GameOver),
        }

        let secret = SecretNumber::parse(text, &self.config).map_err(|err| {
            warn!("Rejected secret input `{}`: {}", text.trim(), err);
            err
        })?;
        let engine = GuessEngine::start(secret, &self.config, self.rng.fork());
        let first = engine.current_guess();
        self.screen = Screen::Playing { secret, engine };
        Ok(first)
    }

    /// Apply feedback on the current guess.
    ///
    /// A win moves the session to the game over screen.
    pub fn feedback(&mut self, feedback: Feedback) -> Result<Outcome> {
        let Screen::Playing { secret, engine } = &mut self.screen else {
            return Err(GuessError::NotPlaying);
        };

        let secret = *secret;
        let outcome = engine.apply_feedback(feedback, secret);
        if let Outcome::Won { rounds } = outcome {
            let history = engine.history().clone();
            self.screen = Screen::GameOver {
                summary: GameSummary { rounds, secret },
                history,
            };
        }
        Ok(outcome)
    }

    /// Return to the start screen, dropping any running game.
    pub fn start_new_game(&mut self) {
        self.screen = Screen::StartGame;
    }

    /// The guess on screen, if a game is running.
    #[must_use]
    pub fn current_guess(&self) -> Option<i32> {
        self.engine().map(GuessEngine::current_guess)
    }

    /// The running engine, if any.
    #[must_use]
    pub fn engine(&self) -> Option<&GuessEngine<GameRng>> {
        match &self.screen {
            Screen::Playing { engine, .. } => Some(engine),
            _ => None,
        }
    }

    /// Guess log for the running or just finished game, most recent first.
    #[must_use]
    pub fn guess_log(&self) -> Vec<GuessLogEntry> {
        match &self.screen {
            Screen::StartGame => Vec::new(),
            Screen::Playing { engine, .. } => engine.history().log(),
            Screen::GameOver { history, .. } => history.log(),
        }
    }

    /// Summary of the finished game, on the game over screen.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        match &self.screen {
            Screen::GameOver { summary, .. } => Some(*summary),
            _ => None,
        }
    }

    /// Play a whole game answering honestly.
    ///
    /// Each round shrinks the range by at least one value, so the game is
    /// over after at most `upper - lower` rounds.
    pub fn play_truthfully(&mut self, text: &str) -> Result<GameSummary> {
        self.pick_number(text)?;

        let max_rounds = self.config.initial_range().width();
        for _ in 0..max_rounds {
            let Screen::Playing { secret, engine } = &self.screen else {
                break;
            };
            let Some(feedback) = Feedback::truthful(engine.current_guess(), secret.value()) else {
                break;
            };
            self.feedback(feedback)?;
        }

        self.summary().ok_or(GuessError::NotPlaying)
    }

    // === Persistence ===

    /// Capture the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let screen = match &self.screen {
            Screen::StartGame => ScreenSnapshot::StartGame,
            Screen::Playing { secret, engine } => ScreenSnapshot::Playing {
                secret: *secret,
                engine: engine.snapshot(),
            },
            Screen::GameOver { summary, history } => ScreenSnapshot::GameOver {
                summary: *summary,
                history: history.clone(),
            },
        };
        SessionSnapshot {
            config: self.config.clone(),
            rng: self.rng.state(),
            screen,
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// The stored secret is validated again against the stored bounds.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self> {
        let screen = match snapshot.screen {
            ScreenSnapshot::StartGame => Screen::StartGame,
            ScreenSnapshot::Playing { secret, engine } => Screen::Playing {
                secret: SecretNumber::new(secret.value(), &snapshot.config)?,
                engine: GuessEngine::restore(&engine),
            },
            ScreenSnapshot::GameOver { summary, history } => Screen::GameOver { summary, history },
        };
        Ok(Self {
            config: snapshot.config,
            rng: GameRng::from_state(&snapshot.rng),
            screen,
        })
    }

    /// Encode the session with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self.snapshot())?)
    }

    /// Decode a session written by [`GameSession::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: SessionSnapshot = bincode::deserialize(bytes)?;
        Self::restore(snapshot)
    }
}

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: GameConfig,
    pub rng: GameRngState,
    pub screen: ScreenSnapshot,
}

/// Serializable form of [`Screen`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenSnapshot {
    StartGame,
    Playing {
        secret: SecretNumber,
        engine: EngineSnapshot,
    },
    GameOver {
        summary: GameSummary,
        history: RoundHistory,
    },
}
