//! Number guessing: find the secret number with higher/lower hints.
//!
//! There is no way to lose; attempts are unbounded and every round ends in
//! a win.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use mg_core::{GameError, GameResult, Outcome, RandomSource, SessionScore};

/// Range and hint sensitivity of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Secret in 0..=10; "close" within 2.
    Easy,
    /// Secret in 1..=100; "close" within 5.
    Hard,
}

impl Mode {
    /// Inclusive bounds of the secret.
    pub fn range(self) -> (u32, u32) {
        match self {
            Self::Easy => (0, 10),
            Self::Hard => (1, 100),
        }
    }

    /// A guess this far from the secret or closer earns a "close" hint.
    pub fn close_margin(self) -> u32 {
        match self {
            Self::Easy => 2,
            Self::Hard => 5,
        }
    }

    /// Parse `easy` or `hard`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Mind Reader (0-10)"),
            Self::Hard => write!(f, "Secret Number (1-100)"),
        }
    }
}

/// Lifecycle of a guessing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessingPhase {
    /// Choosing a mode.
    Idle,
    /// Guessing.
    Playing,
    /// Found the secret.
    Won,
}

/// Response to a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Not accepted in the current phase.
    Ignored,
    /// Right number.
    Correct {
        /// Guesses it took, including this one.
        attempts: u32,
    },
    /// The secret is smaller than the guess.
    Lower {
        /// The guess was within the mode's close margin.
        close: bool,
    },
    /// The secret is larger than the guess.
    Higher {
        /// The guess was within the mode's close margin.
        close: bool,
    },
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignored => Ok(()),
            Self::Correct { attempts: 1 } => write!(f, "Correct! Got it in 1 attempt!"),
            Self::Correct { attempts } => write!(f, "Correct! Got it in {attempts} attempts!"),
            Self::Lower { close } => {
                if *close {
                    write!(f, "Getting hot! ")?;
                }
                write!(f, "The secret number is smaller.")
            }
            Self::Higher { close } => {
                if *close {
                    write!(f, "Getting hot! ")?;
                }
                write!(f, "The secret number is larger.")
            }
        }
    }
}

/// Number guessing round engine.
pub struct GuessingEngine<R> {
    rng: R,
    phase: GuessingPhase,
    mode: Option<Mode>,
    secret: u32,
    attempts: u32,
}

impl<R: RandomSource> GuessingEngine<R> {
    /// Create an idle engine.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            phase: GuessingPhase::Idle,
            mode: None,
            secret: 0,
            attempts: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> GuessingPhase {
        self.phase
    }

    /// Mode of the current or last round.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Guesses made this round.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The secret, once a round has been started.
    pub fn secret(&self) -> Option<u32> {
        self.mode.map(|_| self.secret)
    }

    /// Draw a secret uniformly from the mode's range and start guessing.
    pub fn start(&mut self, mode: Mode) {
        let (low, high) = mode.range();
        self.secret = self.rng.between(low, high);
        self.mode = Some(mode);
        self.attempts = 0;
        self.phase = GuessingPhase::Playing;
        debug!(?mode, "guessing round started");
    }

    /// Submit a guess as typed by the player.
    ///
    /// Text that is not an integer is rejected with
    /// [`GameError::InvalidInput`] and leaves the round untouched.
    pub fn guess(&mut self, input: &str, score: &mut SessionScore) -> GameResult<Feedback> {
        if self.phase != GuessingPhase::Playing {
            debug!(phase = ?self.phase, "guess ignored");
            return Ok(Feedback::Ignored);
        }
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidInput(format!("\"{}\" is not a number", input.trim())))?;

        self.attempts += 1;
        let secret = i64::from(self.secret);
        if value == secret {
            self.phase = GuessingPhase::Won;
            score.record(Outcome::Win);
            info!(attempts = self.attempts, "secret number found");
            return Ok(Feedback::Correct {
                attempts: self.attempts,
            });
        }

        let margin = self.mode.map_or(0, Mode::close_margin);
        let close = (value - secret).unsigned_abs() <= u64::from(margin);
        Ok(if value > secret {
            Feedback::Lower { close }
        } else {
            Feedback::Higher { close }
        })
    }

    /// Leave the round and go back to mode selection.
    pub fn back(&mut self) {
        self.phase = GuessingPhase::Idle;
        self.mode = None;
        self.attempts = 0;
    }
}
