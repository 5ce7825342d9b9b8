//! Session-wide win/loss tally.
//!
//! One `SessionScore` lives as long as the shell. Engines receive it by
//! mutable reference on the action that may end a round and record the
//! outcome exactly once; only an explicit reset zeroes it.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Wins and losses accumulated over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    wins: u32,
    losses: u32,
}

impl SessionScore {
    /// A fresh score at `{0, 0}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won this session.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Rounds lost this session.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Rounds that ended in a win or a loss.
    pub fn decided(&self) -> u32 {
        self.wins + self.losses
    }

    /// Record the outcome of a finished round. Draws leave the score alone.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => {}
        }
    }

    /// Zero both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for SessionScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} W / {} L", self.wins, self.losses)
    }
}
