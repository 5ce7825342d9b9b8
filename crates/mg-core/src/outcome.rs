//! Round outcomes and action results.

use serde::{Deserialize, Serialize};

/// How a finished round ended from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player won.
    Win,
    /// The player lost.
    Loss,
    /// Neither side won. Draws never touch the session score.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// What happened when an engine received a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The action is not accepted in the current phase; nothing changed.
    Ignored,
    /// The action was applied and the round goes on.
    Continued,
    /// The action ended the round.
    Finished(Outcome),
}

impl Step {
    /// Returns true if the action changed engine state.
    pub fn is_applied(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// The outcome, if this step ended the round.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}
