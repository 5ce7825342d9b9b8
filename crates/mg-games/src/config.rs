//! Tunable rules for the engines that have any.

use std::time::Duration;

/// Hangman rules.
#[derive(Debug, Clone)]
pub struct HangmanConfig {
    /// Wrong guesses allowed before the round is lost.
    pub max_mistakes: u32,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self { max_mistakes: 6 }
    }
}

impl HangmanConfig {
    /// Set the number of wrong guesses that loses the round (at least 1).
    pub fn with_max_mistakes(mut self, max: u32) -> Self {
        self.max_mistakes = max.max(1);
        self
    }
}

/// Glass bridge rules.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Lives at the start of each game.
    pub lives: u32,
    /// How long a fall is shown before the player is put back at the start.
    pub fall_delay: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            fall_delay: Duration::from_millis(1500),
        }
    }
}

impl BridgeConfig {
    /// Set the starting lives (at least 1).
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives.max(1);
        self
    }

    /// Set the fall display delay.
    pub fn with_fall_delay(mut self, delay: Duration) -> Self {
        self.fall_delay = delay;
        self
    }
}

/// Tug-of-war rules.
#[derive(Debug, Clone)]
pub struct TugOfWarConfig {
    /// How long the battle animation runs before the result is computed.
    pub battle_delay: Duration,
}

impl Default for TugOfWarConfig {
    fn default() -> Self {
        Self {
            battle_delay: Duration::from_millis(2000),
        }
    }
}

impl TugOfWarConfig {
    /// Set the battle animation delay.
    pub fn with_battle_delay(mut self, delay: Duration) -> Self {
        self.battle_delay = delay;
        self
    }
}
