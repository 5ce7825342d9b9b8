//! Configuration for an arcade session.

use std::time::Duration;

use mg_games::{BridgeConfig, ChampionSource, HangmanConfig, TugOfWarConfig, WordSource};

/// Configuration for an arcade session.
#[derive(Debug, Clone, Default)]
pub struct ArcadeConfig {
    /// Master RNG seed. Every engine's generator is derived from it; `None`
    /// draws a fresh one.
    pub seed: Option<u64>,
    /// Hangman rules.
    pub hangman: HangmanConfig,
    /// Glass bridge rules.
    pub bridge: BridgeConfig,
    /// Tug-of-war rules.
    pub tug_of_war: TugOfWarConfig,
    /// Where hangman words come from.
    pub words: WordSource,
    /// Where tug-of-war champions come from.
    pub champions: ChampionSource,
}

impl ArcadeConfig {
    /// Set the master RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the word bank source.
    pub fn with_words(mut self, words: WordSource) -> Self {
        self.words = words;
        self
    }

    /// Set the champion catalog source.
    pub fn with_champions(mut self, champions: ChampionSource) -> Self {
        self.champions = champions;
        self
    }

    /// Set the hangman rules.
    pub fn with_hangman(mut self, hangman: HangmanConfig) -> Self {
        self.hangman = hangman;
        self
    }

    /// Set the glass bridge rules.
    pub fn with_bridge(mut self, bridge: BridgeConfig) -> Self {
        self.bridge = bridge;
        self
    }

    /// Set the tug-of-war rules.
    pub fn with_tug_of_war(mut self, tug_of_war: TugOfWarConfig) -> Self {
        self.tug_of_war = tug_of_war;
        self
    }

    /// Zero every display delay.
    pub fn with_instant_timers(mut self) -> Self {
        self.bridge.fall_delay = Duration::ZERO;
        self.tug_of_war.battle_delay = Duration::ZERO;
        self
    }
}
