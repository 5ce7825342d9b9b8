//! Round engines for the minigame arcade.
//!
//! Five independent state machines, each owning its own random source:
//! hangman, the glass bridge, number guessing, rock-paper-scissors, and a
//! champion tug-of-war. Two read-only collaborators feed them: a word bank
//! for hangman and a champion catalog for tug-of-war.

pub mod bridge;
pub mod champions;
pub mod config;
pub mod guessing;
pub mod hangman;
pub mod rps;
pub mod text;
pub mod tug_of_war;
pub mod words;

pub use bridge::{BridgeEngine, BridgePhase, BridgeStep, Difficulty, Fall, Footstep, Side};
pub use champions::{Champion, ChampionCatalog, ChampionSource};
pub use config::{BridgeConfig, HangmanConfig, TugOfWarConfig};
pub use guessing::{Feedback, GuessingEngine, GuessingPhase, Mode};
pub use hangman::{HangmanEngine, HangmanPhase, HangmanRound, LetterStatus};
pub use rps::{Hand, RpsEngine, RpsPhase, RpsRound, judge};
pub use tug_of_war::{BattleClock, BattleReport, TugOfWarEngine, TugPhase};
pub use words::{WordBank, WordSource};
