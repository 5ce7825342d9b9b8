//! Hangman: guess the hidden word one letter at a time.
//!
//! Matching is accent- and case-insensitive ("e" reveals "é"). Characters
//! that are not letters, such as spaces, start out revealed and never count
//! toward a mistake or the win check.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use mg_core::{GameError, GameResult, Outcome, RandomSource, SessionScore, Step, choose};

use crate::config::HangmanConfig;
use crate::text::fold_letter;
use crate::words::{WordBank, WordSource};

/// Placeholder shown for a letter that has not been revealed.
pub const HIDDEN: char = '_';

/// Lifecycle of a hangman engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HangmanPhase {
    /// Waiting for the word bank.
    Loading,
    /// Word bank loaded, no word in play.
    Selecting,
    /// A word is being guessed.
    Playing,
    /// Every letter was found.
    Won,
    /// Too many wrong guesses.
    Lost,
}

impl HangmanPhase {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// How a letter key should be shown on an on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    /// Not guessed yet.
    Unused,
    /// Guessed and present in the word.
    Correct,
    /// Guessed and absent from the word.
    Wrong,
}

/// The word in play and everything guessed against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanRound {
    word: String,
    category: String,
    chosen: BTreeSet<char>,
    wrong: BTreeSet<char>,
    mistakes: u32,
}

impl HangmanRound {
    fn new(word: String, category: String) -> Self {
        Self {
            word,
            category,
            chosen: BTreeSet::new(),
            wrong: BTreeSet::new(),
            mistakes: 0,
        }
    }

    /// The secret word, lower-cased.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The category the word was drawn from.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Correctly guessed letters, folded.
    pub fn letters_chosen(&self) -> &BTreeSet<char> {
        &self.chosen
    }

    /// Wrongly guessed letters, folded.
    pub fn letters_wrong(&self) -> &BTreeSet<char> {
        &self.wrong
    }

    /// Number of wrong guesses.
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    fn is_revealed(&self, c: char) -> bool {
        fold_letter(c).is_none_or(|f| self.chosen.contains(&f))
    }

    fn is_solved(&self) -> bool {
        self.word.chars().all(|c| self.is_revealed(c))
    }
}

/// Hangman round engine.
pub struct HangmanEngine<R> {
    rng: R,
    config: HangmanConfig,
    bank: Option<WordBank>,
    phase: HangmanPhase,
    round: Option<HangmanRound>,
}

impl<R: RandomSource> HangmanEngine<R> {
    /// Create an engine waiting for its word bank.
    pub fn new(rng: R, config: HangmanConfig) -> Self {
        Self {
            rng,
            config,
            bank: None,
            phase: HangmanPhase::Loading,
            round: None,
        }
    }

    /// Create an engine with a word bank already loaded.
    pub fn with_bank(rng: R, config: HangmanConfig, bank: WordBank) -> Self {
        let mut engine = Self::new(rng, config);
        engine.bank = Some(bank);
        engine.phase = HangmanPhase::Selecting;
        engine
    }

    /// Current phase.
    pub fn phase(&self) -> HangmanPhase {
        self.phase
    }

    /// The round in play or just finished.
    pub fn round(&self) -> Option<&HangmanRound> {
        self.round.as_ref()
    }

    /// Wrong guesses allowed before the round is lost.
    pub fn max_mistakes(&self) -> u32 {
        self.config.max_mistakes
    }

    /// Load the word bank, moving from `Loading` to `Selecting`.
    ///
    /// On failure the engine stays in `Loading`. Once loaded, further calls
    /// do nothing.
    pub fn load_categories(&mut self, source: &WordSource) -> GameResult<()> {
        if self.bank.is_some() {
            return Ok(());
        }
        match source.load() {
            Ok(bank) => {
                debug!(categories = bank.len(), "word bank loaded");
                self.bank = Some(bank);
                self.phase = HangmanPhase::Selecting;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "word bank failed to load");
                Err(e)
            }
        }
    }

    /// Category names, empty while loading.
    pub fn categories(&self) -> Vec<&str> {
        self.bank.as_ref().map(WordBank::categories).unwrap_or_default()
    }

    /// Draw a new word from `category` and start guessing.
    ///
    /// Ignored while the bank is loading.
    pub fn select_category(&mut self, category: &str) -> GameResult<Step> {
        let Some(bank) = self.bank.as_ref() else {
            debug!("category selected before word bank loaded");
            return Ok(Step::Ignored);
        };
        let name = bank
            .resolve(category)
            .ok_or_else(|| GameError::UnknownCategory(category.trim().to_string()))?;
        let words = bank.words(name).unwrap_or_default();
        let word = choose(&mut self.rng, words)
            .ok_or_else(|| GameError::EmptyCategory(name.to_string()))?
            .clone();
        let name = name.to_string();

        debug!(category = %name, letters = word.chars().count(), "hangman round started");
        self.round = Some(HangmanRound::new(word, name));
        self.phase = HangmanPhase::Playing;
        Ok(Step::Continued)
    }

    /// Draw a random category, then a random word from it.
    pub fn start_random(&mut self) -> GameResult<Step> {
        let Some(bank) = self.bank.as_ref() else {
            return Ok(Step::Ignored);
        };
        let categories = bank.categories();
        let Some(category) = choose(&mut self.rng, &categories).map(|c| c.to_string()) else {
            return Ok(Step::Ignored);
        };
        self.select_category(&category)
    }

    /// Draw another word from the current round's category.
    ///
    /// The new word is independent of the last one and may repeat it.
    pub fn restart_same_category(&mut self) -> GameResult<Step> {
        let Some(category) = self.round.as_ref().map(|r| r.category.clone()) else {
            return Ok(Step::Ignored);
        };
        self.select_category(&category)
    }

    /// Drop the current round and go back to category selection.
    pub fn return_to_selection(&mut self) -> Step {
        if self.bank.is_none() {
            return Step::Ignored;
        }
        self.round = None;
        self.phase = HangmanPhase::Selecting;
        Step::Continued
    }

    /// Guess one letter.
    ///
    /// Ignored outside `Playing`, for non-letters, and for letters already
    /// guessed (in either set). The win check runs before the loss check.
    pub fn guess_letter(&mut self, letter: char, score: &mut SessionScore) -> Step {
        if self.phase != HangmanPhase::Playing {
            debug!(?letter, phase = ?self.phase, "guess ignored");
            return Step::Ignored;
        }
        let (Some(folded), Some(round)) = (fold_letter(letter), self.round.as_mut()) else {
            return Step::Ignored;
        };
        if round.chosen.contains(&folded) || round.wrong.contains(&folded) {
            return Step::Ignored;
        }

        let hit = round.word.chars().any(|c| fold_letter(c) == Some(folded));
        if hit {
            round.chosen.insert(folded);
        } else {
            round.wrong.insert(folded);
            round.mistakes += 1;
        }

        let outcome = if round.is_solved() {
            Outcome::Win
        } else if round.mistakes >= self.config.max_mistakes {
            Outcome::Loss
        } else {
            return Step::Continued;
        };

        self.phase = match outcome {
            Outcome::Win => HangmanPhase::Won,
            _ => HangmanPhase::Lost,
        };
        score.record(outcome);
        info!(%outcome, "hangman round finished");
        Step::Finished(outcome)
    }

    /// The word as the player sees it: unrevealed letters become `_`.
    ///
    /// A lost round shows the whole word.
    pub fn masked_word(&self) -> String {
        let Some(round) = &self.round else {
            return String::new();
        };
        let reveal_all = self.phase == HangmanPhase::Lost;
        round
            .word
            .chars()
            .map(|c| {
                if reveal_all || round.is_revealed(c) {
                    c
                } else {
                    HIDDEN
                }
            })
            .collect()
    }

    /// Keyboard status of a letter in the current round.
    pub fn letter_status(&self, letter: char) -> LetterStatus {
        let (Some(folded), Some(round)) = (fold_letter(letter), &self.round) else {
            return LetterStatus::Unused;
        };
        if round.chosen.contains(&folded) {
            LetterStatus::Correct
        } else if round.wrong.contains(&folded) {
            LetterStatus::Wrong
        } else {
            LetterStatus::Unused
        }
    }
}
