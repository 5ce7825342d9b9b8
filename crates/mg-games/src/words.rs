//! Word bank for hangman: category name to an ordered list of words.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mg_core::{GameError, GameResult};

use crate::text::{fold, fold_letter};

const COLLABORATOR: &str = "word bank";

/// Read-only mapping from category to words.
///
/// Categories iterate in name order; words keep the order they were given
/// in and are stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordBank {
    categories: BTreeMap<String, Vec<String>>,
}

impl WordBank {
    /// Build a bank from `(category, words)` pairs.
    ///
    /// Words without a single letter are dropped: there would be nothing to
    /// guess.
    pub fn new<C, W, S>(entries: impl IntoIterator<Item = (C, W)>) -> Self
    where
        C: Into<String>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let categories = entries
            .into_iter()
            .map(|(name, words)| {
                let words = words
                    .into_iter()
                    .map(|w| w.as_ref().to_lowercase())
                    .filter(|w| has_letter(w))
                    .collect();
                (name.into(), words)
            })
            .collect();
        Self { categories }
    }

    /// The built-in Portuguese word list.
    pub fn builtin() -> Self {
        Self::new([
            (
                "frutas",
                vec![
                    "morango", "banana", "laranja", "uva", "abacaxi", "kiwi", "amora", "melancia",
                ],
            ),
            (
                "animais",
                vec![
                    "leão", "tigre", "elefante", "cachorro", "gato", "golfinho", "baleia", "aguia",
                ],
            ),
            (
                "países",
                vec![
                    "brasil",
                    "canadá",
                    "japão",
                    "austrália",
                    "alemanha",
                    "méxico",
                    "argentina",
                ],
            ),
            (
                "cores",
                vec![
                    "vermelho", "azul", "verde", "amarelo", "roxo", "laranja", "ciano", "magenta",
                ],
            ),
            (
                "objetos",
                vec![
                    "cadeira",
                    "mesa",
                    "computador",
                    "telefone",
                    "lápis",
                    "mochila",
                    "janela",
                ],
            ),
        ])
    }

    /// Parse a bank from a JSON object of `{"category": ["word", ...]}`.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| unavailable(e.to_string()))?;
        Ok(Self::new(raw))
    }

    /// Category names in order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Words in a category, or `None` if the category does not exist.
    ///
    /// Category lookup ignores case and accents.
    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.resolve(category)
            .and_then(|name| self.categories.get(name))
            .map(Vec::as_slice)
    }

    /// The stored spelling of a category name, ignoring case and accents.
    pub fn resolve(&self, category: &str) -> Option<&str> {
        let wanted = fold(category.trim());
        self.categories
            .keys()
            .find(|name| fold(name) == wanted)
            .map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the bank has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Where the word bank comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The word list compiled into the binary.
    #[default]
    Builtin,
    /// A JSON file of `{"category": ["word", ...]}`.
    File(PathBuf),
}

impl WordSource {
    /// Load the bank. File and parse failures surface as
    /// [`GameError::CollaboratorUnavailable`].
    pub fn load(&self) -> GameResult<WordBank> {
        match self {
            Self::Builtin => Ok(WordBank::builtin()),
            Self::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> GameResult<WordBank> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| unavailable(format!("{}: {e}", path.display())))?;
    let bank = WordBank::from_json(&json)?;
    if bank.is_empty() {
        return Err(unavailable(format!("{}: no categories", path.display())));
    }
    Ok(bank)
}

fn has_letter(word: &str) -> bool {
    word.chars().any(|c| fold_letter(c).is_some())
}

fn unavailable(reason: String) -> GameError {
    GameError::CollaboratorUnavailable {
        collaborator: COLLABORATOR,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_has_five_sorted_categories() {
        let bank = WordBank::builtin();
        assert_eq!(
            bank.categories(),
            vec!["animais", "cores", "frutas", "objetos", "países"]
        );
        assert!(bank.words("cores").unwrap().contains(&"azul".to_string()));
    }

    #[test]
    fn words_are_lowercased() {
        let bank = WordBank::new([("Mixed", vec!["ÁRVORE", "Casa"])]);
        assert_eq!(bank.words("mixed").unwrap(), ["árvore", "casa"]);
    }

    #[test]
    fn resolve_ignores_case() {
        let bank = WordBank::builtin();
        assert_eq!(bank.resolve("CORES"), Some("cores"));
        assert_eq!(bank.resolve("Países"), Some("países"));
        assert_eq!(bank.resolve("paises"), Some("países"));
        assert_eq!(bank.resolve("planetas"), None);
    }

    #[test]
    fn from_json() {
        let bank = WordBank::from_json(r#"{"planets": ["Mars", "saturn"]}"#).unwrap();
        assert_eq!(bank.categories(), vec!["planets"]);
        assert_eq!(bank.words("planets").unwrap(), ["mars", "saturn"]);
    }

    #[test]
    fn letterless_words_are_dropped() {
        let bank = WordBank::from_json(r#"{"n": ["123", "", "--"], "m": ["ok", "4x4", " "]}"#).unwrap();
        assert!(bank.words("n").unwrap().is_empty());
        assert_eq!(bank.words("m").unwrap(), ["ok", "4x4"]);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = WordBank::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, GameError::CollaboratorUnavailable { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, r#"{"cores": ["azul"]}"#).unwrap();
        let bank = WordSource::File(path).load().unwrap();
        assert_eq!(bank.words("cores").unwrap(), ["azul"]);
    }

    #[test]
    fn load_missing_file_fails() {
        let err = WordSource::File(PathBuf::from("/definitely/not/here.json"))
            .load()
            .unwrap_err();
        assert!(err.to_string().starts_with("word bank unavailable"));
    }

    #[test]
    fn load_empty_object_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "{}").unwrap();
        assert!(WordSource::File(path).load().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let bank = WordBank::builtin();
        let json = serde_json::to_string(&bank).unwrap();
        let back: WordBank = serde_json::from_str(&json).unwrap();
        assert_eq!(bank, back);
    }
}
