//! Accent- and case-insensitive letter matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a character to its base letter: diacritics stripped, lower-cased.
///
/// Returns `None` for anything that is not alphabetic (spaces, digits,
/// punctuation), which the hangman board treats as always revealed.
pub fn fold_letter(c: char) -> Option<char> {
    let base = std::iter::once(c)
        .nfd()
        .find(|d| !is_combining_mark(*d))?;
    let folded = base.to_lowercase().next()?;
    folded.is_alphabetic().then_some(folded)
}

/// Fold a whole string: diacritics stripped and lower-cased.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
