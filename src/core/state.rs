//! Game state snapshot handed to the solver

use super::{Board, GuessIndex};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase language code selecting a word corpus (e.g. `en`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Create a language code
    ///
    /// # Errors
    /// Returns `EngineError::UnsupportedLanguage` for codes that are empty or
    /// not purely alphabetic. Whether a corpus exists is decided by the word
    /// source, not here.
    pub fn new(code: &str) -> Result<Self, EngineError> {
        let code = code.trim().to_ascii_lowercase();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EngineError::UnsupportedLanguage(code));
        }
        Ok(Self(code))
    }

    #[must_use]
    pub fn english() -> Self {
        Self("en".to_string())
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Language {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the solver needs to know about a game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub guesses_remaining: u32,
    pub next_guess_index: GuessIndex,
    #[serde(default)]
    pub language: Language,
    pub board: Board,
}

impl GameState {
    #[must_use]
    pub const fn new(
        board: Board,
        next_guess_index: GuessIndex,
        guesses_remaining: u32,
        language: Language,
    ) -> Self {
        Self {
            guesses_remaining,
            next_guess_index,
            language,
            board,
        }
    }

    /// A fresh English game with an empty board starting on line 0
    #[must_use]
    pub fn fresh(guesses_remaining: u32) -> Self {
        Self::new(
            Board::new(),
            GuessIndex::SEQUENCE[0],
            guesses_remaining,
            Language::english(),
        )
    }

    /// Parse a state from YAML
    ///
    /// # Errors
    /// Returns `EngineError::InvalidState` when the YAML is malformed or any
    /// board invariant is violated.
    pub fn from_yaml(text: &str) -> Result<Self, EngineError> {
        serde_yaml::from_str(text).map_err(|e| EngineError::InvalidState(e.to_string()))
    }

    /// Serialize the state to YAML
    ///
    /// # Errors
    /// Returns `EngineError::InvalidState` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, EngineError> {
        serde_yaml::to_string(self).map_err(|e| EngineError::InvalidState(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
guesses_remaining: 7
next_guess_index: 2
language: EN
board:
  letters:
    - 'C.A.E'
    - '.#.#.'
    - '.....'
    - '.#.#.'
    - '.....'
  hints:
    - at: [1, 0]
      hints: ['Rr1', 'Hc2']
    - at: [4, 4]
      hints: ['Z-']
";

    #[test]
    fn language_normalizes_case() {
        assert_eq!(Language::new(" EN ").unwrap(), Language::english());
        assert!(Language::new("").is_err());
        assert!(Language::new("e1").is_err());
    }

    #[test]
    fn parses_sample_state() {
        let state = GameState::from_yaml(SAMPLE).unwrap();
        assert_eq!(state.guesses_remaining, 7);
        assert_eq!(state.next_guess_index.value(), 2);
        assert_eq!(state.language.code(), "en");

        let board = &state.board;
        assert_eq!(board.cell(0, 0).unwrap().letter(), Some(b'C'));
        assert_eq!(board.cell(1, 0).unwrap().letter(), None);
        assert_eq!(board.cell(1, 0).unwrap().hints().len(), 2);
        assert!(board.cell(4, 4).unwrap().hints()[0].is_absent());
    }

    #[test]
    fn rejects_bad_guess_index() {
        let text = SAMPLE.replace("next_guess_index: 2", "next_guess_index: 3");
        assert!(GameState::from_yaml(&text).is_err());
    }

    #[test]
    fn rejects_bad_hint() {
        let text = SAMPLE.replace("'Z-'", "'Z!'");
        assert!(GameState::from_yaml(&text).is_err());
    }

    #[test]
    fn yaml_round_trip() {
        let state = GameState::from_yaml(SAMPLE).unwrap();
        let text = state.to_yaml().unwrap();
        assert_eq!(GameState::from_yaml(&text).unwrap(), state);
    }

    #[test]
    fn language_defaults_to_english() {
        let text = SAMPLE.replace("language: EN\n", "");
        let state = GameState::from_yaml(&text).unwrap();
        assert_eq!(state.language, Language::english());
    }
}
