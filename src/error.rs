//! Engine error type
//!
//! Every variant is an invariant violation: corrupted upstream state or a
//! programmer error. A board that simply has no answer is not an error; the
//! solver reports it as `None`.

use std::fmt;

/// Invariant violations raised by the solving engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Guess index outside the `{0, 2, 4}` sequence
    InvalidGuessIndex(usize),
    /// Coordinates outside the 5×5 grid
    OutOfBounds { x: usize, y: usize },
    /// Attempt to write a letter into one of the four blocked cells
    BlockedCell { x: usize, y: usize },
    /// A simulated insertion disagrees with a confirmed letter
    LetterConflict {
        x: usize,
        y: usize,
        existing: char,
        incoming: char,
    },
    /// A word of the wrong length was handed to the board
    WordLength { expected: usize, found: usize },
    /// Candidates of different lengths were handed to the scorer
    MixedWordLengths { expected: usize, found: usize },
    /// Letter that is not an ASCII alphabetic character
    InvalidLetter(char),
    /// No corpus exists for this language
    UnsupportedLanguage(String),
    /// Corpus category other than `answers` or `all`
    UnknownCategory(String),
    /// Solution words disagree at an intersection
    IntersectionMismatch { x: usize, y: usize },
    /// Malformed board or state description
    InvalidState(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessIndex(index) => {
                write!(f, "Guess index must be 0, 2 or 4, got {index}")
            }
            Self::OutOfBounds { x, y } => write!(f, "Cell ({x}, {y}) is outside the board"),
            Self::BlockedCell { x, y } => write!(f, "Cell ({x}, {y}) is blocked"),
            Self::LetterConflict {
                x,
                y,
                existing,
                incoming,
            } => write!(
                f,
                "Cell ({x}, {y}) already holds '{existing}', cannot place '{incoming}'"
            ),
            Self::WordLength { expected, found } => {
                write!(f, "Word must be exactly {expected} letters, got {found}")
            }
            Self::MixedWordLengths { expected, found } => write!(
                f,
                "Candidates must share one length: expected {expected}, found {found}"
            ),
            Self::InvalidLetter(c) => write!(f, "'{c}' is not an ASCII letter"),
            Self::UnsupportedLanguage(language) => {
                write!(f, "No word list available for language '{language}'")
            }
            Self::UnknownCategory(category) => write!(
                f,
                "Unknown word list category '{category}' (expected 'answers' or 'all')"
            ),
            Self::IntersectionMismatch { x, y } => {
                write!(f, "Row and column words disagree at ({x}, {y})")
            }
            Self::InvalidState(reason) => write!(f, "Invalid game state: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}
