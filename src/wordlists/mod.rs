//! Word corpora
//!
//! The solver takes its corpus from a `WordSource`: either the English lists
//! compiled into the binary or plain-text lists laid out on disk as
//! `<root>/<language>/<category>.txt`.

mod embedded;
pub mod loader;

pub use embedded::{EN_ALLOWED, EN_ALLOWED_COUNT, EN_ANSWERS, EN_ANSWERS_COUNT};

use crate::core::{Language, Word};
use crate::error::EngineError;
use log::debug;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which list to draw candidates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Curated solution words
    #[default]
    Answers,
    /// Every accepted word
    All,
}

impl Category {
    /// File stem used for this category on disk
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Answers => "answers",
            Self::All => "allowed",
        }
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "answers" => Ok(Self::Answers),
            "all" => Ok(Self::All),
            _ => Err(EngineError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answers => write!(f, "answers"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Supplies the ordered corpus for a language and category
///
/// An unsupported language is an error, never an empty list.
pub trait WordSource {
    /// Load the corpus
    ///
    /// # Errors
    /// Returns `EngineError::UnsupportedLanguage` when no list exists for
    /// `language`.
    fn words(&self, language: &Language, category: Category) -> Result<Vec<Word>, EngineError>;
}

/// English lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn words(&self, language: &Language, category: Category) -> Result<Vec<Word>, EngineError> {
        if language.code() != "en" {
            return Err(EngineError::UnsupportedLanguage(language.code().to_string()));
        }

        let slice = match category {
            Category::Answers => EN_ANSWERS,
            Category::All => EN_ALLOWED,
        };
        Ok(loader::words_from_slice(slice))
    }
}

/// Lists read from `<root>/<language>/<category>.txt`
///
/// `answers` maps to `answers.txt`, `all` to `allowed.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryWords {
    root: PathBuf,
}

impl DirectoryWords {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the list for a language and category
    #[must_use]
    pub fn path(&self, language: &Language, category: Category) -> PathBuf {
        self.root
            .join(language.code())
            .join(format!("{}.txt", category.file_stem()))
    }
}

impl WordSource for DirectoryWords {
    fn words(&self, language: &Language, category: Category) -> Result<Vec<Word>, EngineError> {
        let path = self.path(language, category);
        let words = loader::load_from_file(&path).map_err(|e| {
            debug!("Cannot read {}: {e}", path.display());
            EngineError::UnsupportedLanguage(language.code().to_string())
        })?;
        debug!("Loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }
}
