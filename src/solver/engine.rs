//! Main solver interface

use super::WordScore;
use crate::core::{Direction, GameState, Word};
use crate::error::EngineError;
use crate::wordlists::{Category, WordSource};
use std::fmt;

/// Default number of simulated insertions per feasibility check
///
/// Six insertions cover one play-through of every line on both axes.
pub const DEFAULT_LOOKAHEAD_DEPTH: usize = 6;

/// Tunable solver parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Lookahead budget handed to the top-level selection; 0 disables the
    /// feasibility search entirely
    pub lookahead_depth: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(lookahead_depth: usize) -> Self {
        Self { lookahead_depth }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD_DEPTH)
    }
}

/// The solver's recommendation
///
/// `direction` is `None` only for the first move on an untouched board, where
/// both axes are equivalent.
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub score: WordScore,
    pub direction: Option<Direction>,
}

impl Guess {
    #[must_use]
    pub fn word(&self) -> &str {
        &self.score.word
    }

    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.score.confidence
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(
                f,
                "{} ({direction}, confidence {:.3})",
                self.score.word, self.score.confidence
            ),
            None => write!(
                f,
                "{} (any direction, confidence {:.3})",
                self.score.word, self.score.confidence
            ),
        }
    }
}

/// Cross-board solver over a fixed corpus
///
/// Holds no mutable state; one solver can serve any number of boards,
/// including from several threads at once.
pub struct Solver<'a> {
    pub(super) corpus: &'a [Word],
    pub(super) config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver over an ordered corpus
    ///
    /// Corpus order is the tie-break order for equally scored words.
    #[must_use]
    pub const fn new(corpus: &'a [Word], config: SolverConfig) -> Self {
        Self { corpus, config }
    }

    /// Propose the next word to guess
    ///
    /// Returns `Ok(None)` when no guess is available: the board is already
    /// complete, or no feasible word exists for the current line.
    ///
    /// # Errors
    /// Only invariant violations (corrupted state) produce an error.
    ///
    /// # Examples
    /// ```
    /// use cross_wordle::core::{GameState, Word};
    /// use cross_wordle::solver::{Solver, SolverConfig};
    ///
    /// let corpus: Vec<Word> = ["crane", "crate", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let solver = Solver::new(&corpus, SolverConfig::default());
    ///
    /// let guess = solver.compute_next_guess(&GameState::fresh(10)).unwrap().unwrap();
    /// assert_eq!(guess.word(), "CRATE");
    /// assert!(guess.direction.is_none());
    /// ```
    pub fn compute_next_guess(&self, state: &GameState) -> Result<Option<Guess>, EngineError> {
        self.select(state, self.config.lookahead_depth)
    }
}

/// Load the corpus for the state's language and compute the next guess
///
/// # Errors
/// Fails if `source` has no corpus for the language, or on any invariant
/// violation in the state.
pub fn compute_next_guess<S: WordSource + ?Sized>(
    source: &S,
    category: Category,
    state: &GameState,
    config: SolverConfig,
) -> Result<Option<Guess>, EngineError> {
    let corpus = source.words(&state.language, category)?;
    Solver::new(&corpus, config).compute_next_guess(state)
}
