//! Next-guess command
//!
//! Loads a saved game state and asks the solver for its recommendation.

use crate::core::{Direction, GameState};
use crate::error::EngineError;
use crate::solver::{Guess, Solver, SolverConfig, extract_constraints, filter_candidates};
use crate::wordlists::{Category, WordSource};

/// Result of a next-guess query
pub struct NextResult {
    pub state: GameState,
    pub guess: Option<Guess>,
    /// Corpus words still fitting the active row
    pub horizontal_candidates: usize,
    /// Corpus words still fitting the active column
    pub vertical_candidates: usize,
    pub corpus_size: usize,
}

/// Compute the next guess for `state`
///
/// # Errors
///
/// Returns an error if the word source has no list for the state's language
/// or the state violates a board invariant.
pub fn suggest_next<S: WordSource + ?Sized>(
    state: GameState,
    source: &S,
    category: Category,
    config: SolverConfig,
) -> Result<NextResult, EngineError> {
    let corpus = source.words(&state.language, category)?;
    let solver = Solver::new(&corpus, config);
    let guess = solver.compute_next_guess(&state)?;

    let index = state.next_guess_index;
    let count = |direction| {
        filter_candidates(&corpus, &extract_constraints(&state.board, direction, index)).len()
    };
    let horizontal_candidates = count(Direction::Horizontal);
    let vertical_candidates = count(Direction::Vertical);

    Ok(NextResult {
        horizontal_candidates,
        vertical_candidates,
        corpus_size: corpus.len(),
        state,
        guess,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EmbeddedWords;

    #[test]
    fn fresh_state_suggests_an_opening() {
        let result = suggest_next(
            GameState::fresh(10),
            &EmbeddedWords,
            Category::Answers,
            SolverConfig::default(),
        )
        .unwrap();

        let guess = result.guess.unwrap();
        assert!(guess.direction.is_none());
        assert_eq!(result.horizontal_candidates, result.corpus_size);
        assert_eq!(result.vertical_candidates, result.corpus_size);
    }

    #[test]
    fn completed_state_has_no_guess() {
        let yaml = "\
guesses_remaining: 2
next_guess_index: 0
board:
  letters:
    - 'ABOUT'
    - 'B#L#H'
    - 'OXIDE'
    - 'V#V#F'
    - 'ELECT'
";
        let state = GameState::from_yaml(yaml).unwrap();
        let result = suggest_next(
            state,
            &EmbeddedWords,
            Category::Answers,
            SolverConfig::default(),
        )
        .unwrap();

        assert!(result.guess.is_none());
        assert!(result.state.board.is_complete());
    }
}
