//! Self-play command
//!
//! Plays one game against a given or randomly generated solution board.

use crate::core::Word;
use crate::error::EngineError;
use crate::game::{DEFAULT_NODE_BUDGET, GameRecord, PlayConfig, Solution, generate_solution, play};
use crate::solver::{Solver, SolverConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Where the solution board comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionChoice {
    /// Six comma-separated words: rows 0, 2, 4 then columns 0, 2, 4
    Words(String),
    /// Generate from the corpus with this seed
    Seed(u64),
    /// Generate from the corpus with a fresh seed
    Random,
}

/// Result of one self-played game
pub struct PlayResult {
    pub solution: Solution,
    pub record: GameRecord,
    pub duration: Duration,
}

/// Resolve a solution choice against the corpus
///
/// # Errors
///
/// Returns an error for malformed solution words, or when no board can be
/// generated from the corpus within the node budget.
pub fn choose_solution(corpus: &[Word], choice: &SolutionChoice) -> Result<Solution, EngineError> {
    let seed = match choice {
        SolutionChoice::Words(list) => {
            let words: Vec<&str> = list.split(',').map(str::trim).collect();
            return Solution::from_words(&words);
        }
        SolutionChoice::Seed(seed) => *seed,
        SolutionChoice::Random => rand::random(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    generate_solution(corpus, &mut rng, DEFAULT_NODE_BUDGET).ok_or_else(|| {
        EngineError::InvalidState(format!(
            "no solution board found in {} words with seed {seed}",
            corpus.len()
        ))
    })
}

/// Play one game
///
/// # Errors
///
/// Returns an error if the solution cannot be resolved or the engine hits an
/// invariant violation during play.
pub fn play_game(
    corpus: &[Word],
    choice: &SolutionChoice,
    solver_config: SolverConfig,
    play_config: PlayConfig,
) -> Result<PlayResult, EngineError> {
    let solution = choose_solution(corpus, choice)?;
    let solver = Solver::new(corpus, solver_config);

    let start = Instant::now();
    let record = play(&solver, &solution, play_config)?;

    Ok(PlayResult {
        solution,
        record,
        duration: start.elapsed(),
    })
}
