//! Self-play: the solver against a known solution

use super::Solution;
use crate::core::{Board, Direction, GameState, GuessIndex};
use crate::error::EngineError;
use crate::solver::Solver;
use log::{debug, info};
use std::fmt;

/// Configuration for a simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub max_guesses: u32,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(max_guesses: u32) -> Self {
        Self { max_guesses }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

/// How a simulated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every playable cell was revealed
    Solved,
    /// The solver found no feasible guess
    Stuck,
    /// Guesses ran out first
    OutOfGuesses,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved => write!(f, "solved"),
            Self::Stuck => write!(f, "stuck"),
            Self::OutOfGuesses => write!(f, "out of guesses"),
        }
    }
}

/// One move of a simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub word: String,
    pub direction: Direction,
    pub index: GuessIndex,
    pub confidence: f64,
    /// Cells still unknown after the feedback
    pub unknown_after: usize,
}

/// Full record of a simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub steps: Vec<GuessStep>,
    pub outcome: Outcome,
    pub board: Board,
}

impl GameRecord {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Play one game from an empty board
///
/// The first move on an untouched board has no preferred direction and is
/// placed horizontally.
///
/// # Errors
/// Propagates engine invariant violations; a game the solver cannot finish
/// is reported through `Outcome`, not as an error.
pub fn play(
    solver: &Solver<'_>,
    solution: &Solution,
    config: PlayConfig,
) -> Result<GameRecord, EngineError> {
    let mut state = GameState::fresh(config.max_guesses);
    let mut steps = Vec::new();

    let outcome = loop {
        if state.board.is_complete() {
            break Outcome::Solved;
        }
        if state.guesses_remaining == 0 {
            break Outcome::OutOfGuesses;
        }

        let Some(guess) = solver.compute_next_guess(&state)? else {
            info!("Solver is stuck after {} guesses", steps.len());
            break Outcome::Stuck;
        };

        let direction = guess.direction.unwrap_or(Direction::Horizontal);
        let index = state.next_guess_index;
        state.board = solution.apply_guess(&state.board, direction, index, guess.word())?;

        let unknown_after = unknown_cells(&state.board);
        debug!(
            "Guess {}: {guess} on line {index}, {unknown_after} cells unknown",
            steps.len() + 1
        );
        steps.push(GuessStep {
            word: guess.word().to_string(),
            direction,
            index,
            confidence: guess.confidence(),
            unknown_after,
        });

        state.guesses_remaining -= 1;
        state.next_guess_index = index.next();
    };

    Ok(GameRecord {
        steps,
        outcome,
        board: state.board,
    })
}

fn unknown_cells(board: &Board) -> usize {
    board
        .cells()
        .filter(|cell| !cell.is_blocked() && cell.letter().is_none())
        .count()
}
