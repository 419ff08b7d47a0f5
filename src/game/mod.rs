//! Game simulation
//!
//! A solution board, the feedback oracle that scores guesses against it, a
//! random board generator and a self-play loop driving the solver.

mod generator;
mod session;
mod solution;

pub use generator::{DEFAULT_NODE_BUDGET, generate_solution};
pub use session::{GameRecord, GuessStep, Outcome, PlayConfig, play};
pub use solution::Solution;
