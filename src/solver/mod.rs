//! Cross-board solving
//!
//! Constraint extraction, candidate filtering, positional scoring and the
//! lookahead-driven guess selector.

mod constraints;
mod engine;
mod filter;
mod lookahead;
mod scorer;
mod selector;

pub use constraints::{FilterSpec, extract_constraints};
pub use engine::{DEFAULT_LOOKAHEAD_DEPTH, Guess, Solver, SolverConfig, compute_next_guess};
pub use filter::{any_candidate, filter_candidates};
pub use scorer::{WordScore, score_words};
