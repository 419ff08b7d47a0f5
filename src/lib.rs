//! Cross Wordle Solver
//!
//! A solving engine for the 5×5 cross-board word puzzle: three row words and
//! three column words interlock on a grid with four blocked cells, and each
//! guess fills one row or column and returns per-cell feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use cross_wordle::core::{GameState, Word};
//! use cross_wordle::solver::{Solver, SolverConfig};
//!
//! let corpus: Vec<Word> = ["about", "oxide", "elect", "above", "olive", "theft"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let solver = Solver::new(&corpus, SolverConfig::default());
//! let guess = solver.compute_next_guess(&GameState::fresh(10)).unwrap().unwrap();
//! println!("Open with {guess}");
//! ```

// Core domain types
pub mod core;

// Engine invariant errors
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Solution boards, feedback oracle and self-play
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use crate::core::is_board_complete;
pub use crate::error::EngineError;
pub use crate::solver::compute_next_guess;
