//! Command implementations

pub mod benchmark;
pub mod next;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use next::{NextResult, suggest_next};
pub use play::{PlayResult, SolutionChoice, choose_solution, play_game};
