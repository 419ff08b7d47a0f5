//! Benchmark command
//!
//! Self-plays many random boards in parallel and aggregates the outcomes.

use crate::core::Word;
use crate::error::EngineError;
use crate::game::{DEFAULT_NODE_BUDGET, GameRecord, Outcome, PlayConfig, generate_solution, play};
use crate::solver::{Solver, SolverConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub stuck: usize,
    pub out_of_guesses: usize,
    /// Average guesses over solved games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Generate `count` boards from `seed` and self-play each
///
/// Boards are generated sequentially so a seed always yields the same set;
/// games then run in parallel. Seeds that yield no board within the node
/// budget are skipped.
///
/// # Errors
///
/// Returns the first engine invariant violation hit by any game.
pub fn run_benchmark(
    corpus: &[Word],
    count: usize,
    seed: u64,
    solver_config: SolverConfig,
    play_config: PlayConfig,
    show_progress: bool,
) -> Result<BenchmarkResult, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let solutions: Vec<_> = (0..count)
        .filter_map(|game| {
            let solution = generate_solution(corpus, &mut rng, DEFAULT_NODE_BUDGET);
            if solution.is_none() {
                warn!("No board generated for game {game}, skipping");
            }
            solution
        })
        .collect();

    let pb = if show_progress {
        ProgressBar::new(solutions.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let solver = Solver::new(corpus, solver_config);
    let start = Instant::now();

    let records = solutions
        .par_iter()
        .map(|solution| {
            let record = play(&solver, solution, play_config);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<GameRecord>, EngineError>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&records, start.elapsed()))
}

fn summarize(records: &[GameRecord], duration: Duration) -> BenchmarkResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut stuck = 0;
    let mut out_of_guesses = 0;

    for record in records {
        match record.outcome {
            Outcome::Solved => *distribution.entry(record.guess_count()).or_insert(0) += 1,
            Outcome::Stuck => stuck += 1,
            Outcome::OutOfGuesses => out_of_guesses += 1,
        }
    }

    let solved_counts = || {
        records
            .iter()
            .filter(|r| r.is_solved())
            .map(GameRecord::guess_count)
    };
    let solved = solved_counts().count();
    let total_guesses: usize = solved_counts().sum();

    let total_games = records.len();
    BenchmarkResult {
        total_games,
        solved,
        stuck,
        out_of_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: solved_counts().min().unwrap_or(0),
        max_guesses: solved_counts().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: if duration.as_secs_f64() > 0.0 {
            total_games as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
