//! Cross Wordle Solver - CLI
//!
//! Suggests the next guess for a saved game, self-plays single boards and
//! benchmarks the solver over many random boards.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use cross_wordle::{
    commands::{SolutionChoice, play_game, run_benchmark, suggest_next},
    core::{GameState, Language, Word},
    game::PlayConfig,
    output::{print_benchmark_result, print_next_result, print_play_result},
    solver::{DEFAULT_LOOKAHEAD_DEPTH, SolverConfig},
    wordlists::{Category, DirectoryWords, EmbeddedWords, WordSource},
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cross_wordle",
    about = "Solver for the 5x5 cross-board word puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'answers' (default), 'all', or a directory laid out as <dir>/<language>/<answers|allowed>.txt
    #[arg(short = 'w', long, global = true, default_value = "answers")]
    wordlist: String,

    /// Simulated insertions per feasibility check (0 disables the lookahead)
    #[arg(short, long, global = true, default_value_t = DEFAULT_LOOKAHEAD_DEPTH)]
    depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next guess for a saved game state
    Next {
        /// YAML file holding the game state
        #[arg(short, long)]
        state: PathBuf,
    },

    /// Self-play one board
    Play {
        /// Solution words: R0,R2,R4,C0,C2,C4
        #[arg(long, conflicts_with = "seed")]
        solution: Option<String>,

        /// Seed for a randomly generated board
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of guesses
        #[arg(short, long, default_value = "10")]
        guesses: u32,

        /// Show the final board with its hints
        #[arg(short, long)]
        verbose: bool,
    },

    /// Self-play many random boards in parallel
    Benchmark {
        /// Number of boards to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for board generation
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Maximum number of guesses per board
        #[arg(short, long, default_value = "10")]
        guesses: u32,
    },
}

/// Word source and category selected by the -w flag
///
/// - "answers": embedded curated list
/// - "all": embedded full dictionary
/// - "<dir>": `<dir>/<language>/answers.txt`
fn word_source(wordlist: &str) -> Result<(Box<dyn WordSource>, Category)> {
    if let Ok(category) = wordlist.parse::<Category>() {
        return Ok((Box::new(EmbeddedWords), category));
    }

    let root = Path::new(wordlist);
    if !root.is_dir() {
        bail!("Wordlist '{wordlist}' is neither 'answers', 'all' nor a directory");
    }
    Ok((Box::new(DirectoryWords::new(root)), Category::Answers))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (source, category) = word_source(&cli.wordlist)?;
    let solver_config = SolverConfig::new(cli.depth);

    match cli.command {
        Commands::Next { state } => run_next_command(&state, source.as_ref(), category, solver_config),
        Commands::Play {
            solution,
            seed,
            guesses,
            verbose,
        } => {
            let choice = match (solution, seed) {
                (Some(words), _) => SolutionChoice::Words(words),
                (None, Some(seed)) => SolutionChoice::Seed(seed),
                (None, None) => SolutionChoice::Random,
            };
            let corpus = load_corpus(source.as_ref(), category)?;
            let result = play_game(&corpus, &choice, solver_config, PlayConfig::new(guesses))
                .context("Self-play failed")?;
            print_play_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            guesses,
        } => {
            let corpus = load_corpus(source.as_ref(), category)?;
            println!("Running benchmark on {count} random boards...");
            let result = run_benchmark(
                &corpus,
                count,
                seed,
                solver_config,
                PlayConfig::new(guesses),
                true,
            )
            .context("Benchmark failed")?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn load_corpus(source: &dyn WordSource, category: Category) -> Result<Vec<Word>> {
    let corpus = source
        .words(&Language::english(), category)
        .context("Failed to load word list")?;
    if corpus.is_empty() {
        bail!("Word list is empty");
    }
    Ok(corpus)
}

fn run_next_command(
    path: &Path,
    source: &dyn WordSource,
    category: Category,
    config: SolverConfig,
) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    let state = GameState::from_yaml(&text)
        .with_context(|| format!("Failed to parse state file {}", path.display()))?;

    let result = suggest_next(state, source, category, config).context("Solver failed")?;
    print_next_result(&result);
    Ok(())
}
