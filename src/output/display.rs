//! Display functions for command results

use super::formatters::{board_lines, create_progress_bar, hint_badge};
use crate::commands::{BenchmarkResult, NextResult, PlayResult};
use crate::core::{Board, Direction};
use crate::game::Outcome;
use colored::Colorize;

/// Print the board with every cell's latest hint beside its row
pub fn print_board(board: &Board) {
    for (y, line) in board_lines(board).iter().enumerate() {
        let hints: Vec<String> = board
            .cells()
            .filter(|cell| cell.y() == y)
            .filter_map(|cell| cell.hints().last().map(|&hint| hint_badge(hint).to_string()))
            .collect();
        println!("   {}   {}", line.bright_white().bold(), hints.join(" "));
    }
}

/// Print the solver's recommendation for a saved state
pub fn print_next_result(result: &NextResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Line {} | {} guesses left | language {}",
        result.state.next_guess_index,
        result.state.guesses_remaining,
        result.state.language
    );
    println!("{}", "─".repeat(60).cyan());
    print_board(&result.state.board);

    println!(
        "\n   Candidates: {} across, {} down (of {})",
        result.horizontal_candidates, result.vertical_candidates, result.corpus_size
    );

    match &result.guess {
        Some(guess) => {
            let placement = match guess.direction {
                Some(Direction::Horizontal) => "across".to_string(),
                Some(Direction::Vertical) => "down".to_string(),
                None => "either way".to_string(),
            };
            println!(
                "\n   Next guess: {} {} (confidence {})",
                guess.word().bright_yellow().bold(),
                placement,
                format!("{:.3}", guess.confidence()).green()
            );
        }
        None => {
            let reason = if result.state.board.is_complete() {
                "board is already complete".green()
            } else {
                "no feasible word for this line".red()
            };
            println!("\n   No guess available: {reason}");
        }
    }
}

/// Print a self-played game
pub fn print_play_result(result: &PlayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solution:");
    for line in result.solution.to_string().lines() {
        println!("   {}", line.bright_yellow());
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.record.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} on line {} (confidence {:.3}, {} cells unknown)",
            i + 1,
            step.word.bright_white().bold(),
            step.direction,
            step.index,
            step.confidence,
            step.unknown_after
        );
    }

    if verbose {
        println!();
        print_board(&result.record.board);
    }

    println!();
    let guesses = result.record.guess_count();
    match result.record.outcome {
        Outcome::Solved => println!(
            "{}",
            format!("✅ Solved in {guesses} guesses!").green().bold()
        ),
        outcome => println!(
            "{}",
            format!("❌ Not solved after {guesses} guesses ({outcome})")
                .red()
                .bold()
        ),
    }
    println!("   Time taken: {:.2}s", result.duration.as_secs_f64());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let pct = |count: usize| {
        if result.total_games > 0 {
            count as f64 / result.total_games as f64 * 100.0
        } else {
            0.0
        }
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards played:    {}", result.total_games);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", pct(result.solved)).green()
    );
    if result.stuck > 0 {
        println!(
            "   Stuck:            {} {}",
            result.stuck,
            format!("({:.1}%)", pct(result.stuck)).red()
        );
    }
    if result.out_of_guesses > 0 {
        println!(
            "   Out of guesses:   {} {}",
            result.out_of_guesses,
            format!("({:.1}%)", pct(result.out_of_guesses)).yellow()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();
    let max_count = counts.iter().map(|&(_, count)| count).max().unwrap_or(1);

    for (guesses, count) in counts {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "   {guesses:2}: {} {count:4} ({:5.1}%)",
            bar.green(),
            count as f64 / result.solved.max(1) as f64 * 100.0
        );
    }
}
