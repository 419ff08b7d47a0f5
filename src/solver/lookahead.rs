//! Feasibility lookahead
//!
//! A candidate is feasible when the board stays solvable for a few more
//! simulated moves after it is placed. The simulation plays the solver
//! against itself: place the word, advance the line, ask for the next guess
//! on the hypothetical board, repeat.

use super::{Solver, any_candidate, extract_constraints};
use crate::core::{Board, Direction, GameState, GuessIndex, Word};
use crate::error::EngineError;
use log::trace;

impl Solver<'_> {
    /// Check whether placing `word` on the active line keeps the board alive
    ///
    /// Performs at most `budget` simulated insertions. The simulation accepts
    /// once the board is complete, the simulated guesses run out, or the
    /// budget is spent; it rejects as soon as a crossing line has no corpus
    /// match or the nested selection finds nothing.
    pub(super) fn is_feasible(
        &self,
        state: &GameState,
        direction: Direction,
        word: &str,
        budget: usize,
    ) -> Result<bool, EngineError> {
        let mut index = state.next_guess_index;
        let mut direction = direction;
        let mut remaining = state.guesses_remaining;
        let mut board = state.board.with_word(direction, index, word)?;

        for iteration in 1..=budget {
            if board.is_complete() {
                return Ok(true);
            }
            if let Some(dead) = dead_line(self.corpus, &board, direction.opposite()) {
                trace!("{word}: {} line {dead} has no candidates", direction.opposite());
                return Ok(false);
            }

            remaining = remaining.saturating_sub(1);
            if remaining == 0 || iteration == budget {
                return Ok(true);
            }

            index = index.next();
            let nested = GameState::new(board, index, remaining, state.language.clone());
            let Some(guess) = self.select(&nested, budget - iteration)? else {
                return Ok(false);
            };

            direction = guess.direction.unwrap_or(Direction::Horizontal);
            board = nested.board.with_word(direction, index, guess.word())?;
        }

        Ok(true)
    }
}

/// First line on `axis` that no corpus word can fill
fn dead_line(corpus: &[Word], board: &Board, axis: Direction) -> Option<GuessIndex> {
    GuessIndex::SEQUENCE
        .into_iter()
        .find(|&line| !any_candidate(corpus, &extract_constraints(board, axis, line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hint, HintKind, Language, Strength};
    use crate::solver::SolverConfig;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn index(value: usize) -> GuessIndex {
        GuessIndex::new(value).unwrap()
    }

    fn solution_words() -> Vec<Word> {
        words(&["about", "oxide", "elect", "above", "olive", "theft"])
    }

    fn touched(remaining: u32, line: usize) -> GameState {
        let mut board = Board::new();
        board
            .push_hint(4, 4, Hint::new(b'Q', HintKind::Misplaced))
            .unwrap();
        GameState::new(board, index(line), remaining, Language::english())
    }

    #[test]
    fn dead_line_finds_unfillable_crossing() {
        let corpus = words(&["abcde", "axyzw"]);
        let board = Board::new()
            .with_word(Direction::Horizontal, index(0), "ABCDE")
            .unwrap();

        // Column 2 must start with C; nothing does
        assert_eq!(dead_line(&corpus, &board, Direction::Vertical), Some(index(2)));
        // Rows are untouched by the placement
        assert_eq!(dead_line(&corpus, &board, Direction::Horizontal), None);
    }

    #[test]
    fn word_that_blocks_a_crossing_is_infeasible() {
        let corpus = words(&["abcde", "axyzw"]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let state = touched(10, 0);

        for word in ["ABCDE", "AXYZW"] {
            assert!(
                !solver
                    .is_feasible(&state, Direction::Horizontal, word, 6)
                    .unwrap()
            );
        }
    }

    #[test]
    fn word_from_a_solvable_board_is_feasible() {
        let corpus = solution_words();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let state = touched(10, 0);

        assert!(
            solver
                .is_feasible(&state, Direction::Horizontal, "ABOUT", 6)
                .unwrap()
        );
        assert!(
            solver
                .is_feasible(&state, Direction::Vertical, "ABOVE", 6)
                .unwrap()
        );
    }

    #[test]
    fn crossing_dead_end_is_rejected() {
        let corpus = solution_words();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let state = touched(10, 0);

        // OXIDE across row 0 leaves column 2 starting with I
        assert!(
            !solver
                .is_feasible(&state, Direction::Horizontal, "OXIDE", 6)
                .unwrap()
        );
    }

    #[test]
    fn confirmed_letter_cannot_satisfy_an_excluded_crossing() {
        let corpus = words(&["tiger", "attic", "angle", "sprat"]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut board = Board::new();
        // T is known to be missing from column 0
        board
            .push_hint(0, 0, Hint::new(b'T', HintKind::Row(Strength::ONE)))
            .unwrap();
        let state = GameState::new(board, index(2), 10, Language::english());

        // TIGER across row 2 writes T into column 0
        assert!(
            !solver
                .is_feasible(&state, Direction::Horizontal, "TIGER", 1)
                .unwrap()
        );
    }

    #[test]
    fn empty_next_line_rejects_the_candidate() {
        let corpus = solution_words();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut board = Board::new();
        // Cells off every column: row 2 loses every corpus word, columns keep theirs
        board
            .push_hint(1, 2, Hint::new(b'E', HintKind::Misplaced))
            .unwrap();
        board
            .push_hint(3, 2, Hint::new(b'O', HintKind::Misplaced))
            .unwrap();
        let state = GameState::new(board, index(0), 10, Language::english());

        // Every column survives ABOUT, so one insertion accepts it
        assert!(
            solver
                .is_feasible(&state, Direction::Horizontal, "ABOUT", 1)
                .unwrap()
        );
        // The follow-up guess for line 2 finds nothing
        assert!(
            !solver
                .is_feasible(&state, Direction::Horizontal, "ABOUT", 6)
                .unwrap()
        );
    }

    #[test]
    fn last_remaining_guess_is_accepted_after_crossing_check() {
        let corpus = words(&["about", "above"]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let state = touched(1, 0);

        // Columns 2 and 4 still die, so even the last guess is rejected
        assert!(
            !solver
                .is_feasible(&state, Direction::Horizontal, "ABOUT", 6)
                .unwrap()
        );

        let corpus = solution_words();
        let solver = Solver::new(&corpus, SolverConfig::default());
        assert!(
            solver
                .is_feasible(&state, Direction::Horizontal, "ABOUT", 6)
                .unwrap()
        );
    }

    #[test]
    fn single_insertion_budget_only_checks_crossings() {
        let corpus = solution_words();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let state = touched(10, 0);

        assert!(
            solver
                .is_feasible(&state, Direction::Horizontal, "ABOUT", 1)
                .unwrap()
        );
        assert!(
            !solver
                .is_feasible(&state, Direction::Horizontal, "OXIDE", 1)
                .unwrap()
        );
    }

    #[test]
    fn completing_the_board_is_feasible() {
        let corpus = solution_words();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let board = Board::new()
            .with_word(Direction::Horizontal, index(0), "ABOUT")
            .unwrap()
            .with_word(Direction::Horizontal, index(2), "OXIDE")
            .unwrap()
            .with_word(Direction::Horizontal, index(4), "ELECT")
            .unwrap()
            .with_word(Direction::Vertical, index(0), "ABOVE")
            .unwrap()
            .with_word(Direction::Vertical, index(2), "OLIVE")
            .unwrap();
        let state = GameState::new(board, index(4), 3, Language::english());

        assert!(
            solver
                .is_feasible(&state, Direction::Vertical, "THEFT", 6)
                .unwrap()
        );
    }
}
