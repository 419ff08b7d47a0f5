//! Guess selection
//!
//! Chooses between the horizontal and vertical word through the active line
//! and returns the best-scoring word whose placement survives the lookahead.

use super::{Guess, Solver, WordScore, extract_constraints, filter_candidates, score_words};
use crate::core::{Board, Direction, GameState, GuessIndex};
use crate::error::EngineError;
use log::{debug, info, trace};
use std::cmp::Ordering;

impl Solver<'_> {
    /// Select the next guess with `budget` lookahead insertions available
    ///
    /// Mutually recursive with `is_feasible`; every nested call receives a
    /// strictly smaller budget.
    pub(super) fn select(
        &self,
        state: &GameState,
        budget: usize,
    ) -> Result<Option<Guess>, EngineError> {
        let board = &state.board;

        if board.is_virgin() {
            let ranked = score_words(self.corpus)?;
            return Ok(ranked.into_iter().next().map(|score| Guess {
                score,
                direction: None,
            }));
        }

        if board.is_complete() {
            debug!("Board is complete, no further guess");
            return Ok(None);
        }

        let index = state.next_guess_index;
        let horizontal = self.rank_line(board, Direction::Horizontal, index)?;
        let vertical = self.rank_line(board, Direction::Vertical, index)?;

        if horizontal.is_empty() || vertical.is_empty() {
            info!(
                "Dead end at line {index}: {} horizontal, {} vertical candidates",
                horizontal.len(),
                vertical.len()
            );
            return Ok(None);
        }

        let horizontal_missing = board.missing_in_line(Direction::Horizontal, index);
        let vertical_missing = board.missing_in_line(Direction::Vertical, index);

        let preferred = match horizontal_missing.cmp(&vertical_missing) {
            Ordering::Greater => Some(Direction::Horizontal),
            Ordering::Less => Some(Direction::Vertical),
            Ordering::Equal => None,
        };

        if let Some(preferred) = preferred {
            let (ranked, other, other_ranked) = match preferred {
                Direction::Horizontal => (&horizontal, Direction::Vertical, &vertical),
                Direction::Vertical => (&vertical, Direction::Horizontal, &horizontal),
            };
            trace!(
                "Line {index}: {horizontal_missing} horizontal vs {vertical_missing} vertical unknowns, preferring {preferred}"
            );
            if let Some(guess) = self.best_feasible(state, preferred, ranked, budget)? {
                return Ok(Some(guess));
            }
            // The preferred side has nothing, so the comparison reduces to the other side
            debug!("No feasible {preferred} word at line {index}, trying {other}");
            return self.best_feasible(state, other, other_ranked, budget);
        }

        let best_horizontal = self.best_feasible(state, Direction::Horizontal, &horizontal, budget)?;
        let best_vertical = self.best_feasible(state, Direction::Vertical, &vertical, budget)?;

        Ok(match (best_horizontal, best_vertical) {
            (Some(h), Some(v)) => {
                // Ties go to horizontal
                if v.confidence() > h.confidence() {
                    Some(v)
                } else {
                    Some(h)
                }
            }
            (h, v) => {
                if h.is_none() && v.is_none() {
                    info!("No feasible word in either direction at line {index}");
                }
                h.or(v)
            }
        })
    }

    /// Filter the corpus for one line and rank the survivors
    fn rank_line(
        &self,
        board: &Board,
        direction: Direction,
        index: GuessIndex,
    ) -> Result<Vec<WordScore>, EngineError> {
        let spec = extract_constraints(board, direction, index);
        let candidates = filter_candidates(self.corpus, &spec);
        trace!(
            "{} {direction} candidates at line {index}",
            candidates.len()
        );
        score_words(&candidates)
    }

    /// Highest-ranked word in `ranked` whose placement is feasible
    ///
    /// Candidates are checked lazily in rank order, so the first success is
    /// the top survivor.
    fn best_feasible(
        &self,
        state: &GameState,
        direction: Direction,
        ranked: &[WordScore],
        budget: usize,
    ) -> Result<Option<Guess>, EngineError> {
        let Some(top) = ranked.first() else {
            return Ok(None);
        };

        // Every candidate is identical: nothing to choose between
        if top.confidence >= 1.0 || budget == 0 {
            return Ok(Some(Guess {
                score: top.clone(),
                direction: Some(direction),
            }));
        }

        for score in ranked {
            if self.is_feasible(state, direction, &score.word, budget)? {
                return Ok(Some(Guess {
                    score: score.clone(),
                    direction: Some(direction),
                }));
            }
            trace!("{} {direction} rejected by lookahead", score.word);
        }

        debug!(
            "All {} {direction} candidates rejected by lookahead",
            ranked.len()
        );
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hint, HintKind, Word};
    use crate::solver::SolverConfig;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn index(value: usize) -> GuessIndex {
        GuessIndex::new(value).unwrap()
    }

    fn state(board: Board, line: usize) -> GameState {
        GameState::new(board, index(line), 10, crate::core::Language::english())
    }

    /// Board with one irrelevant hint so it is no longer a first move
    fn touched_board() -> Board {
        let mut board = Board::new();
        board
            .push_hint(4, 4, Hint::new(b'Q', HintKind::Misplaced))
            .unwrap();
        board
    }

    #[test]
    fn virgin_board_scores_whole_corpus() {
        let corpus = words(&["slate", "crane", "crate"]);
        let solver = Solver::new(&corpus, SolverConfig::default());

        let guess = solver
            .compute_next_guess(&GameState::fresh(6))
            .unwrap()
            .unwrap();
        assert_eq!(guess.word(), "CRATE");
        assert!(guess.direction.is_none());
    }

    #[test]
    fn complete_board_has_no_guess() {
        let corpus = words(&["about", "oxide", "elect", "above", "olive", "theft"]);
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
            .unwrap()
            .with_word(Direction::Vertical, index(4), "THEFT")
            .unwrap();

        let solver = Solver::new(&corpus, SolverConfig::default());
        assert_eq!(solver.compute_next_guess(&state(board, 0)).unwrap(), None);
    }

    #[test]
    fn empty_direction_is_a_dead_end() {
        let corpus = words(&["about", "above", "olive"]);
        let mut board = touched_board();
        // Column 0 must start with Z, which no corpus word does
        board.set_letter(0, 0, b'Z').unwrap();

        let solver = Solver::new(&corpus, SolverConfig::default());
        assert_eq!(solver.compute_next_guess(&state(board, 0)).unwrap(), None);
    }

    #[test]
    fn prefers_direction_with_more_unknowns() {
        // ABOVE and ABOUT tie on column 0; corpus order breaks the tie
        let corpus = words(&["above", "about", "oxide", "elect", "olive", "theft"]);
        // Row 0 fully known, column 0 has four unknowns
        let board = touched_board()
            .with_word(Direction::Horizontal, index(0), "ABOUT")
            .unwrap();

        let solver = Solver::new(&corpus, SolverConfig::new(0));
        let guess = solver
            .compute_next_guess(&state(board, 0))
            .unwrap()
            .unwrap();
        assert_eq!(guess.direction, Some(Direction::Vertical));
        assert_eq!(guess.word(), "ABOVE");
    }

    #[test]
    fn single_candidate_short_circuits_lookahead() {
        // OXIDE is the only row-2 word; no column word can ever fit, so the
        // lookahead would reject it if it ran
        let corpus = words(&["oxide", "zzzzz"]);
        let mut board = touched_board();
        board.set_letter(0, 2, b'O').unwrap();

        let solver = Solver::new(&corpus, SolverConfig::default());
        // Column 2 has more unknowns and is tried first, but every placement
        // kills a row, so the selector falls back to the single row word
        let guess = solver
            .compute_next_guess(&state(board, 2))
            .unwrap()
            .unwrap();
        assert_eq!(guess.direction, Some(Direction::Horizontal));
        assert_eq!(guess.word(), "OXIDE");
        assert!((guess.confidence() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn equal_unknowns_with_equal_confidence_go_horizontal() {
        let corpus = words(&["crane", "crate", "slate"]);
        let board = touched_board();

        // Without lookahead both directions rank the same list identically
        let solver = Solver::new(&corpus, SolverConfig::new(0));
        let guess = solver
            .compute_next_guess(&state(board, 0))
            .unwrap()
            .unwrap();
        assert_eq!(guess.direction, Some(Direction::Horizontal));
        assert_eq!(guess.word(), "CRATE");
    }

    #[test]
    fn equal_unknowns_pick_higher_confidence() {
        let corpus = words(&["crane", "crate", "slate"]);
        let mut board = touched_board();
        // (0, 1) sits on column 0 only, so row 0 keeps all three words
        board
            .push_hint(0, 1, Hint::new(b'C', HintKind::Misplaced))
            .unwrap();

        let solver = Solver::new(&corpus, SolverConfig::new(0));
        let guess = solver
            .compute_next_guess(&state(board, 0))
            .unwrap()
            .unwrap();
        // SLATE is the only column word and scores 1.0 against CRATE's lower score
        assert_eq!(guess.direction, Some(Direction::Vertical));
        assert_eq!(guess.word(), "SLATE");
    }
}
