//! Random solution boards
//!
//! Fills the six lines depth-first from a shuffled corpus, using the solver's
//! own constraint filter on the partial board to pick words that fit.

use super::Solution;
use crate::core::{Board, Direction, GuessIndex, Word};
use crate::solver::{any_candidate, extract_constraints};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Placement budget for one generation attempt
pub const DEFAULT_NODE_BUDGET: usize = 100_000;

/// Fill order: the first row, then every column, then the remaining rows
const FILL_ORDER: [(Direction, GuessIndex); 6] = [
    (Direction::Horizontal, GuessIndex::SEQUENCE[0]),
    (Direction::Vertical, GuessIndex::SEQUENCE[0]),
    (Direction::Vertical, GuessIndex::SEQUENCE[1]),
    (Direction::Vertical, GuessIndex::SEQUENCE[2]),
    (Direction::Horizontal, GuessIndex::SEQUENCE[1]),
    (Direction::Horizontal, GuessIndex::SEQUENCE[2]),
];

/// Generate a random solution whose six words all come from `corpus`
///
/// No word is used twice. Returns `None` when `node_budget` placements are
/// spent without completing a board.
///
/// # Examples
/// ```
/// use cross_wordle::core::Word;
/// use cross_wordle::game::generate_solution;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let corpus: Vec<Word> = ["about", "oxide", "elect", "above", "olive", "theft"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let solution = generate_solution(&corpus, &mut rng, 1_000).unwrap();
/// assert!(solution.to_board().unwrap().is_complete());
/// ```
pub fn generate_solution<R: Rng + ?Sized>(
    corpus: &[Word],
    rng: &mut R,
    node_budget: usize,
) -> Option<Solution> {
    let mut order: Vec<&Word> = corpus.iter().collect();
    order.shuffle(rng);

    let mut search = Search {
        corpus,
        order: &order,
        placed: Vec::with_capacity(FILL_ORDER.len()),
        nodes: 0,
        budget: node_budget,
    };

    if !search.fill(&Board::new()) {
        debug!(
            "No solution board after {} placements (budget {node_budget})",
            search.nodes
        );
        return None;
    }
    debug!("Solution board found after {} placements", search.nodes);

    let [r0, c0, c2, c4, r2, r4] = <[&Word; 6]>::try_from(search.placed).ok()?;
    Solution::new(
        [r0.clone(), r2.clone(), r4.clone()],
        [c0.clone(), c2.clone(), c4.clone()],
    )
    .ok()
}

struct Search<'a> {
    corpus: &'a [Word],
    order: &'a [&'a Word],
    placed: Vec<&'a Word>,
    nodes: usize,
    budget: usize,
}

impl Search<'_> {
    fn fill(&mut self, board: &Board) -> bool {
        let Some(&(direction, index)) = FILL_ORDER.get(self.placed.len()) else {
            return true;
        };
        let spec = extract_constraints(board, direction, index);

        for &word in self.order {
            if !spec.matches(word) || self.placed.contains(&word) {
                continue;
            }
            if self.nodes >= self.budget {
                return false;
            }
            self.nodes += 1;

            let Ok(next) = board.with_word(direction, index, word.text()) else {
                continue;
            };
            if !self.open_lines_fillable(&next) {
                continue;
            }

            self.placed.push(word);
            if self.fill(&next) {
                return true;
            }
            self.placed.pop();
        }
        false
    }

    /// Every line still to be filled has at least one matching word
    fn open_lines_fillable(&self, board: &Board) -> bool {
        FILL_ORDER[self.placed.len() + 1..]
            .iter()
            .all(|&(direction, index)| {
                any_candidate(self.corpus, &extract_constraints(board, direction, index))
            })
    }
}
