//! Constraint extraction
//!
//! Turns the hints on one line (plus every absent letter on the board) into a
//! `FilterSpec` that candidate words for that line must satisfy.

use crate::core::{Board, Direction, GuessIndex, HintKind};
use rustc_hash::FxHashSet;

/// Letter constraints for one line
///
/// Rebuilt for every evaluation; letters are stored uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    required: FxHashSet<u8>,
    forbidden: FxHashSet<u8>,
    forbidden_at: FxHashSet<(usize, u8)>,
    required_at: FxHashSet<(usize, u8)>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter must appear somewhere in the word
    #[must_use]
    pub fn require(mut self, letter: u8) -> Self {
        self.required.insert(letter.to_ascii_uppercase());
        self
    }

    /// Letter must not appear anywhere in the word
    #[must_use]
    pub fn forbid(mut self, letter: u8) -> Self {
        self.forbidden.insert(letter.to_ascii_uppercase());
        self
    }

    /// Letter must not appear at `position`
    #[must_use]
    pub fn forbid_at(mut self, position: usize, letter: u8) -> Self {
        self.forbidden_at
            .insert((position, letter.to_ascii_uppercase()));
        self
    }

    /// Letter must appear at `position`
    #[must_use]
    pub fn require_at(mut self, position: usize, letter: u8) -> Self {
        self.required_at
            .insert((position, letter.to_ascii_uppercase()));
        self
    }

    pub fn required(&self) -> impl Iterator<Item = u8> + '_ {
        self.required.iter().copied()
    }

    pub fn forbidden(&self) -> impl Iterator<Item = u8> + '_ {
        self.forbidden.iter().copied()
    }

    pub fn forbidden_at(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.forbidden_at.iter().copied()
    }

    pub fn required_at(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.required_at.iter().copied()
    }

    /// True when the filter places no constraint at all
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.required.is_empty()
            && self.forbidden.is_empty()
            && self.forbidden_at.is_empty()
            && self.required_at.is_empty()
    }
}

/// Build the filter for the line at `index` in `direction`
///
/// # Examples
/// ```
/// use cross_wordle::core::{Board, Direction, GuessIndex, Hint, HintKind};
/// use cross_wordle::solver::extract_constraints;
///
/// let mut board = Board::new();
/// board.set_letter(2, 0, b'A').unwrap();
/// board.push_hint(4, 0, Hint::new(b'X', HintKind::Misplaced)).unwrap();
///
/// let spec = extract_constraints(&board, Direction::Horizontal, GuessIndex::new(0).unwrap());
/// assert!(spec.required_at().any(|pair| pair == (2, b'A')));
/// assert!(spec.forbidden().any(|letter| letter == b'X'));
/// ```
#[must_use]
pub fn extract_constraints(board: &Board, direction: Direction, index: GuessIndex) -> FilterSpec {
    let mut spec = FilterSpec::new();

    for (i, cell) in board.line(direction, index).enumerate() {
        if let Some(letter) = cell.letter() {
            spec.required_at.insert((i, letter));
        }

        for hint in cell.hints() {
            let letter = hint.letter();
            let in_line = match (hint.kind(), direction) {
                (HintKind::Exact | HintKind::Absent, _) => continue,
                (HintKind::Row(_), Direction::Horizontal)
                | (HintKind::Column(_), Direction::Vertical)
                | (HintKind::RowColumn(..), _) => true,
                (HintKind::Row(_), Direction::Vertical)
                | (HintKind::Column(_), Direction::Horizontal)
                | (HintKind::Misplaced, _) => false,
            };

            spec.forbidden_at.insert((i, letter));
            if in_line {
                spec.required.insert(letter);
            } else {
                spec.forbidden.insert(letter);
            }
        }
    }

    // Absent letters are excluded from every line on the board
    spec.forbidden
        .extend(board.hints().filter(|hint| hint.is_absent()).map(|hint| hint.letter()));

    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hint, Strength, Word};
    use crate::solver::any_candidate;

    fn index(value: usize) -> GuessIndex {
        GuessIndex::new(value).unwrap()
    }

    fn sorted<T: Ord>(items: impl Iterator<Item = T>) -> Vec<T> {
        let mut items: Vec<T> = items.collect();
        items.sort();
        items
    }

    #[test]
    fn empty_board_is_unconstrained() {
        let spec = extract_constraints(&Board::new(), Direction::Horizontal, index(0));
        assert!(spec.is_unconstrained());
    }

    #[test]
    fn confirmed_letters_become_required_positions() {
        let mut board = Board::new();
        board.set_letter(0, 2, b'S').unwrap();
        board.set_letter(4, 2, b'e').unwrap();

        let spec = extract_constraints(&board, Direction::Horizontal, index(2));
        assert_eq!(sorted(spec.required_at()), vec![(0, b'S'), (4, b'E')]);
        assert_eq!(spec.required().count(), 0);

        // Column 4 sees the E at its position 2
        let spec = extract_constraints(&board, Direction::Vertical, index(4));
        assert_eq!(sorted(spec.required_at()), vec![(2, b'E')]);
    }

    #[test]
    fn exact_hints_add_nothing() {
        let mut board = Board::new();
        board
            .push_hint(1, 0, Hint::new(b'R', HintKind::Exact))
            .unwrap();
        let spec = extract_constraints(&board, Direction::Horizontal, index(0));
        assert!(spec.is_unconstrained());
    }

    #[test]
    fn row_hint_on_horizontal_line_requires_letter_elsewhere() {
        let mut board = Board::new();
        board
            .push_hint(3, 0, Hint::new(b'T', HintKind::Row(Strength::TWO)))
            .unwrap();

        let spec = extract_constraints(&board, Direction::Horizontal, index(0));
        assert_eq!(sorted(spec.required()), vec![b'T']);
        assert_eq!(sorted(spec.forbidden_at()), vec![(3, b'T')]);
        assert_eq!(spec.forbidden().count(), 0);
    }

    #[test]
    fn row_hint_on_vertical_line_forbids_letter() {
        let mut board = Board::new();
        // Cell (0, 2) is shared by row 2 and column 0
        board
            .push_hint(0, 2, Hint::new(b'T', HintKind::Row(Strength::ONE)))
            .unwrap();

        let spec = extract_constraints(&board, Direction::Vertical, index(0));
        assert_eq!(sorted(spec.forbidden()), vec![b'T']);
        assert_eq!(spec.required().count(), 0);
    }

    #[test]
    fn column_hint_is_symmetric() {
        let mut board = Board::new();
        board
            .push_hint(0, 2, Hint::new(b'K', HintKind::Column(Strength::ONE)))
            .unwrap();

        let vertical = extract_constraints(&board, Direction::Vertical, index(0));
        assert_eq!(sorted(vertical.required()), vec![b'K']);
        assert_eq!(sorted(vertical.forbidden_at()), vec![(2, b'K')]);

        let horizontal = extract_constraints(&board, Direction::Horizontal, index(2));
        assert_eq!(sorted(horizontal.forbidden()), vec![b'K']);
    }

    #[test]
    fn combined_hint_requires_on_both_axes() {
        let mut board = Board::new();
        board
            .push_hint(
                2,
                2,
                Hint::new(b'M', HintKind::RowColumn(Strength::ONE, Strength::THREE)),
            )
            .unwrap();

        for direction in [Direction::Horizontal, Direction::Vertical] {
            let spec = extract_constraints(&board, direction, index(2));
            assert_eq!(sorted(spec.required()), vec![b'M']);
            assert_eq!(sorted(spec.forbidden_at()), vec![(2, b'M')]);
            assert_eq!(spec.forbidden().count(), 0);
        }
    }

    #[test]
    fn misplaced_hint_forbids_letter_in_line() {
        let mut board = Board::new();
        board
            .push_hint(4, 0, Hint::new(b'X', HintKind::Misplaced))
            .unwrap();

        let spec = extract_constraints(&board, Direction::Horizontal, index(0));
        assert_eq!(sorted(spec.forbidden()), vec![b'X']);

        // Other lines are unaffected
        let spec = extract_constraints(&board, Direction::Horizontal, index(2));
        assert!(spec.is_unconstrained());
    }

    #[test]
    fn absent_letters_apply_board_wide() {
        let mut board = Board::new();
        board
            .push_hint(4, 4, Hint::new(b'Z', HintKind::Absent))
            .unwrap();

        for direction in [Direction::Horizontal, Direction::Vertical] {
            for &line in &GuessIndex::SEQUENCE {
                let spec = extract_constraints(&board, direction, line);
                assert_eq!(sorted(spec.forbidden()), vec![b'Z']);
            }
        }
    }

    #[test]
    fn stale_hints_still_count() {
        let mut board = Board::new();
        board
            .push_hint(1, 0, Hint::new(b'A', HintKind::Misplaced))
            .unwrap();
        board
            .push_hint(1, 0, Hint::new(b'L', HintKind::Row(Strength::ONE)))
            .unwrap();

        let spec = extract_constraints(&board, Direction::Horizontal, index(0));
        assert_eq!(sorted(spec.forbidden()), vec![b'A']);
        assert_eq!(sorted(spec.required()), vec![b'L']);
        assert_eq!(sorted(spec.forbidden_at()), vec![(1, b'A'), (1, b'L')]);
    }

    #[test]
    fn confirmed_letter_does_not_lift_a_crossing_exclusion() {
        let mut board = Board::new();
        // T belongs to row 0 but not to column 0
        board
            .push_hint(0, 0, Hint::new(b'T', HintKind::Row(Strength::ONE)))
            .unwrap();
        board.set_letter(0, 2, b'T').unwrap();

        let spec = extract_constraints(&board, Direction::Vertical, index(0));
        assert_eq!(sorted(spec.forbidden()), vec![b'T']);
        assert_eq!(sorted(spec.required_at()), vec![(2, b'T')]);

        let corpus = vec![Word::new("attic").unwrap()];
        assert!(!any_candidate(&corpus, &spec));
    }

    #[test]
    fn builder_normalizes_case() {
        let spec = FilterSpec::new().require(b'a').forbid_at(1, b'b');
        assert_eq!(sorted(spec.required()), vec![b'A']);
        assert_eq!(sorted(spec.forbidden_at()), vec![(1, b'B')]);
    }
}
