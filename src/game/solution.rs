//! Solution boards and the feedback oracle

use crate::core::{
    BOARD_SIZE, Board, Direction, GuessIndex, Hint, HintKind, Strength, WORD_LENGTH, Word,
    is_blocked,
};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A filled board: three row words and three column words
///
/// Rows are the words on lines 0, 2 and 4; columns likewise. Row and column
/// words always agree on their nine intersections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SolutionRecord", into = "SolutionRecord")]
pub struct Solution {
    rows: [Word; 3],
    columns: [Word; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SolutionRecord {
    rows: [String; 3],
    columns: [String; 3],
}

impl Solution {
    /// Build a solution, checking every intersection
    ///
    /// # Errors
    /// Returns `EngineError::IntersectionMismatch` at the first crossing where
    /// the row and column words disagree.
    pub fn new(rows: [Word; 3], columns: [Word; 3]) -> Result<Self, EngineError> {
        for (r, row) in rows.iter().enumerate() {
            for (c, column) in columns.iter().enumerate() {
                if row.char_at(2 * c) != column.char_at(2 * r) {
                    return Err(EngineError::IntersectionMismatch { x: 2 * c, y: 2 * r });
                }
            }
        }
        Ok(Self { rows, columns })
    }

    /// Parse six words: rows 0, 2, 4 then columns 0, 2, 4
    ///
    /// # Errors
    /// Fails on a word count other than six, an invalid word, or a mismatched
    /// intersection.
    ///
    /// # Examples
    /// ```
    /// use cross_wordle::game::Solution;
    ///
    /// let solution =
    ///     Solution::from_words(&["about", "oxide", "elect", "above", "olive", "theft"]).unwrap();
    /// assert_eq!(solution.letter(2, 2).unwrap(), b'I');
    ///
    /// assert!(Solution::from_words(&["about", "oxide", "elect", "above", "olive", "crane"]).is_err());
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, EngineError> {
        let parsed = words
            .iter()
            .map(|w| {
                Word::new(w.as_ref())
                    .map_err(|e| EngineError::InvalidState(format!("'{}': {e}", w.as_ref())))
            })
            .collect::<Result<Vec<Word>, EngineError>>()?;

        let [r0, r2, r4, c0, c2, c4]: [Word; 6] = parsed.try_into().map_err(|v: Vec<Word>| {
            EngineError::InvalidState(format!("a solution needs 6 words, got {}", v.len()))
        })?;
        Self::new([r0, r2, r4], [c0, c2, c4])
    }

    #[must_use]
    pub const fn rows(&self) -> &[Word; 3] {
        &self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> &[Word; 3] {
        &self.columns
    }

    /// The word on a guess line
    #[must_use]
    pub fn word(&self, direction: Direction, index: GuessIndex) -> &Word {
        let slot = index.value() / 2;
        match direction {
            Direction::Horizontal => &self.rows[slot],
            Direction::Vertical => &self.columns[slot],
        }
    }

    /// The solution letter at a playable cell
    ///
    /// # Errors
    /// Fails for blocked or out-of-range cells.
    pub fn letter(&self, x: usize, y: usize) -> Result<u8, EngineError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(EngineError::OutOfBounds { x, y });
        }
        if y % 2 == 0 {
            Ok(self.rows[y / 2].char_at(x))
        } else if x % 2 == 0 {
            Ok(self.columns[x / 2].char_at(y))
        } else {
            Err(EngineError::BlockedCell { x, y })
        }
    }

    /// True if any of the six words contains `letter`
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.rows
            .iter()
            .chain(&self.columns)
            .any(|word| word.has_letter(letter))
    }

    /// The fully revealed board
    ///
    /// # Errors
    /// Only fails if the solution's own words conflict, which construction
    /// rules out.
    pub fn to_board(&self) -> Result<Board, EngineError> {
        GuessIndex::SEQUENCE
            .iter()
            .zip(&self.rows)
            .map(|(&index, word)| (Direction::Horizontal, index, word))
            .chain(
                GuessIndex::SEQUENCE
                    .iter()
                    .zip(&self.columns)
                    .map(|(&index, word)| (Direction::Vertical, index, word)),
            )
            .try_fold(Board::new(), |board, (direction, index, word)| {
                board.with_word(direction, index, word.text())
            })
    }

    /// Score a guess and return the board with its feedback
    ///
    /// Every cell of the guessed line receives one hint. Exact matches also
    /// confirm the cell's letter.
    ///
    /// # Errors
    /// Fails for a guess that is not five ASCII letters.
    pub fn apply_guess(
        &self,
        board: &Board,
        direction: Direction,
        index: GuessIndex,
        guess: &str,
    ) -> Result<Board, EngineError> {
        if let Some(bad) = guess.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(EngineError::InvalidLetter(bad));
        }
        let letters = guess.as_bytes();
        if letters.len() != WORD_LENGTH {
            return Err(EngineError::WordLength {
                expected: WORD_LENGTH,
                found: letters.len(),
            });
        }

        let mut next = board.clone();
        for (i, &raw) in letters.iter().enumerate() {
            let letter = raw.to_ascii_uppercase();
            let (x, y) = direction.coordinates(index, i);
            let kind = self.feedback(x, y, letter)?;
            if kind == HintKind::Exact {
                next.set_letter(x, y, letter)?;
            }
            next.push_hint(x, y, Hint::new(letter, kind))?;
        }
        Ok(next)
    }

    fn feedback(&self, x: usize, y: usize, letter: u8) -> Result<HintKind, EngineError> {
        if self.letter(x, y)? == letter {
            return Ok(HintKind::Exact);
        }

        let row = (y % 2 == 0 && self.rows[y / 2].has_letter(letter))
            .then(|| strength(&self.rows, letter))
            .flatten();
        let column = (x % 2 == 0 && self.columns[x / 2].has_letter(letter))
            .then(|| strength(&self.columns, letter))
            .flatten();

        Ok(match (row, column) {
            (Some(r), Some(c)) => HintKind::RowColumn(r, c),
            (Some(r), None) => HintKind::Row(r),
            (None, Some(c)) => HintKind::Column(c),
            (None, None) if self.contains(letter) => HintKind::Misplaced,
            (None, None) => HintKind::Absent,
        })
    }
}

/// Number of words on one axis containing `letter`
fn strength(words: &[Word; 3], letter: u8) -> Option<Strength> {
    let count = words.iter().filter(|word| word.has_letter(letter)).count();
    u8::try_from(count).ok().and_then(Strength::new)
}

impl TryFrom<SolutionRecord> for Solution {
    type Error = EngineError;

    fn try_from(record: SolutionRecord) -> Result<Self, Self::Error> {
        let [r0, r2, r4] = record.rows;
        let [c0, c2, c4] = record.columns;
        Self::from_words(&[r0, r2, r4, c0, c2, c4])
    }
}

impl From<Solution> for SolutionRecord {
    fn from(solution: Solution) -> Self {
        Self {
            rows: solution.rows.map(|word| word.text().to_string()),
            columns: solution.columns.map(|word| word.text().to_string()),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            let line: String = (0..BOARD_SIZE)
                .map(|x| {
                    if is_blocked(x, y) {
                        '#'
                    } else {
                        self.letter(x, y).map_or('?', char::from)
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
