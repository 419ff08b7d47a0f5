//! The 5×5 cross-shaped board
//!
//! Rows 0, 2, 4 and columns 0, 2, 4 each hold one five-letter word. The four
//! cells where two odd coordinates meet are blocked, leaving 21 playable cells.
//!
//! ```text
//!   x→ 0 1 2 3 4
//! y 0  . . . . .
//! ↓ 1  . # . # .
//!   2  . . . . .
//!   3  . # . # .
//!   4  . . . . .
//! ```

use super::{BOARD_SIZE, Hint, WORD_LENGTH};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells that can hold a letter
pub const PLAYABLE_CELLS: usize = BOARD_SIZE * BOARD_SIZE - 4;

/// Orientation of a guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Coordinates of position `i` along the line at `index`
    #[must_use]
    pub const fn coordinates(self, index: GuessIndex, i: usize) -> (usize, usize) {
        match self {
            Self::Horizontal => (i, index.value()),
            Self::Vertical => (index.value(), i),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Which row/column is the active guess line: 0, 2 or 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GuessIndex(usize);

impl GuessIndex {
    /// The cyclic guess order shared by both axes
    pub const SEQUENCE: [Self; 3] = [Self(0), Self(2), Self(4)];

    /// Create a guess index
    ///
    /// # Errors
    /// Returns `EngineError::InvalidGuessIndex` unless `value` is 0, 2 or 4.
    pub const fn new(value: usize) -> Result<Self, EngineError> {
        match value {
            0 | 2 | 4 => Ok(Self(value)),
            _ => Err(EngineError::InvalidGuessIndex(value)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// The following index in the cycle `0 → 2 → 4 → 0`
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 2) % 6)
    }
}

impl TryFrom<usize> for GuessIndex {
    type Error = EngineError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GuessIndex> for usize {
    fn from(index: GuessIndex) -> Self {
        index.0
    }
}

impl fmt::Display for GuessIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// True for the four cells that never hold a letter
#[inline]
#[must_use]
pub const fn is_blocked(x: usize, y: usize) -> bool {
    x % 2 == 1 && y % 2 == 1
}

/// One board position with its confirmed letter and hint history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    letter: Option<u8>,
    hints: Vec<Hint>,
}

impl Cell {
    const fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            letter: None,
            hints: Vec::new(),
        }
    }

    #[must_use]
    pub const fn x(&self) -> usize {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Confirmed letter (uppercase), if any
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    /// Hints in the order the guesses were made
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        is_blocked(self.x, self.y)
    }
}

/// A board snapshot
///
/// Cloning produces a fully independent board; the simulator relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord", into = "BoardRecord")]
pub struct Board {
    /// Row-major, index `y * BOARD_SIZE + x`
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with no letters and no hints
    #[must_use]
    pub fn new() -> Self {
        let cells = (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell::new(x, y)))
            .collect();
        Self { cells }
    }

    fn offset(x: usize, y: usize) -> Result<usize, EngineError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(EngineError::OutOfBounds { x, y });
        }
        Ok(y * BOARD_SIZE + x)
    }

    /// Look up a cell
    ///
    /// # Errors
    /// Returns `EngineError::OutOfBounds` for coordinates past the grid.
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, EngineError> {
        Ok(&self.cells[Self::offset(x, y)?])
    }

    fn playable_cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, EngineError> {
        let offset = Self::offset(x, y)?;
        if is_blocked(x, y) {
            return Err(EngineError::BlockedCell { x, y });
        }
        Ok(&mut self.cells[offset])
    }

    /// Confirm the letter at a cell
    ///
    /// # Errors
    /// Fails for blocked or out-of-range cells and non-alphabetic letters.
    pub fn set_letter(&mut self, x: usize, y: usize, letter: u8) -> Result<(), EngineError> {
        if !letter.is_ascii_alphabetic() {
            return Err(EngineError::InvalidLetter(char::from(letter)));
        }
        self.playable_cell_mut(x, y)?.letter = Some(letter.to_ascii_uppercase());
        Ok(())
    }

    /// Append a hint to a cell's history
    ///
    /// # Errors
    /// Fails for blocked or out-of-range cells.
    pub fn push_hint(&mut self, x: usize, y: usize, hint: Hint) -> Result<(), EngineError> {
        self.playable_cell_mut(x, y)?.hints.push(hint);
        Ok(())
    }

    /// All 25 cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The five cells of the line at `index`, in reading order
    pub fn line(&self, direction: Direction, index: GuessIndex) -> impl Iterator<Item = &Cell> {
        (0..WORD_LENGTH).map(move |i| {
            let (x, y) = direction.coordinates(index, i);
            &self.cells[y * BOARD_SIZE + x]
        })
    }

    /// The line's letters with `.` for unknown cells
    #[must_use]
    pub fn line_text(&self, direction: Direction, index: GuessIndex) -> String {
        self.line(direction, index)
            .map(|cell| cell.letter.map_or('.', char::from))
            .collect()
    }

    /// Number of cells in the line without a confirmed letter
    #[must_use]
    pub fn missing_in_line(&self, direction: Direction, index: GuessIndex) -> usize {
        self.line(direction, index)
            .filter(|cell| cell.letter.is_none())
            .count()
    }

    /// Every hint on the board, in no particular cell order
    pub fn hints(&self) -> impl Iterator<Item = &Hint> {
        self.cells.iter().flat_map(|cell| cell.hints.iter())
    }

    /// True for a first-move board: no hints and no letters
    #[must_use]
    pub fn is_virgin(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.hints.is_empty() && cell.letter.is_none())
    }

    /// True when every playable cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .filter(|cell| !cell.is_blocked())
            .all(|cell| cell.letter.is_some())
    }

    /// Return a copy of this board with `word` written into a line
    ///
    /// The original board is left untouched.
    ///
    /// # Errors
    /// - `EngineError::InvalidLetter` for characters outside ASCII `A-Z`
    /// - `EngineError::WordLength` if `word` is not five letters
    /// - `EngineError::LetterConflict` if a confirmed letter differs
    ///
    /// # Examples
    /// ```
    /// use cross_wordle::core::{Board, Direction, GuessIndex};
    ///
    /// let board = Board::new();
    /// let index = GuessIndex::new(2).unwrap();
    /// let next = board.with_word(Direction::Vertical, index, "crane").unwrap();
    ///
    /// assert_eq!(next.line_text(Direction::Vertical, index), "CRANE");
    /// assert!(board.is_virgin());
    /// ```
    pub fn with_word(
        &self,
        direction: Direction,
        index: GuessIndex,
        word: &str,
    ) -> Result<Self, EngineError> {
        if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(EngineError::InvalidLetter(bad));
        }
        let letters = word.as_bytes();
        if letters.len() != WORD_LENGTH {
            return Err(EngineError::WordLength {
                expected: WORD_LENGTH,
                found: letters.len(),
            });
        }

        let mut board = self.clone();
        for (i, &raw) in letters.iter().enumerate() {
            let incoming = raw.to_ascii_uppercase();
            let (x, y) = direction.coordinates(index, i);
            let cell = board.playable_cell_mut(x, y)?;
            match cell.letter {
                Some(existing) if existing != incoming => {
                    return Err(EngineError::LetterConflict {
                        x,
                        y,
                        existing: char::from(existing),
                        incoming: char::from(incoming),
                    });
                }
                _ => cell.letter = Some(incoming),
            }
        }

        Ok(board)
    }
}

/// True when all 21 playable cells hold a letter
#[must_use]
pub fn is_board_complete(board: &Board) -> bool {
    board.is_complete()
}

/// Hints recorded on one cell of a serialized board
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CellHints {
    at: (usize, usize),
    hints: Vec<Hint>,
}

/// On-disk board layout: five letter rows plus per-cell hint lists
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardRecord {
    letters: Vec<String>,
    #[serde(default)]
    hints: Vec<CellHints>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = EngineError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        if record.letters.len() != BOARD_SIZE {
            return Err(EngineError::InvalidState(format!(
                "expected {BOARD_SIZE} letter rows, got {}",
                record.letters.len()
            )));
        }

        let mut board = Self::new();
        for (y, row) in record.letters.iter().enumerate() {
            let row: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if row.len() != BOARD_SIZE {
                return Err(EngineError::InvalidState(format!(
                    "row {y} must have {BOARD_SIZE} cells, got {}",
                    row.len()
                )));
            }
            for (x, c) in row.into_iter().enumerate() {
                match c {
                    '.' | '#' | '_' => {}
                    c if c.is_ascii_alphabetic() => board.set_letter(x, y, c as u8)?,
                    c => return Err(EngineError::InvalidLetter(c)),
                }
            }
        }

        for entry in record.hints {
            let (x, y) = entry.at;
            for hint in entry.hints {
                board.push_hint(x, y, hint)?;
            }
        }

        Ok(board)
    }
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        let letters = (0..BOARD_SIZE)
            .map(|y| {
                (0..BOARD_SIZE)
                    .map(|x| {
                        let cell = &board.cells[y * BOARD_SIZE + x];
                        match cell.letter {
                            Some(letter) => char::from(letter),
                            None if cell.is_blocked() => '#',
                            None => '.',
                        }
                    })
                    .collect()
            })
            .collect();

        let hints = board
            .cells
            .into_iter()
            .filter(|cell| !cell.hints.is_empty())
            .map(|cell| CellHints {
                at: (cell.x, cell.y),
                hints: cell.hints,
            })
            .collect();

        Self { letters, hints }
    }
}
