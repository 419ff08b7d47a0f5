//! Feedback hints for a single cell
//!
//! Every guess that touches a cell leaves one hint on it. Hints have a compact
//! text form used in state files:
//!
//! | Text    | Meaning                                                  |
//! |---------|----------------------------------------------------------|
//! | `A=`    | exact match                                              |
//! | `Ar2`   | in the row word (strength 2), wrong position             |
//! | `Ac1`   | in the column word (strength 1), wrong position          |
//! | `Ar2c3` | in both the row and the column word, wrong position      |
//! | `A?`    | on the board, but in neither line through this cell      |
//! | `A-`    | nowhere on the board                                     |
//!
//! Strength counts how many of the three words on that axis contain the letter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many words of one axis contain a letter (1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Strength(u8);

impl Strength {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);

    /// Create a strength, returning `None` outside `1..=3`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1..=3 => Some(Self(value)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// The feedback category of a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
    /// Right letter, right cell
    Exact,
    /// Letter belongs to the row word through this cell, not at this cell
    Row(Strength),
    /// Letter belongs to the column word through this cell, not at this cell
    Column(Strength),
    /// Letter belongs to both words through this cell, not at this cell
    RowColumn(Strength, Strength),
    /// Letter is on the board, but in neither word through this cell
    Misplaced,
    /// Letter appears nowhere on the board
    Absent,
}

/// One piece of feedback: a guessed letter and what the game said about it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hint {
    letter: u8,
    kind: HintKind,
}

/// Error type for malformed hint text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintParseError {
    Empty,
    InvalidLetter(char),
    InvalidKind(String),
}

impl fmt::Display for HintParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Hint is empty"),
            Self::InvalidLetter(c) => write!(f, "Hint letter '{c}' is not an ASCII letter"),
            Self::InvalidKind(kind) => write!(f, "Unrecognized hint kind '{kind}'"),
        }
    }
}

impl std::error::Error for HintParseError {}

impl Hint {
    /// Create a hint; the letter is normalized to uppercase
    ///
    /// # Panics
    /// Panics in debug mode if `letter` is not an ASCII letter
    #[must_use]
    pub fn new(letter: u8, kind: HintKind) -> Self {
        debug_assert!(letter.is_ascii_alphabetic(), "Hint letter must be ASCII");
        Self {
            letter: letter.to_ascii_uppercase(),
            kind,
        }
    }

    /// The hinted letter (uppercase)
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> HintKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self.kind, HintKind::Absent)
    }
}

fn parse_strength(digit: u8) -> Option<Strength> {
    if digit.is_ascii_digit() {
        Strength::new(digit - b'0')
    } else {
        None
    }
}

impl FromStr for Hint {
    type Err = HintParseError;

    /// Parse hint text such as `A=`, `br2`, `Cr1c3`
    ///
    /// # Examples
    /// ```
    /// use cross_wordle::core::{Hint, HintKind, Strength};
    ///
    /// let hint: Hint = "er2".parse().unwrap();
    /// assert_eq!(hint.letter(), b'E');
    /// assert_eq!(hint.kind(), HintKind::Row(Strength::TWO));
    /// assert_eq!(hint.to_string(), "Er2");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(HintParseError::Empty)?;
        if !letter.is_ascii_alphabetic() {
            return Err(HintParseError::InvalidLetter(letter));
        }

        let rest = chars.as_str();
        let invalid = || HintParseError::InvalidKind(rest.to_string());
        let kind = match rest.to_ascii_lowercase().as_bytes() {
            b"=" => HintKind::Exact,
            b"?" => HintKind::Misplaced,
            b"-" => HintKind::Absent,
            [b'r', row] => HintKind::Row(parse_strength(*row).ok_or_else(invalid)?),
            [b'c', column] => HintKind::Column(parse_strength(*column).ok_or_else(invalid)?),
            [b'r', row, b'c', column] => HintKind::RowColumn(
                parse_strength(*row).ok_or_else(invalid)?,
                parse_strength(*column).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        };

        // Safe: checked ASCII alphabetic above
        Ok(Self::new(letter as u8, kind))
    }
}

impl TryFrom<String> for Hint {
    type Error = HintParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hint> for String {
    fn from(hint: Hint) -> Self {
        hint.to_string()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(self.letter);
        match self.kind {
            HintKind::Exact => write!(f, "{letter}="),
            HintKind::Row(row) => write!(f, "{letter}r{}", row.value()),
            HintKind::Column(column) => write!(f, "{letter}c{}", column.value()),
            HintKind::RowColumn(row, column) => {
                write!(f, "{letter}r{}c{}", row.value(), column.value())
            }
            HintKind::Misplaced => write!(f, "{letter}?"),
            HintKind::Absent => write!(f, "{letter}-"),
        }
    }
}
