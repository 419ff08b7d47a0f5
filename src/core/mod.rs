//! Core domain types for the cross-board puzzle
//!
//! Board geometry, hints, words and game state. Everything here is pure data
//! with validated constructors; the solving logic lives in `solver`.

mod board;
mod hint;
mod state;
mod word;

pub use board::{
    Board, Cell, Direction, GuessIndex, PLAYABLE_CELLS, is_blocked, is_board_complete,
};
pub use hint::{Hint, HintKind, HintParseError, Strength};
pub use state::{GameState, Language};
pub use word::{Word, WordError};

/// Width and height of the board
pub const BOARD_SIZE: usize = 5;

/// Length of every guessable word
pub const WORD_LENGTH: usize = 5;
