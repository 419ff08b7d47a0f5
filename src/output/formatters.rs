//! Formatting utilities for terminal output

use crate::core::{BOARD_SIZE, Board, Hint, HintKind};
use colored::{ColoredString, Colorize};

/// Plain-text grid: letters, `.` for unknown cells, `#` for blocked ones
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    (0..BOARD_SIZE)
        .map(|y| {
            (0..BOARD_SIZE)
                .filter_map(|x| board.cell(x, y).ok())
                .map(|cell| match cell.letter() {
                    Some(letter) => char::from(letter),
                    None if cell.is_blocked() => '#',
                    None => '.',
                })
                .collect()
        })
        .collect()
}

/// A hint in its text form, colored by kind
#[must_use]
pub fn hint_badge(hint: Hint) -> ColoredString {
    let text = hint.to_string();
    match hint.kind() {
        HintKind::Exact => text.green().bold(),
        HintKind::Row(_) | HintKind::Column(_) | HintKind::RowColumn(..) => text.yellow(),
        HintKind::Misplaced => text.bright_blue(),
        HintKind::Absent => text.bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, GuessIndex, Strength};

    #[test]
    fn empty_board_shows_blocked_cells() {
        assert_eq!(
            board_lines(&Board::new()),
            [".....", ".#.#.", ".....", ".#.#.", "....."]
        );
    }

    #[test]
    fn board_lines_show_letters() {
        let board = Board::new()
            .with_word(Direction::Vertical, GuessIndex::SEQUENCE[1], "olive")
            .unwrap();
        let lines = board_lines(&board);
        assert_eq!(lines[0], "..O..");
        assert_eq!(lines[1], ".#L#.");
        assert_eq!(lines[4], "..E..");
    }

    #[test]
    fn hint_badge_keeps_text_form() {
        colored::control::set_override(false);
        let hint = Hint::new(b'A', HintKind::RowColumn(Strength::TWO, Strength::ONE));
        assert_eq!(hint_badge(hint).to_string(), "Ar2c1");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
