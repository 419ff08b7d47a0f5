//! Word list loading utilities
//!
//! Turns plain-text lists (one word per line) or embedded constants into
//! `Word` vectors.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and entries that are not five ASCII letters are skipped;
/// file order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use cross_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/en/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse a newline-separated list, skipping blanks and invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use cross_wordle::wordlists::loader::words_from_slice;
/// use cross_wordle::wordlists::EN_ANSWERS;
///
/// let words = words_from_slice(EN_ANSWERS);
/// assert_eq!(words.len(), EN_ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_words_ignores_blank_lines_and_padding() {
        let words = parse_words("about\n\n  oxide \r\nelect\n\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["ABOUT", "OXIDE", "ELECT"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::EN_ANSWERS;

        let words = words_from_slice(EN_ANSWERS);
        assert_eq!(words.len(), EN_ANSWERS.len());
    }
}
