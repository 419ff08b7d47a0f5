//! Positional letter-frequency scoring
//!
//! Ranks candidates by how typical each of their letters is at its position
//! among the remaining candidates. Words close to the "centroid" of the
//! candidate set split it the most evenly, which approximates the best
//! expected information gain without computing feedback distributions.

use crate::error::EngineError;
use rustc_hash::FxHashMap;

/// A word with its relative confidence in `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    pub word: String,
    pub confidence: f64,
}

/// Score and rank candidates, best first
///
/// Confidence is the sum of each letter's positional frequency divided by
/// `candidates × word length`. Ties keep their input order.
///
/// # Errors
/// Returns `EngineError::MixedWordLengths` if the candidates differ in length.
///
/// # Examples
/// ```
/// use cross_wordle::solver::score_words;
///
/// let ranked = score_words(&["CRATE", "GRATE", "CRANE"]).unwrap();
/// assert_eq!(ranked[0].word, "CRATE");
/// assert!(ranked.iter().all(|s| (0.0..=1.0).contains(&s.confidence)));
/// ```
pub fn score_words<W: AsRef<str>>(candidates: &[W]) -> Result<Vec<WordScore>, EngineError> {
    let Some(first) = candidates.first() else {
        return Ok(Vec::new());
    };
    let length = first.as_ref().len();

    let mut frequencies: Vec<FxHashMap<u8, usize>> = vec![FxHashMap::default(); length];
    for candidate in candidates {
        let bytes = candidate.as_ref().as_bytes();
        if bytes.len() != length {
            return Err(EngineError::MixedWordLengths {
                expected: length,
                found: bytes.len(),
            });
        }
        for (position, &letter) in bytes.iter().enumerate() {
            *frequencies[position]
                .entry(letter.to_ascii_uppercase())
                .or_insert(0) += 1;
        }
    }

    let total = (candidates.len() * length) as f64;
    let mut scored: Vec<WordScore> = candidates
        .iter()
        .map(|candidate| {
            let text = candidate.as_ref().to_ascii_uppercase();
            let hits: usize = text
                .bytes()
                .enumerate()
                .map(|(position, letter)| frequencies[position][&letter])
                .sum();
            WordScore {
                word: text,
                confidence: if total > 0.0 { hits as f64 / total } else { 0.0 },
            }
        })
        .collect();

    // Stable: equal confidences keep input order
    scored.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    Ok(scored)
}
