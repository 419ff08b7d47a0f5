//! Candidate filtering
//!
//! Applies a `FilterSpec` to an ordered word list. Filtering never fails: an
//! over-constrained spec simply yields no candidates.

use super::FilterSpec;
use crate::core::Word;

impl FilterSpec {
    /// Check whether a word satisfies every constraint in the filter
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let chars = word.chars();
        self.required_at()
            .all(|(position, letter)| chars.get(position) == Some(&letter))
            && self.required().all(|letter| word.has_letter(letter))
            && !self
                .forbidden_at()
                .any(|(position, letter)| chars.get(position) == Some(&letter))
            && !self.forbidden().any(|letter| word.has_letter(letter))
    }
}

/// Words from `words` that satisfy `spec`, in their original order
#[must_use]
pub fn filter_candidates<'a>(words: &'a [Word], spec: &FilterSpec) -> Vec<&'a Word> {
    words.iter().filter(|word| spec.matches(word)).collect()
}

/// True if at least one word satisfies `spec`
///
/// Stops at the first match; the feasibility search only needs existence.
#[must_use]
pub fn any_candidate(words: &[Word], spec: &FilterSpec) -> bool {
    words.iter().any(|word| spec.matches(word))
}
