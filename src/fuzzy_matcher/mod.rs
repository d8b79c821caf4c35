//! Fuzzy matching algorithms and implementations.
//!
//! A matcher is bound to one query for its whole lifetime and is then asked to
//! score many choices, one per searchable item, on every keystroke.

/// Subsequence matching algorithm with case and run bonuses
pub mod subsequence;
mod util;

pub use util::fold_upper;

/// Character index into a choice (Unicode scalar values, not bytes)
pub type IndexType = usize;
/// Match score; 0 means "no match"
pub type ScoreType = u32;

/// Ascending character indices of the matched choice characters.
pub type MatchIndices = Vec<IndexType>;

/// Trait for fuzzy matching a fixed query against choices
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with the query, and return the score & matched indices of characters
    fn fuzzy_indices(&self, choice: &str) -> Option<(ScoreType, MatchIndices)>;

    /// fuzzy match choice with the query, and return the score of matching
    fn fuzzy_match(&self, choice: &str) -> Option<ScoreType> {
        self.fuzzy_indices(choice).map(|(score, _)| score)
    }

    /// Fuzzy match and return (score, begin_char_index, end_char_index).
    ///
    /// `begin` is the character index of the first matched query character,
    /// `end` is the character index of the last matched query character.
    fn fuzzy_match_range(&self, choice: &str) -> Option<(ScoreType, usize, usize)> {
        self.fuzzy_indices(choice).map(|(score, indices)| {
            let begin = indices.first().copied().unwrap_or(0);
            let end = indices.last().copied().unwrap_or(0);
            (score, begin, end)
        })
    }
}
