//! Subsequence fuzzy matching algorithm.
//!
//! The query must appear in the choice as an ordered, not necessarily
//! contiguous, subsequence (case-insensitively). Among all such alignments the
//! matcher picks the best one with a dynamic program over two tables:
//! - `score[i][j]`: the best score aligning the first `i + 1` query characters
//!   inside the first `j + 1` choice characters (0 if impossible).
//! - `sequence[i][j]`: the length of the consecutive run ending with a match
//!   of query char `i` at choice char `j`, or 0 when the cell skips `j`.
//!
//! Every matched character is worth 10 points, plus 6 when query and choice
//! agree on an upper-case character (camelCase humps such as the `B` in
//! `setBreakpoint`), plus 4 for each character of the run it extends.
//!
//! # Example:
//! ```
//! use protosearch::fuzzy_matcher::subsequence::SubsequenceMatcher;
//!
//! let matcher = SubsequenceMatcher::new("dom");
//!
//! let mut indices = Vec::new();
//! assert!(matcher.score("DOM.enable", Some(&mut indices)) > 0);
//! assert_eq!(indices, [0, 1, 2]);
//!
//! assert_eq!(matcher.score("Page.reload", None), 0);
//! ```

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::Error;
use crate::fuzzy_matcher::util::{cheap_matches, fold_upper};
use crate::fuzzy_matcher::{FuzzyMatcher, MatchIndices, ScoreType};

const MATCH_SCORE: ScoreType = 10;
const CAPS_MATCH_BONUS: ScoreType = 6;
const CONSECUTIVE_BONUS: ScoreType = 4;

/// Cells allocated up front: a 20 characters query against 100 characters.
const INITIAL_CELLS: usize = 20 * 100;

/// Per-thread working memory of one matcher.
#[derive(Debug)]
struct Scratch {
    score: Vec<ScoreType>,
    sequence: Vec<ScoreType>,
    choice: Vec<char>,
    choice_upper: Vec<char>,
}

impl Default for Scratch {
    fn default() -> Self {
        Self {
            score: vec![0; INITIAL_CELLS],
            sequence: vec![0; INITIAL_CELLS],
            choice: Vec::new(),
            choice_upper: Vec::new(),
        }
    }
}

impl Scratch {
    fn load(&mut self, choice: &str) {
        self.choice.clear();
        self.choice.extend(choice.chars());
        self.choice_upper.clear();
        self.choice_upper.extend(self.choice.iter().map(|&ch| fold_upper(ch)));
    }

    /// Grows both tables to hold `cells` entries. Tables never shrink.
    fn reserve_cells(&mut self, cells: usize) {
        if self.score.len() < cells {
            trace!("growing scratch tables from {} to {} cells", self.score.len(), cells * 2);
            self.score.resize(cells * 2, 0);
            self.sequence.resize(cells * 2, 0);
        }
    }
}

/// Fuzzy matcher bound to a single query.
///
/// Construction is cheap: it stores the query and its upper-case form. Scoring
/// reuses tables owned by this instance, one set per calling thread, so a
/// matcher can be shared across threads and two matchers never share memory.
#[derive(Debug)]
pub struct SubsequenceMatcher {
    query: String,
    pattern: Vec<char>,
    pattern_upper: Vec<char>,
    scratch: ThreadLocal<RefCell<Scratch>>,
}

impl SubsequenceMatcher {
    /// Creates a matcher for `query`. An empty query is valid and matches nothing.
    pub fn new(query: &str) -> Self {
        let pattern: Vec<char> = query.chars().collect();
        let pattern_upper = pattern.iter().map(|&ch| fold_upper(ch)).collect();
        Self {
            query: query.to_string(),
            pattern,
            pattern_upper,
            scratch: ThreadLocal::new(),
        }
    }

    /// Creates a matcher from raw bytes, failing on anything that is not UTF-8.
    pub fn from_utf8(query: &[u8]) -> Result<Self, Error> {
        let query = std::str::from_utf8(query).map_err(Error::InvalidInput)?;
        Ok(Self::new(query))
    }

    /// The query this matcher was built for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Scores `choice` against the query.
    ///
    /// Returns 0 when the choice does not contain the query as a subsequence,
    /// or when either side is empty. When `match_indices` is given it is cleared
    /// and then filled with the ascending character indices of the best
    /// alignment (left empty for a score of 0).
    pub fn score(&self, choice: &str, mut match_indices: Option<&mut MatchIndices>) -> ScoreType {
        if let Some(out) = match_indices.as_deref_mut() {
            out.clear();
        }

        if choice.is_empty() || self.pattern.is_empty() {
            return 0;
        }
        if cheap_matches(choice.chars().map(fold_upper), &self.pattern_upper).is_none() {
            return 0;
        }

        let mut scratch = self.scratch.get_or_default().borrow_mut();
        scratch.load(choice);

        let n = self.pattern.len();
        let m = scratch.choice.len();
        scratch.reserve_cells(n * m);

        let Scratch {
            score,
            sequence,
            choice: choice_chars,
            choice_upper,
        } = &mut *scratch;

        for i in 0..n {
            for j in 0..m {
                let skip_char_score = if j == 0 { 0 } else { score[i * m + j - 1] };
                let (prev_char_score, consecutive) = if i == 0 || j == 0 {
                    (0, 0)
                } else {
                    let diag = (i - 1) * m + j - 1;
                    (score[diag], sequence[diag])
                };

                // query[..i] has to be aligned before query[i] may match
                let reachable = i == 0 || prev_char_score > 0;
                let pick_char_score = if reachable {
                    self.match_char(i, choice_chars[j], choice_upper[j], consecutive)
                } else {
                    0
                };

                let cell = i * m + j;
                if pick_char_score > 0 && prev_char_score + pick_char_score >= skip_char_score {
                    sequence[cell] = consecutive + 1;
                    score[cell] = prev_char_score + pick_char_score;
                } else {
                    sequence[cell] = 0;
                    score[cell] = skip_char_score;
                }
            }
        }

        let final_score = score[n * m - 1];
        if final_score > 0
            && let Some(out) = match_indices
        {
            restore_match_indices(sequence, n, m, out);
        }
        final_score
    }

    /// Like [`SubsequenceMatcher::score`] for raw bytes, failing on anything that is not UTF-8.
    pub fn score_utf8(&self, choice: &[u8], match_indices: Option<&mut MatchIndices>) -> Result<ScoreType, Error> {
        let choice = std::str::from_utf8(choice).map_err(Error::InvalidInput)?;
        Ok(self.score(choice, match_indices))
    }

    fn match_char(&self, i: usize, ch: char, ch_upper: char, consecutive: ScoreType) -> ScoreType {
        if self.pattern_upper[i] != ch_upper {
            return 0;
        }

        let query_ch = self.pattern[i];
        let is_caps_match = query_ch == ch && query_ch == self.pattern_upper[i];

        let mut score = MATCH_SCORE;
        if is_caps_match {
            score += CAPS_MATCH_BONUS;
        }
        score + consecutive * CONSECUTIVE_BONUS
    }
}

/// Walks the run table back from the bottom-right cell.
fn restore_match_indices(sequence: &[ScoreType], n: usize, m: usize, out: &mut MatchIndices) {
    // (i, j) are one past the current cell
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        if sequence[(i - 1) * m + j - 1] == 0 {
            j -= 1;
        } else {
            out.push(j - 1);
            i -= 1;
            j -= 1;
        }
    }
    out.reverse();
}

impl FuzzyMatcher for SubsequenceMatcher {
    fn fuzzy_indices(&self, choice: &str) -> Option<(ScoreType, MatchIndices)> {
        let mut indices = Vec::with_capacity(self.pattern.len());
        match self.score(choice, Some(&mut indices)) {
            0 => None,
            score => Some((score, indices)),
        }
    }

    fn fuzzy_match(&self, choice: &str) -> Option<ScoreType> {
        match self.score(choice, None) {
            0 => None,
            score => Some(score),
        }
    }
}

/// Fuzzy match `choice` against `pattern`, returning the score and matched
/// character indices.
pub fn fuzzy_indices(choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)> {
    SubsequenceMatcher::new(pattern).fuzzy_indices(choice)
}

/// Fuzzy match `choice` against `pattern`, returning only the score.
pub fn fuzzy_match(choice: &str, pattern: &str) -> Option<ScoreType> {
    SubsequenceMatcher::new(pattern).fuzzy_match(choice)
}
