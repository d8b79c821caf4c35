//! Normalized match engine for matching with Unicode normalization (removing diacritics).
//!
//! This engine wraps another engine and normalizes the item text before matching,
//! then maps the matched indices back to the original text. The wrapped engine is
//! expected to be built from an already normalized query.

use std::borrow::Cow;
use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::engine::util::{map_char_indices_to_original, normalize_with_char_mapping};
use crate::item::RankBuilder;
use crate::{MatchEngine, MatchResult, Searchable};

/// Engine that normalizes text before matching
pub struct NormalizedEngine {
    /// The underlying engine to match normalized text
    inner: Box<dyn MatchEngine>,
    /// Rebuilds ranks against the original text
    rank_builder: Arc<RankBuilder>,
}

impl NormalizedEngine {
    /// Creates a new normalized match engine
    pub fn new(inner: Box<dyn MatchEngine>, rank_builder: Arc<RankBuilder>) -> Self {
        Self { inner, rank_builder }
    }
}

impl MatchEngine for NormalizedEngine {
    fn match_item(&self, item: &dyn Searchable) -> Option<MatchResult> {
        let item_text = item.text();
        let (normalized_text, char_mapping) = normalize_with_char_mapping(&item_text);

        let normalized_item = NormalizedItem {
            text: normalized_text,
            index: item.get_index(),
        };
        let mut result = self.inner.match_item(&normalized_item)?;
        result.matched = map_char_indices_to_original(&result.matched, &char_mapping);

        // begin, end and length refer to the original text, like the indices
        let begin = result.matched.first().copied().unwrap_or(0);
        let end = result.matched.last().copied().unwrap_or(0);
        let item_len = item_text.chars().count();
        result.rank = self
            .rank_builder
            .build_rank(result.score, begin, end, item_len, item.get_index());

        Some(result)
    }
}

impl Display for NormalizedEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Normalized: {})", self.inner)
    }
}

/// Normalized text standing in for the original item
struct NormalizedItem {
    text: String,
    index: usize,
}

impl Searchable for NormalizedItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn get_index(&self) -> usize {
        self.index
    }
}
