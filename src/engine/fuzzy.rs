use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::engine::normalized::NormalizedEngine;
use crate::engine::util::normalize_with_char_mapping;
use crate::fuzzy_matcher::subsequence::SubsequenceMatcher;
use crate::fuzzy_matcher::{FuzzyMatcher, MatchIndices, ScoreType};
use crate::item::RankBuilder;
use crate::{MatchEngine, MatchEngineFactory, MatchResult, Searchable};

//------------------------------------------------------------------------------
// Fuzzy engine
/// Builder for [`FuzzyEngine`]
#[derive(Default)]
pub struct FuzzyEngineBuilder {
    query: String,
    rank_builder: Arc<RankBuilder>,
}

impl FuzzyEngineBuilder {
    /// Sets the query, an empty query matches every item with a score of 0
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// Sets the criteria used to build ranks
    pub fn rank_builder(mut self, rank_builder: Arc<RankBuilder>) -> Self {
        self.rank_builder = rank_builder;
        self
    }

    /// Builds the engine
    pub fn build(self) -> FuzzyEngine {
        debug!("Initialized subsequence matcher for {:?}", self.query);
        FuzzyEngine {
            matcher: SubsequenceMatcher::new(&self.query),
            query: self.query,
            rank_builder: self.rank_builder,
        }
    }
}

/// The fuzzy matching engine
pub struct FuzzyEngine {
    query: String,
    matcher: SubsequenceMatcher,
    rank_builder: Arc<RankBuilder>,
}

impl FuzzyEngine {
    /// Returns a default builder for chaining
    pub fn builder() -> FuzzyEngineBuilder {
        FuzzyEngineBuilder::default()
    }

    /// The query the engine matches
    pub fn query(&self) -> &str {
        &self.query
    }

    fn fuzzy_match(&self, choice: &str) -> Option<(ScoreType, MatchIndices)> {
        // an empty query lists everything, unranked
        if self.query.is_empty() {
            return Some((0, Vec::new()));
        }
        self.matcher.fuzzy_indices(choice)
    }
}

impl MatchEngine for FuzzyEngine {
    fn match_item(&self, item: &dyn Searchable) -> Option<MatchResult> {
        let item_text = item.text();
        let (score, matched) = self.fuzzy_match(&item_text)?;

        trace!("matched {matched:?}");
        let begin = *matched.first().unwrap_or(&0);
        let end = *matched.last().unwrap_or(&0);
        let item_len = item_text.chars().count();

        Some(MatchResult {
            rank: self
                .rank_builder
                .build_rank(score, begin, end, item_len, item.get_index()),
            score,
            matched,
        })
    }
}

impl Display for FuzzyEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Fuzzy: {})", self.query)
    }
}

//------------------------------------------------------------------------------
/// Creates a [`FuzzyEngine`] per query, optionally wrapped for Unicode normalization
#[derive(Default)]
pub struct FuzzyEngineFactory {
    rank_builder: Arc<RankBuilder>,
    normalize: bool,
}

impl FuzzyEngineFactory {
    /// Creates a factory ranking with `rank_builder`
    pub fn new(rank_builder: Arc<RankBuilder>) -> Self {
        Self {
            rank_builder,
            normalize: false,
        }
    }

    /// Strip diacritics from both query and items before matching
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

impl MatchEngineFactory for FuzzyEngineFactory {
    fn create_engine(&self, query: &str) -> Box<dyn MatchEngine> {
        if self.normalize {
            let (normalized_query, _) = normalize_with_char_mapping(query);
            let inner = FuzzyEngine::builder()
                .query(&normalized_query)
                .rank_builder(self.rank_builder.clone())
                .build();
            Box::new(NormalizedEngine::new(Box::new(inner), self.rank_builder.clone()))
        } else {
            Box::new(
                FuzzyEngine::builder()
                    .query(query)
                    .rank_builder(self.rank_builder.clone())
                    .build(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::RankCriteria;
    use crate::search_item::{ItemKind, SearchItem};

    #[test]
    fn test_empty_query_matches_everything() {
        let engine = FuzzyEngine::builder().query("").build();
        let result = engine.match_item(&"DOM.enable").unwrap();
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_no_match() {
        let engine = FuzzyEngine::builder().query("xyz").build();
        assert!(engine.match_item(&"abc").is_none());
        assert!(engine.match_item(&"").is_none());
    }

    #[test]
    fn test_rank() {
        let rank_builder = Arc::new(RankBuilder::new(vec![
            RankCriteria::Score,
            RankCriteria::Begin,
            RankCriteria::Length,
        ]));
        let engine = FuzzyEngine::builder().query("enb").rank_builder(rank_builder).build();
        let item = SearchItem::new("DOM", "enable", ItemKind::Method, "").with_index(4);
        let result = engine.match_item(&item).unwrap();
        assert_eq!(result.matched, [4, 5, 7]);
        assert_eq!(result.score, 34);
        assert_eq!(result.rank, [-34, 4, 10, 0, 0]);
    }

    #[test]
    fn test_normalized_factory() {
        let factory = FuzzyEngineFactory::default().normalize(true);
        let engine = factory.create_engine("emul");
        let result = engine.match_item(&"Émulation.setDevice").unwrap();
        assert_eq!(result.matched, [0, 1, 2, 3]);

        let engine = factory.create_engine("café");
        let result = engine.match_item(&"Storage.cafe").unwrap();
        assert_eq!(result.matched, [8, 9, 10, 11]);

        let plain = FuzzyEngineFactory::default();
        assert!(plain.create_engine("café").match_item(&"Storage.cafe").is_none());
    }

    #[test]
    fn test_display() {
        let engine = FuzzyEngine::builder().query("dom").build();
        assert_eq!(engine.to_string(), "(Fuzzy: dom)");
        let engine = FuzzyEngineFactory::default().normalize(true).create_engine("dom");
        assert_eq!(engine.to_string(), "(Normalized: (Fuzzy: dom))");
    }
}
