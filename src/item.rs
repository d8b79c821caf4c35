//! Ranking of matched items.
//!
//! The matchers only score; ordering results, including the tie-breaks between
//! equal scores, is decided here from a list of [`RankCriteria`].
use std::cmp::Ordering as CmpOrd;
use std::hash::Hash;
use std::ops::Deref;
use std::sync::Arc;

#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "cli")]
use clap::builder::PossibleValue;

use crate::fuzzy_matcher::{MatchIndices, ScoreType};
use crate::{MatchResult, Rank, SearchItem, Searchable};

//------------------------------------------------------------------------------

/// Builder for creating rank values based on configurable criteria
#[derive(Debug)]
pub struct RankBuilder {
    criterion: Vec<RankCriteria>,
}

impl Default for RankBuilder {
    fn default() -> Self {
        Self {
            criterion: RankCriteria::default_tiebreak(),
        }
    }
}

impl RankBuilder {
    /// Creates a new rank builder with the given criteria
    pub fn new(mut criterion: Vec<RankCriteria>) -> Self {
        if !criterion.contains(&RankCriteria::Score) && !criterion.contains(&RankCriteria::NegScore) {
            criterion.insert(0, RankCriteria::Score);
        }

        criterion.dedup();
        Self { criterion }
    }

    /// The criteria, most significant first
    pub fn criterion(&self) -> &[RankCriteria] {
        &self.criterion
    }

    /// score: the greater the better
    pub fn build_rank(&self, score: ScoreType, begin: usize, end: usize, length: usize, index: usize) -> Rank {
        let mut rank = [0; 5];
        let score = i64::from(score);
        let begin = begin as i64;
        let end = end as i64;
        let length = length as i64;
        let index = index as i64;

        for (priority, criteria) in self.criterion.iter().take(5).enumerate() {
            let value = match criteria {
                RankCriteria::Score => -score,
                RankCriteria::NegScore => score,
                RankCriteria::Begin => begin,
                RankCriteria::NegBegin => -begin,
                RankCriteria::End => end,
                RankCriteria::NegEnd => -end,
                RankCriteria::Length => length,
                RankCriteria::NegLength => -length,
                RankCriteria::Index => index,
                RankCriteria::NegIndex => -index,
            };

            rank[priority] = value;
        }

        trace!("ranks: {rank:?}");
        rank
    }
}

//------------------------------------------------------------------------------
/// An item that has been matched against a query
#[derive(Clone)]
pub struct MatchedItem {
    /// The underlying search item
    pub item: Arc<SearchItem>,
    /// The rank of this match
    pub rank: Rank,
    /// The raw matcher score
    pub score: ScoreType,
    /// Character indices of the title that matched the query
    pub matches: MatchIndices,
}

impl MatchedItem {
    /// Pairs an item with the result of matching it
    pub fn new(item: Arc<SearchItem>, result: MatchResult) -> Self {
        Self {
            item,
            rank: result.rank,
            score: result.score,
            matches: result.matched,
        }
    }
}

impl std::fmt::Debug for MatchedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchedItem")
            .field("item", &self.item.title())
            .field("rank", &self.rank)
            .field("score", &self.score)
            .field("matches", &self.matches)
            .finish()
    }
}

impl Hash for MatchedItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.get_index());
        self.title().hash(state);
    }
}

impl Deref for MatchedItem {
    type Target = SearchItem;

    fn deref(&self) -> &Self::Target {
        &self.item
    }
}

impl PartialEq for MatchedItem {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.get_index() == other.get_index()
    }
}

impl std::cmp::Eq for MatchedItem {}

impl PartialOrd for MatchedItem {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrd> {
        Some(self.cmp(other))
    }
}

impl Ord for MatchedItem {
    fn cmp(&self, other: &Self) -> CmpOrd {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.get_index().cmp(&other.get_index()))
    }
}

//------------------------------------------------------------------------------
/// Criteria for ranking and sorting matched items
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RankCriteria {
    /// Sort by match score (higher is better)
    Score,
    /// Sort by match score (lower is better)
    NegScore,
    /// Sort by beginning position of match
    Begin,
    /// Sort by beginning position of match (reversed)
    NegBegin,
    /// Sort by ending position of match
    End,
    /// Sort by ending position of match (reversed)
    NegEnd,
    /// Sort by item length
    Length,
    /// Sort by item length (reversed)
    NegLength,
    /// Sort by item index
    Index,
    /// Sort by item index (reversed)
    NegIndex,
}

impl RankCriteria {
    /// Higher score, then leftmost match, then shorter title
    pub fn default_tiebreak() -> Vec<RankCriteria> {
        vec![RankCriteria::Score, RankCriteria::Begin, RankCriteria::Length]
    }
}

#[cfg(feature = "cli")]
impl ValueEnum for RankCriteria {
    fn value_variants<'a>() -> &'a [Self] {
        use RankCriteria::*;
        &[
            Score, NegScore, Begin, NegBegin, End, NegEnd, Length, NegLength, Index, NegIndex,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        use RankCriteria::*;
        Some(match self {
            Score => PossibleValue::new("score"),
            Begin => PossibleValue::new("begin"),
            End => PossibleValue::new("end"),
            NegScore => PossibleValue::new("-score"),
            NegBegin => PossibleValue::new("-begin"),
            NegEnd => PossibleValue::new("-end"),
            Length => PossibleValue::new("length"),
            NegLength => PossibleValue::new("-length"),
            Index => PossibleValue::new("index"),
            NegIndex => PossibleValue::new("-index"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemKind;

    fn matched(entry: &str, index: usize, rank: Rank) -> MatchedItem {
        MatchedItem {
            item: Arc::new(SearchItem::new("DOM", entry, ItemKind::Method, "").with_index(index)),
            rank,
            score: 0,
            matches: Vec::new(),
        }
    }

    #[test]
    fn test_score_is_always_ranked() {
        let builder = RankBuilder::new(vec![RankCriteria::Begin, RankCriteria::Begin, RankCriteria::Length]);
        assert_eq!(
            builder.criterion(),
            [RankCriteria::Score, RankCriteria::Begin, RankCriteria::Length]
        );

        let builder = RankBuilder::new(vec![RankCriteria::Index, RankCriteria::NegScore]);
        assert_eq!(builder.criterion(), [RankCriteria::Index, RankCriteria::NegScore]);
    }

    #[test]
    fn test_build_rank() {
        let builder = RankBuilder::default();
        assert_eq!(builder.build_rank(42, 3, 7, 12, 9), [-42, 3, 12, 0, 0]);

        let builder = RankBuilder::new(vec![
            RankCriteria::NegScore,
            RankCriteria::NegBegin,
            RankCriteria::End,
            RankCriteria::NegLength,
            RankCriteria::NegIndex,
        ]);
        assert_eq!(builder.build_rank(42, 3, 7, 12, 9), [42, -3, 7, -12, -9]);
    }

    #[test]
    fn test_default_tiebreak_order() {
        let builder = RankBuilder::default();
        let mut items = vec![
            matched("longerName", 0, builder.build_rank(30, 0, 2, 14, 0)),
            matched("late", 1, builder.build_rank(30, 4, 6, 8, 1)),
            matched("best", 2, builder.build_rank(40, 5, 7, 8, 2)),
            matched("name", 3, builder.build_rank(30, 0, 2, 8, 3)),
        ];
        items.sort();
        let entries: Vec<&str> = items.iter().map(|m| m.domain_entry()).collect();
        assert_eq!(entries, ["best", "name", "longerName", "late"]);
    }

    #[test]
    fn test_equal_ranks_keep_index_order() {
        let rank = [-10, 0, 5, 0, 0];
        let mut items = vec![matched("b", 1, rank), matched("a", 0, rank)];
        items.sort();
        assert_eq!(items[0].get_index(), 0);
        assert_ne!(items[0], items[1]);
    }
}
