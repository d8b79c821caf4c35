//! protosearch is the search core of a protocol documentation viewer.
//!
//! A protocol schema is made of domains holding commands, events and types.
//! protosearch turns every one of them into a searchable `Domain.entry` title
//! and ranks the titles for a short, fuzzy query, keeping the matched
//! character positions around for highlighting.
//!
//! # Examples
//!
//! ```
//! use protosearch::prelude::*;
//!
//! let protocol: Protocol = serde_json::from_str(
//!     r#"{"domains": [{"domain": "DOM", "commands": [{"name": "enable"}, {"name": "getDocument"}]}]}"#,
//! )
//! .unwrap();
//!
//! let mut search = Search::default();
//! search.set_domains(&protocol.domains);
//!
//! let results = search.search("dgd");
//! let best = results.iter().next().unwrap();
//! assert_eq!(best.item.title(), "DOM.getDocument");
//! assert_eq!(best.matches, [0, 4, 7]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::Display;

pub use crate::engine::fuzzy::{FuzzyEngine, FuzzyEngineFactory};
pub use crate::error::Error;
pub use crate::item::{MatchedItem, RankBuilder, RankCriteria};
pub use crate::options::SearchOptions;
pub use crate::search_item::{ItemKind, SearchItem, Searchable};

pub mod engine;
mod error;
pub mod fuzzy_matcher;
pub mod highlight;
pub mod item;
pub mod options;
pub mod prelude;
pub mod route;
pub mod schema;
pub mod search;
mod search_item;

use crate::fuzzy_matcher::{MatchIndices, ScoreType};

//==============================================================================
// A match engine will execute the matching algorithm

/// Rank tuple used for sorting match results, smaller is better
pub type Rank = [i64; 5];

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of matching a query against an item
pub struct MatchResult {
    /// The rank of this match
    pub rank: Rank,
    /// The raw matcher score, 0 when the query is empty
    pub score: ScoreType,
    /// Character indices of the item text that matched the query
    pub matched: MatchIndices,
}

/// A matching engine bound to one query
pub trait MatchEngine: Sync + Send + Display {
    /// Matches an item against the query, returning a result if matched
    fn match_item(&self, item: &dyn Searchable) -> Option<MatchResult>;
}

/// Factory for creating match engines, one per query
pub trait MatchEngineFactory: Send + Sync {
    /// Creates a match engine for `query`
    fn create_engine(&self, query: &str) -> Box<dyn MatchEngine>;
}
