//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! protosearch types and traits with a single `use protosearch::prelude::*;` statement.

pub use crate::engine::fuzzy::{FuzzyEngine, FuzzyEngineFactory};
pub use crate::fuzzy_matcher::subsequence::SubsequenceMatcher;
pub use crate::fuzzy_matcher::{FuzzyMatcher, MatchIndices, ScoreType};
pub use crate::highlight::{Segment, highlight_segments};
pub use crate::options::{SearchOptions, SearchOptionsBuilder};
pub use crate::route::Route;
pub use crate::schema::{Domain, Protocol};
pub use crate::search::{SEARCH_RENDER_COUNT, Search, SearchResults};
pub use crate::*;
pub use std::borrow::Cow;
pub use std::sync::Arc;
