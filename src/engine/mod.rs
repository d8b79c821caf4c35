//! Match engines: a query-bound layer between the search index and the matchers.

pub mod fuzzy;
pub mod normalized;
mod util;
