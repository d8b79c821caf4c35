//! The search index over protocol domains.
//!
//! Every command, event and type becomes a [`SearchItem`] titled
//! `Domain.entry`. A search pass builds one engine for the query and asks it
//! about every item; the matched items are then ordered by rank.

use std::collections::HashSet;
use std::sync::Arc;

use crate::engine::fuzzy::FuzzyEngineFactory;
use crate::item::{MatchedItem, RankBuilder};
use crate::options::SearchOptions;
use crate::schema::Domain;
use crate::{ItemKind, MatchEngineFactory, SearchItem};

/// Number of search results to render immediately.
pub const SEARCH_RENDER_COUNT: usize = 50;

/// Searchable items of a set of domains
pub struct Search {
    items: Vec<Arc<SearchItem>>,
    domain_names: Vec<String>,
    lowercase_domain_names: HashSet<String>,
    engine_factory: Box<dyn MatchEngineFactory>,
}

impl Default for Search {
    fn default() -> Self {
        Self::with_factory(Box::new(FuzzyEngineFactory::default()))
    }
}

impl Search {
    /// Creates an empty index matching with engines from `engine_factory`
    pub fn with_factory(engine_factory: Box<dyn MatchEngineFactory>) -> Self {
        Self {
            items: Vec::new(),
            domain_names: Vec::new(),
            lowercase_domain_names: HashSet::new(),
            engine_factory,
        }
    }

    /// Creates an empty index ranking and normalizing as `options` say
    pub fn from_options(options: &SearchOptions) -> Self {
        let rank_builder = Arc::new(RankBuilder::new(options.tiebreak.clone()));
        let factory = FuzzyEngineFactory::new(rank_builder).normalize(options.normalize);
        Self::with_factory(Box::new(factory))
    }

    /// Replaces the indexed items with the entries of `domains`.
    ///
    /// Items are listed domain by domain: commands, then events, then types.
    pub fn set_domains(&mut self, domains: &[Domain]) {
        self.items.clear();
        self.domain_names.clear();
        self.lowercase_domain_names.clear();

        for domain in domains {
            let name = &domain.domain;
            if self.lowercase_domain_names.insert(name.to_lowercase()) {
                self.domain_names.push(name.clone());
            }

            let entries = domain
                .commands
                .iter()
                .map(|command| (command.name.as_str(), ItemKind::Method, command.description.as_str()))
                .chain(
                    domain
                        .events
                        .iter()
                        .map(|event| (event.name.as_str(), ItemKind::Event, event.description.as_str())),
                )
                .chain(
                    domain
                        .types
                        .iter()
                        .map(|ty| (ty.id.as_str(), ItemKind::Type, ty.description.as_str())),
                );

            for (entry, kind, description) in entries {
                let index = self.items.len();
                let item = SearchItem::new(name, entry, kind, description).with_index(index);
                self.items.push(Arc::new(item));
            }
        }
        self.domain_names.sort();

        debug!(
            "indexed {} items from {} domains",
            self.items.len(),
            self.domain_names.len()
        );
    }

    /// All indexed items, in index order
    pub fn items(&self) -> &[Arc<SearchItem>] {
        &self.items
    }

    /// Sorted domain names
    pub fn domain_names(&self) -> &[String] {
        &self.domain_names
    }

    /// Whether a domain is indexed, ignoring case
    pub fn has_domain(&self, name: &str) -> bool {
        self.lowercase_domain_names.contains(&name.to_lowercase())
    }

    /// Runs a search pass.
    ///
    /// The query is trimmed first. An empty query, or one that normalizes to
    /// nothing, lists every item in index order with a score of 0; otherwise only the matching items are kept,
    /// best rank first.
    pub fn search(&self, query: &str) -> SearchResults {
        let query = query.trim();
        let engine = self.engine_factory.create_engine(query);

        let mut results: Vec<MatchedItem> = self
            .items
            .iter()
            .filter_map(|item| {
                engine
                    .match_item(item.as_ref())
                    .map(|result| MatchedItem::new(item.clone(), result))
            })
            .collect();

        // a query that normalizes to nothing scores 0 everywhere, keep schema order then
        if results.iter().any(|matched| matched.score > 0) {
            results.sort();
        }

        debug!("{engine}: {} of {} items matched", results.len(), self.items.len());
        SearchResults {
            query: query.to_string(),
            results,
        }
    }
}

/// The ranked outcome of a search pass
#[derive(Debug, Clone)]
pub struct SearchResults {
    query: String,
    results: Vec<MatchedItem>,
}

impl SearchResults {
    /// The trimmed query the results are for
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true when nothing matched
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results, best first
    pub fn iter(&self) -> std::slice::Iter<'_, MatchedItem> {
        self.results.iter()
    }

    /// At most `limit` best results, all of them when `limit` is 0
    pub fn page(&self, limit: usize) -> &[MatchedItem] {
        if limit == 0 {
            &self.results
        } else {
            &self.results[..limit.min(self.results.len())]
        }
    }

    /// The results rendered immediately
    pub fn first_page(&self) -> &[MatchedItem] {
        self.page(SEARCH_RENDER_COUNT)
    }

    /// Number of results left out of [`SearchResults::first_page`]
    pub fn remaining(&self) -> usize {
        self.results.len().saturating_sub(SEARCH_RENDER_COUNT)
    }

    /// Consumes the results, best first
    pub fn into_vec(self) -> Vec<MatchedItem> {
        self.results
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a MatchedItem;
    type IntoIter = std::slice::Iter<'a, MatchedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
