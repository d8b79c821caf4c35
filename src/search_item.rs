use std::borrow::Cow;
use std::fmt::{Debug, Display};

use crate::highlight::{Segment, highlight_segments};
use crate::route::Route;

/// A `Searchable` defines what's been matched and ranked by protosearch
///
/// Plain strings are searchable as they are:
///
/// ```rust
/// use protosearch::prelude::*;
///
/// let engine = FuzzyEngine::builder().query("enb").build();
/// let result = engine.match_item(&"DOM.enable").unwrap();
/// assert_eq!(result.matched, [4, 5, 7]);
/// ```
pub trait Searchable: Send + Sync {
    /// The string to be used for matching
    fn text(&self) -> Cow<'_, str>;

    /// Position of the item in the search pool, used by the `index` rank criteria
    fn get_index(&self) -> usize {
        0
    }
}

impl<T: AsRef<str> + Send + Sync> Searchable for T {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl Display for dyn Searchable + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

impl Debug for dyn Searchable + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Searchable {{ text: {}, index: {} }}", self.text(), self.get_index())
    }
}

//------------------------------------------------------------------------------
/// What a search item documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A command of the domain
    Method,
    /// An event of the domain
    Event,
    /// A type declared by the domain
    Type,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ItemKind::Method => "method",
            ItemKind::Event => "event",
            ItemKind::Type => "type",
        })
    }
}

/// One command, event or type of a domain, searchable by its `Domain.entry` title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    domain_name: String,
    domain_entry: String,
    kind: ItemKind,
    description: String,
    title: String,
    index: usize,
}

impl SearchItem {
    /// Creates an item for `domain_entry` of `domain_name`
    pub fn new(domain_name: &str, domain_entry: &str, kind: ItemKind, description: &str) -> Self {
        Self {
            domain_name: domain_name.to_string(),
            domain_entry: domain_entry.to_string(),
            kind,
            description: description.to_string(),
            title: format!("{domain_name}.{domain_entry}"),
            index: 0,
        }
    }

    /// Sets the position of the item in its search pool
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// The domain the item belongs to
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// The command, event or type name
    pub fn domain_entry(&self) -> &str {
        &self.domain_entry
    }

    /// What the item documents
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The description from the schema, may be empty
    pub fn description(&self) -> &str {
        &self.description
    }

    /// `Domain.entry`, the text the query is matched against
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The route navigating to this item
    pub fn route(&self) -> Route {
        Route::new(&self.domain_name, Some(&self.domain_entry))
    }

    /// Splits the title into its highlighted domain part (`Domain.`) and entry part
    pub fn title_segments(&self, matches: &[usize]) -> (Vec<Segment<'_>>, Vec<Segment<'_>>) {
        let split = self.domain_name.chars().count() + 1;
        let len = self.title.chars().count();
        (
            highlight_segments(&self.title, matches, 0, split),
            highlight_segments(&self.title, matches, split, len),
        )
    }
}

impl Searchable for SearchItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }

    fn get_index(&self) -> usize {
        self.index
    }
}
