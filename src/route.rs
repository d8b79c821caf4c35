//! Fragment routes addressing a domain or one of its entries.
//!
//! The viewer navigates with URL fragments such as `#DOM` or
//! `#DOM.getDocument`; search items carry `/Domain.entry` paths.

use std::fmt::Display;
use std::str::FromStr;

use crate::Error;

/// A parsed `Domain[.entry]` route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    /// The domain name
    pub domain: String,
    /// The command, event or type inside the domain
    pub entry: Option<String>,
}

impl Route {
    /// Creates a route
    pub fn new(domain: &str, entry: Option<&str>) -> Self {
        Self {
            domain: domain.to_string(),
            entry: entry.map(str::to_string),
        }
    }

    /// Parses `#Domain.entry`, `/Domain.entry` or `Domain`.
    ///
    /// Everything after the first `.` is the entry; an empty entry is dropped.
    pub fn parse(route: &str) -> Result<Self, Error> {
        let trimmed = route.trim().trim_start_matches(['#', '/']);
        let (domain, entry) = match trimmed.split_once('.') {
            Some((domain, entry)) => (domain, Some(entry).filter(|e| !e.is_empty())),
            None => (trimmed, None),
        };

        if domain.is_empty() {
            return Err(Error::InvalidRoute(route.to_string()));
        }
        Ok(Self::new(domain, entry))
    }

    /// The element id the route scrolls to, `Domain.entry` or `Domain`
    pub fn anchor(&self) -> String {
        self.to_string()
    }

    /// The path form stored on search items, `/Domain.entry`
    pub fn path(&self) -> String {
        format!("/{self}")
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.entry {
            Some(entry) => write!(f, "{}.{}", self.domain, entry),
            None => f.write_str(&self.domain),
        }
    }
}
