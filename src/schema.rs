//! Protocol schema documents.
//!
//! Only the parts the search index needs are modelled; unknown fields are
//! ignored and nothing is validated.

use std::fs;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A protocol document: a list of domains
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protocol {
    /// The domains of the protocol
    #[serde(default)]
    pub domains: Vec<Domain>,
}

/// A domain groups related commands, events and types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// The domain name, e.g. `DOM`
    pub domain: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Whether the domain is experimental
    #[serde(default)]
    pub experimental: bool,
    /// Commands (methods) of the domain
    #[serde(default)]
    pub commands: Vec<Command>,
    /// Events emitted by the domain
    #[serde(default)]
    pub events: Vec<Event>,
    /// Types declared by the domain
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

/// A named member of a domain: a command or an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member name, e.g. `getDocument`
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Whether the member is experimental
    #[serde(default)]
    pub experimental: bool,
}

/// A command of a domain
pub type Command = Member;
/// An event of a domain
pub type Event = Member;

/// A type declared by a domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    /// The type id, e.g. `NodeId`
    pub id: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Whether the type is experimental
    #[serde(default)]
    pub experimental: bool,
}

impl Protocol {
    /// Reads a protocol document from JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a protocol document from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let protocol = serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded protocol from {}", path.display());
        Ok(protocol)
    }

    /// Merges the domains of several documents.
    ///
    /// A domain defined again replaces the earlier definition but keeps the
    /// earlier position.
    pub fn merge(protocols: impl IntoIterator<Item = Protocol>) -> Vec<Domain> {
        let mut domains: IndexMap<String, Domain> = IndexMap::new();
        for protocol in protocols {
            for domain in protocol.domains {
                if domains.insert(domain.domain.clone(), domain).is_some() {
                    trace!("domain redefined by a later protocol");
                }
            }
        }
        domains.into_values().collect()
    }
}
