//! Record tree.
//!
//! A database is a tree of namespaces (directories) whose leaves are
//! passwords. On disk it is plain nested JSON: strings are passwords,
//! objects are namespaces.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A namespace maps keys to child nodes, in insertion order.
pub type Namespace = IndexMap<String, Node>;

/// A node in the record tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A stored password.
    Secret(String),
    /// A nested directory of entries.
    Namespace(Namespace),
}

impl Node {
    /// The kind of entry this node is displayed as.
    pub fn kind(&self) -> Kind {
        match self {
            Node::Secret(_) => Kind::Password,
            Node::Namespace(_) => Kind::Directory,
        }
    }

    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            Node::Namespace(ns) => Some(ns),
            Node::Secret(_) => None,
        }
    }

    pub fn as_namespace_mut(&mut self) -> Option<&mut Namespace> {
        match self {
            Node::Namespace(ns) => Some(ns),
            Node::Secret(_) => None,
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Secret(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Secret(value)
    }
}

impl From<Namespace> for Node {
    fn from(ns: Namespace) -> Self {
        Node::Namespace(ns)
    }
}

/// Entry kind as shown in listings and search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Directory,
    Password,
}

impl Kind {
    /// Single-letter marker used in listings (`d` or `p`).
    pub fn marker(&self) -> char {
        match self {
            Kind::Directory => 'd',
            Kind::Password => 'p',
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Directory => write!(f, "directory"),
            Kind::Password => write!(f, "password"),
        }
    }
}

/// One direct child of a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: Kind,
}

/// List the direct children of a namespace without descending.
pub fn list(ns: &Namespace) -> Vec<Entry> {
    ns.iter()
        .map(|(key, node)| Entry {
            key: key.clone(),
            kind: node.kind(),
        })
        .collect()
}
