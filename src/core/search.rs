//! Pattern search over the record tree.

use regex::Regex;
use serde::Serialize;

use crate::core::tree::{Kind, Namespace, Node};

/// A key that matched a search pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Directory containing the key; `None` for keys at the root.
    pub path: Option<String>,
    /// The matched text.
    #[serde(rename = "match")]
    pub matched: String,
    /// Byte offset of the match within `input`.
    pub index: usize,
    /// The full key that was tested.
    pub input: String,
    #[serde(rename = "type")]
    pub kind: Kind,
}

impl Match {
    /// The part of the key before the match.
    pub fn before(&self) -> &str {
        &self.input[..self.index]
    }

    /// The part of the key after the match.
    pub fn after(&self) -> &str {
        &self.input[self.index + self.matched.len()..]
    }
}

/// Search every key at every depth of `ns` for `pattern`.
///
/// Only the first match per key is reported. Results are ordered key by
/// key: a key's own match comes first, then everything found beneath it,
/// before moving on to its next sibling.
pub fn traverse(ns: &Namespace, pattern: &Regex, path: Option<&str>) -> Vec<Match> {
    let mut results = Vec::new();
    walk(ns, pattern, path, &mut results);
    results
}

fn walk(ns: &Namespace, pattern: &Regex, path: Option<&str>, results: &mut Vec<Match>) {
    for (key, node) in ns {
        if let Some(m) = pattern.find(key) {
            results.push(Match {
                path: path.map(str::to_string),
                matched: m.as_str().to_string(),
                index: m.start(),
                input: key.clone(),
                kind: node.kind(),
            });
        }

        if let Node::Namespace(child) = node {
            let child_path = match path {
                Some(p) if !p.is_empty() => format!("{}/{}", p, key),
                _ => key.clone(),
            };
            walk(child, pattern, Some(&child_path), results);
        }
    }
}
