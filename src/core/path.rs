//! Path resolution.
//!
//! Paths are `/`-delimited keys addressed from the root namespace, e.g.
//! `company/area 69/http`. Empty segments in the directory part are ignored,
//! so `a//b` and `a/b` resolve to the same entry. The final segment is taken
//! verbatim.

use crate::core::constants::MAX_DEPTH;
use crate::core::tree::{Namespace, Node};
use crate::error::{PathError, Result};

/// Result of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Secret(&'a str),
    Namespace(&'a Namespace),
}

/// Split a path into its directory segments and final key.
fn split(path: &str) -> (Vec<&str>, &str) {
    let mut parts: Vec<&str> = path.split('/').collect();
    // split() always yields at least one item
    let last = parts.pop().unwrap_or_default();
    parts.retain(|p| !p.is_empty());
    (parts, last)
}

/// Look up the entry at `path`.
///
/// Returns `None` when any directory along the way is missing, when the
/// entry is absent, or when it is an empty namespace. Never mutates.
pub fn get<'a>(root: &'a Namespace, path: &str) -> Option<Lookup<'a>> {
    let (dirs, last) = split(path);

    let mut ns = root;
    for segment in dirs {
        ns = ns.get(segment)?.as_namespace()?;
    }

    match ns.get(last)? {
        Node::Secret(value) => Some(Lookup::Secret(value)),
        Node::Namespace(child) if child.is_empty() => None,
        Node::Namespace(child) => Some(Lookup::Namespace(child)),
    }
}

/// Store `value` as a password at `path`, creating directories as needed.
///
/// Whatever previously lived at `path` (password or whole directory) is
/// replaced and returned.
///
/// # Errors
///
/// Returns `PathError::NotANamespace` if a directory segment already holds a
/// password. The tree is unchanged in that case: a password can only be met
/// while walking existing entries, before anything has been created.
///
/// Returns `PathError::TooDeep` for paths with more than `MAX_DEPTH`
/// segments, also before anything has been created.
pub fn set(root: &mut Namespace, path: &str, value: impl Into<String>) -> Result<Option<Node>> {
    let (dirs, last) = split(path);

    let depth = dirs.len() + 1;
    if depth > MAX_DEPTH {
        return Err(PathError::TooDeep {
            depth,
            max: MAX_DEPTH,
        }
        .into());
    }

    let mut ns = root;
    for (depth, segment) in dirs.iter().enumerate() {
        let node = ns
            .entry(segment.to_string())
            .or_insert_with(|| Node::Namespace(Namespace::new()));
        ns = node
            .as_namespace_mut()
            .ok_or_else(|| PathError::NotANamespace(dirs[..=depth].join("/")))?;
    }

    Ok(ns.insert(last.to_string(), Node::Secret(value.into())))
}

/// Remove the entry at `path`, whether a password or a whole directory.
///
/// Only existing directories are walked; a path that does not exist leaves
/// the tree untouched and returns `None`.
pub fn remove(root: &mut Namespace, path: &str) -> Option<Node> {
    let (dirs, last) = split(path);

    let mut ns = root;
    for segment in dirs {
        ns = ns.get_mut(segment)?.as_namespace_mut()?;
    }

    ns.shift_remove(last)
}
