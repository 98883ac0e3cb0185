//! Path template computation.
//!
//! A concrete path is walked segment by segment against the [`PathTree`]:
//! - literal match: keep the segment and descend
//! - no literal match but a wildcard branch: replace the segment by `-` and descend
//! - neither: give up and return the catch-all template
//!
//! Literal segments always win over the wildcard branch and the walk never
//! backtracks, even when the wildcard branch would have matched deeper.

use super::tree::{PathTree, WILDCARD};

/// Template returned when the path matches no known route.
pub const CATCH_ALL: &str = "/-";

/// Splits a path into segments after stripping every leading and trailing separator.
///
/// An empty (or separators only) path gives a single empty segment.
pub fn normalize(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').collect()
}

/// Calculates the `path` label for the given URL path.
pub fn path_label(tree: &PathTree, path: &str) -> String {
    let mut segments = normalize(path);

    let mut current = tree;
    for segment in segments.iter_mut() {
        if let Some(next) = current.child(*segment) {
            current = next;
            continue;
        }
        if let Some(next) = current.wildcard() {
            *segment = WILDCARD;
            current = next;
            continue;
        }
        return CATCH_ALL.to_string();
    }

    let mut label = String::with_capacity(path.len() + 1);
    label.push('/');
    label.push_str(&segments.join("/"));
    label
}
