//! Segment pattern tree built from the route catalog.

use std::collections::HashMap;

/// Reserved segment key marking a path variable.
///
/// Catalog routes must never use a bare `-` as a literal segment.
pub const WILDCARD: &str = "-";

/// Error returned when a route of the catalog can't be turned into tree nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("route {route:?} contains an empty segment")]
    EmptySegment { route: String },
}

/// Tree of known path segments.
///
/// Every node owns its children keyed by segment, the wildcard branch is stored
/// under [`WILDCARD`]. The tree is built once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    children: HashMap<String, PathTree>,
}

impl PathTree {
    /// Creates an empty tree, every path matched against it yields the catch-all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tree from route templates such as `/api/clusters_mgmt/v1/clusters/-`.
    pub fn from_routes<I, S>(routes: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for route in routes {
            tree.insert(route.as_ref())?;
        }
        Ok(tree)
    }

    /// Adds one route template to the tree.
    ///
    /// Leading and trailing separators are ignored, so `/` adds nothing.
    pub fn insert(&mut self, route: &str) -> Result<(), CatalogError> {
        let trimmed = route.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(());
        }

        // Validate first so a bad route doesn't leave half a branch behind.
        if trimmed.split('/').any(str::is_empty) {
            return Err(CatalogError::EmptySegment {
                route: route.to_string(),
            });
        }

        let mut node = self;
        for segment in trimmed.split('/') {
            node = node.children.entry(segment.to_string()).or_default();
        }
        Ok(())
    }

    /// Returns the child stored under the given segment, wildcard key included.
    #[inline]
    pub fn child(&self, segment: &str) -> Option<&PathTree> {
        self.children.get(segment)
    }

    /// Returns the wildcard child of this node.
    #[inline]
    pub fn wildcard(&self) -> Option<&PathTree> {
        self.children.get(WILDCARD)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below this one.
    pub fn len(&self) -> usize {
        self.children.values().map(|child| 1 + child.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
