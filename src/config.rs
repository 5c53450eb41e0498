//! Search configuration.
//!
//! A [`SearchConfig`] can be built in code or loaded from a JSON document; any
//! field the document omits keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default depth cap for the recursive search variants.
///
/// Sized so both recursive variants finish within a 2 MiB thread stack in
/// unoptimized builds.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1024;

/// Algorithm used to find a fewest-edge path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Recursive depth-first search with branch-and-bound on path length.
    RecursiveDfs,
    /// Depth-first search over an explicit stack of partial paths.
    IterativeDfs,
    /// Breadth-first search over a queue of partial paths; stops at the first hit.
    #[default]
    Bfs,
}

/// Algorithm used to compute reachability sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStrategy {
    /// Recursive depth-first traversal.
    RecursiveDfs,
    /// Depth-first traversal over an explicit stack.
    #[default]
    IterativeDfs,
    /// Breadth-first traversal.
    Bfs,
}

/// Tunables for [`GraphSearch`](crate::search::GraphSearch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Deepest call nesting a recursive variant may reach before failing with
    /// [`GraphError::RecursionLimit`](crate::GraphError::RecursionLimit).
    pub max_recursion_depth: usize,
    /// Strategy used by `shortest_path`.
    pub shortest_path_strategy: SearchStrategy,
    /// Strategy used by `reachable_from`.
    pub traversal_strategy: TraversalStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            shortest_path_strategy: SearchStrategy::default(),
            traversal_strategy: TraversalStrategy::default(),
        }
    }
}

impl SearchConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    /// [`GraphError::Config`](crate::GraphError::Config) if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the recursion depth cap.
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Sets the shortest-path strategy.
    pub fn with_shortest_path_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.shortest_path_strategy = strategy;
        self
    }

    /// Sets the traversal strategy.
    pub fn with_traversal_strategy(mut self, strategy: TraversalStrategy) -> Self {
        self.traversal_strategy = strategy;
        self
    }
}
