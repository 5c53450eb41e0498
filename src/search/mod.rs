//! Shortest-path and reachability searches over a [`Graph`].
//!
//! [`GraphSearch`] borrows a graph immutably for its whole lifetime, so the graph
//! cannot change underneath a running search. Every call validates its vertex
//! arguments before touching the adjacency lists.
//!
//! ```rust
//! use wayfinder::{DirectedGraph, GraphSearch, SearchStrategy, Vertex};
//!
//! let a = Vertex::new("a");
//! let b = Vertex::new("b");
//! let c = Vertex::new("c");
//! let graph = DirectedGraph::from_adjacency([
//!     (a.clone(), vec![b.clone()]),
//!     (b.clone(), vec![c.clone()]),
//!     (c.clone(), vec![]),
//! ])?;
//!
//! let search = GraphSearch::new(&graph);
//! let path = search.shortest_path(&a, &c)?.expect("c is reachable");
//! assert_eq!(path.to_string(), "[a, b, c]");
//! assert_eq!(
//!     search.shortest_path_with(&a, &c, SearchStrategy::RecursiveDfs)?,
//!     Some(path)
//! );
//! assert_eq!(search.reachable_from(&b)?.len(), 2);
//! # Ok::<(), wayfinder::GraphError>(())
//! ```

mod path_search;
mod traversal;

use std::collections::HashSet;

use crate::config::{SearchConfig, SearchStrategy, TraversalStrategy};
use crate::error::{Result, VertexRole};
use crate::graph::access::visited::VisitedFlags;
use crate::graph::{Directed, EdgeType, Graph, Path, Vertex};

pub use traversal::{Bfs, Dfs};

/// Search algorithms bound to one graph.
pub struct GraphSearch<'g, T, Ty = Directed> {
    graph: &'g Graph<T, Ty>,
    config: SearchConfig,
}

impl<'g, T, Ty: EdgeType> GraphSearch<'g, T, Ty> {
    /// Creates a search over `graph` with the default configuration.
    pub fn new(graph: &'g Graph<T, Ty>) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    /// Creates a search over `graph` with an explicit configuration.
    pub fn with_config(graph: &'g Graph<T, Ty>, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    /// The searched graph.
    pub fn graph(&self) -> &'g Graph<T, Ty> {
        self.graph
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Fewest-edge path from `start` to `end` using the configured strategy.
    ///
    /// # Errors
    /// See [`GraphSearch::shortest_path_with`].
    pub fn shortest_path(&self, start: &Vertex<T>, end: &Vertex<T>) -> Result<Option<Path<T>>> {
        self.shortest_path_with(start, end, self.config.shortest_path_strategy)
    }

    /// Fewest-edge path from `start` to `end` using `strategy`.
    ///
    /// Returns `Ok(None)` when `end` is unreachable and `[start]` when
    /// `start == end`. Every strategy returns a path of the same length; with
    /// several shortest paths they may pick different ones.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if either
    /// endpoint is not registered, and
    /// [`GraphError::RecursionLimit`](crate::GraphError::RecursionLimit) if the
    /// recursive strategy exceeds `max_recursion_depth`.
    pub fn shortest_path_with(
        &self,
        start: &Vertex<T>,
        end: &Vertex<T>,
        strategy: SearchStrategy,
    ) -> Result<Option<Path<T>>> {
        let s = self.graph.require(start, VertexRole::Start)?;
        let e = self.graph.require(end, VertexRole::End)?;
        log_debug!(?strategy, start = s, end = e, "shortest path search");

        if s == e {
            return Ok(Some(Path::single(start.clone())));
        }

        let slots = match strategy {
            SearchStrategy::RecursiveDfs => {
                path_search::dfs_recursive(self.graph, s, e, self.config.max_recursion_depth)?
            }
            SearchStrategy::IterativeDfs => path_search::dfs_iterative(self.graph, s, e),
            SearchStrategy::Bfs => path_search::bfs(self.graph, s, e),
        };

        log_debug!(
            ?strategy,
            len = ?slots.as_ref().map(Vec::len),
            "shortest path search finished"
        );
        Ok(slots.map(|slots| self.to_path(&slots)))
    }

    /// Recursive depth-first shortest path.
    ///
    /// # Errors
    /// See [`GraphSearch::shortest_path_with`].
    pub fn dfs_recursive_shortest_path(
        &self,
        start: &Vertex<T>,
        end: &Vertex<T>,
    ) -> Result<Option<Path<T>>> {
        self.shortest_path_with(start, end, SearchStrategy::RecursiveDfs)
    }

    /// Iterative depth-first shortest path.
    ///
    /// # Errors
    /// See [`GraphSearch::shortest_path_with`].
    pub fn dfs_iterative_shortest_path(
        &self,
        start: &Vertex<T>,
        end: &Vertex<T>,
    ) -> Result<Option<Path<T>>> {
        self.shortest_path_with(start, end, SearchStrategy::IterativeDfs)
    }

    /// Breadth-first shortest path.
    ///
    /// # Errors
    /// See [`GraphSearch::shortest_path_with`].
    pub fn bfs_shortest_path(&self, start: &Vertex<T>, end: &Vertex<T>) -> Result<Option<Path<T>>> {
        self.shortest_path_with(start, end, SearchStrategy::Bfs)
    }

    /// Every vertex reachable from `start` (itself included), using the
    /// configured traversal strategy.
    ///
    /// # Errors
    /// See [`GraphSearch::extend_reachable`].
    pub fn reachable_from(&self, start: &Vertex<T>) -> Result<HashSet<Vertex<T>>> {
        self.reachable_from_with(start, self.config.traversal_strategy)
    }

    /// Every vertex reachable from `start` (itself included), using `strategy`.
    ///
    /// # Errors
    /// See [`GraphSearch::extend_reachable`].
    pub fn reachable_from_with(
        &self,
        start: &Vertex<T>,
        strategy: TraversalStrategy,
    ) -> Result<HashSet<Vertex<T>>> {
        let mut reachable = HashSet::new();
        self.extend_reachable(start, strategy, &mut reachable)?;
        Ok(reachable)
    }

    /// Adds everything reachable from `start` to the caller's `reachable` set.
    ///
    /// Vertices already in the set count as visited and are not expanded again,
    /// which lets callers accumulate reachability across several starts. The set
    /// is only modified if the traversal succeeds.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if `start`
    /// is not registered, and
    /// [`GraphError::RecursionLimit`](crate::GraphError::RecursionLimit) if the
    /// recursive strategy exceeds `max_recursion_depth`.
    pub fn extend_reachable(
        &self,
        start: &Vertex<T>,
        strategy: TraversalStrategy,
        reachable: &mut HashSet<Vertex<T>>,
    ) -> Result<()> {
        let s = self.graph.require(start, VertexRole::Start)?;
        log_debug!(?strategy, start = s, "reachability traversal");

        let visited = self.seed_visited(reachable);
        let found: Vec<&Vertex<T>> = match strategy {
            TraversalStrategy::RecursiveDfs => {
                let mut visited = visited;
                let mut slots = Vec::new();
                if !visited.is_visited(s) {
                    traversal::dfs_recursive(
                        self.graph,
                        s,
                        &mut visited,
                        &mut slots,
                        0,
                        self.config.max_recursion_depth,
                    )?;
                }
                slots.into_iter().map(|slot| self.graph.vertex_at(slot)).collect()
            }
            TraversalStrategy::IterativeDfs => Dfs::seeded(self.graph, s, visited).collect(),
            TraversalStrategy::Bfs => Bfs::seeded(self.graph, s, visited).collect(),
        };

        log_debug!(?strategy, newly_reached = found.len(), "reachability traversal finished");
        reachable.extend(found.into_iter().cloned());
        Ok(())
    }

    /// Depth-first iterator over the vertices reachable from `start`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if `start`
    /// is not registered.
    pub fn dfs(&self, start: &Vertex<T>) -> Result<Dfs<'g, T, Ty>> {
        let s = self.graph.require(start, VertexRole::Start)?;
        Ok(Dfs::seeded(self.graph, s, VisitedFlags::new(self.graph.vertex_count())))
    }

    /// Breadth-first iterator over the vertices reachable from `start`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if `start`
    /// is not registered.
    pub fn bfs(&self, start: &Vertex<T>) -> Result<Bfs<'g, T, Ty>> {
        let s = self.graph.require(start, VertexRole::Start)?;
        Ok(Bfs::seeded(self.graph, s, VisitedFlags::new(self.graph.vertex_count())))
    }

    fn seed_visited(&self, reachable: &HashSet<Vertex<T>>) -> VisitedFlags {
        let mut visited = VisitedFlags::new(self.graph.vertex_count());
        for slot in reachable.iter().filter_map(|v| self.graph.slot_of(v)) {
            visited.mark(slot);
        }
        visited
    }

    fn to_path(&self, slots: &[usize]) -> Path<T> {
        slots
            .iter()
            .map(|&slot| self.graph.vertex_at(slot).clone())
            .collect()
    }
}

/// Fewest-edge path from `start` to `end` in `graph` using `strategy`.
///
/// # Errors
/// See [`GraphSearch::shortest_path_with`].
pub fn shortest_path<T, Ty: EdgeType>(
    graph: &Graph<T, Ty>,
    start: &Vertex<T>,
    end: &Vertex<T>,
    strategy: SearchStrategy,
) -> Result<Option<Path<T>>> {
    GraphSearch::new(graph).shortest_path_with(start, end, strategy)
}

/// Every vertex of `graph` reachable from `start`, `start` included.
///
/// Always starts from a fresh visited set.
///
/// # Errors
/// See [`GraphSearch::extend_reachable`].
pub fn reachable_from<T, Ty: EdgeType>(
    graph: &Graph<T, Ty>,
    start: &Vertex<T>,
) -> Result<HashSet<Vertex<T>>> {
    GraphSearch::new(graph).reachable_from(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_RECURSION_DEPTH;
    use crate::graph::DirectedGraph;
    use crate::GraphError;

    fn chain(n: usize) -> (DirectedGraph<usize>, Vec<Vertex<usize>>) {
        let v: Vec<_> = (0..n).map(Vertex::new).collect();
        let mut g = DirectedGraph::with_capacity(n);
        for x in &v {
            g.add_vertex(x.clone()).unwrap();
        }
        for w in v.windows(2) {
            g.add_edge(&w[0], &w[1]).unwrap();
        }
        (g, v)
    }

    #[test]
    fn same_endpoint_short_circuits() {
        let (g, v) = chain(3);
        let search = GraphSearch::new(&g);
        for strategy in [
            SearchStrategy::RecursiveDfs,
            SearchStrategy::IterativeDfs,
            SearchStrategy::Bfs,
        ] {
            let path = search.shortest_path_with(&v[1], &v[1], strategy).unwrap().unwrap();
            assert_eq!(path.vertices(), &[v[1].clone()]);
        }
    }

    #[test]
    fn endpoints_are_validated_before_search() {
        let (g, v) = chain(2);
        let search = GraphSearch::new(&g);
        let stray = Vertex::new(99);
        assert!(matches!(
            search.shortest_path(&stray, &v[0]),
            Err(GraphError::UnknownVertex { role: VertexRole::Start })
        ));
        assert!(matches!(
            search.shortest_path(&v[0], &stray),
            Err(GraphError::UnknownVertex { role: VertexRole::End })
        ));
        // Even a trivial start == end query is rejected for strangers.
        assert!(search.shortest_path(&stray, &stray).is_err());
        assert!(search.reachable_from(&stray).is_err());
    }

    #[test]
    fn recursion_cap_comes_from_config() {
        let (g, v) = chain(8);
        let cfg = SearchConfig::default().with_max_recursion_depth(4);
        let search = GraphSearch::with_config(&g, cfg);

        assert!(matches!(
            search.dfs_recursive_shortest_path(&v[0], &v[7]),
            Err(GraphError::RecursionLimit { limit: 4 })
        ));
        assert!(matches!(
            search.reachable_from_with(&v[0], TraversalStrategy::RecursiveDfs),
            Err(GraphError::RecursionLimit { limit: 4 })
        ));
        // The iterative defaults are unaffected by the cap.
        assert_eq!(search.shortest_path(&v[0], &v[7]).unwrap().unwrap().len(), 8);
        assert_eq!(search.reachable_from(&v[0]).unwrap().len(), 8);
    }

    /// Runs `f` on a thread with a 2 MiB stack, the smallest common default.
    fn on_small_stack(f: impl FnOnce() + Send + 'static) {
        std::thread::Builder::new()
            .stack_size(2 << 20)
            .spawn(f)
            .unwrap()
            .join()
            .unwrap();
    }

    #[test]
    fn default_cap_fits_a_small_thread_stack() {
        on_small_stack(|| {
            // Deepest chain the default cap admits: the last vertex sits one
            // level below the cap.
            let (g, v) = chain(DEFAULT_MAX_RECURSION_DEPTH);
            let search = GraphSearch::new(&g);
            let last = &v[DEFAULT_MAX_RECURSION_DEPTH - 1];

            let path = search.dfs_recursive_shortest_path(&v[0], last).unwrap().unwrap();
            assert_eq!(path.len(), DEFAULT_MAX_RECURSION_DEPTH);
            let reachable = search
                .reachable_from_with(&v[0], TraversalStrategy::RecursiveDfs)
                .unwrap();
            assert_eq!(reachable.len(), DEFAULT_MAX_RECURSION_DEPTH);
        });
    }

    #[test]
    fn default_cap_fails_cleanly_one_level_deeper() {
        on_small_stack(|| {
            let (g, v) = chain(DEFAULT_MAX_RECURSION_DEPTH + 1);
            let search = GraphSearch::new(&g);
            let last = &v[DEFAULT_MAX_RECURSION_DEPTH];

            assert!(matches!(
                search.dfs_recursive_shortest_path(&v[0], last),
                Err(GraphError::RecursionLimit { limit: DEFAULT_MAX_RECURSION_DEPTH })
            ));
            assert!(matches!(
                search.reachable_from_with(&v[0], TraversalStrategy::RecursiveDfs),
                Err(GraphError::RecursionLimit { limit: DEFAULT_MAX_RECURSION_DEPTH })
            ));
        });
    }

    #[test]
    fn failed_traversal_leaves_caller_set_untouched() {
        let (g, v) = chain(8);
        let cfg = SearchConfig::default().with_max_recursion_depth(2);
        let search = GraphSearch::with_config(&g, cfg);
        let mut reachable = HashSet::from([v[7].clone()]);
        assert!(search
            .extend_reachable(&v[0], TraversalStrategy::RecursiveDfs, &mut reachable)
            .is_err());
        assert_eq!(reachable.len(), 1);
    }

    #[test]
    fn caller_set_accumulates_across_starts() {
        let (g, v) = chain(4);
        let search = GraphSearch::new(&g);
        let mut reachable = HashSet::new();
        for strategy in [
            TraversalStrategy::RecursiveDfs,
            TraversalStrategy::IterativeDfs,
            TraversalStrategy::Bfs,
        ] {
            reachable.clear();
            search.extend_reachable(&v[2], strategy, &mut reachable).unwrap();
            assert_eq!(reachable.len(), 2);
            search.extend_reachable(&v[0], strategy, &mut reachable).unwrap();
            assert_eq!(reachable.len(), 4);
        }
    }

    #[test]
    fn independent_calls_do_not_share_state() {
        let (g, v) = chain(3);
        let first = reachable_from(&g, &v[0]).unwrap();
        let second = reachable_from(&g, &v[2]).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(second, HashSet::from([v[2].clone()]));
    }

    #[test]
    fn iterators_walk_reachable_vertices() {
        let (g, v) = chain(4);
        let search = GraphSearch::new(&g);
        let order: Vec<usize> = search.dfs(&v[1]).unwrap().map(|x| *x.payload()).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(search.bfs(&v[3]).unwrap().count(), 1);
    }
}
