//! Reachability traversals and traversal iterators.
//!
//! Each traversal owns a fresh [`VisitedFlags`] for the duration of one call. The
//! caller may seed it (to treat some vertices as already handled), but nothing is
//! ever shared between calls.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;
use crate::graph::{Directed, EdgeType, Graph, Vertex};

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertices in pre-order, taking children in stored order, which is the
/// same order the recursive traversal visits them in. It keeps an explicit stack,
/// so arbitrarily deep graphs are safe.
pub struct Dfs<'g, T, Ty = Directed> {
    graph: &'g Graph<T, Ty>,
    visited: VisitedFlags,
    stack: Vec<usize>,
}

impl<'g, T, Ty: EdgeType> Dfs<'g, T, Ty> {
    pub(crate) fn seeded(graph: &'g Graph<T, Ty>, start: usize, visited: VisitedFlags) -> Self {
        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }
}

impl<'g, T, Ty: EdgeType> Iterator for Dfs<'g, T, Ty> {
    type Item = &'g Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let u = self.stack.pop()?;
            if !self.visited.try_visit(u) {
                continue;
            }
            // Reverse push so the first child is popped first.
            for &v in graph.child_slots(u).iter().rev() {
                if !self.visited.is_visited(v) {
                    self.stack.push(v);
                }
            }
            return Some(graph.vertex_at(u));
        }
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertices level by level; within a level, in the order they were first
/// discovered.
pub struct Bfs<'g, T, Ty = Directed> {
    graph: &'g Graph<T, Ty>,
    visited: VisitedFlags,
    queue: VecDeque<usize>,
}

impl<'g, T, Ty: EdgeType> Bfs<'g, T, Ty> {
    pub(crate) fn seeded(graph: &'g Graph<T, Ty>, start: usize, mut visited: VisitedFlags) -> Self {
        let mut queue = VecDeque::new();
        if visited.try_visit(start) {
            queue.push_back(start);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'g, T, Ty: EdgeType> Iterator for Bfs<'g, T, Ty> {
    type Item = &'g Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let u = self.queue.pop_front()?;

        for &v in graph.child_slots(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        Some(graph.vertex_at(u))
    }
}

/// Recursive depth-first traversal.
///
/// Appends every newly visited slot to `found`. Fails once the call nesting
/// reaches `limit`; `found` is then incomplete and must be discarded.
pub(crate) fn dfs_recursive<T, Ty: EdgeType>(
    graph: &Graph<T, Ty>,
    slot: usize,
    visited: &mut VisitedFlags,
    found: &mut Vec<usize>,
    depth: usize,
    limit: usize,
) -> Result<()> {
    if depth >= limit {
        log_warn!(limit, "recursive traversal hit its depth cap");
        return Err(GraphError::RecursionLimit { limit });
    }
    visited.mark(slot);
    found.push(slot);
    for &child in graph.child_slots(slot) {
        if !visited.is_visited(child) {
            dfs_recursive(graph, child, visited, found, depth + 1, limit)?;
        }
    }
    Ok(())
}
