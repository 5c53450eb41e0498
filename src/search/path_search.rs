//! Fewest-edge path search over vertex slots.
//!
//! All three searches share the same contract: they receive already-validated
//! `start != end` slots and return the slot sequence of a fewest-edge path, or
//! `None`. A vertex is never repeated within one partial path, which bounds every
//! partial path by the vertex count and guarantees termination on cyclic graphs.
//!
//! They differ in exploration order and therefore in which of several equally
//! short paths they report:
//! - recursive DFS: first completion found under branch-and-bound pruning
//! - iterative DFS: first strictly-shortest completion popped from the stack
//! - BFS: first completion dequeued, which is globally shortest by construction

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;
use crate::graph::{EdgeType, Graph};

#[inline]
fn improves(candidate: &[usize], best: Option<&Vec<usize>>) -> bool {
    best.map_or(true, |b| candidate.len() < b.len())
}

/// Recursive depth-first search with branch-and-bound on path length.
///
/// A child branch is entered only while the path built so far (current vertex
/// included) is strictly shorter than the best completion known; a completion
/// replaces the best only if strictly shorter.
struct RecursiveSearch<'a, T, Ty> {
    graph: &'a Graph<T, Ty>,
    end: usize,
    limit: usize,
    path: Vec<usize>,
    on_path: VisitedFlags,
    best: Option<Vec<usize>>,
}

impl<'a, T, Ty: EdgeType> RecursiveSearch<'a, T, Ty> {
    fn visit(&mut self, slot: usize) -> Result<()> {
        if self.path.len() >= self.limit {
            log_warn!(limit = self.limit, "recursive shortest-path search hit its depth cap");
            return Err(GraphError::RecursionLimit { limit: self.limit });
        }
        self.path.push(slot);
        self.on_path.mark(slot);

        if slot == self.end {
            if improves(&self.path, self.best.as_ref()) {
                log_trace!(len = self.path.len(), "recursive dfs improved best path");
                self.best = Some(self.path.clone());
            }
        } else {
            let graph = self.graph;
            for &child in graph.child_slots(slot) {
                if self.on_path.is_visited(child) {
                    continue;
                }
                if improves(&self.path, self.best.as_ref()) {
                    self.visit(child)?;
                }
            }
        }

        self.on_path.unmark(slot);
        self.path.pop();
        Ok(())
    }
}

pub(crate) fn dfs_recursive<T, Ty: EdgeType>(
    graph: &Graph<T, Ty>,
    start: usize,
    end: usize,
    limit: usize,
) -> Result<Option<Vec<usize>>> {
    let mut search = RecursiveSearch {
        graph,
        end,
        limit,
        path: Vec::new(),
        on_path: VisitedFlags::new(graph.vertex_count()),
        best: None,
    };
    search.visit(start)?;
    Ok(search.best)
}

/// Depth-first search over an explicit LIFO stack of partial paths.
///
/// Children are pushed in stored order, so the last child is explored first.
pub(crate) fn dfs_iterative<T, Ty: EdgeType>(
    graph: &Graph<T, Ty>,
    start: usize,
    end: usize,
) -> Option<Vec<usize>> {
    let mut stack = vec![vec![start]];
    let mut best: Option<Vec<usize>> = None;

    while let Some(path) = stack.pop() {
        let Some(&last) = path.last() else { continue };
        if last == end {
            if improves(&path, best.as_ref()) {
                log_trace!(len = path.len(), "iterative dfs improved best path");
                best = Some(path);
            }
            continue;
        }
        // Extensions of this path are one vertex longer and could not beat `best`.
        if best.as_ref().is_some_and(|b| path.len() + 1 >= b.len()) {
            continue;
        }
        for &child in graph.child_slots(last) {
            if !path.contains(&child) {
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend_from_slice(&path);
                next.push(child);
                stack.push(next);
            }
        }
    }
    best
}

/// Breadth-first search over a FIFO queue of partial paths.
///
/// Every path of `k` vertices is dequeued before any path of `k + 1`, so the
/// first path reaching `end` is a shortest one.
pub(crate) fn bfs<T, Ty: EdgeType>(
    graph: &Graph<T, Ty>,
    start: usize,
    end: usize,
) -> Option<Vec<usize>> {
    let mut queue = VecDeque::from([vec![start]]);

    while let Some(path) = queue.pop_front() {
        let Some(&last) = path.last() else { continue };
        if last == end {
            return Some(path);
        }
        for &child in graph.child_slots(last) {
            if !path.contains(&child) {
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend_from_slice(&path);
                next.push(child);
                queue.push_back(next);
            }
        }
    }
    None
}
