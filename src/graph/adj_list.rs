//! Adjacency-list graph keyed by vertex identity.
//!
//! Vertices are registered once and receive a dense *slot*. Child lists are
//! stored per slot as `Vec<usize>`, so searches iterate contiguous vectors and
//! keep their scratch state in flat flag vectors instead of hash sets.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Appends a slot |
//! | `add_edge` | \(O(1)\) amortized | No duplicate or cycle check |
//! | `children` | \(O(1)\) | Borrowed view of the stored list |
//! | `parents` | \(O(n + m)\) | Scans every child list |
//! | `find_by_payload` | \(O(n)\) | Linear scan; see [`PayloadIndex`](crate::graph::PayloadIndex) |

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{GraphError, Result, VertexRole};
use crate::graph::Vertex;

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;
/// Marker for undirected graphs: every edge is stored in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}
impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// A directed graph over [`Vertex`] identities.
pub type DirectedGraph<T> = Graph<T, Directed>;

/// An undirected graph: `add_edge` mirrors each edge.
pub type UndirectedGraph<T> = Graph<T, Undirected>;

/// An adjacency-list graph.
///
/// Child order is insertion order and drives traversal and tie-break order in
/// every search. Self-loops and parallel edges are kept as given.
pub struct Graph<T, Ty = Directed> {
    /// slot -> vertex, in registration order.
    vertices: Vec<Vertex<T>>,
    /// vertex identity -> slot.
    slots: HashMap<usize, usize>,
    /// slot -> child slots, in insertion order.
    children: Vec<Vec<usize>>,
    _ty: PhantomData<Ty>,
}

impl<T, Ty: EdgeType> Graph<T, Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            slots: HashMap::with_capacity(vertex_count),
            children: Vec::with_capacity(vertex_count),
            _ty: PhantomData,
        }
    }

    /// Builds a graph from `(vertex, children)` pairs.
    ///
    /// Every key is registered first, in iteration order; edges are then added
    /// key by key in list order.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if a key repeats, and
    /// [`GraphError::UnknownVertex`] if a child is not itself a key.
    pub fn from_adjacency<I, C>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex<T>, C)>,
        C: IntoIterator<Item = Vertex<T>>,
    {
        let entries: Vec<(Vertex<T>, C)> = adjacency.into_iter().collect();
        let mut graph = Self::with_capacity(entries.len());
        for (vertex, _) in &entries {
            graph.add_vertex(vertex.clone())?;
        }
        for (parent, children) in entries {
            for child in children {
                graph.add_edge(&parent, &child)?;
            }
        }
        Ok(graph)
    }

    /// Registers `vertex` with no children.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if `vertex` is already registered.
    pub fn add_vertex(&mut self, vertex: Vertex<T>) -> Result<()> {
        let key = vertex.key();
        if self.slots.contains_key(&key) {
            return Err(GraphError::DuplicateVertex);
        }
        let slot = self.vertices.len();
        self.slots.insert(key, slot);
        self.vertices.push(vertex);
        self.children.push(Vec::new());
        self.debug_validate();
        Ok(())
    }

    /// Appends `child` to `parent`'s child list (and the reverse for undirected graphs).
    ///
    /// Both endpoints are checked before anything is stored, so a failed call
    /// leaves the graph unchanged.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either endpoint is not registered.
    pub fn add_edge(&mut self, parent: &Vertex<T>, child: &Vertex<T>) -> Result<()> {
        let p = self.require(parent, VertexRole::Parent)?;
        let c = self.require(child, VertexRole::Child)?;
        self.children[p].push(c);
        if !Ty::is_directed() {
            self.children[c].push(p);
        }
        self.debug_validate();
        Ok(())
    }

    /// The children of `vertex`, in insertion order.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `vertex` is not registered.
    pub fn children(
        &self,
        vertex: &Vertex<T>,
    ) -> Result<impl ExactSizeIterator<Item = &Vertex<T>> + DoubleEndedIterator + '_> {
        let slot = self.require(vertex, VertexRole::Vertex)?;
        Ok(self.children[slot].iter().map(|&c| &self.vertices[c]))
    }

    /// The parents of `vertex`, in registration order, each reported once.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `vertex` is not registered.
    pub fn parents(&self, vertex: &Vertex<T>) -> Result<Vec<Vertex<T>>> {
        let slot = self.require(vertex, VertexRole::Vertex)?;
        Ok(self
            .children
            .iter()
            .enumerate()
            .filter(|(_, kids)| kids.contains(&slot))
            .map(|(p, _)| self.vertices[p].clone())
            .collect())
    }

    /// Returns `true` if `vertex` is registered in this graph.
    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.slots.contains_key(&vertex.key())
    }

    /// Returns `true` if `child` appears in `parent`'s child list.
    ///
    /// Unregistered endpoints simply have no edges.
    pub fn has_edge(&self, parent: &Vertex<T>, child: &Vertex<T>) -> bool {
        match (self.slot_of(parent), self.slot_of(child)) {
            (Some(p), Some(c)) => self.children[p].contains(&c),
            _ => false,
        }
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored child entries.
    ///
    /// Undirected graphs store each edge twice, so they report twice the number
    /// of `add_edge` calls.
    pub fn edge_count(&self) -> usize {
        self.children.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in registration order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    #[inline]
    pub(crate) fn slot_of(&self, vertex: &Vertex<T>) -> Option<usize> {
        self.slots.get(&vertex.key()).copied()
    }

    #[inline]
    pub(crate) fn require(&self, vertex: &Vertex<T>, role: VertexRole) -> Result<usize> {
        self.slot_of(vertex).ok_or(GraphError::unknown(role))
    }

    #[inline]
    pub(crate) fn child_slots(&self, slot: usize) -> &[usize] {
        &self.children[slot]
    }

    #[inline]
    pub(crate) fn vertex_at(&self, slot: usize) -> &Vertex<T> {
        &self.vertices[slot]
    }

    /// Returns `true` if the slot index agrees with the adjacency storage.
    ///
    /// Checks that:
    /// 1. There is exactly one slot entry and one child list per vertex
    /// 2. Every vertex maps back to its own slot
    /// 3. Every child slot is in range
    ///
    /// Debug builds assert this after every mutation.
    pub fn validate_invariants(&self) -> bool {
        let n = self.vertices.len();
        self.slots.len() == n
            && self.children.len() == n
            && self
                .vertices
                .iter()
                .enumerate()
                .all(|(slot, vertex)| self.slots.get(&vertex.key()) == Some(&slot))
            && self.children.iter().flatten().all(|&c| c < n)
    }

    #[inline]
    fn debug_validate(&self) {
        debug_assert!(self.validate_invariants(), "graph slot index out of sync");
    }
}

impl<T: PartialEq, Ty: EdgeType> Graph<T, Ty> {
    /// Every vertex whose payload equals `payload`, in registration order.
    pub fn find_all_by_payload(&self, payload: &T) -> Vec<Vertex<T>> {
        self.vertices
            .iter()
            .filter(|v| v.payload() == payload)
            .cloned()
            .collect()
    }

    /// The single vertex whose payload equals `payload`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if no vertex matches, and
    /// [`GraphError::AmbiguousPayload`] if more than one does.
    pub fn find_by_payload(&self, payload: &T) -> Result<Vertex<T>> {
        let mut matches = self.find_all_by_payload(payload);
        match matches.len() {
            0 => Err(GraphError::unknown(VertexRole::Payload)),
            1 => Ok(matches.swap_remove(0)),
            count => Err(GraphError::AmbiguousPayload { count }),
        }
    }
}

impl<T, Ty: EdgeType> Default for Graph<T, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Ty> Clone for Graph<T, Ty> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            slots: self.slots.clone(),
            children: self.children.clone(),
            _ty: PhantomData,
        }
    }
}

impl<T: fmt::Debug, Ty> fmt::Debug for Graph<T, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.vertices.iter().zip(&self.children).map(|(v, kids)| {
                let payloads: Vec<&T> = kids.iter().map(|&c| self.vertices[c].payload()).collect();
                (v.payload(), payloads)
            }))
            .finish()
    }
}

impl<T: fmt::Display, Ty> fmt::Display for Graph<T, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (v, kids)) in self.vertices.iter().zip(&self.children).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}: [")?;
            for (j, &c) in kids.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", self.vertices[c])?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}
