//! Explicit payload -> vertex index.
//!
//! Graph structure is keyed by vertex identity, so looking vertices up by payload
//! is a separate concern. [`PayloadIndex`] is built once from a graph and borrows
//! it, which keeps the graph immutable (and the index current) for as long as the
//! index lives.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{GraphError, Result, VertexRole};
use crate::graph::{EdgeType, Graph, Vertex};

/// Maps each payload to every vertex that carries it, in registration order.
pub struct PayloadIndex<'g, T> {
    by_payload: HashMap<&'g T, Vec<Vertex<T>>>,
}

impl<'g, T: Eq + Hash> PayloadIndex<'g, T> {
    /// Indexes every vertex of `graph`.
    pub fn build<Ty: EdgeType>(graph: &'g Graph<T, Ty>) -> Self {
        let mut by_payload: HashMap<&'g T, Vec<Vertex<T>>> = HashMap::new();
        for vertex in graph.vertices() {
            by_payload
                .entry(vertex.payload())
                .or_default()
                .push(vertex.clone());
        }
        Self { by_payload }
    }

    /// Every vertex carrying `payload`; empty if none does.
    pub fn get(&self, payload: &T) -> &[Vertex<T>] {
        self.by_payload
            .get(payload)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The single vertex carrying `payload`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] when nothing matches,
    /// [`GraphError::AmbiguousPayload`] when several vertices do.
    pub fn unique(&self, payload: &T) -> Result<&Vertex<T>> {
        match self.get(payload) {
            [] => Err(GraphError::unknown(VertexRole::Payload)),
            [one] => Ok(one),
            many => Err(GraphError::AmbiguousPayload { count: many.len() }),
        }
    }

    /// Number of distinct payloads.
    pub fn len(&self) -> usize {
        self.by_payload.len()
    }

    /// Returns `true` if the indexed graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.by_payload.is_empty()
    }
}
