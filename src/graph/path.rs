//! Ordered walks through a graph.

use std::fmt;
use std::ops::Add;

use crate::error::{GraphError, Result};
use crate::graph::Vertex;

/// An ordered sequence of vertices.
///
/// Paths are values: concatenation builds a new path and leaves both operands
/// untouched. Membership is by vertex identity. A path may be empty, and
/// concatenation does not deduplicate, so a vertex can appear more than once.
pub struct Path<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Path<T> {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates the single-vertex path `[vertex]`.
    pub fn single(vertex: Vertex<T>) -> Self {
        Self {
            vertices: vec![vertex],
        }
    }

    /// Number of vertices in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the path holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges the path walks (`len - 1`, or 0 when empty).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// First vertex, if any.
    pub fn first(&self) -> Option<&Vertex<T>> {
        self.vertices.first()
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<&Vertex<T>> {
        self.vertices.last()
    }

    /// The vertices in order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Iterates over the vertices in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }

    /// Returns `true` if `vertex` (by identity) is on the path.
    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.vertices.iter().any(|v| v.same_as(vertex))
    }

    /// Returns a new path with `vertex` appended.
    pub fn extended(&self, vertex: Vertex<T>) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend(self.vertices.iter().cloned());
        vertices.push(vertex);
        Self { vertices }
    }

    /// Inserts `vertex` at `index`.
    ///
    /// # Errors
    /// [`GraphError::EmptyPathOperation`] if `vertex` is already the last vertex
    /// of the path, or if `index > len`.
    pub fn insert_vertex(&mut self, index: usize, vertex: Vertex<T>) -> Result<()> {
        if self.last().is_some_and(|last| last.same_as(&vertex)) {
            return Err(GraphError::EmptyPathOperation("vertex already at end of path"));
        }
        if index > self.vertices.len() {
            return Err(GraphError::EmptyPathOperation("insert index out of bounds"));
        }
        self.vertices.insert(index, vertex);
        Ok(())
    }

    /// Removes the first occurrence of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::EmptyPathOperation`] if `vertex` is not on the path.
    pub fn remove_vertex(&mut self, vertex: &Vertex<T>) -> Result<()> {
        let pos = self
            .vertices
            .iter()
            .position(|v| v.same_as(vertex))
            .ok_or(GraphError::EmptyPathOperation("vertex not in path"))?;
        self.vertices.remove(pos);
        Ok(())
    }
}

impl<T> Default for Path<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Path<T> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
        }
    }
}

impl<T> PartialEq for Path<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<T> Eq for Path<T> {}

impl<T> From<Vec<Vertex<T>>> for Path<T> {
    fn from(vertices: Vec<Vertex<T>>) -> Self {
        Self { vertices }
    }
}

impl<T> FromIterator<Vertex<T>> for Path<T> {
    fn from_iter<I: IntoIterator<Item = Vertex<T>>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a Vertex<T>;
    type IntoIter = std::slice::Iter<'a, Vertex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl<T> IntoIterator for Path<T> {
    type Item = Vertex<T>;
    type IntoIter = std::vec::IntoIter<Vertex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<T> Add for &Path<T> {
    type Output = Path<T>;

    fn add(self, rhs: &Path<T>) -> Path<T> {
        let mut vertices = Vec::with_capacity(self.len() + rhs.len());
        vertices.extend(self.vertices.iter().cloned());
        vertices.extend(rhs.vertices.iter().cloned());
        Path { vertices }
    }
}

impl<T> Add for Path<T> {
    type Output = Path<T>;

    fn add(mut self, rhs: Path<T>) -> Path<T> {
        self.vertices.extend(rhs.vertices);
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.vertices.iter().map(Vertex::payload))
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}
