//! Identity-bearing vertex handles.
//!
//! A [`Vertex`] is a cheap, clonable handle to one payload value. Clones share
//! the same identity; two handles created by separate [`Vertex::new`] calls are
//! different vertices even when their payloads compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A graph vertex carrying a payload of type `T`.
///
/// Equality and hashing are by identity (the shared allocation), never by payload.
/// `T` needs no trait bounds for structural use.
pub struct Vertex<T> {
    payload: Arc<T>,
}

impl<T> Vertex<T> {
    /// Creates a new vertex with a fresh identity.
    pub fn new(payload: T) -> Self {
        Self {
            payload: Arc::new(payload),
        }
    }

    /// Returns the payload stored in this vertex.
    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns `true` if `self` and `other` are the same vertex.
    #[inline]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }

    /// Address-derived key used by the graph's slot index.
    #[inline]
    pub(crate) fn key(&self) -> usize {
        Arc::as_ptr(&self.payload) as usize
    }
}

impl<T> Clone for Vertex<T> {
    fn clone(&self) -> Self {
        Self {
            payload: Arc::clone(&self.payload),
        }
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vertex").field(&*self.payload).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.payload, f)
    }
}
