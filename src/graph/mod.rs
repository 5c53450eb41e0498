//! Graph storage: vertices, paths and the adjacency-list graph.
//!
//! - `vertex`: identity-bearing payload handles
//! - `path`: ordered walks built by the searches
//! - `adj_list`: the identity-keyed adjacency-list graph
//! - `payload_index`: explicit payload lookups over a built graph

pub mod adj_list;
pub mod path;
pub mod payload_index;
pub mod vertex;
pub(crate) mod access;

pub use adj_list::{Directed, DirectedGraph, EdgeType, Graph, Undirected, UndirectedGraph};
pub use path::Path;
pub use payload_index::PayloadIndex;
pub use vertex::Vertex;
