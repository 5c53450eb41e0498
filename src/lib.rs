//! # `wayfinder` - Directed Graph Search Toolkit
//!
//! An in-memory adjacency-list graph with a family of unweighted shortest-path
//! and reachability searches.
//!
//! ## Guarantees
//!
//! ### Identity
//! - **Vertices are handles**: a [`Vertex`] is equal only to its own clones. Two
//!   vertices with equal payloads are distinct graph nodes.
//! - **Payload lookups are explicit**: [`Graph::find_by_payload`] and
//!   [`PayloadIndex`] are the only places payload equality is consulted.
//!
//! ### Search
//! - **Fewest edges**: every [`SearchStrategy`] returns a path of minimum edge
//!   count, or `None` exactly when the target is unreachable.
//! - **Cycle safety**: no partial path repeats a vertex, so searches terminate on
//!   any finite graph.
//! - **No shared state**: each call allocates its own visited flags; callers may
//!   pass a reachability set explicitly, never implicitly.
//! - **Bounded recursion**: the recursive variants fail with
//!   [`GraphError::RecursionLimit`] instead of exhausting the stack. The iterative
//!   variants are the defaults.
//!
//! ### Mutation
//! - Searches borrow the graph shared, so it cannot change while one runs.
//! - Failed `add_vertex` / `add_edge` calls leave the graph unchanged.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::{reachable_from, shortest_path, DirectedGraph, SearchStrategy, Vertex};
//!
//! let cities: Vec<_> = ["Boston", "New York", "Chicago", "Phoenix"]
//!     .into_iter()
//!     .map(Vertex::new)
//!     .collect();
//! let mut graph = DirectedGraph::new();
//! for city in &cities {
//!     graph.add_vertex(city.clone())?;
//! }
//! for pair in cities.windows(2) {
//!     graph.add_edge(&pair[0], &pair[1])?;
//! }
//!
//! let boston = graph.find_by_payload(&"Boston")?;
//! let phoenix = graph.find_by_payload(&"Phoenix")?;
//! let path = shortest_path(&graph, &boston, &phoenix, SearchStrategy::Bfs)?;
//! assert_eq!(path.map(|p| p.edge_count()), Some(3));
//! assert_eq!(reachable_from(&graph, &phoenix)?.len(), 1);
//! # Ok::<(), wayfinder::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod graph;
pub mod search;

pub use config::{SearchConfig, SearchStrategy, TraversalStrategy};
pub use error::{GraphError, Result, VertexRole};
pub use graph::{
    Directed, DirectedGraph, EdgeType, Graph, Path, PayloadIndex, Undirected, UndirectedGraph,
    Vertex,
};
pub use search::{reachable_from, shortest_path, Bfs, Dfs, GraphSearch};

// Compile-time assertions for handle layout.
const _: () = {
    use core::mem;

    // A vertex handle is a single pointer.
    assert!(mem::size_of::<Vertex<u64>>() == mem::size_of::<usize>());
    // A path is exactly its vertex vector.
    assert!(mem::size_of::<Path<u64>>() == mem::size_of::<Vec<Vertex<u64>>>());
};
