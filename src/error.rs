//! Error type shared by graph construction, path editing and search.
//!
//! Every fallible operation returns [`GraphError`] synchronously. Nothing here is
//! transient, so callers never retry; a failed mutation leaves the graph untouched.

use thiserror::Error;

/// Which argument of an operation referred to a vertex the graph does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    /// Source endpoint of an edge.
    Parent,
    /// Target endpoint of an edge.
    Child,
    /// Origin of a search.
    Start,
    /// Destination of a search.
    End,
    /// The sole vertex argument of a query.
    Vertex,
    /// A payload lookup that matched nothing.
    Payload,
}

impl core::fmt::Display for VertexRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Start => "start",
            Self::End => "end",
            Self::Vertex => "vertex",
            Self::Payload => "payload",
        };
        f.write_str(name)
    }
}

/// Errors raised by graphs, paths and searches.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The vertex is already registered in this graph.
    #[error("duplicate vertex")]
    DuplicateVertex,

    /// An operation referenced a vertex that is not registered in the graph.
    #[error("{role} vertex not in graph")]
    UnknownVertex {
        /// The argument that failed the membership check.
        role: VertexRole,
    },

    /// A path insert/remove violated the path's invariants.
    #[error("invalid path operation: {0}")]
    EmptyPathOperation(&'static str),

    /// A lookup that expects a single vertex matched several.
    #[error("payload matches {count} vertices, expected exactly one")]
    AmbiguousPayload {
        /// Number of vertices carrying the payload.
        count: usize,
    },

    /// A recursive search went deeper than its configured cap.
    #[error("recursion depth limit of {limit} exceeded")]
    RecursionLimit {
        /// The configured `max_recursion_depth`.
        limit: usize,
    },

    /// A search configuration document could not be parsed.
    #[error("invalid search configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn unknown(role: VertexRole) -> Self {
        Self::UnknownVertex { role }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_argument() {
        assert_eq!(
            GraphError::unknown(VertexRole::Parent).to_string(),
            "parent vertex not in graph"
        );
        assert_eq!(
            GraphError::unknown(VertexRole::End).to_string(),
            "end vertex not in graph"
        );
        assert_eq!(
            GraphError::RecursionLimit { limit: 8 }.to_string(),
            "recursion depth limit of 8 exceeded"
        );
    }

    #[test]
    fn config_errors_convert_from_serde() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: GraphError = err.into();
        assert!(matches!(err, GraphError::Config(_)));
    }
}
