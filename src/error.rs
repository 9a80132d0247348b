//! Error type shared by every graph operation.

use crate::graph::{Edge, Vertex};

/// Errors returned by graph construction, traversal and reduction.
///
/// Variants fall into three groups:
/// - invalid arguments (`VertexNotFound`, `InvalidChain`)
/// - visitor protocol violations (`AlreadyInitialized`, `EmptyFrontier`, `UnexpectedEdge`)
/// - failed lookups (`EdgeNotFound`, `AttributeNotFound`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A traversal was requested from a vertex the graph does not contain.
    VertexNotFound(Vertex),
    /// The edge is not part of the graph being queried.
    EdgeNotFound(Edge),
    /// `initialize` was called on a visitor that is not in its initial state.
    AlreadyInitialized,
    /// `next_edge` was called with nothing left in the frontier.
    EmptyFrontier,
    /// `exec` was called with an edge other than the one handed out by `next_edge`.
    UnexpectedEdge {
        /// Edge returned by the last `next_edge` call, if any.
        expected: Option<Edge>,
        /// Edge passed to `exec`.
        found: Edge,
    },
    /// A reduced edge needs at least two vertices.
    InvalidChain(usize),
    /// A node attribute lookup missed.
    AttributeNotFound {
        /// Attribute family (`"int"`, `"double"` or `"str"`).
        kind: &'static str,
        /// Requested key.
        key: String,
    },
}

impl GraphError {
    /// Returns `true` for errors caused by calling visitor methods out of order.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            Self::AlreadyInitialized | Self::EmptyFrontier | Self::UnexpectedEdge { .. }
        )
    }
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::VertexNotFound(v) => {
                write!(f, "vertex {v} does not exist in the graph")
            }
            Self::EdgeNotFound(e) => write!(f, "edge {e} does not exist in the graph"),
            Self::AlreadyInitialized => f.write_str("visitor has already been initialized"),
            Self::EmptyFrontier => f.write_str("visitor frontier is empty"),
            Self::UnexpectedEdge {
                expected: Some(expected),
                found,
            } => write!(f, "exec called with edge {found}, expected {expected}"),
            Self::UnexpectedEdge {
                expected: None,
                found,
            } => write!(f, "exec called with edge {found} before next_edge"),
            Self::InvalidChain(len) => {
                write!(f, "a reduced edge needs at least 2 vertices, got {len}")
            }
            Self::AttributeNotFound { kind, key } => {
                write!(f, "node has no {kind} attribute named {key:?}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GraphError::VertexNotFound(7).to_string(),
            "vertex 7 does not exist in the graph"
        );
        assert_eq!(
            GraphError::UnexpectedEdge {
                expected: None,
                found: Edge::new(2, 1)
            }
            .to_string(),
            "exec called with edge (1, 2) before next_edge"
        );
    }

    #[test]
    fn test_protocol_classification() {
        assert!(GraphError::EmptyFrontier.is_protocol_violation());
        assert!(GraphError::AlreadyInitialized.is_protocol_violation());
        assert!(!GraphError::VertexNotFound(1).is_protocol_violation());
        assert!(!GraphError::EdgeNotFound(Edge::new(1, 2)).is_protocol_violation());
    }
}
