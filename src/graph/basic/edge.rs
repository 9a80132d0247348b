//! Canonical undirected edges.

use serde::{Deserialize, Serialize};

/// Integer identifier naming a vertex.
pub type Vertex = i64;

/// An unordered pair of vertices.
///
/// The endpoints are stored in canonical `(lo, hi)` order, so `Edge::new(a, b)`
/// and `Edge::new(b, a)` compare, hash and order identically. Ordering is
/// lexicographic on `(lo, hi)`.
///
/// ```rust
/// use topograph::Edge;
///
/// let e = Edge::new(5, 2);
/// assert_eq!(e, Edge::new(2, 5));
/// assert_eq!(e.end_points(), (2, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(Vertex, Vertex)", into = "(Vertex, Vertex)")]
pub struct Edge {
    lo: Vertex,
    hi: Vertex,
}

impl Edge {
    /// Creates the canonical edge joining `a` and `b`.
    #[inline]
    pub const fn new(a: Vertex, b: Vertex) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The smaller endpoint.
    #[inline]
    pub const fn lo(&self) -> Vertex {
        self.lo
    }

    /// The larger endpoint.
    #[inline]
    pub const fn hi(&self) -> Vertex {
        self.hi
    }

    /// Both endpoints as `(lo, hi)`.
    #[inline]
    pub const fn end_points(&self) -> (Vertex, Vertex) {
        (self.lo, self.hi)
    }

    /// Returns `true` if `v` is one of the endpoints.
    #[inline]
    pub const fn contains(&self, v: Vertex) -> bool {
        self.lo == v || self.hi == v
    }

    /// Returns the endpoint opposite `v`.
    ///
    /// Returns `None` when `v` is not an endpoint. For a self-loop the other
    /// endpoint is `v` itself.
    #[inline]
    pub const fn other_endpoint(&self, v: Vertex) -> Option<Vertex> {
        if v == self.lo {
            Some(self.hi)
        } else if v == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[inline]
    pub const fn is_self_loop(&self) -> bool {
        self.lo == self.hi
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((a, b): (Vertex, Vertex)) -> Self {
        Self::new(a, b)
    }
}

impl From<Edge> for (Vertex, Vertex) {
    fn from(edge: Edge) -> Self {
        edge.end_points()
    }
}

impl core::fmt::Display for Edge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}
