//! Chain-contracted graphs.
//!
//! A reduced graph keeps only the *fixed* vertices of a graph (tips, junctions
//! and isolated vertices). Every maximal run of degree-2 vertices between two
//! fixed vertices becomes one reduced edge, and the run itself is kept as that
//! edge's expansion. For example
//!
//! ```text
//! 1 - 2 - 3 - 4 - 5 - 9
//!     |   |   |
//!     6 - 7   8
//! ```
//!
//! reduces to
//!
//! ```text
//! 1 - 2 = 3 - 4 - 9
//!             |
//!             8
//! ```
//!
//! where `2 = 3` is a pair of parallel reduced edges expanding to `2-3` and
//! `2-6-7-3`, and `4 - 9` expands to `4-5-9`.

use std::collections::{BTreeMap, HashMap};
use std::ops::Deref;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, EdgeContainer, Graph, GraphNode, Vertex};

/// An ordered chain of original vertices that one reduced edge stands in for.
///
/// Chains are stored in a canonical direction: the first vertex is the
/// smaller endpoint. A chain whose endpoints coincide is a loop; loops are
/// oriented so that the second vertex is not larger than the second to last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReducedEdge {
    vertices: Vec<Vertex>,
}

impl ReducedEdge {
    /// Builds a chain from consecutive original vertices.
    ///
    /// # Errors
    /// [`GraphError::InvalidChain`] if fewer than two vertices are given.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self> {
        let n = vertices.len();
        if n < 2 {
            return Err(GraphError::InvalidChain(n));
        }

        let mut vertices = vertices;
        let (first, last) = (vertices[0], vertices[n - 1]);
        let reverse = if first == last {
            n > 2 && vertices[1] > vertices[n - 2]
        } else {
            first > last
        };
        if reverse {
            vertices.reverse();
        }
        Ok(Self { vertices })
    }

    /// The chain, endpoints included.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// First and last vertex of the chain.
    pub fn end_points(&self) -> (Vertex, Vertex) {
        let n = self.vertices.len();
        (self.vertices[0], self.vertices[n - 1])
    }

    /// The reduced edge joining the chain's endpoints.
    pub fn edge(&self) -> Edge {
        let (a, b) = self.end_points();
        Edge::new(a, b)
    }

    /// The original edges along the chain, in chain order.
    pub fn expand(&self) -> Vec<Edge> {
        self.vertices
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .collect()
    }

    /// Number of original edges in the chain.
    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Returns `true` if the chain starts and ends at the same vertex.
    pub fn is_loop(&self) -> bool {
        let (a, b) = self.end_points();
        a == b
    }
}

/// A [`Graph`] over fixed vertices plus the chains each reduced edge replaces.
///
/// Parallel chains between the same endpoints are all kept: the contracted
/// topology holds a single edge for them, and [`edge_multiplicity`] reports
/// how many chains it carries. The adjacency of the original graph is
/// retained for [`full_neighbor_vertices`] queries.
///
/// `ReducedGraph` dereferences to the contracted [`Graph`], so every read-only
/// topology query is available directly.
///
/// [`edge_multiplicity`]: Self::edge_multiplicity
/// [`full_neighbor_vertices`]: Self::full_neighbor_vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedGraph<N = GraphNode> {
    graph: Graph<N>,
    full: EdgeContainer,
    expansions: BTreeMap<Edge, Vec<ReducedEdge>>,
}

impl<N: Default> ReducedGraph<N> {
    /// Assembles a reduced graph from chains and the payloads of the kept vertices.
    ///
    /// The original adjacency is rebuilt from the chains. Payloads for vertices
    /// that are not chain endpoints register isolated vertices.
    pub fn new<I>(reduced_edges: I, nodes: HashMap<Vertex, N>) -> Self
    where
        I: IntoIterator<Item = ReducedEdge>,
    {
        let mut expansions: BTreeMap<Edge, Vec<ReducedEdge>> = BTreeMap::new();
        let mut full = EdgeContainer::new();
        for chain in reduced_edges {
            for edge in chain.expand() {
                full.add_edge(edge);
            }
            expansions.entry(chain.edge()).or_default().push(chain);
        }
        for chains in expansions.values_mut() {
            chains.sort_by(|a, b| {
                a.edge_count()
                    .cmp(&b.edge_count())
                    .then_with(|| a.vertices.cmp(&b.vertices))
            });
        }

        let graph = Graph::new(expansions.keys().copied(), nodes);
        Self {
            graph,
            full,
            expansions,
        }
    }
}

impl<N> ReducedGraph<N> {
    /// The contracted topology.
    pub fn graph(&self) -> &Graph<N> {
        &self.graph
    }

    /// Adjacency of the original, un-reduced graph.
    pub fn full_edge_container(&self) -> &EdgeContainer {
        &self.full
    }

    /// Neighbors of `vertex` in the original graph, ascending.
    pub fn full_neighbor_vertices(&self, vertex: Vertex) -> Vec<Vertex> {
        self.full.neighbor_vertices(vertex)
    }

    /// Chains recorded for the reduced edge `edge`, shortest first.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if `edge` is not a reduced edge.
    pub fn expansions(&self, edge: Edge) -> Result<&[ReducedEdge]> {
        self.expansions
            .get(&edge)
            .map(Vec::as_slice)
            .ok_or(GraphError::EdgeNotFound(edge))
    }

    /// The original edge sequences `edge` stands in for, one per chain.
    ///
    /// Each inner list walks from `edge.lo()` to `edge.hi()`.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if `edge` is not a reduced edge.
    pub fn expand_edge(&self, edge: Edge) -> Result<Vec<Vec<Edge>>> {
        Ok(self
            .expansions(edge)?
            .iter()
            .map(ReducedEdge::expand)
            .collect())
    }

    /// Number of chains carried by `edge`; 0 if it is not a reduced edge.
    pub fn edge_multiplicity(&self, edge: Edge) -> usize {
        self.expansions.get(&edge).map_or(0, Vec::len)
    }

    /// Every chain, grouped by reduced edge in ascending edge order.
    pub fn reduced_edges(&self) -> impl Iterator<Item = &ReducedEdge> + '_ {
        self.expansions.values().flatten()
    }

    /// Total number of chains, parallel ones counted separately.
    pub fn reduced_edge_count(&self) -> usize {
        self.expansions.values().map(Vec::len).sum()
    }
}

impl<N> Deref for ReducedGraph<N> {
    type Target = Graph<N>;

    fn deref(&self) -> &Graph<N> {
        &self.graph
    }
}
