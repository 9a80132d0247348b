//! Symmetric adjacency index over canonical edges.

use std::collections::{BTreeSet, HashMap};

use super::edge::{Edge, Vertex};

/// An undirected adjacency index: for each vertex, the set of its neighbors.
///
/// Every inserted edge is recorded in both directions, so
/// `b ∈ neighbors(a) ⟺ a ∈ neighbors(b)` always holds. Vertex lookup is a hash
/// probe; neighbor sets are ordered so that every enumeration below yields
/// vertices in ascending id order.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(\log d)\) | Idempotent |
/// | `contains_vertex` | \(O(1)\) amortized | Hash probe |
/// | `contains_edge` | \(O(\log d)\) | Hash probe + set lookup |
/// | `degree` | \(O(1)\) | `BTreeSet::len` |
/// | `max_degree` | \(O(n)\) | Scans every vertex |
/// | `vertices` / `edges` | \(O(n \log n + m)\) | Sorted output |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeContainer {
    adjacency: HashMap<Vertex, BTreeSet<Vertex>>,
}

impl EdgeContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a container holding every edge in `edges`.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut container = Self::new();
        for edge in edges {
            container.add_edge(edge);
        }
        container
    }

    /// Inserts `edge` in both directions. Inserting an existing edge is a no-op.
    pub fn add_edge(&mut self, edge: Edge) {
        let (lo, hi) = edge.end_points();
        self.adjacency.entry(lo).or_default().insert(hi);
        self.adjacency.entry(hi).or_default().insert(lo);
    }

    /// Returns `true` if the edge has been inserted.
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.adjacency
            .get(&edge.lo())
            .is_some_and(|nbrs| nbrs.contains(&edge.hi()))
    }

    /// Returns `true` if `vertex` is an endpoint of at least one edge.
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Number of distinct neighbors of `vertex`; 0 for unknown vertices.
    pub fn degree(&self, vertex: Vertex) -> usize {
        self.adjacency.get(&vertex).map_or(0, BTreeSet::len)
    }

    /// Largest degree over all vertices; 0 for an empty container.
    pub fn max_degree(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// All vertices whose degree equals `degree`, in ascending order.
    pub fn vertices_with_degree(&self, degree: usize) -> Vec<Vertex> {
        let mut out: Vec<Vertex> = self
            .adjacency
            .iter()
            .filter(|(_, nbrs)| nbrs.len() == degree)
            .map(|(&v, _)| v)
            .collect();
        out.sort_unstable();
        out
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out: Vec<Vertex> = self.adjacency.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// All edges, each reported once, in ascending order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = self
            .adjacency
            .iter()
            .flat_map(|(&v, nbrs)| nbrs.range(v..).map(move |&w| Edge::new(v, w)))
            .collect();
        out.sort_unstable();
        out
    }

    /// Iterates over the neighbors of `vertex` in ascending order.
    ///
    /// Unknown vertices have no neighbors.
    pub fn neighbors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.get(&vertex).into_iter().flatten().copied()
    }

    /// Neighbors of `vertex` in ascending order.
    pub fn neighbor_vertices(&self, vertex: Vertex) -> Vec<Vertex> {
        self.neighbors(vertex).collect()
    }

    /// Edges incident to `vertex`, ordered by the opposite endpoint.
    pub fn neighbor_edges(&self, vertex: Vertex) -> Vec<Edge> {
        self.neighbors(vertex).map(|w| Edge::new(vertex, w)).collect()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        // Each non-loop edge appears in two neighbor sets, a self-loop in one.
        let (loops, total) = self
            .adjacency
            .iter()
            .fold((0, 0), |(loops, total), (v, nbrs)| {
                (loops + usize::from(nbrs.contains(v)), total + nbrs.len())
            });
        (total - loops) / 2 + loops
    }

    /// Returns `true` if no edge has been inserted.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl FromIterator<Edge> for EdgeContainer {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl core::fmt::Display for EdgeContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for vertex in self.vertices() {
            write!(f, "{vertex}:")?;
            for nbr in self.neighbors(vertex) {
                write!(f, " {nbr}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
