//! Undirected graph with per-vertex payloads.

use std::collections::{BTreeSet, HashMap};

use super::edge::{Edge, Vertex};
use super::edge_container::EdgeContainer;
use super::node::GraphNode;

/// An immutable undirected graph.
///
/// A graph owns an [`EdgeContainer`] and a payload of type `N` for every
/// vertex. A vertex exists iff it is an edge endpoint or it was registered
/// through the node map passed to [`Graph::new`]; vertices registered without
/// any incident edge are *isolated*.
///
/// Edge endpoints with no supplied payload receive `N::default()`. Once built,
/// a graph is only read: every algorithm in this crate takes `&Graph<N>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<N = GraphNode> {
    edges: EdgeContainer,
    nodes: HashMap<Vertex, N>,
    isolated: BTreeSet<Vertex>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            edges: EdgeContainer::new(),
            nodes: HashMap::new(),
            isolated: BTreeSet::new(),
        }
    }
}

impl<N: Default> Graph<N> {
    /// Builds a graph from `edges` and a vertex → payload map.
    ///
    /// Payloads for vertices that are not edge endpoints register isolated
    /// vertices. Edge endpoints missing from `nodes` get `N::default()`.
    pub fn new<I>(edges: I, nodes: HashMap<Vertex, N>) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let container = EdgeContainer::from_edges(edges);
        let mut nodes = nodes;
        let isolated = nodes
            .keys()
            .copied()
            .filter(|&v| !container.contains_vertex(v))
            .collect();
        for vertex in container.vertices() {
            nodes.entry(vertex).or_default();
        }

        Self {
            edges: container,
            nodes,
            isolated,
        }
    }

    /// Builds a graph whose vertices all carry `N::default()`.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        Self::new(edges, HashMap::new())
    }
}

impl<N> Graph<N> {
    /// The underlying adjacency index.
    pub fn edge_container(&self) -> &EdgeContainer {
        &self.edges
    }

    /// Returns `true` if `vertex` is an edge endpoint or a registered isolated vertex.
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.nodes.contains_key(&vertex)
    }

    /// Returns `true` if `edge` is part of the graph.
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.edges.contains_edge(edge)
    }

    /// Number of distinct neighbors of `vertex`.
    pub fn degree(&self, vertex: Vertex) -> usize {
        self.edges.degree(vertex)
    }

    /// Largest vertex degree.
    pub fn max_degree(&self) -> usize {
        self.edges.max_degree()
    }

    /// Vertices whose degree equals `degree`, ascending.
    ///
    /// `degree == 0` yields the isolated vertices.
    pub fn vertices_with_degree(&self, degree: usize) -> Vec<Vertex> {
        if degree == 0 {
            self.isolated_vertices()
        } else {
            self.edges.vertices_with_degree(degree)
        }
    }

    /// Degree-1 vertices, ascending.
    pub fn tips(&self) -> Vec<Vertex> {
        self.edges.vertices_with_degree(1)
    }

    /// Vertices of degree 3 or more, ascending.
    pub fn junctions(&self) -> Vec<Vertex> {
        self.edges
            .vertices()
            .into_iter()
            .filter(|&v| self.edges.degree(v) >= 3)
            .collect()
    }

    /// Every vertex, isolated ones included, ascending.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out: Vec<Vertex> = self.nodes.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Every edge, ascending.
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.edges()
    }

    /// Neighbors of `vertex`, ascending.
    pub fn neighbor_vertices(&self, vertex: Vertex) -> Vec<Vertex> {
        self.edges.neighbor_vertices(vertex)
    }

    /// Iterates over the neighbors of `vertex` without allocating.
    pub fn neighbors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.edges.neighbors(vertex)
    }

    /// Edges incident to `vertex`.
    pub fn neighbor_edges(&self, vertex: Vertex) -> Vec<Edge> {
        self.edges.neighbor_edges(vertex)
    }

    /// Payload of `vertex`.
    pub fn node(&self, vertex: Vertex) -> Option<&N> {
        self.nodes.get(&vertex)
    }

    /// `(vertex, payload)` pairs for every vertex, ascending by vertex.
    pub fn nodes(&self) -> Vec<(Vertex, &N)> {
        let mut out: Vec<(Vertex, &N)> = self.nodes.iter().map(|(&v, n)| (v, n)).collect();
        out.sort_unstable_by_key(|&(v, _)| v);
        out
    }

    /// `(neighbor, payload)` pairs for the neighbors of `vertex`.
    pub fn neighbor_nodes(&self, vertex: Vertex) -> Vec<(Vertex, &N)> {
        self.edges
            .neighbors(vertex)
            .filter_map(|w| self.nodes.get(&w).map(|n| (w, n)))
            .collect()
    }

    /// Vertices registered without any incident edge, ascending.
    pub fn isolated_vertices(&self) -> Vec<Vertex> {
        self.isolated.iter().copied().collect()
    }

    /// `(vertex, payload)` pairs for the isolated vertices.
    pub fn isolated_nodes(&self) -> Vec<(Vertex, &N)> {
        self.isolated
            .iter()
            .filter_map(|&v| self.nodes.get(&v).map(|n| (v, n)))
            .collect()
    }

    /// Returns `true` if `vertex` is registered and has no incident edge.
    pub fn is_isolated(&self, vertex: Vertex) -> bool {
        self.isolated.contains(&vertex)
    }

    /// Number of vertices, isolated ones included.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Returns `true` if the graph has no vertex at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clones the payloads of `vertices` into a fresh map.
    ///
    /// Vertices without a payload are skipped.
    pub(crate) fn node_map<'a, I>(&self, vertices: I) -> HashMap<Vertex, N>
    where
        I: IntoIterator<Item = &'a Vertex>,
        N: Clone,
    {
        vertices
            .into_iter()
            .filter_map(|v| self.nodes.get(v).map(|n| (*v, n.clone())))
            .collect()
    }
}
