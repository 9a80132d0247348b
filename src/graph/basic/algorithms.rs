//! Graph algorithms driven by [`GraphVisitor`].
//!
//! Every function here reads its input graph and builds fresh visitors, so
//! repeated calls on the same graph return identical results.

use std::collections::BTreeSet;

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::specialized::{ReducedEdge, ReducedGraph};
use crate::graph::traversal::{BfVisitor, DfVisitor, GraphVisitor, TraversalPolicy};
use crate::graph::{Edge, Graph, Vertex};

/// Runs `visitor` over `graph` until its frontier is empty.
///
/// Afterwards the visitor's explored set holds every vertex reachable from its
/// starting vertex.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if the starting vertex is not in `graph`,
/// plus any protocol error raised by an already-used visitor.
pub fn explore_graph<N, P>(graph: &Graph<N>, visitor: &mut GraphVisitor<P>) -> Result<()>
where
    P: TraversalPolicy,
{
    if !graph.contains_vertex(visitor.starting_vertex()) {
        return Err(GraphError::VertexNotFound(visitor.starting_vertex()));
    }

    visitor.initialize(graph)?;
    while !visitor.frontier_empty() {
        let edge = visitor.next_edge()?;
        visitor.exec(graph, edge)?;
    }
    Ok(())
}

/// Returns `true` iff `graph` is one connected network.
///
/// The graph is explored from the visitor's starting vertex; it is a single
/// network when every vertex was reached **and** no vertex is isolated.
///
/// # Errors
/// Propagates the errors of [`explore_graph`].
pub fn single_network<N, P>(graph: &Graph<N>, visitor: &mut GraphVisitor<P>) -> Result<bool>
where
    P: TraversalPolicy,
{
    explore_graph(graph, visitor)?;
    Ok(visitor.explored_count() == graph.vertex_count() && graph.isolated_vertices().is_empty())
}

/// [`single_network`] with a breadth-first visitor started at the smallest vertex.
///
/// An empty graph is not a network.
pub fn is_single_network<N>(graph: &Graph<N>) -> bool {
    let Some(&start) = graph.vertices().first() else {
        return false;
    };
    single_network(graph, &mut BfVisitor::new(start)).unwrap_or(false)
}

/// Splits `graph` into its connected components.
///
/// Each component is an independent graph holding the component's vertices,
/// edges and payloads; together they partition the vertices and edges of
/// `graph`. Components are returned in the order their seed vertex was picked:
/// the smallest vertex not yet covered by an earlier component. An isolated
/// vertex forms a component with no edges.
///
/// # Errors
/// Propagates traversal errors; none occur for a well-formed graph.
pub fn decouple_isolated_subgraphs<N>(graph: &Graph<N>) -> Result<Vec<Graph<N>>>
where
    N: Clone + Default,
{
    let vertices = graph.vertices();
    let Some(&first) = vertices.first() else {
        return Ok(Vec::new());
    };
    if single_network(graph, &mut BfVisitor::new(first))? {
        return Ok(vec![graph.clone()]);
    }

    let mut unvisited: BTreeSet<Vertex> = vertices.into_iter().collect();
    let mut components = Vec::new();
    while let Some(seed) = unvisited.pop_first() {
        let mut visitor = BfVisitor::new(seed);
        explore_graph(graph, &mut visitor)?;

        let explored = visitor.explored_vertices();
        let edges: BTreeSet<Edge> = explored
            .iter()
            .flat_map(|&v| graph.neighbor_edges(v))
            .collect();
        let nodes = graph.node_map(&explored);
        for v in &explored {
            unvisited.remove(v);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            seed,
            vertices = explored.len(),
            edges = edges.len(),
            "component decoupled"
        );
        components.push(Graph::new(edges, nodes));
    }
    Ok(components)
}

/// Contracts every maximal chain of degree-2 vertices into a single edge.
///
/// Fixed vertices are tips (degree 1) and junctions (degree >= 3). Each
/// component is walked depth-first from a seed chosen by priority: its first
/// junction, else its first tip, else any vertex when the component is a pure
/// cycle. The seed of a pure cycle is treated as fixed so the cycle has
/// somewhere to start and end.
///
/// Every edge of the input belongs to exactly one chain. A chain starts at a
/// fixed vertex, runs through degree-2 vertices and stops at the next fixed
/// vertex. A chain that comes back to its own start becomes a loop reduced
/// edge `(v, v)`. Chains that share both endpoints are kept as parallel
/// expansions of one reduced edge.
///
/// The reduced graph keeps the chain endpoints and the isolated vertices of
/// `graph`, with their payloads copied unchanged.
///
/// # Errors
/// Propagates traversal errors; none occur for a well-formed graph.
pub fn reduce_graph<N>(graph: &Graph<N>) -> Result<ReducedGraph<N>>
where
    N: Clone + Default,
{
    let mut consumed: VisitedSet<Edge> = VisitedSet::new();
    let mut covered: VisitedSet<Vertex> = VisitedSet::new();
    let mut chains: Vec<ReducedEdge> = Vec::new();

    for seed in seed_candidates(graph) {
        if covered.is_visited(seed) {
            continue;
        }
        let tracer = ChainTracer { graph, seed };
        let mut visitor = DfVisitor::new(seed);
        visitor.initialize(graph)?;
        while !visitor.frontier_empty() {
            let edge = visitor.next_edge()?;
            if !consumed.is_visited(edge) {
                if let Some(anchor) = tracer.anchor_of(edge) {
                    chains.push(tracer.trace(anchor, edge, &mut consumed)?);
                }
            }
            visitor.exec(graph, edge)?;
        }
        for v in visitor.explored_vertices() {
            covered.try_visit(v);
        }
    }

    // Self-loops in the input never enter a visitor frontier.
    for edge in graph.edges() {
        if consumed.try_visit(edge) {
            chains.push(ReducedEdge::new(vec![edge.lo(), edge.hi()])?);
        }
    }

    let mut kept: BTreeSet<Vertex> = graph.isolated_vertices().into_iter().collect();
    for chain in &chains {
        let (a, b) = chain.end_points();
        kept.insert(a);
        kept.insert(b);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        kept = kept.len(),
        chains = chains.len(),
        "graph reduced"
    );
    Ok(ReducedGraph::new(chains, graph.node_map(&kept)))
}

/// Seeds in priority order: junctions, then tips, then the remaining
/// non-isolated vertices.
fn seed_candidates<N>(graph: &Graph<N>) -> Vec<Vertex> {
    let mut candidates = graph.junctions();
    candidates.extend(graph.tips());
    candidates.extend(graph.vertices_with_degree(2));
    candidates
}

struct ChainTracer<'g, N> {
    graph: &'g Graph<N>,
    seed: Vertex,
}

impl<N> ChainTracer<'_, N> {
    fn is_fixed(&self, vertex: Vertex) -> bool {
        vertex == self.seed || self.graph.degree(vertex) != 2
    }

    /// The endpoint a chain through `edge` can start from, if any.
    ///
    /// An edge between two degree-2 vertices is skipped: the chain holding it
    /// is picked up from one of that chain's fixed ends.
    fn anchor_of(&self, edge: Edge) -> Option<Vertex> {
        let (lo, hi) = edge.end_points();
        if self.is_fixed(lo) {
            Some(lo)
        } else if self.is_fixed(hi) {
            Some(hi)
        } else {
            None
        }
    }

    /// Walks from `anchor` across `first` until the next fixed vertex.
    fn trace(
        &self,
        anchor: Vertex,
        first: Edge,
        consumed: &mut VisitedSet<Edge>,
    ) -> Result<ReducedEdge> {
        let mut chain = vec![anchor];
        let mut edge = first;
        let mut current = anchor;
        loop {
            consumed.try_visit(edge);
            current = edge
                .other_endpoint(current)
                .ok_or(GraphError::EdgeNotFound(edge))?;
            chain.push(current);
            if self.is_fixed(current) {
                break;
            }

            let here = current;
            match self
                .graph
                .neighbors(here)
                .filter(|&w| w != here)
                .map(|w| Edge::new(here, w))
                .find(|e| !consumed.is_visited(*e))
            {
                Some(next) => edge = next,
                None => break,
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(anchor, end = current, length = chain.len() - 1, "chain traced");
        ReducedEdge::new(chain)
    }
}
