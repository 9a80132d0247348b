//! Stepwise graph visitor.

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::{Edge, Graph, Vertex};

use super::policy::{BreadthFirst, DepthFirst, TraversalPolicy};

/// Lifecycle of a [`GraphVisitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitorState {
    /// Created or reset; `initialize` has not run.
    Uninitialized,
    /// Frontier is being consumed.
    Exploring,
    /// Frontier drained; every reachable vertex is explored.
    Done,
}

/// A traversal state machine over a [`Graph`].
///
/// The visitor tracks the set of explored vertices and a frontier of pending
/// edges whose order is decided by the policy `P`. Driving it by hand follows
/// a strict protocol:
///
/// 1. [`initialize`](Self::initialize) seeds the frontier with the edges of the
///    starting vertex and marks that vertex explored.
/// 2. [`next_edge`](Self::next_edge) reports the next pending edge.
/// 3. [`exec`](Self::exec) consumes exactly that edge, exploring its far
///    endpoint and pushing the endpoint's edges towards unexplored vertices.
///
/// Steps 2–3 repeat until [`frontier_empty`](Self::frontier_empty). Each edge
/// of the starting vertex's component passes through the frontier exactly
/// once. Any protocol violation is reported as an error and leaves the visitor
/// unusable until [`reset`](Self::reset).
///
/// ```rust
/// use topograph::{BfVisitor, Edge, Graph};
///
/// let g: Graph = Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3)]);
/// let mut visitor = BfVisitor::new(1);
/// visitor.initialize(&g)?;
/// while !visitor.frontier_empty() {
///     let edge = visitor.next_edge()?;
///     visitor.exec(&g, edge)?;
/// }
/// assert_eq!(visitor.explored_vertices(), vec![1, 2, 3]);
/// # Ok::<(), topograph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphVisitor<P> {
    starting_vertex: Vertex,
    explored: VisitedSet<Vertex>,
    frontier: P,
    loop_edges: Vec<Edge>,
    pending: Option<Edge>,
    state: VisitorState,
}

/// Breadth-first visitor.
pub type BfVisitor = GraphVisitor<BreadthFirst>;

/// Depth-first visitor.
pub type DfVisitor = GraphVisitor<DepthFirst>;

impl<P: TraversalPolicy> GraphVisitor<P> {
    /// Creates an uninitialized visitor that will start from `starting_vertex`.
    pub fn new(starting_vertex: Vertex) -> Self {
        Self {
            starting_vertex,
            explored: VisitedSet::new(),
            frontier: P::default(),
            loop_edges: Vec::new(),
            pending: None,
            state: VisitorState::Uninitialized,
        }
    }

    /// The vertex the traversal starts from.
    pub fn starting_vertex(&self) -> Vertex {
        self.starting_vertex
    }

    /// Changes the starting vertex. Only allowed before `initialize`.
    ///
    /// # Errors
    /// [`GraphError::AlreadyInitialized`] once the visitor has been initialized.
    pub fn set_starting_vertex(&mut self, vertex: Vertex) -> Result<()> {
        if self.state != VisitorState::Uninitialized {
            return Err(GraphError::AlreadyInitialized);
        }
        self.starting_vertex = vertex;
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> VisitorState {
        self.state
    }

    /// Marks the starting vertex explored and seeds the frontier with its edges.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if `graph` lacks the starting vertex.
    /// - [`GraphError::AlreadyInitialized`] if the visitor was already initialized.
    pub fn initialize<N>(&mut self, graph: &Graph<N>) -> Result<()> {
        if self.state != VisitorState::Uninitialized {
            return Err(GraphError::AlreadyInitialized);
        }
        if !graph.contains_vertex(self.starting_vertex) {
            return Err(GraphError::VertexNotFound(self.starting_vertex));
        }

        self.explored.try_visit(self.starting_vertex);
        self.expand_from(graph, self.starting_vertex);
        self.state = if self.frontier.is_empty() {
            VisitorState::Done
        } else {
            VisitorState::Exploring
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            start = self.starting_vertex,
            frontier = self.frontier.len(),
            "visitor initialized"
        );
        Ok(())
    }

    /// Returns `true` if no edge is pending. Also `true` before `initialize`.
    pub fn frontier_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Number of pending edges.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Reports the next pending edge without removing it.
    ///
    /// # Errors
    /// [`GraphError::EmptyFrontier`] if nothing is pending.
    pub fn next_edge(&mut self) -> Result<Edge> {
        let edge = self.frontier.peek().ok_or(GraphError::EmptyFrontier)?;
        self.pending = Some(edge);
        Ok(edge)
    }

    /// Consumes the edge handed out by the last [`next_edge`](Self::next_edge).
    ///
    /// If the edge leads to an unexplored vertex, that vertex is explored and
    /// its edges towards still-unexplored vertices join the frontier. If both
    /// endpoints were already explored the edge closes a loop and is recorded in
    /// [`loop_edges`](Self::loop_edges).
    ///
    /// # Errors
    /// - [`GraphError::UnexpectedEdge`] if `edge` is not the pending edge.
    /// - [`GraphError::EdgeNotFound`] if `graph` does not contain `edge`.
    pub fn exec<N>(&mut self, graph: &Graph<N>, edge: Edge) -> Result<()> {
        if self.pending != Some(edge) {
            return Err(GraphError::UnexpectedEdge {
                expected: self.pending,
                found: edge,
            });
        }
        if !graph.contains_edge(edge) {
            return Err(GraphError::EdgeNotFound(edge));
        }

        self.frontier.pop();
        self.pending = None;

        let unexplored = self.unexplored_endpoints(edge);
        if unexplored.is_empty() {
            self.loop_edges.push(edge);
        }
        for vertex in unexplored {
            self.explored.try_visit(vertex);
            self.expand_from(graph, vertex);
        }

        if self.frontier.is_empty() {
            self.state = VisitorState::Done;
            #[cfg(feature = "tracing")]
            tracing::trace!(
                start = self.starting_vertex,
                explored = self.explored.len(),
                loops = self.loop_edges.len(),
                "visitor done"
            );
        }
        Ok(())
    }

    /// Endpoints of `edge` that have not been explored yet, ascending.
    pub fn unexplored_endpoints(&self, edge: Edge) -> Vec<Vertex> {
        let (lo, hi) = edge.end_points();
        let mut out = Vec::with_capacity(2);
        if !self.explored.is_visited(lo) {
            out.push(lo);
        }
        if hi != lo && !self.explored.is_visited(hi) {
            out.push(hi);
        }
        out
    }

    /// Returns `true` if `vertex` has been explored.
    pub fn is_explored(&self, vertex: Vertex) -> bool {
        self.explored.is_visited(vertex)
    }

    /// Explored vertices, ascending.
    pub fn explored_vertices(&self) -> Vec<Vertex> {
        let mut out: Vec<Vertex> = self.explored.iter().collect();
        out.sort_unstable();
        out
    }

    /// Number of explored vertices.
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    /// Edges consumed while both endpoints were already explored.
    ///
    /// Each such edge closes a cycle in the explored subgraph.
    pub fn loop_edges(&self) -> &[Edge] {
        &self.loop_edges
    }

    /// Returns the visitor to [`VisitorState::Uninitialized`], keeping the starting vertex.
    pub fn reset(&mut self) {
        self.explored.clear();
        self.frontier.clear();
        self.loop_edges.clear();
        self.pending = None;
        self.state = VisitorState::Uninitialized;
    }

    fn expand_from<N>(&mut self, graph: &Graph<N>, vertex: Vertex) {
        let explored = &self.explored;
        let edges = graph
            .neighbors(vertex)
            .filter(|&w| !explored.is_visited(w))
            .map(|w| Edge::new(vertex, w));
        self.frontier.extend(edges);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Graph {
        // 1 - 2 - 3 - 4
        Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)])
    }

    fn drain<P: TraversalPolicy>(visitor: &mut GraphVisitor<P>, graph: &Graph) -> Vec<Edge> {
        let mut order = Vec::new();
        while !visitor.frontier_empty() {
            let edge = visitor.next_edge().unwrap();
            visitor.exec(graph, edge).unwrap();
            order.push(edge);
        }
        order
    }

    #[test]
    fn test_uninitialized_visitor() {
        let mut v = BfVisitor::new(1);
        assert!(v.frontier_empty());
        assert_eq!(v.state(), VisitorState::Uninitialized);
        assert_eq!(v.next_edge(), Err(GraphError::EmptyFrontier));
        assert_eq!(
            v.exec(&path(), Edge::new(1, 2)),
            Err(GraphError::UnexpectedEdge {
                expected: None,
                found: Edge::new(1, 2)
            })
        );
    }

    #[test]
    fn test_initialize_unknown_vertex() {
        let mut v = DfVisitor::new(42);
        assert_eq!(v.initialize(&path()), Err(GraphError::VertexNotFound(42)));
    }

    #[test]
    fn test_initialize_twice() {
        let g = path();
        let mut v = BfVisitor::new(1);
        v.initialize(&g).unwrap();
        assert_eq!(v.initialize(&g), Err(GraphError::AlreadyInitialized));
        assert_eq!(v.set_starting_vertex(2), Err(GraphError::AlreadyInitialized));
    }

    #[test]
    fn test_initialize_seeds_frontier() {
        let g = path();
        let mut v = BfVisitor::new(2);
        v.initialize(&g).unwrap();
        assert_eq!(v.state(), VisitorState::Exploring);
        assert_eq!(v.frontier_len(), 2);
        assert!(v.is_explored(2));
        assert!(!v.is_explored(1));
    }

    #[test]
    fn test_exec_requires_matching_next_edge() {
        let g = path();
        let mut v = BfVisitor::new(2);
        v.initialize(&g).unwrap();
        let next = v.next_edge().unwrap();
        assert_eq!(next, Edge::new(1, 2));

        let err = v.exec(&g, Edge::new(2, 3)).unwrap_err();
        assert!(err.is_protocol_violation());

        v.exec(&g, next).unwrap();
        // The pending edge was consumed; repeating exec is out of protocol.
        assert!(v.exec(&g, next).is_err());
    }

    #[test]
    fn test_breadth_first_explores_by_distance() {
        // 0 - 1 - 3, 0 - 2 - 4
        let g: Graph = Graph::from_edges([
            Edge::new(0, 1),
            Edge::new(0, 2),
            Edge::new(1, 3),
            Edge::new(2, 4),
        ]);
        let mut v = BfVisitor::new(0);
        v.initialize(&g).unwrap();
        let order = drain(&mut v, &g);
        assert_eq!(
            order,
            vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 3), Edge::new(2, 4)]
        );
        assert_eq!(v.state(), VisitorState::Done);
    }

    #[test]
    fn test_depth_first_goes_deep() {
        let g: Graph = Graph::from_edges([
            Edge::new(0, 1),
            Edge::new(0, 2),
            Edge::new(1, 3),
            Edge::new(2, 4),
        ]);
        let mut v = DfVisitor::new(0);
        v.initialize(&g).unwrap();
        let order = drain(&mut v, &g);
        assert_eq!(
            order,
            vec![Edge::new(0, 1), Edge::new(1, 3), Edge::new(0, 2), Edge::new(2, 4)]
        );
    }

    #[test]
    fn test_cycle_records_loop_edge() {
        let g: Graph = Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)]);
        let mut v = BfVisitor::new(1);
        v.initialize(&g).unwrap();
        let order = drain(&mut v, &g);
        assert_eq!(order.len(), 3);
        assert_eq!(v.loop_edges(), &[Edge::new(2, 3)]);
        assert_eq!(v.explored_vertices(), vec![1, 2, 3]);
    }

    #[test]
    fn test_unexplored_endpoints() {
        let g = path();
        let mut v = DfVisitor::new(1);
        v.initialize(&g).unwrap();
        assert_eq!(v.unexplored_endpoints(Edge::new(1, 2)), vec![2]);
        assert_eq!(v.unexplored_endpoints(Edge::new(3, 4)), vec![3, 4]);
        assert!(v.unexplored_endpoints(Edge::new(1, 1)).is_empty());
    }

    #[test]
    fn test_isolated_start_is_done_immediately() {
        let nodes = [(9, crate::GraphNode::new())].into_iter().collect();
        let g = Graph::new([Edge::new(1, 2)], nodes);
        let mut v = BfVisitor::new(9);
        v.initialize(&g).unwrap();
        assert!(v.frontier_empty());
        assert_eq!(v.state(), VisitorState::Done);
        assert_eq!(v.explored_vertices(), vec![9]);
    }

    #[test]
    fn test_reset_allows_reuse() {
        let g = path();
        let mut v = BfVisitor::new(1);
        v.initialize(&g).unwrap();
        drain(&mut v, &g);
        v.reset();
        assert_eq!(v.state(), VisitorState::Uninitialized);
        assert_eq!(v.explored_count(), 0);
        v.set_starting_vertex(4).unwrap();
        v.initialize(&g).unwrap();
        drain(&mut v, &g);
        assert_eq!(v.explored_vertices(), vec![1, 2, 3, 4]);
    }
}
