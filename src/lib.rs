//! # `topograph` - Undirected Graph Topology Engine
//!
//! Labeled undirected graphs with stepwise traversal, connectivity tests,
//! component decoupling and chain reduction.
//!
//! ## Key Features
//!
//! - **Canonical edges**: `Edge::new(a, b) == Edge::new(b, a)`, usable as keys
//!   in hashed and ordered containers
//! - **Pluggable traversal**: one visitor state machine, breadth-first or
//!   depth-first frontier chosen by a type parameter
//! - **Connectivity**: single-network test and split into independent components
//! - **Chain reduction**: collapse runs of degree-2 vertices into single edges
//!   while keeping every original path for expansion
//!
//! ## Architecture
//!
//! Graphs are immutable values once built. Algorithms take `&Graph<N>` and
//! construct fresh visitors, so concurrent read-only use of one graph is safe.
//!
//! ### Core Abstractions
//!
//! 1. **Topology** (`Edge`, `EdgeContainer`, `Graph<N>`):
//!    - Integer vertex ids, symmetric adjacency sets
//!    - Opaque per-vertex payload `N` (defaults to [`GraphNode`])
//!    - Explicit bookkeeping of isolated vertices
//!
//! 2. **Traversal** (`GraphVisitor<P>`, `BreadthFirst`, `DepthFirst`):
//!    - `initialize` → (`next_edge` → `exec`)* protocol
//!    - Protocol violations surface as [`GraphError`] values
//!
//! 3. **Reduction** (`ReducedGraph<N>`, `ReducedEdge`):
//!    - Contracted topology over tips and junctions
//!    - Parallel chains and loops preserved as expansions
//!
//! ## Example
//!
//! ```rust
//! use topograph::{reduce_graph, Edge, Graph};
//!
//! // 1 - 2 - 3 - 4 - 5 - 9
//! //     |   |   |
//! //     6 - 7   8
//! let g: Graph = Graph::from_edges(
//!     [(1, 2), (2, 3), (3, 4), (4, 5), (5, 9), (2, 6), (6, 7), (7, 3), (4, 8)]
//!         .map(|(a, b)| Edge::new(a, b)),
//! );
//!
//! let reduced = reduce_graph(&g)?;
//! assert_eq!(reduced.vertices(), vec![1, 2, 3, 4, 8, 9]);
//! assert_eq!(reduced.edge_multiplicity(Edge::new(2, 3)), 2);
//! assert_eq!(
//!     reduced.expand_edge(Edge::new(4, 9))?,
//!     vec![vec![Edge::new(4, 5), Edge::new(5, 9)]]
//! );
//! # Ok::<(), topograph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    decouple_isolated_subgraphs, explore_graph, is_single_network, reduce_graph, single_network,
    BfVisitor, BreadthFirst, DepthFirst, DfVisitor, Edge, EdgeContainer, Graph, GraphNode,
    GraphVisitor, ReducedEdge, ReducedGraph, TraversalPolicy, Vertex, VisitorState,
};

// Graphs are shared read-only across threads; keep them `Send + Sync`.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph>();
    assert_send_sync::<ReducedGraph>();
    assert_send_sync::<EdgeContainer>();
};
