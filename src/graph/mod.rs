//! Undirected graph topology: representation, traversal and reduction.
//!
//! Graph code is organized into categories:
//! - `basic`: Edges, adjacency, graphs and the algorithms over them
//! - `traversal`: Visitor state machine and frontier policies
//! - `specialized`: Derived representations such as chain-reduced graphs

pub mod basic;
pub mod specialized;
pub mod traversal;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{
    decouple_isolated_subgraphs, explore_graph, is_single_network, reduce_graph, single_network,
    Edge, EdgeContainer, Graph, GraphNode, Vertex,
};
pub use specialized::{ReducedEdge, ReducedGraph};
pub use traversal::{
    BfVisitor, BreadthFirst, DepthFirst, DfVisitor, GraphVisitor, TraversalPolicy, VisitorState,
};
