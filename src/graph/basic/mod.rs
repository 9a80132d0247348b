//! Basic graph building blocks.
//!
//! This module contains the fundamental undirected representation (edges,
//! adjacency index, payload-carrying graph) and the algorithms built on it.

pub mod algorithms;
pub mod edge;
pub mod edge_container;
pub mod graph;
pub mod node;

pub use algorithms::{
    decouple_isolated_subgraphs, explore_graph, is_single_network, reduce_graph, single_network,
};
pub use edge::{Edge, Vertex};
pub use edge_container::EdgeContainer;
pub use graph::Graph;
pub use node::GraphNode;
