//! Specialized graph representations.
//!
//! This module contains graph structures derived from a plain [`Graph`](crate::Graph)
//! for specific algorithmic workloads.

pub mod reduced_graph;

pub use reduced_graph::{ReducedEdge, ReducedGraph};
