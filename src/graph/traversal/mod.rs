//! Stepwise traversal: visitor state machine and frontier policies.
//!
//! [`GraphVisitor`] owns the explored set and the call protocol; a
//! [`TraversalPolicy`] owns only the frontier container and decides which
//! pending edge comes next.

mod policy;
mod visitor;

pub use policy::{BreadthFirst, DepthFirst, TraversalPolicy};
pub use visitor::{BfVisitor, DfVisitor, GraphVisitor, VisitorState};
