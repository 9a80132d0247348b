//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so traversals and reductions can
//! share bookkeeping primitives without exposing them as public API.

pub(crate) mod visited;
