//! Frontier orderings for [`GraphVisitor`](super::GraphVisitor).

use std::collections::VecDeque;

use crate::graph::Edge;

/// The ordering policy of a visitor's pending-edge frontier.
///
/// A policy owns nothing but its frontier container; explored-vertex
/// bookkeeping and the `initialize`/`next_edge`/`exec` protocol live in
/// [`GraphVisitor`](super::GraphVisitor).
pub trait TraversalPolicy: Default {
    /// Adds the edges discovered from one vertex, given in enumeration order.
    fn extend<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = Edge>;

    /// The edge the next `pop` will remove.
    fn peek(&self) -> Option<Edge>;

    /// Removes and returns the next edge.
    fn pop(&mut self) -> Option<Edge>;

    /// Number of pending edges.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every pending edge.
    fn clear(&mut self);
}

/// FIFO frontier: vertices are discovered in non-decreasing distance from the start.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirst {
    queue: VecDeque<Edge>,
}

impl TraversalPolicy for BreadthFirst {
    fn extend<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = Edge>,
    {
        self.queue.extend(edges);
    }

    #[inline]
    fn peek(&self) -> Option<Edge> {
        self.queue.front().copied()
    }

    #[inline]
    fn pop(&mut self) -> Option<Edge> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// LIFO frontier: the most recently discovered vertex is expanded first.
#[derive(Debug, Clone, Default)]
pub struct DepthFirst {
    stack: Vec<Edge>,
}

impl TraversalPolicy for DepthFirst {
    fn extend<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = Edge>,
    {
        // Reverse-push so the first edge in enumeration order is popped first.
        let start = self.stack.len();
        self.stack.extend(edges);
        self.stack[start..].reverse();
    }

    #[inline]
    fn peek(&self) -> Option<Edge> {
        self.stack.last().copied()
    }

    #[inline]
    fn pop(&mut self) -> Option<Edge> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges() -> [Edge; 3] {
        [Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3)]
    }

    #[test]
    fn test_breadth_first_is_fifo() {
        let mut p = BreadthFirst::default();
        p.extend(edges());
        p.extend([Edge::new(1, 4)]);
        assert_eq!(p.peek(), Some(Edge::new(0, 1)));
        let order: Vec<_> = std::iter::from_fn(|| p.pop()).collect();
        assert_eq!(
            order,
            vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3), Edge::new(1, 4)]
        );
        assert!(p.is_empty());
    }

    #[test]
    fn test_depth_first_is_lifo_per_batch() {
        let mut p = DepthFirst::default();
        p.extend(edges());
        assert_eq!(p.pop(), Some(Edge::new(0, 1)));
        p.extend([Edge::new(1, 4), Edge::new(1, 5)]);
        let order: Vec<_> = std::iter::from_fn(|| p.pop()).collect();
        assert_eq!(
            order,
            vec![Edge::new(1, 4), Edge::new(1, 5), Edge::new(0, 2), Edge::new(0, 3)]
        );
    }

    #[test]
    fn test_peek_matches_pop() {
        let mut p = DepthFirst::default();
        p.extend(edges());
        assert_eq!(p.len(), 3);
        while let Some(e) = p.peek() {
            assert_eq!(p.pop(), Some(e));
        }
        p.extend(edges());
        p.clear();
        assert!(p.is_empty());
    }
}
