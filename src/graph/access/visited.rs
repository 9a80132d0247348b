//! Visited-set bookkeeping for graph traversals.
//!
//! The same structure tracks explored vertices inside a visitor and consumed
//! edges inside the chain reduction, keeping the "seen before?" logic in one
//! place.

use std::collections::HashSet;
use std::hash::Hash;

/// A growable set of keys that have been visited.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet<K> {
    seen: HashSet<K>,
}

impl<K> Default for VisitedSet<K> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> VisitedSet<K> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    pub(crate) fn clear(&mut self) {
        self.seen.clear();
    }

    /// Returns `true` iff this call observed `key` as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, key: K) -> bool {
        self.seen.insert(key)
    }

    #[inline]
    pub(crate) fn is_visited(&self, key: K) -> bool {
        self.seen.contains(&key)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.seen.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_visit_reports_first_visit_only() {
        let mut set = VisitedSet::new();
        assert!(set.try_visit(3_i64));
        assert!(!set.try_visit(3));
        assert!(set.is_visited(3));
        assert!(!set.is_visited(4));
        assert_eq!(set.len(), 1);

        set.clear();
        assert_eq!(set.len(), 0);
        assert!(!set.is_visited(3));
    }
}
