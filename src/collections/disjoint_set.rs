//! Disjoint Set (Union-Find) over 1-based element ids.
//!
//! # Performance
//!
//! - Parent pointers live in `Cell<usize>` so `find` can compress paths
//!   through a shared reference.
//! - Path compression and union-by-rank give near-constant amortized time.

use std::cell::Cell;

use crate::error::{GraphError, Result};

/// A partition of `1..=size` into disjoint subsets.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// `parent[i]` is the parent of element `i + 1`, stored 0-based.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `size` singleton subsets `{1}, {2}, ..., {size}`.
    pub fn make(size: usize) -> Self {
        Self {
            parent: (0..size).map(Cell::new).collect(),
            rank: vec![0; size],
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn slot(&self, id: usize) -> Result<usize> {
        if id == 0 || id > self.parent.len() {
            return Err(GraphError::SubsetOutOfRange {
                id,
                size: self.parent.len(),
            });
        }
        Ok(id - 1)
    }

    // Two passes: find the root, then point every node on the path at it.
    fn root(&self, slot: usize) -> usize {
        let mut root = slot;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = slot;
        while curr != root {
            let next = self.parent[curr].get();
            self.parent[curr].set(root);
            curr = next;
        }
        root
    }

    /// Returns the representative of the subset holding `id`.
    pub fn find(&self, id: usize) -> Result<usize> {
        Ok(self.root(self.slot(id)?) + 1)
    }

    /// Returns `true` if `a` and `b` share a subset.
    pub fn in_same_subset(&self, a: usize, b: usize) -> Result<bool> {
        let (a, b) = (self.slot(a)?, self.slot(b)?);
        Ok(self.root(a) == self.root(b))
    }

    /// Merges the subsets holding `a` and `b`.
    ///
    /// Returns `true` if they were in different subsets.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let root_a = self.root(self.slot(a)?);
        let root_b = self.root(self.slot(b)?);
        if root_a == root_b {
            return Ok(false);
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            core::cmp::Ordering::Less => self.parent[root_a].set(root_b),
            core::cmp::Ordering::Greater => self.parent[root_b].set(root_a),
            core::cmp::Ordering::Equal => {
                self.parent[root_b].set(root_a);
                self.rank[root_a] = self.rank[root_a].saturating_add(1);
            }
        }
        Ok(true)
    }
}
