//! `DaryHeap`: a configurable-arity priority queue.
//!
//! Entries are `(key, payload)` pairs ordered by key only. The heap is either a
//! min-heap or a max-heap ([`HeapOrder`]) and stores its entries in one
//! contiguous `Vec`, children of node `i` at `d*i + 1 ..= d*i + d`.
//!
//! There is no decrease-key: callers that need it insert a fresh entry with
//! the better key and skip superseded entries when they surface.

use core::cmp::Ordering;
use core::fmt;
use core::mem;

use crate::error::{GraphError, Result};

/// Bytes in one cache line on the targets this crate tunes for.
pub const CACHE_LINE_BYTES: usize = 64;

/// The arity whose sibling group of `T`-sized entries fills one cache line.
///
/// Never less than 2.
pub const fn cache_line_arity<T>() -> usize {
    let size = mem::size_of::<T>();
    let fit = if size == 0 { CACHE_LINE_BYTES } else { CACHE_LINE_BYTES / size };
    if fit < 2 {
        2
    } else {
        fit
    }
}

/// Which end of the key order has the highest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// Smallest key pops first.
    Min,
    /// Largest key pops first.
    Max,
}

/// A d-ary heap of `(key, payload)` entries.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(\log_d n)\) | sift-up compares one parent per level |
/// | `extract_highest_priority` | \(O(d \log_d n)\) | scans `d` children per level |
/// | `from_entries` | \(O(n)\) | bottom-up heapify |
pub struct DaryHeap<K, P> {
    entries: Vec<(K, P)>,
    arity: usize,
    order: HeapOrder,
}

impl<K: Ord, P> DaryHeap<K, P> {
    /// Creates an empty heap.
    ///
    /// # Errors
    /// [`GraphError::InvalidArity`] if `arity < 2`.
    pub fn new(order: HeapOrder, arity: usize) -> Result<Self> {
        Self::with_capacity(order, arity, 0)
    }

    /// Creates an empty heap with room for `capacity` entries.
    ///
    /// # Errors
    /// [`GraphError::InvalidArity`] if `arity < 2`.
    pub fn with_capacity(order: HeapOrder, arity: usize, capacity: usize) -> Result<Self> {
        if arity < 2 {
            return Err(GraphError::InvalidArity(arity));
        }
        Ok(Self {
            entries: Vec::with_capacity(capacity),
            arity,
            order,
        })
    }

    /// Builds a heap from a sequence of entries in linear time.
    ///
    /// # Errors
    /// [`GraphError::InvalidArity`] if `arity < 2`.
    pub fn from_entries<I>(order: HeapOrder, arity: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, P)>,
    {
        let mut heap = Self::new(order, arity)?;
        heap.entries = entries.into_iter().collect();
        if heap.entries.len() > 1 {
            let last_parent = (heap.entries.len() - 2) / arity;
            for node in (0..=last_parent).rev() {
                heap.sift_down(node);
            }
        }
        Ok(heap)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Children per node.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Inserts an entry.
    pub fn insert(&mut self, key: K, payload: P) {
        self.entries.push((key, payload));
        self.sift_up(self.entries.len() - 1);
    }

    /// The entry that would pop next.
    pub fn peek(&self) -> Option<(&K, &P)> {
        self.entries.first().map(|(k, p)| (k, p))
    }

    /// Removes and returns the highest-priority entry.
    pub fn extract_highest_priority(&mut self) -> Option<(K, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let top = self.entries.swap_remove(0);
        if self.entries.len() > 1 {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Drops every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // `true` if entry `a` must sit above entry `b`.
    #[inline(always)]
    fn outranks(&self, a: usize, b: usize) -> bool {
        let ord = self.entries[a].0.cmp(&self.entries[b].0);
        match self.order {
            HeapOrder::Min => ord == Ordering::Less,
            HeapOrder::Max => ord == Ordering::Greater,
        }
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / self.arity;
            if self.outranks(node, parent) {
                self.entries.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.entries.len();
        loop {
            let first = self.arity * node + 1;
            if first >= len {
                break;
            }
            let last = (first + self.arity).min(len);
            let mut best = first;
            for child in first + 1..last {
                if self.outranks(child, best) {
                    best = child;
                }
            }
            if self.outranks(best, node) {
                self.entries.swap(node, best);
                node = best;
            } else {
                break;
            }
        }
    }
}

impl<K, P> fmt::Debug for DaryHeap<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaryHeap")
            .field("len", &self.entries.len())
            .field("arity", &self.arity)
            .field("order", &self.order)
            .finish()
    }
}
