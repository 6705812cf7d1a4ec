//! Priority queue and union-find used by the weighted algorithms.

pub mod d_ary_heap;
pub mod disjoint_set;

pub use d_ary_heap::{cache_line_arity, DaryHeap, HeapOrder};
pub use disjoint_set::DisjointSet;
