//! Tuning knobs for the heap-driven algorithms.
//!
//! Nothing here changes results, only how the priority queues are laid out.
//! Heap arity defaults to the value that packs one sibling group into one
//! cache line for the algorithm's entry type.

use serde::{Deserialize, Serialize};

use crate::collections::d_ary_heap::cache_line_arity;
use crate::error::{GraphError, Result};
use crate::graph::{Distance, VertexId, Weight};

// Entry layouts the heaps actually store. Vertex handles have the same size
// as `VertexId`.
type ShortestPathEntry = ((Distance, VertexId), ());
type SpanningTreeEntry = ((Weight, VertexId, VertexId), ());

/// Layout of one priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapConfig {
    /// Children per heap node. Must be at least 2.
    pub arity: usize,
    /// Initial capacity; `None` lets the algorithm size it from the graph.
    #[serde(default)]
    pub capacity_hint: Option<usize>,
}

impl HeapConfig {
    /// A heap whose sibling groups of `T` fill one cache line.
    pub const fn cache_line<T>() -> Self {
        Self {
            arity: cache_line_arity::<T>(),
            capacity_hint: None,
        }
    }

    /// Capacity to reserve, falling back to `default` when no hint is set.
    pub fn capacity_or(&self, default: usize) -> usize {
        self.capacity_hint.unwrap_or(default)
    }

    fn validate(&self) -> Result<()> {
        if self.arity < 2 {
            return Err(GraphError::InvalidArity(self.arity));
        }
        Ok(())
    }
}

/// Configuration for every algorithm that takes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmConfig {
    /// Heap used by the non-negative weighted shortest-path search.
    pub shortest_path_heap: HeapConfig,
    /// Heap used by Prim's spanning-tree growth.
    pub spanning_tree_heap: HeapConfig,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            shortest_path_heap: HeapConfig::cache_line::<ShortestPathEntry>(),
            spanning_tree_heap: HeapConfig::cache_line::<SpanningTreeEntry>(),
        }
    }
}

impl AlgorithmConfig {
    /// Decodes a configuration from JSON. Missing sections keep their defaults.
    ///
    /// # Errors
    /// [`GraphError::Config`] for malformed JSON, [`GraphError::InvalidArity`]
    /// for an arity below 2.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Encodes this configuration as JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks every heap layout.
    pub fn validate(&self) -> Result<()> {
        self.shortest_path_heap.validate()?;
        self.spanning_tree_heap.validate()
    }
}
