//! # `brandgraph` - Graph Algorithms over Read-Only Graphs
//!
//! Reachability, connectivity, DAG analysis, shortest paths and minimum
//! spanning trees for graphs whose storage belongs to the caller.
//!
//! ## Architecture
//!
//! Algorithms consume any implementation of the read-only [`Graph`] trait.
//! Every call opens a branded vertex scope sized from the graph: raw
//! [`VertexId`]s are validated once on entry into the scope, and the branded
//! handles that come out index the call's scratch arrays (visited bits,
//! distances, parents, colours) without further bounds checks. The brand is
//! a fresh invariant lifetime per call, so a handle can never escape into a
//! different call's scratch state.
//!
//! ### Failure Discipline
//!
//! - Recoverable conditions (unknown vertex, wrong graph kind, negative or
//!   missing weight, bad configuration) are [`GraphError`] values threaded
//!   through `?`.
//! - Two internal-consistency faults panic: a vertex left without
//!   timestamps after a complete depth-first numbering, and a broken parent
//!   chain during path reconstruction.
//!
//! ### Performance Characteristics
//!
//! | Operation | Time | Notes |
//! |-----------|------|-------|
//! | DFS-based queries | O(V + E) | explicit stack, no recursion |
//! | Strongly connected components | O(V + E) | Kosaraju over the reversed graph |
//! | BFS | O(V + E) | |
//! | Non-negative weighted search | O(E log V) | d-ary heap, lazy deletion |
//! | Kruskal / Prim | O(E log E) | |
//!
//! ## Example
//!
//! ```
//! use brandgraph::graph::{AdjacencyGraph, VertexId};
//! use brandgraph::{non_negative_weighted_search, shortest_path};
//!
//! let g = AdjacencyGraph::weighted(true, 3, &[(1, 2, 4), (2, 3, 1), (1, 3, 9)]);
//! let paths = non_negative_weighted_search(&g, VertexId::new(1))?;
//! assert_eq!(paths.distance(VertexId::new(3)), Some(5));
//! assert_eq!(
//!     shortest_path(&paths, VertexId::new(3)),
//!     Some(vec![VertexId::new(1), VertexId::new(2), VertexId::new(3)])
//! );
//! # Ok::<(), brandgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod brand;
pub mod collections;
pub mod config;
pub mod error;
pub mod graph;

pub use config::{AlgorithmConfig, HeapConfig};
pub use error::{GraphError, Result};
pub use graph::algorithms::{
    breadth_first_search, connected_components, dfs_pre_post_order_numbers, find_back_edge,
    general_weighted_search, is_bipartite, is_dag, materialize_edges, minimum_spanning_tree_kruskal,
    minimum_spanning_tree_prim, minimum_spanning_tree_prim_with_config, non_negative_weighted_search,
    non_negative_weighted_search_with_config, path_exists, reachable, shortest_path,
    strongly_connected_components, topological_ordering, DfsTimestamps, ShortestPaths, SpanningTree,
};
pub use graph::{reverse_graph, AdjacencyGraph, Edge, Graph, VertexId, Weight};

// Compile-time assertions for handle layouts.
const _: () = {
    use core::mem;

    // Ids and handles are plain 32-bit values.
    assert!(mem::size_of::<VertexId>() == 4);
    assert!(mem::size_of::<brand::VertexIndex<'static>>() == mem::size_of::<u32>());

    // The niche keeps optional handles (parent arrays) the same size.
    assert!(mem::size_of::<Option<brand::VertexIndex<'static>>>() == mem::size_of::<u32>());

    // Heap entries fit the cache-line arity computation used by the defaults.
    assert!(mem::size_of::<((graph::Distance, brand::VertexIndex<'static>), ())>() == 16);
    assert!(collections::cache_line_arity::<((graph::Distance, VertexId), ())>() == 4);
};
