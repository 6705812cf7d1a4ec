//! The algorithms, grouped by what they compute.
//!
//! | Module | Operations |
//! |--------|------------|
//! | `traversal` | reachability, path existence, connected components |
//! | `structure` | back edges, DAG test, pre/post numbering, topological order, SCCs, bipartiteness |
//! | `shortest_path` | BFS, non-negative Dijkstra, path reconstruction |
//! | `spanning_tree` | Kruskal, lazy Prim |
//! | `edges` | canonical edge sets |

mod edges;
mod shortest_path;
mod spanning_tree;
mod structure;
mod traversal;

pub use edges::materialize_edges;
pub use shortest_path::{
    breadth_first_search, general_weighted_search, non_negative_weighted_search,
    non_negative_weighted_search_with_config, shortest_path, ShortestPaths,
};
pub use spanning_tree::{
    minimum_spanning_tree_kruskal, minimum_spanning_tree_prim,
    minimum_spanning_tree_prim_with_config, SpanningTree,
};
pub use structure::{
    dfs_pre_post_order_numbers, find_back_edge, is_bipartite, is_dag, strongly_connected_components,
    topological_ordering, DfsTimestamps, Timestamp,
};
pub use traversal::{connected_components, path_exists, reachable};
