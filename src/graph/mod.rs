//! Graph model and algorithms.
//!
//! Callers own graph storage and expose it through the read-only [`Graph`]
//! trait. [`AdjacencyGraph`] is the bundled implementation.

mod adjacency;
mod model;

pub(crate) mod access;
pub mod algorithms;

pub use adjacency::{reverse_graph, AdjacencyGraph};
pub(crate) use model::require_undirected_weighted;
pub use model::{Distance, Edge, Graph, VertexId, VertexIds, Weight};
