//! Error type shared by every algorithm and collaborator in the crate.

use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Failures an algorithm can report to its caller.
///
/// Logic errors inside the crate (for instance a broken shortest-path parent
/// chain) are not represented here; those panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id outside `1..=vertex_count` was looked up.
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    /// The algorithm only accepts undirected graphs.
    #[error("{algorithm} requires an undirected graph, but the graph is directed")]
    RequiresUndirected {
        /// Name of the rejecting algorithm.
        algorithm: &'static str,
    },

    /// The algorithm only accepts weighted graphs.
    #[error("{algorithm} requires a weighted graph, but the graph is unweighted")]
    RequiresWeighted {
        /// Name of the rejecting algorithm.
        algorithm: &'static str,
    },

    /// An edge weight is below zero where only non-negative weights are valid.
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        /// Edge source.
        from: VertexId,
        /// Edge destination.
        to: VertexId,
        /// The offending weight.
        weight: Weight,
    },

    /// No weight is recorded for an edge the adjacency lists contain.
    #[error("no weight recorded for edge {from} -> {to}")]
    MissingWeight {
        /// Edge source.
        from: VertexId,
        /// Edge destination.
        to: VertexId,
    },

    /// A priority queue was configured with fewer than two children per node.
    #[error("heap arity must be at least 2, got {0}")]
    InvalidArity(usize),

    /// A disjoint-set element outside `1..=size` was referenced.
    #[error("disjoint-set element {id} out of range for size {size}")]
    SubsetOutOfRange {
        /// Offending element.
        id: usize,
        /// Number of elements in the set.
        size: usize,
    },

    /// The requested operation exists in the API but is not provided.
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    /// Configuration could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
