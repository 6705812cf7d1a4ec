//! Minimum spanning trees of undirected weighted graphs.
//!
//! ### Performance Characteristics
//!
//! | Builder | Time | Extra space |
//! |---------|------|-------------|
//! | Kruskal | O(E log E) | O(E + V) |
//! | Prim (lazy) | O(E log E) | O(E + V) |

use std::collections::BTreeSet;

use crate::brand::{VertexIndex, VertexSpace};
use crate::collections::{DaryHeap, DisjointSet, HeapOrder};
use crate::config::AlgorithmConfig;
use crate::error::{GraphError, Result};
use crate::graph::access::VisitedSet;
use crate::graph::algorithms::materialize_edges;
use crate::graph::{require_undirected_weighted, Edge, Graph, Weight};

/// The accepted edges of a spanning tree, in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    fn accept(&mut self, edge: Edge, weight: Weight) {
        tracing::trace!(from = %edge.source, to = %edge.destination, weight, "edge accepted");
        self.edges.push(edge);
        self.total_weight = self.total_weight.saturating_add(weight);
    }

    /// Edges in the order they were accepted. Each is canonical (smaller id first).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of the edge weights.
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of distinct vertices touched by the edges.
    ///
    /// A tree over a single vertex has no edges and covers nothing.
    pub fn vertices_covered(&self) -> usize {
        self.edges
            .iter()
            .flat_map(|e| [e.source, e.destination])
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Consumes the tree, returning its edges.
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Kruskal's algorithm: sort every edge by weight, then accept it iff it
/// joins two different subsets of a [`DisjointSet`].
///
/// Equal weights keep the order of the canonical edge set. Disconnected
/// graphs yield a spanning forest.
///
/// # Errors
/// [`GraphError::RequiresUndirected`] or [`GraphError::RequiresWeighted`]
/// for unsuitable input, plus any weight lookup failure.
pub fn minimum_spanning_tree_kruskal<G: Graph + ?Sized>(graph: &G) -> Result<SpanningTree> {
    require_undirected_weighted(graph, "minimum spanning tree (Kruskal)")?;

    let mut edges: Vec<Edge> = materialize_edges(graph)?.into_iter().collect();
    edges.sort_by_key(|e| e.weight);

    let mut subsets = DisjointSet::make(graph.vertex_count());
    let mut tree = SpanningTree::default();
    for edge in edges {
        let weight = edge.weight.ok_or(GraphError::MissingWeight {
            from: edge.source,
            to: edge.destination,
        })?;
        let (a, b) = (edge.source.get() as usize, edge.destination.get() as usize);
        if subsets.in_same_subset(a, b)? {
            continue;
        }
        subsets.union(a, b)?;
        tree.accept(edge, weight);
    }

    tracing::debug!(edges = tree.len(), weight = tree.total_weight, "kruskal");
    Ok(tree)
}

/// Prim's algorithm with the default [`AlgorithmConfig`].
pub fn minimum_spanning_tree_prim<G: Graph + ?Sized>(graph: &G) -> Result<SpanningTree> {
    minimum_spanning_tree_prim_with_config(graph, &AlgorithmConfig::default())
}

/// Lazy Prim growth from vertex 1.
///
/// Adding a vertex pushes its edges to vertices not yet in the tree onto a
/// min-heap keyed by `(weight, from, to)`. Popped edges whose far end joined
/// the tree in the meantime are dropped. Only vertex 1's component is
/// spanned; an empty graph gives an empty tree.
///
/// # Errors
/// As [`minimum_spanning_tree_kruskal`], plus [`GraphError::InvalidArity`]
/// from the heap configuration.
pub fn minimum_spanning_tree_prim_with_config<G: Graph + ?Sized>(
    graph: &G,
    config: &AlgorithmConfig,
) -> Result<SpanningTree> {
    require_undirected_weighted(graph, "minimum spanning tree (Prim)")?;

    let tree = VertexSpace::scope(graph.vertex_count(), |space| {
        let mut tree = SpanningTree::default();
        let Some(root) = space.indices().next() else {
            return Ok(tree);
        };

        let heap_config = &config.spanning_tree_heap;
        let mut heap = DaryHeap::with_capacity(
            HeapOrder::Min,
            heap_config.arity,
            heap_config.capacity_or(graph.edge_count()),
        )?;
        let mut added = VisitedSet::new(&space);
        grow(graph, &space, root, &mut added, &mut heap)?;

        while let Some(((weight, from, to), ())) = heap.extract_highest_priority() {
            if added.is_visited(to) {
                tracing::trace!(from = %from.id(), to = %to.id(), "discarding stale edge");
                continue;
            }
            tree.accept(Edge::new(from.id(), to.id(), Some(weight)).canonical(), weight);
            grow(graph, &space, to, &mut added, &mut heap)?;
        }

        tracing::debug!(spanned = added.count(), vertices = space.len(), "prim");
        Ok::<_, GraphError>(tree)
    })?;

    Ok(tree)
}

type PrimHeap<'brand> = DaryHeap<(Weight, VertexIndex<'brand>, VertexIndex<'brand>), ()>;

// Adds `v` to the tree and queues its edges to vertices still outside it.
fn grow<'brand, G: Graph + ?Sized>(
    graph: &G,
    space: &VertexSpace<'brand>,
    v: VertexIndex<'brand>,
    added: &mut VisitedSet<'brand>,
    heap: &mut PrimHeap<'brand>,
) -> Result<()> {
    added.try_visit(v);
    for (raw, weight) in graph.weighted_neighbours(v.id())? {
        let w = space.index(raw)?;
        if !added.is_visited(w) {
            heap.insert((weight, v, w), ());
        }
    }
    Ok(())
}
