//! Canonical edge sets derived from adjacency lists.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, VertexId};

/// Collects every edge of `graph` exactly once.
///
/// Directed graphs contribute each adjacency entry verbatim. Undirected graphs
/// see every edge from both endpoints, so entries are canonicalized (smaller
/// id as source) and keyed by their endpoint pair. When the two orientations
/// of an undirected pair carry different weights, the first one seen wins;
/// vertices are scanned in id order, so that is the weight listed under the
/// smaller endpoint. Weights are fetched with one batched lookup per vertex;
/// a missing weight fails the whole call.
///
/// The set enumerates in `(source, destination, weight)` order.
///
/// # Errors
/// [`GraphError::VertexNotFound`] for an adjacency entry outside the graph,
/// plus any weight lookup failure.
pub fn materialize_edges<G: Graph + ?Sized>(graph: &G) -> Result<BTreeSet<Edge>> {
    let directed = graph.is_directed();
    let n = graph.vertex_count();
    let mut edges: BTreeMap<(VertexId, VertexId), Edge> = BTreeMap::new();

    for u in graph.vertex_ids() {
        let row: Vec<(VertexId, Option<_>)> = if graph.is_weighted() {
            graph
                .weighted_neighbours(u)?
                .into_iter()
                .map(|(w, weight)| (w, Some(weight)))
                .collect()
        } else {
            graph.neighbours(u)?.iter().map(|&w| (w, None)).collect()
        };

        for (w, weight) in row {
            if w.get() == 0 || w.get() as usize > n {
                return Err(GraphError::VertexNotFound(w));
            }
            let edge = Edge::new(u, w, weight);
            let edge = if directed { edge } else { edge.canonical() };
            match edges.entry((edge.source, edge.destination)) {
                Entry::Vacant(slot) => {
                    slot.insert(edge);
                }
                Entry::Occupied(kept) if kept.get().weight != edge.weight => {
                    tracing::warn!(
                        from = %edge.source,
                        to = %edge.destination,
                        kept = ?kept.get().weight,
                        dropped = ?edge.weight,
                        "undirected edge has asymmetric weights"
                    );
                }
                Entry::Occupied(_) => {}
            }
        }
    }

    tracing::trace!(vertices = n, edges = edges.len(), "materialized edges");
    Ok(edges.into_values().collect())
}
