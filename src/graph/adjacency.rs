//! An immutable adjacency-list graph.
//!
//! This is the crate's concrete implementation of the [`Graph`] ADT. It is
//! built once from adjacency lists or an edge list and never mutated; the only
//! derived-graph operation, [`reverse_graph`], allocates a new value.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `neighbours` | \(O(1)\) | borrows the stored list |
//! | `weight` | \(O(1)\) expected | hash lookup on `(from, to)` |
//! | `weighted_neighbours` | \(O(\text{degree})\) | one pass over one list |
//! | `reverse_graph` | \(O(n + m)\) | rebuilds every list |

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::model::{Graph, VertexId, Weight};

/// A read-only adjacency-list graph with optional edge weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    directed: bool,
    edge_count: usize,
    // `adjacency[id - 1]` holds the neighbours of vertex `id`.
    adjacency: Vec<Vec<VertexId>>,
    weights: Option<HashMap<(VertexId, VertexId), Weight>>,
}

impl AdjacencyGraph {
    /// Builds an unweighted graph from raw adjacency lists.
    ///
    /// `lists[i]` holds the neighbours of vertex `i + 1`. Entries are not
    /// validated: an out-of-range neighbour surfaces as
    /// [`GraphError::VertexNotFound`] when an algorithm follows it. For
    /// undirected graphs each edge is expected in both endpoint lists, except
    /// a self-loop, which is listed once; each counts as one edge.
    pub fn from_adjacency(directed: bool, lists: Vec<Vec<u32>>) -> Self {
        let adjacency: Vec<Vec<VertexId>> = lists
            .into_iter()
            .map(|list| list.into_iter().map(VertexId::new).collect())
            .collect();
        let entries: usize = adjacency.iter().map(Vec::len).sum();
        let loops = adjacency
            .iter()
            .zip(1u32..)
            .map(|(list, id)| list.iter().filter(|w| w.get() == id).count())
            .sum::<usize>();
        Self {
            directed,
            edge_count: if directed { entries } else { (entries - loops) / 2 + loops },
            adjacency,
            weights: None,
        }
    }

    /// Like [`from_adjacency`](Self::from_adjacency), with a weight table keyed
    /// by `(from, to)`.
    ///
    /// The table is taken as given; adjacency entries without a weight fail
    /// with [`GraphError::MissingWeight`] when looked up.
    pub fn from_weighted_adjacency(
        directed: bool,
        lists: Vec<Vec<u32>>,
        weights: impl IntoIterator<Item = ((u32, u32), Weight)>,
    ) -> Self {
        let mut graph = Self::from_adjacency(directed, lists);
        graph.weights = Some(
            weights
                .into_iter()
                .map(|((from, to), w)| ((VertexId::new(from), VertexId::new(to)), w))
                .collect(),
        );
        graph
    }

    /// Builds an unweighted graph over vertices `1..=vertex_count` from an edge list.
    ///
    /// Undirected edges are recorded in both endpoint lists. Neighbour order
    /// follows edge order.
    ///
    /// # Panics
    /// Panics if an endpoint is outside `1..=vertex_count`.
    pub fn unweighted(directed: bool, vertex_count: usize, edges: &[(u32, u32)]) -> Self {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(from, to) in edges {
            push_edge(&mut adjacency, directed, from, to);
        }
        Self {
            directed,
            edge_count: edges.len(),
            adjacency,
            weights: None,
        }
    }

    /// Builds a weighted graph over vertices `1..=vertex_count` from an edge list.
    ///
    /// Undirected edges record their weight under both orientations.
    ///
    /// # Panics
    /// Panics if an endpoint is outside `1..=vertex_count`.
    pub fn weighted(directed: bool, vertex_count: usize, edges: &[(u32, u32, Weight)]) -> Self {
        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut weights = HashMap::with_capacity(edges.len() * 2);
        for &(from, to, w) in edges {
            push_edge(&mut adjacency, directed, from, to);
            weights.insert((VertexId::new(from), VertexId::new(to)), w);
            if !directed {
                weights.insert((VertexId::new(to), VertexId::new(from)), w);
            }
        }
        Self {
            directed,
            edge_count: edges.len(),
            adjacency,
            weights: Some(weights),
        }
    }

    #[inline]
    fn list(&self, v: VertexId) -> Result<&Vec<VertexId>> {
        (v.get() as usize)
            .checked_sub(1)
            .and_then(|slot| self.adjacency.get(slot))
            .ok_or(GraphError::VertexNotFound(v))
    }
}

fn push_edge(adjacency: &mut [Vec<VertexId>], directed: bool, from: u32, to: u32) {
    let n = adjacency.len();
    assert!(
        (1..=n).contains(&(from as usize)) && (1..=n).contains(&(to as usize)),
        "edge {from}->{to} out of bounds for n={n}"
    );
    adjacency[from as usize - 1].push(VertexId::new(to));
    if !directed && from != to {
        adjacency[to as usize - 1].push(VertexId::new(from));
    }
}

impl Graph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    fn neighbours(&self, v: VertexId) -> Result<&[VertexId]> {
        self.list(v).map(Vec::as_slice)
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        self.list(from)?;
        self.weights
            .as_ref()
            .and_then(|table| table.get(&(from, to)).copied())
            .ok_or(GraphError::MissingWeight { from, to })
    }

    fn weighted_neighbours(&self, v: VertexId) -> Result<Vec<(VertexId, Weight)>> {
        let list = self.list(v)?;
        let table = self
            .weights
            .as_ref()
            .ok_or(GraphError::RequiresWeighted {
                algorithm: "weighted neighbour lookup",
            })?;
        list.iter()
            .map(|&w| {
                table
                    .get(&(v, w))
                    .map(|&weight| (w, weight))
                    .ok_or(GraphError::MissingWeight { from: v, to: w })
            })
            .collect()
    }
}

/// Returns `graph` with every edge flipped.
///
/// Weights travel with their edge. Undirected graphs are returned unchanged.
/// Neighbour entries that do not name a vertex of `graph` are skipped: a
/// reversed edge has nowhere to live.
pub fn reverse_graph<G: Graph + ?Sized>(graph: &G) -> Result<AdjacencyGraph> {
    let n = graph.vertex_count();
    let weighted = graph.is_weighted();
    let mut adjacency: Vec<Vec<VertexId>> = vec![Vec::new(); n];
    let mut weights = weighted.then(HashMap::new);
    let mut edge_count = 0usize;

    for u in graph.vertex_ids() {
        if graph.is_directed() {
            for &w in graph.neighbours(u)? {
                let Some(slot) = (w.get() as usize).checked_sub(1).filter(|&s| s < n) else {
                    tracing::warn!(from = %u, to = %w, "skipping out-of-range neighbour while reversing");
                    continue;
                };
                adjacency[slot].push(u);
                edge_count += 1;
                if let Some(table) = weights.as_mut() {
                    table.insert((w, u), graph.weight(u, w)?);
                }
            }
        } else {
            let slot = u.get() as usize - 1;
            adjacency[slot] = graph.neighbours(u)?.to_vec();
            if let Some(table) = weights.as_mut() {
                for (w, weight) in graph.weighted_neighbours(u)? {
                    table.insert((u, w), weight);
                }
            }
        }
    }

    if !graph.is_directed() {
        edge_count = graph.edge_count();
    }

    tracing::debug!(vertices = n, edges = edge_count, directed = graph.is_directed(), "reversed graph");
    Ok(AdjacencyGraph {
        directed: graph.is_directed(),
        edge_count,
        adjacency,
        weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn test_undirected_edges_recorded_twice() {
        let g = AdjacencyGraph::weighted(false, 3, &[(1, 2, 4), (2, 3, 9)]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbours(VertexId::new(2)).unwrap(), ids(&[1, 3]).as_slice());
        assert_eq!(g.weight(VertexId::new(2), VertexId::new(1)), Ok(4));
        assert_eq!(g.weight(VertexId::new(3), VertexId::new(2)), Ok(9));
    }

    #[test]
    fn test_lookup_rejects_reserved_and_out_of_range() {
        let g = AdjacencyGraph::unweighted(true, 2, &[(1, 2)]);
        assert_eq!(
            g.neighbours(VertexId::new(0)),
            Err(GraphError::VertexNotFound(VertexId::new(0)))
        );
        assert_eq!(
            g.neighbours(VertexId::new(3)),
            Err(GraphError::VertexNotFound(VertexId::new(3)))
        );
    }

    #[test]
    fn test_weighted_neighbours_batch() {
        let g = AdjacencyGraph::weighted(true, 3, &[(1, 3, 5), (1, 2, -1)]);
        assert_eq!(
            g.weighted_neighbours(VertexId::new(1)).unwrap(),
            vec![(VertexId::new(3), 5), (VertexId::new(2), -1)]
        );
    }

    #[test]
    fn test_missing_weight_is_an_error() {
        let g = AdjacencyGraph::from_weighted_adjacency(true, vec![vec![2], vec![]], []);
        assert_eq!(
            g.weighted_neighbours(VertexId::new(1)),
            Err(GraphError::MissingWeight {
                from: VertexId::new(1),
                to: VertexId::new(2)
            })
        );
    }

    #[test]
    fn test_reverse_directed_carries_weights() {
        let g = AdjacencyGraph::weighted(true, 3, &[(1, 2, 7), (2, 3, 8), (1, 3, 1)]);
        let r = reverse_graph(&g).unwrap();
        assert_eq!(r.edge_count(), 3);
        assert_eq!(r.neighbours(VertexId::new(3)).unwrap(), ids(&[1, 2]).as_slice());
        assert_eq!(r.weight(VertexId::new(2), VertexId::new(1)), Ok(7));
        assert!(r.neighbours(VertexId::new(1)).unwrap().is_empty());
    }

    #[test]
    fn test_reverse_skips_invalid_entries() {
        let g = AdjacencyGraph::from_adjacency(true, vec![vec![2, 9], vec![0]]);
        let r = reverse_graph(&g).unwrap();
        assert_eq!(r.edge_count(), 1);
        assert_eq!(r.neighbours(VertexId::new(2)).unwrap(), ids(&[1]).as_slice());
    }

    #[test]
    fn test_reverse_weighted_skips_invalid_entries() {
        let g = AdjacencyGraph::from_weighted_adjacency(
            true,
            vec![vec![2, 9], vec![1]],
            [((1, 2), 1), ((2, 1), 1)],
        );
        let r = reverse_graph(&g).unwrap();
        assert_eq!(r.edge_count(), 2);
        assert_eq!(r.neighbours(VertexId::new(2)).unwrap(), ids(&[1]).as_slice());
        assert_eq!(r.weight(VertexId::new(2), VertexId::new(1)), Ok(1));
    }

    #[test]
    fn test_undirected_self_loop_counts_once() {
        let raw = AdjacencyGraph::from_adjacency(false, vec![vec![1, 2], vec![1]]);
        let built = AdjacencyGraph::unweighted(false, 2, &[(1, 1), (1, 2)]);
        assert_eq!(raw.edge_count(), 2);
        assert_eq!(raw.edge_count(), built.edge_count());
    }

    #[test]
    fn test_reverse_undirected_is_identity() {
        let g = AdjacencyGraph::weighted(false, 4, &[(1, 2, 3), (2, 4, 1), (3, 4, 2)]);
        assert_eq!(reverse_graph(&g).unwrap(), g);
    }
}
