//! Single-source shortest paths: unweighted BFS, non-negative Dijkstra, and
//! path reconstruction from the resulting parent tree.

use std::collections::VecDeque;

use crate::brand::{VertexArray, VertexIndex, VertexSpace};
use crate::collections::{DaryHeap, HeapOrder};
use crate::config::AlgorithmConfig;
use crate::error::{GraphError, Result};
use crate::graph::access::VisitedSet;
use crate::graph::{Distance, Graph, VertexId};

/// A shortest-path tree rooted at one source.
///
/// A vertex has a distance iff it was reached. It has a parent iff it was
/// reached and is not the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    // Index `id - 1` describes vertex `id`.
    distances: Vec<Option<Distance>>,
    parents: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    fn from_arrays<'brand>(
        source: VertexIndex<'brand>,
        distances: VertexArray<'brand, Option<Distance>>,
        parents: VertexArray<'brand, Option<VertexIndex<'brand>>>,
    ) -> Self {
        Self {
            source: source.id(),
            distances: distances.into_vec(),
            parents: parents
                .into_vec()
                .into_iter()
                .map(|p| p.map(VertexIndex::id))
                .collect(),
        }
    }

    fn slot(&self, v: VertexId) -> Option<usize> {
        (v.get() as usize)
            .checked_sub(1)
            .filter(|&slot| slot < self.distances.len())
    }

    /// The root of the tree.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Length of the shortest path to `v`, or `None` if `v` was not reached.
    pub fn distance(&self, v: VertexId) -> Option<Distance> {
        self.slot(v).and_then(|slot| self.distances[slot])
    }

    /// Predecessor of `v` on its shortest path.
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.slot(v).and_then(|slot| self.parents[slot])
    }

    /// Number of vertices the tree covers, source included.
    pub fn reached(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Level-order search from `source`; every edge counts 1.
///
/// # Errors
/// [`GraphError::VertexNotFound`] for an invalid source or adjacency entry.
pub fn breadth_first_search<G: Graph + ?Sized>(graph: &G, source: VertexId) -> Result<ShortestPaths> {
    VertexSpace::scope(graph.vertex_count(), |space| {
        let source = space.index(source)?;
        let mut visited = VisitedSet::new(&space);
        let mut distances = space.array(None::<Distance>);
        let mut parents = space.array(None::<VertexIndex<'_>>);
        let mut queue = VecDeque::new();

        visited.try_visit(source);
        distances[source] = Some(0);
        queue.push_back((source, 0));

        while let Some((u, d)) = queue.pop_front() {
            for &raw in graph.neighbours(u.id())? {
                let w = space.index(raw)?;
                if visited.try_visit(w) {
                    distances[w] = Some(d + 1);
                    parents[w] = Some(u);
                    queue.push_back((w, d + 1));
                }
            }
        }

        tracing::debug!(source = %source.id(), reached = visited.count(), "breadth-first search");
        Ok(ShortestPaths::from_arrays(source, distances, parents))
    })
}

/// Walks parent pointers from `target` back to the source.
///
/// Returns the vertices in source-to-target order, or `None` if `target` is
/// not in the tree.
///
/// # Panics
/// Panics if a reached vertex's parent chain stops short of the source or
/// loops; a tree built by this module never does that.
pub fn shortest_path(paths: &ShortestPaths, target: VertexId) -> Option<Vec<VertexId>> {
    paths.distance(target)?;

    let mut path = vec![target];
    let mut current = target;
    while current != paths.source {
        current = paths
            .parent(current)
            .unwrap_or_else(|| panic!("shortest-path tree broken: vertex {current} has no parent"));
        path.push(current);
        assert!(
            path.len() <= paths.distances.len(),
            "shortest-path tree broken: parent chain from {target} loops"
        );
    }
    path.reverse();
    Some(path)
}

/// Dijkstra's algorithm with the default [`AlgorithmConfig`].
pub fn non_negative_weighted_search<G: Graph + ?Sized>(
    graph: &G,
    source: VertexId,
) -> Result<ShortestPaths> {
    non_negative_weighted_search_with_config(graph, source, &AlgorithmConfig::default())
}

/// Dijkstra's algorithm over a min-heap keyed by `(distance, vertex)`.
///
/// There is no decrease-key. An improving relaxation pushes a new entry;
/// the superseded one is recognized when popped (its distance exceeds the
/// recorded best) and skipped.
///
/// # Errors
/// - [`GraphError::RequiresWeighted`] for unweighted graphs.
/// - [`GraphError::NegativeWeight`] for the first negative edge examined.
/// - [`GraphError::InvalidArity`] from the heap configuration.
/// - Lookup failures from the graph.
pub fn non_negative_weighted_search_with_config<G: Graph + ?Sized>(
    graph: &G,
    source: VertexId,
    config: &AlgorithmConfig,
) -> Result<ShortestPaths> {
    if !graph.is_weighted() {
        return Err(GraphError::RequiresWeighted {
            algorithm: "non-negative weighted search",
        });
    }

    VertexSpace::scope(graph.vertex_count(), |space| {
        let source = space.index(source)?;
        let heap_config = &config.shortest_path_heap;
        let mut heap = DaryHeap::with_capacity(
            HeapOrder::Min,
            heap_config.arity,
            heap_config.capacity_or(space.len()),
        )?;
        let mut distances = space.array(None::<Distance>);
        let mut parents = space.array(None::<VertexIndex<'_>>);

        distances[source] = Some(0);
        heap.insert((0, source), ());

        while let Some(((d, u), ())) = heap.extract_highest_priority() {
            if distances[u].is_some_and(|best| d > best) {
                tracing::trace!(vertex = %u.id(), stale = d, "skipping superseded heap entry");
                continue;
            }

            for (raw, weight) in graph.weighted_neighbours(u.id())? {
                let w = space.index(raw)?;
                let step = Distance::try_from(weight).map_err(|_| GraphError::NegativeWeight {
                    from: u.id(),
                    to: raw,
                    weight,
                })?;
                let candidate = d.saturating_add(step);
                if distances[w].map_or(true, |best| candidate < best) {
                    distances[w] = Some(candidate);
                    parents[w] = Some(u);
                    heap.insert((candidate, w), ());
                }
            }
        }

        tracing::debug!(source = %source.id(), arity = heap.arity(), "non-negative weighted search");
        Ok(ShortestPaths::from_arrays(source, distances, parents))
    })
}

/// Shortest paths with arbitrary (possibly negative) weights.
///
/// Not provided: always fails with [`GraphError::Unsupported`].
pub fn general_weighted_search<G: Graph + ?Sized>(
    _graph: &G,
    _source: VertexId,
) -> Result<ShortestPaths> {
    Err(GraphError::Unsupported("general-weight shortest path"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn ids(raw: &[u32]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn test_bfs_levels_and_parents() {
        // 1 -> 2,3 ; 2 -> 4 ; 3 -> 4 ; 5 unreachable
        let g = AdjacencyGraph::unweighted(true, 5, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        let paths = breadth_first_search(&g, v(1)).unwrap();
        assert_eq!(paths.distance(v(1)), Some(0));
        assert_eq!(paths.distance(v(4)), Some(2));
        assert_eq!(paths.parent(v(4)), Some(v(2)));
        assert_eq!(paths.parent(v(1)), None);
        assert_eq!(paths.distance(v(5)), None);
        assert_eq!(paths.reached(), 4);

        assert_eq!(shortest_path(&paths, v(4)), Some(ids(&[1, 2, 4])));
        assert_eq!(shortest_path(&paths, v(1)), Some(ids(&[1])));
        assert_eq!(shortest_path(&paths, v(5)), None);
        assert_eq!(shortest_path(&paths, v(42)), None);
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        // 1 -> 2 (10), 1 -> 3 (5), 3 -> 2 (2), 2 -> 4 (1)
        let g = AdjacencyGraph::weighted(true, 4, &[(1, 2, 10), (1, 3, 5), (3, 2, 2), (2, 4, 1)]);
        let paths = non_negative_weighted_search(&g, v(1)).unwrap();
        assert_eq!(paths.distance(v(3)), Some(5));
        assert_eq!(paths.distance(v(2)), Some(7));
        assert_eq!(paths.distance(v(4)), Some(8));
        assert_eq!(shortest_path(&paths, v(4)), Some(ids(&[1, 3, 2, 4])));
    }

    #[test]
    fn test_dijkstra_rejects_negative_and_unweighted() {
        let g = AdjacencyGraph::weighted(true, 2, &[(1, 2, -3)]);
        assert_eq!(
            non_negative_weighted_search(&g, v(1)),
            Err(GraphError::NegativeWeight {
                from: v(1),
                to: v(2),
                weight: -3
            })
        );
        let plain = AdjacencyGraph::unweighted(true, 2, &[(1, 2)]);
        assert!(matches!(
            non_negative_weighted_search(&plain, v(1)),
            Err(GraphError::RequiresWeighted { .. })
        ));
    }

    #[test]
    fn test_dijkstra_honours_config_arity() {
        let g = AdjacencyGraph::weighted(false, 3, &[(1, 2, 1), (2, 3, 1), (1, 3, 5)]);
        let mut config = AlgorithmConfig::default();
        config.shortest_path_heap.arity = 2;
        let paths = non_negative_weighted_search_with_config(&g, v(1), &config).unwrap();
        assert_eq!(paths.distance(v(3)), Some(2));

        config.shortest_path_heap.arity = 0;
        assert_eq!(
            non_negative_weighted_search_with_config(&g, v(1), &config),
            Err(GraphError::InvalidArity(0))
        );
    }

    #[test]
    fn test_general_weighted_search_is_unsupported() {
        let g = AdjacencyGraph::weighted(true, 2, &[(1, 2, -1)]);
        assert!(matches!(
            general_weighted_search(&g, v(1)),
            Err(GraphError::Unsupported(_))
        ));
    }

    #[test]
    #[should_panic(expected = "has no parent")]
    fn test_broken_parent_chain_panics() {
        let paths = ShortestPaths {
            source: v(1),
            distances: vec![Some(0), None, Some(2)],
            parents: vec![None, None, None],
        };
        let _ = shortest_path(&paths, v(3));
    }
}
