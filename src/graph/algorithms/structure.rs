//! Cycle detection, DFS timestamps, topological order, strongly connected
//! components and bipartiteness.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `find_back_edge` / `is_dag` | \(O(n + m)\) | stops at the first back edge |
//! | `dfs_pre_post_order_numbers` | \(O(n + m)\) | full DFS forest |
//! | `topological_ordering` | \(O(n \log n + m)\) | sort by postorder |
//! | `strongly_connected_components` | \(O(n + m)\) | Kosaraju, two passes |
//! | `is_bipartite` | \(O(n + m)\) | BFS two-colouring |

use core::cmp::Reverse;
use core::convert::Infallible;
use core::ops::ControlFlow;
use std::collections::VecDeque;

use super::traversal::{collect_discovered, explore_with, DfsEvent};
use crate::brand::VertexSpace;
use crate::error::{GraphError, Result};
use crate::graph::access::VisitedSet;
use crate::graph::{reverse_graph, Graph, VertexId};

/// A DFS clock reading. Entry and exit share one clock.
pub type Timestamp = u64;

/// Preorder and postorder numbers of every vertex from one DFS forest.
///
/// Roots are taken in ascending id order. Every number in
/// `1..=2 * vertex_count` is used exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsTimestamps {
    // Index `id - 1` holds `(pre, post)` of vertex `id`.
    stamps: Vec<(Timestamp, Timestamp)>,
}

impl DfsTimestamps {
    fn stamp(&self, v: VertexId) -> Option<(Timestamp, Timestamp)> {
        (v.get() as usize)
            .checked_sub(1)
            .and_then(|slot| self.stamps.get(slot))
            .copied()
    }

    /// Clock value when `v` was entered.
    pub fn preorder(&self, v: VertexId) -> Option<Timestamp> {
        self.stamp(v).map(|(pre, _)| pre)
    }

    /// Clock value when `v` was left, after all its descendants.
    pub fn postorder(&self, v: VertexId) -> Option<Timestamp> {
        self.stamp(v).map(|(_, post)| post)
    }

    /// Number of stamped vertices.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// Returns `true` if the graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Vertex ids sorted by descending postorder number.
    fn by_descending_postorder(&self) -> Vec<VertexId> {
        let mut order: Vec<(Timestamp, VertexId)> = self
            .stamps
            .iter()
            .zip(1u32..)
            .map(|(&(_, post), id)| (post, VertexId::new(id)))
            .collect();
        order.sort_unstable_by_key(|&(post, _)| Reverse(post));
        order.into_iter().map(|(_, v)| v).collect()
    }
}

/// Looks for an edge into a vertex still on the DFS stack.
///
/// Adjacency entries are followed as arcs, forest roots in id order. Returns
/// the first back edge found as `(source, target)`, or `None` when the
/// traversal finishes without one. On a directed graph `None` means acyclic.
/// Undirected graphs list every edge in both directions, so any edge there is
/// reported as a back edge of its own tree edge.
pub fn find_back_edge<G: Graph + ?Sized>(graph: &G) -> Result<Option<(VertexId, VertexId)>> {
    VertexSpace::scope(graph.vertex_count(), |space| {
        let mut visited = VisitedSet::new(&space);
        let mut on_stack = space.array(false);
        for root in space.indices() {
            let flow = explore_with(graph, &space, &mut visited, root, |event| {
                match event {
                    DfsEvent::Discover(v) => on_stack[v] = true,
                    DfsEvent::Finish(v) => on_stack[v] = false,
                    DfsEvent::NonTreeEdge { source, target } if on_stack[target] => {
                        return ControlFlow::Break((source.id(), target.id()));
                    }
                    DfsEvent::NonTreeEdge { .. } => {}
                }
                ControlFlow::Continue(())
            })?;
            if let ControlFlow::Break(edge) = flow {
                tracing::debug!(from = %edge.0, to = %edge.1, "back edge found");
                return Ok(Some(edge));
            }
        }
        Ok(None)
    })
}

/// Returns `true` iff `graph` is directed and has no cycle.
///
/// Undirected graphs are never DAGs, whatever their edges.
pub fn is_dag<G: Graph + ?Sized>(graph: &G) -> Result<bool> {
    if !graph.is_directed() {
        return Ok(false);
    }
    Ok(find_back_edge(graph)?.is_none())
}

/// Numbers every vertex on entry and on exit over a full DFS forest.
pub fn dfs_pre_post_order_numbers<G: Graph + ?Sized>(graph: &G) -> Result<DfsTimestamps> {
    VertexSpace::scope(graph.vertex_count(), |space| {
        let mut visited = VisitedSet::new(&space);
        let mut pre = space.array(None::<Timestamp>);
        let mut post = space.array(None::<Timestamp>);
        let mut clock: Timestamp = 0;

        for root in space.indices() {
            explore_with(graph, &space, &mut visited, root, |event| {
                match event {
                    DfsEvent::Discover(v) => {
                        clock += 1;
                        pre[v] = Some(clock);
                    }
                    DfsEvent::Finish(v) => {
                        clock += 1;
                        post[v] = Some(clock);
                    }
                    DfsEvent::NonTreeEdge { .. } => {}
                }
                ControlFlow::<Infallible>::Continue(())
            })?;
        }

        let stamps = pre
            .into_vec()
            .into_iter()
            .zip(post.into_vec())
            .zip(1u32..)
            .map(|((pre, post), id)| match (pre, post) {
                (Some(pre), Some(post)) => (pre, post),
                _ => panic!("vertex {id} left unnumbered by a full DFS forest"),
            })
            .collect();
        Ok(DfsTimestamps { stamps })
    })
}

/// Orders the vertices of a DAG so every edge points forward.
///
/// The order is descending postorder. Acyclicity is a precondition and is not
/// re-checked: on a cyclic graph the result is some order, not a topological one.
pub fn topological_ordering<G: Graph + ?Sized>(dag: &G) -> Result<Vec<VertexId>> {
    Ok(dfs_pre_post_order_numbers(dag)?.by_descending_postorder())
}

/// Kosaraju's algorithm.
///
/// Postorders the reverse graph, then explores the original graph from each
/// unvisited vertex in descending order of those numbers. Each exploration
/// collects exactly one strongly connected component, in discovery order.
pub fn strongly_connected_components<G: Graph + ?Sized>(graph: &G) -> Result<Vec<Vec<VertexId>>> {
    let reversed = reverse_graph(graph)?;
    let order = dfs_pre_post_order_numbers(&reversed)?.by_descending_postorder();

    let components = VertexSpace::scope(graph.vertex_count(), |space| {
        let mut visited = VisitedSet::new(&space);
        let mut components = Vec::new();
        for seed in order {
            let seed = space.index(seed)?;
            if visited.is_visited(seed) {
                continue;
            }
            components.push(collect_discovered(graph, &space, &mut visited, seed)?);
        }
        Ok::<_, GraphError>(components)
    })?;

    tracing::debug!(
        vertices = graph.vertex_count(),
        components = components.len(),
        "strongly connected components"
    );
    Ok(components)
}

/// Two-colouring state of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    Uncoloured,
    Red,
    Green,
}

impl Colour {
    fn opposite(self) -> Self {
        match self {
            Colour::Red => Colour::Green,
            Colour::Green => Colour::Red,
            Colour::Uncoloured => Colour::Uncoloured,
        }
    }
}

/// Returns `true` if the vertices can be two-coloured with no edge inside a colour.
///
/// Every component is checked: breadth-first colouring is seeded from each
/// still-uncoloured vertex in id order, vertex 1 first. Stops at the first
/// conflict.
pub fn is_bipartite<G: Graph + ?Sized>(graph: &G) -> Result<bool> {
    VertexSpace::scope(graph.vertex_count(), |space| {
        let mut colour = space.array(Colour::Uncoloured);
        let mut queue = VecDeque::new();

        for seed in space.indices() {
            if colour[seed] != Colour::Uncoloured {
                continue;
            }
            colour[seed] = Colour::Red;
            queue.push_back(seed);

            while let Some(u) = queue.pop_front() {
                let required = colour[u].opposite();
                for &raw in graph.neighbours(u.id())? {
                    let w = space.index(raw)?;
                    if colour[w] == Colour::Uncoloured {
                        colour[w] = required;
                        queue.push_back(w);
                    } else if colour[w] != required {
                        tracing::debug!(from = %u.id(), to = %raw, "colour conflict");
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    })
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
    fn test_directed_cycle_is_not_dag() {
        let g = AdjacencyGraph::unweighted(true, 3, &[(1, 2), (2, 3), (3, 1)]);
        assert_eq!(find_back_edge(&g).unwrap(), Some((v(3), v(1))));
        assert!(!is_dag(&g).unwrap());
    }

    #[test]
    fn test_chain_and_diamond_are_dags() {
        let chain = AdjacencyGraph::unweighted(true, 4, &[(1, 2), (2, 3), (3, 4)]);
        assert!(is_dag(&chain).unwrap());
        // A cross edge into a finished vertex is not a back edge.
        let diamond = AdjacencyGraph::unweighted(true, 4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        assert_eq!(find_back_edge(&diamond).unwrap(), None);
    }

    #[test]
    fn test_undirected_is_never_dag() {
        let g = AdjacencyGraph::unweighted(false, 2, &[]);
        assert!(!is_dag(&g).unwrap());
    }

    #[test]
    fn test_timestamps_single_clock() {
        // 1 -> 2 ; 3 isolated
        let g = AdjacencyGraph::unweighted(true, 3, &[(1, 2)]);
        let ts = dfs_pre_post_order_numbers(&g).unwrap();
        assert_eq!((ts.preorder(v(1)), ts.postorder(v(1))), (Some(1), Some(4)));
        assert_eq!((ts.preorder(v(2)), ts.postorder(v(2))), (Some(2), Some(3)));
        assert_eq!((ts.preorder(v(3)), ts.postorder(v(3))), (Some(5), Some(6)));
        assert_eq!(ts.postorder(v(4)), None);
    }

    #[test]
    fn test_topological_ordering() {
        let g = AdjacencyGraph::unweighted(true, 5, &[(3, 1), (1, 2), (4, 2), (5, 4)]);
        assert_eq!(topological_ordering(&g).unwrap(), ids(&[5, 4, 3, 1, 2]));
    }

    #[test]
    fn test_scc_cycle_and_dag() {
        let cycle = AdjacencyGraph::unweighted(true, 4, &[(1, 2), (2, 3), (3, 4), (4, 1)]);
        let comps = strongly_connected_components(&cycle).unwrap();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].len(), 4);

        // Sink components come out first.
        let dag = AdjacencyGraph::unweighted(true, 3, &[(1, 2), (2, 3)]);
        let comps = strongly_connected_components(&dag).unwrap();
        assert_eq!(comps, vec![ids(&[3]), ids(&[2]), ids(&[1])]);
    }

    #[test]
    fn test_scc_two_cycles_bridged() {
        // {1,2} -> {3,4,5}
        let g = AdjacencyGraph::unweighted(
            true,
            5,
            &[(1, 2), (2, 1), (2, 3), (3, 4), (4, 5), (5, 3)],
        );
        let mut comps = strongly_connected_components(&g).unwrap();
        for c in &mut comps {
            c.sort();
        }
        comps.sort();
        assert_eq!(comps, vec![ids(&[1, 2]), ids(&[3, 4, 5])]);
    }

    #[test]
    fn test_bipartite_cycles() {
        let triangle = AdjacencyGraph::unweighted(false, 3, &[(1, 2), (2, 3), (3, 1)]);
        assert!(!is_bipartite(&triangle).unwrap());
        let square = AdjacencyGraph::unweighted(false, 4, &[(1, 2), (2, 3), (3, 4), (4, 1)]);
        assert!(is_bipartite(&square).unwrap());
    }

    #[test]
    fn test_bipartite_checks_every_component() {
        // Vertex 1 is isolated; the triangle sits in another component.
        let g = AdjacencyGraph::unweighted(false, 4, &[(2, 3), (3, 4), (4, 2)]);
        assert!(!is_bipartite(&g).unwrap());
        assert!(is_bipartite(&AdjacencyGraph::unweighted(false, 0, &[])).unwrap());
    }
}
