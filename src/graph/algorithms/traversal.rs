//! Depth-first exploration and the reachability queries built on it.
//!
//! Exploration keeps an explicit stack of `(vertex, neighbours, next)` frames
//! instead of recursing, so a long chain cannot exhaust the call stack. The
//! visit order is exactly that of the recursive formulation: neighbours are
//! taken in adjacency order and a vertex is finished once all of them have
//! been examined.

use core::convert::Infallible;
use core::ops::ControlFlow;

use crate::brand::{VertexIndex, VertexSpace};
use crate::error::Result;
use crate::graph::access::VisitedSet;
use crate::graph::{Graph, VertexId};

/// Something that happened during one depth-first exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DfsEvent<'brand> {
    /// First touch of a vertex (preorder).
    Discover(VertexIndex<'brand>),
    /// All neighbours of the vertex were examined (postorder).
    Finish(VertexIndex<'brand>),
    /// An edge into a vertex that was already visited when examined.
    NonTreeEdge {
        source: VertexIndex<'brand>,
        target: VertexIndex<'brand>,
    },
}

/// Explores depth-first from `start`, reporting events to `visitor`.
///
/// Vertices already in `visited` are never entered again, so successive calls
/// with one shared set build a depth-first forest. A `Break` from the visitor
/// stops the exploration and is handed back.
///
/// # Errors
/// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if an
/// adjacency entry names no vertex of the graph.
pub(crate) fn explore_with<'g, 'brand, G, B, F>(
    graph: &'g G,
    space: &VertexSpace<'brand>,
    visited: &mut VisitedSet<'brand>,
    start: VertexIndex<'brand>,
    mut visitor: F,
) -> Result<ControlFlow<B>>
where
    G: Graph + ?Sized,
    F: FnMut(DfsEvent<'brand>) -> ControlFlow<B>,
{
    if !visited.try_visit(start) {
        return Ok(ControlFlow::Continue(()));
    }
    if let ControlFlow::Break(b) = visitor(DfsEvent::Discover(start)) {
        return Ok(ControlFlow::Break(b));
    }

    let mut stack: Vec<(VertexIndex<'brand>, &'g [VertexId], usize)> =
        vec![(start, graph.neighbours(start.id())?, 0)];

    while let Some(top) = stack.len().checked_sub(1) {
        let (u, neighbours, next) = stack[top];
        let Some(&raw) = neighbours.get(next) else {
            stack.pop();
            if let ControlFlow::Break(b) = visitor(DfsEvent::Finish(u)) {
                return Ok(ControlFlow::Break(b));
            }
            continue;
        };
        stack[top].2 = next + 1;

        let w = space.index(raw)?;
        let event = if visited.try_visit(w) {
            stack.push((w, graph.neighbours(raw)?, 0));
            DfsEvent::Discover(w)
        } else {
            DfsEvent::NonTreeEdge { source: u, target: w }
        };
        if let ControlFlow::Break(b) = visitor(event) {
            return Ok(ControlFlow::Break(b));
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// Explores from `start`, marking everything reachable in `visited`.
pub(crate) fn explore<'brand, G: Graph + ?Sized>(
    graph: &G,
    space: &VertexSpace<'brand>,
    visited: &mut VisitedSet<'brand>,
    start: VertexIndex<'brand>,
) -> Result<()> {
    explore_with(graph, space, visited, start, |_| ControlFlow::<Infallible>::Continue(()))?;
    Ok(())
}

/// Explores from `start` and returns the newly discovered vertices in preorder.
pub(crate) fn collect_discovered<'brand, G: Graph + ?Sized>(
    graph: &G,
    space: &VertexSpace<'brand>,
    visited: &mut VisitedSet<'brand>,
    start: VertexIndex<'brand>,
) -> Result<Vec<VertexId>> {
    let mut found = Vec::new();
    explore_with(graph, space, visited, start, |event| {
        if let DfsEvent::Discover(v) = event {
            found.push(v.id());
        }
        ControlFlow::<Infallible>::Continue(())
    })?;
    Ok(found)
}

/// Returns every vertex reachable from `start`, `start` first, in DFS preorder.
///
/// # Errors
/// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if `start`
/// or any followed adjacency entry is not a vertex of `graph`.
pub fn reachable<G: Graph + ?Sized>(graph: &G, start: VertexId) -> Result<Vec<VertexId>> {
    VertexSpace::scope(graph.vertex_count(), |space| {
        let start = space.index(start)?;
        let mut visited = VisitedSet::new(&space);
        collect_discovered(graph, &space, &mut visited, start)
    })
}

/// Returns `true` if `to` is reachable from `from`.
///
/// Every vertex reaches itself. On undirected graphs the relation is symmetric.
pub fn path_exists<G: Graph + ?Sized>(graph: &G, from: VertexId, to: VertexId) -> Result<bool> {
    VertexSpace::scope(graph.vertex_count(), |space| {
        let from = space.index(from)?;
        let to = space.index(to)?;
        let mut visited = VisitedSet::new(&space);
        explore(graph, &space, &mut visited, from)?;
        Ok(visited.is_visited(to))
    })
}

/// Groups vertices by exploration from each not-yet-visited vertex in id order.
///
/// Each group lists its vertices in discovery order, seed first; groups are
/// ordered by seed id. Together they partition the vertex set. On undirected
/// graphs the groups are the connected components.
pub fn connected_components<G: Graph + ?Sized>(graph: &G) -> Result<Vec<Vec<VertexId>>> {
    let components = VertexSpace::scope(graph.vertex_count(), |space| {
        let mut visited = VisitedSet::new(&space);
        let mut components = Vec::new();
        for seed in space.indices() {
            if visited.is_visited(seed) {
                continue;
            }
            components.push(collect_discovered(graph, &space, &mut visited, seed)?);
        }
        debug_assert_eq!(visited.count(), space.len());
        Ok::<_, crate::GraphError>(components)
    })?;

    tracing::debug!(
        vertices = graph.vertex_count(),
        components = components.len(),
        "connected components"
    );
    Ok(components)
}
