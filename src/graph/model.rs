//! Core data model: vertex ids, weights, edges and the read-only `Graph` ADT.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Edge weight. Negative values are allowed except where an algorithm says otherwise.
pub type Weight = i64;

/// Path length. Unreached vertices carry no distance at all (`None`).
pub type Distance = u64;

/// A 1-based vertex id. Id `0` is reserved and never resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Wraps a raw id without validation; lookups reject out-of-range ids.
    #[inline(always)]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single edge, optionally weighted.
///
/// Ordering is by `(source, destination, weight)`, which makes edge sets
/// enumerate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Tail of the edge.
    pub source: VertexId,
    /// Head of the edge.
    pub destination: VertexId,
    /// Weight, present iff the owning graph is weighted.
    pub weight: Option<Weight>,
}

impl Edge {
    /// Creates an edge.
    pub const fn new(source: VertexId, destination: VertexId, weight: Option<Weight>) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Orders the endpoints so the smaller id is the source.
    ///
    /// Both discoveries of an undirected edge map to the same value.
    #[must_use]
    pub fn canonical(self) -> Self {
        if self.source <= self.destination {
            self
        } else {
            Self {
                source: self.destination,
                destination: self.source,
                weight: self.weight,
            }
        }
    }
}

/// Read-only graph storage consumed by every algorithm.
///
/// Vertices are `1..=vertex_count()`. Lookups of any other id fail with
/// [`GraphError::VertexNotFound`]. Neighbour order is significant: traversals
/// visit neighbours in exactly this order.
pub trait Graph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges; an undirected edge counts once.
    fn edge_count(&self) -> usize;

    /// Whether edges have a direction.
    fn is_directed(&self) -> bool;

    /// Whether edges carry weights.
    fn is_weighted(&self) -> bool;

    /// Ordered neighbours of `v`.
    fn neighbours(&self, v: VertexId) -> Result<&[VertexId]>;

    /// Weight of the edge `from -> to`.
    fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight>;

    /// Neighbours of `v` paired with their edge weights, in neighbour order.
    ///
    /// Implementations should answer this with one lookup per vertex; the
    /// default falls back to one [`weight`](Graph::weight) call per edge.
    fn weighted_neighbours(&self, v: VertexId) -> Result<Vec<(VertexId, Weight)>> {
        self.neighbours(v)?
            .iter()
            .map(|&w| Ok((w, self.weight(v, w)?)))
            .collect()
    }

    /// All vertex ids in ascending order.
    fn vertex_ids(&self) -> VertexIds {
        VertexIds {
            next: 1,
            end: u32::try_from(self.vertex_count()).unwrap_or(u32::MAX),
        }
    }
}

/// Iterator over `1..=vertex_count`.
#[derive(Debug, Clone)]
pub struct VertexIds {
    next: u32,
    end: u32,
}

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if self.next > self.end {
            return None;
        }
        let id = VertexId(self.next);
        self.next += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.end as usize + 1).saturating_sub(self.next as usize);
        (left, Some(left))
    }
}

impl ExactSizeIterator for VertexIds {}

/// Fails unless `graph` is undirected and weighted, naming the missing property.
pub(crate) fn require_undirected_weighted<G: Graph + ?Sized>(
    graph: &G,
    algorithm: &'static str,
) -> Result<()> {
    if graph.is_directed() {
        return Err(GraphError::RequiresUndirected { algorithm });
    }
    if !graph.is_weighted() {
        return Err(GraphError::RequiresWeighted { algorithm });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_orders_endpoints() {
        let e = Edge::new(VertexId::new(5), VertexId::new(2), Some(7));
        let c = e.canonical();
        assert_eq!(c.source, VertexId::new(2));
        assert_eq!(c.destination, VertexId::new(5));
        assert_eq!(c.weight, Some(7));
        assert_eq!(c.canonical(), c);
    }

    #[test]
    fn test_vertex_id_display_and_serde() {
        let v = VertexId::new(42);
        assert_eq!(v.to_string(), "42");
        assert_eq!(serde_json::to_string(&v).unwrap(), "42");
        let back: VertexId = serde_json::from_str("42").unwrap();
        assert_eq!(back, v);
    }
}
