//! Branded vertex scopes for per-call scratch state.
//!
//! Every algorithm opens a [`VertexSpace`] sized from the graph's vertex count.
//! Raw [`VertexId`]s are validated once by [`VertexSpace::index`]; the
//! resulting [`VertexIndex`] carries the space's brand and indexes every
//! [`VertexArray`] of that brand without further bounds checks.
//!
//! The brand is a fresh invariant lifetime per scope (rank-2 closure), so
//! handles from one call can never index scratch arrays from another.

mod array;
mod invariant;

pub(crate) use array::VertexArray;
pub(crate) use invariant::InvariantLifetime;

use core::num::NonZeroU32;

use crate::error::{GraphError, Result};
use crate::graph::VertexId;

/// A validated vertex handle bound to one [`VertexSpace`].
///
/// Stored 1-based in a `NonZeroU32`, mirroring [`VertexId`], so
/// `Option<VertexIndex>` costs nothing extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub(crate) struct VertexIndex<'brand> {
    id: NonZeroU32,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> VertexIndex<'brand> {
    /// # Safety
    /// `id` must lie in `1..=space.len()` for the space carrying `'brand`.
    #[inline(always)]
    unsafe fn new_unchecked(id: u32) -> Self {
        Self {
            // SAFETY: caller guarantees id >= 1.
            id: unsafe { NonZeroU32::new_unchecked(id) },
            _brand: InvariantLifetime::new(),
        }
    }

    /// The public id this handle was validated from.
    #[inline(always)]
    pub(crate) fn id(self) -> VertexId {
        VertexId::new(self.id.get())
    }

    /// 0-based storage slot.
    #[inline(always)]
    pub(crate) fn slot(self) -> usize {
        (self.id.get() - 1) as usize
    }
}

/// The vertex universe of one algorithm run.
///
/// Not `Clone`: exactly one space exists per brand.
#[derive(Debug)]
pub(crate) struct VertexSpace<'brand> {
    len: u32,
    _brand: InvariantLifetime<'brand>,
}

impl VertexSpace<'_> {
    /// Opens a branded scope over vertices `1..=vertex_count`.
    ///
    /// # Panics
    /// Panics if `vertex_count` does not fit in a `u32`.
    pub(crate) fn scope<F, R>(vertex_count: usize, f: F) -> R
    where
        F: for<'new_brand> FnOnce(VertexSpace<'new_brand>) -> R,
    {
        let len = u32::try_from(vertex_count)
            .unwrap_or_else(|_| panic!("vertex count {vertex_count} exceeds u32 id space"));
        f(VertexSpace {
            len,
            _brand: InvariantLifetime::new(),
        })
    }
}

impl<'brand> VertexSpace<'brand> {
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len as usize
    }

    /// Validates `id` against this space.
    #[inline]
    pub(crate) fn index(&self, id: VertexId) -> Result<VertexIndex<'brand>> {
        let raw = id.get();
        if raw == 0 || raw > self.len {
            return Err(GraphError::VertexNotFound(id));
        }
        // SAFETY: range checked above.
        Ok(unsafe { VertexIndex::new_unchecked(raw) })
    }

    /// All handles in ascending id order.
    pub(crate) fn indices(&self) -> impl DoubleEndedIterator<Item = VertexIndex<'brand>> {
        // SAFETY: every id in 1..=len is in range.
        (1..=self.len).map(|raw| unsafe { VertexIndex::new_unchecked(raw) })
    }

    /// A scratch array with one `fill` slot per vertex.
    pub(crate) fn array<T: Clone>(&self, fill: T) -> VertexArray<'brand, T> {
        VertexArray::filled(self.len(), fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_validates_range() {
        VertexSpace::scope(3, |space| {
            assert!(space.index(VertexId::new(0)).is_err());
            assert_eq!(space.index(VertexId::new(3)).unwrap().slot(), 2);
            assert_eq!(
                space.index(VertexId::new(4)),
                Err(GraphError::VertexNotFound(VertexId::new(4)))
            );
        });
    }

    #[test]
    fn test_indices_in_id_order() {
        VertexSpace::scope(4, |space| {
            let ids: Vec<u32> = space.indices().map(|v| v.id().get()).collect();
            assert_eq!(ids, vec![1, 2, 3, 4]);
        });
    }

    #[test]
    fn test_empty_space() {
        VertexSpace::scope(0, |space| {
            assert_eq!(space.len(), 0);
            assert_eq!(space.indices().count(), 0);
            assert!(space.index(VertexId::new(1)).is_err());
        });
    }
}
