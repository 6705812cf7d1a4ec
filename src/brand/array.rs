//! `VertexArray`: a per-vertex scratch array indexed by branded handles.

use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use super::{InvariantLifetime, VertexIndex};

/// Dense per-vertex storage, sized once from its [`VertexSpace`](super::VertexSpace).
///
/// Indexing skips bounds checks: a `VertexIndex<'brand>` is only ever minted
/// in range for the space that also sized this array.
pub(crate) struct VertexArray<'brand, T> {
    slots: Vec<T>,
    _brand: PhantomData<InvariantLifetime<'brand>>,
}

impl<'brand, T: Clone> VertexArray<'brand, T> {
    pub(super) fn filled(len: usize, fill: T) -> Self {
        Self {
            slots: vec![fill; len],
            _brand: PhantomData,
        }
    }
}

impl<'brand, T> VertexArray<'brand, T> {
    /// Slots in ascending vertex id order.
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots
    }
}

impl<'brand, T> Index<VertexIndex<'brand>> for VertexArray<'brand, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, v: VertexIndex<'brand>) -> &T {
        // SAFETY: `v` was validated against the space that sized `slots`.
        unsafe { self.slots.get_unchecked(v.slot()) }
    }
}

impl<'brand, T> IndexMut<VertexIndex<'brand>> for VertexArray<'brand, T> {
    #[inline(always)]
    fn index_mut(&mut self, v: VertexIndex<'brand>) -> &mut T {
        // SAFETY: `v` was validated against the space that sized `slots`.
        unsafe { self.slots.get_unchecked_mut(v.slot()) }
    }
}
