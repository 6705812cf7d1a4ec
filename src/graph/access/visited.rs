//! Branded visited sets for graph traversals.
//!
//! One bit per vertex, word-packed. A bit is set at most once per algorithm
//! run and never cleared; a fresh set is opened for every call.

use core::marker::PhantomData;

use crate::brand::{InvariantLifetime, VertexIndex, VertexSpace};

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set sized from one [`VertexSpace`].
pub(crate) struct VisitedSet<'brand> {
    words: Vec<u64>,
    marked: usize,
    _brand: PhantomData<InvariantLifetime<'brand>>,
}

impl<'brand> VisitedSet<'brand> {
    pub(crate) fn new(space: &VertexSpace<'brand>) -> Self {
        Self {
            words: vec![0; space.len().div_ceil(WORD_BITS)],
            marked: 0,
            _brand: PhantomData,
        }
    }

    /// Marks `v` visited. Returns `true` iff it was not visited before.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, v: VertexIndex<'brand>) -> bool {
        let (word, mask) = bit_word_mask(v.slot());
        // SAFETY: `v.slot() < space.len()`, so `word < words.len()`.
        let w = unsafe { self.words.get_unchecked_mut(word) };
        if *w & mask == 0 {
            *w |= mask;
            self.marked += 1;
            true
        } else {
            false
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, v: VertexIndex<'brand>) -> bool {
        let (word, mask) = bit_word_mask(v.slot());
        // SAFETY: `v.slot() < space.len()`, so `word < words.len()`.
        unsafe { *self.words.get_unchecked(word) & mask != 0 }
    }

    /// Number of vertices marked so far.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.marked
    }
}

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, u64) {
    (bit >> 6, 1u64 << (bit & 63))
}
