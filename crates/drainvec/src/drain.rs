//! Destructive draining traversal: forward-only iteration that frees each
//! block as soon as its last element has been consumed.
//!
//! Draining is a capability of the container, not a second read path: it
//! takes the container by exclusive borrow ([`Drain`]) or by value
//! ([`IntoIter`]), so the single-pass contract is enforced by ownership
//! instead of being a caller promise.

use crate::block::Block;
use crate::vec::{DrainVec, Spine, INLINE_BLOCKS};

/// Draining iterator over a [`DrainVec`], created by [`DrainVec::drain`].
///
/// Yields every element by value in index order. On entering block `b` the
/// block is moved out of its spine slot (the slot becomes released); its
/// storage is freed the moment the traversal moves past its last element.
/// Peak resident memory during a full drain is therefore bounded by the
/// unvisited suffix plus one block.
///
/// Dropping a `Drain` early stops the release at the current block: visited
/// blocks stay released, unvisited blocks stay resident. No elements are
/// consumed in the background on drop — the memory-release point is element
/// consumption, which is the point of the protocol.
pub struct Drain<'a, T> {
    vec: &'a mut DrainVec<T>,
    /// Spine index of the next block to take.
    next_block: usize,
    /// Elements of the block currently being consumed. Dropping this (by
    /// replacing it with the next block's elements) is what frees the
    /// finished block.
    current: std::vec::IntoIter<T>,
    /// Elements not yet yielded across all blocks.
    remaining: usize,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(vec: &'a mut DrainVec<T>) -> Self {
        let remaining = vec.len();
        Self {
            vec,
            next_block: 0,
            current: Vec::new().into_iter(),
            remaining,
        }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            // Current block exhausted. Taking the next block vacates its
            // slot; assigning over `current` drops the finished block's
            // storage.
            let slot = self
                .vec
                .blocks
                .get_mut(self.next_block)
                .unwrap_or_else(|| panic!("drain ran past the spine at block {}", self.next_block));
            let block = slot.take().unwrap_or_else(|| {
                panic!("drain crossed already-released block {}", self.next_block)
            });
            self.next_block += 1;
            self.current = block.into_elements().into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> std::iter::FusedIterator for Drain<'_, T> {}

/// By-value draining iterator, created by consuming a [`DrainVec`].
///
/// Same memory behaviour as [`Drain`]: each block's storage is dropped as
/// soon as the traversal finishes it. Slots already released by an earlier
/// partial drain are skipped rather than trapped on, since the container is
/// gone and there is no released state left to observe.
pub struct IntoIter<T> {
    blocks: smallvec::IntoIter<[Option<Block<T>>; INLINE_BLOCKS]>,
    current: std::vec::IntoIter<T>,
    /// Live elements left across all remaining blocks.
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            match self.blocks.next() {
                Some(Some(block)) => self.current = block.into_elements().into_iter(),
                Some(None) => continue,
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DrainVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let spine: Spine<T> = self.blocks;
        let remaining = spine
            .iter()
            .flatten()
            .map(|block| block.len())
            .sum();
        IntoIter {
            blocks: spine.into_iter(),
            current: Vec::new().into_iter(),
            remaining,
        }
    }
}
