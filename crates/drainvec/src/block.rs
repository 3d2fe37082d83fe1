//! Fixed-capacity storage blocks and logical-index arithmetic.
//!
//! A [`Block`] is the unit of allocation and release: a pre-allocated
//! `Vec<T>` holding up to `block_capacity` elements, filled left to right.
//! The container's spine holds `Option<Block<T>>` slots — a slot that has
//! been released by a draining pass is `None`, which makes "released" a
//! checkable state rather than a dangling handle.

/// Split a logical element index into a (block index, offset) pair.
///
/// Pure arithmetic; performs no bounds check against the container's
/// logical size. Callers are responsible for `index < len`.
#[inline]
pub(crate) fn split_index(index: usize, block_capacity: usize) -> (usize, usize) {
    (index / block_capacity, index % block_capacity)
}

/// A single fixed-capacity storage block.
///
/// The backing `Vec` is allocated to full capacity up front and never
/// reallocates; `len()` tracks the filled prefix. Blocks have no identity
/// beyond their position in the container's spine.
#[derive(Debug)]
pub(crate) struct Block<T> {
    /// Filled prefix of the block. `data.len()` is the number of live
    /// elements; the allocation holds `capacity` slots.
    data: Vec<T>,
    /// Fixed element capacity. Kept explicitly: `Vec::with_capacity` may
    /// round up, and the index arithmetic needs the exact block size.
    capacity: usize,
}

impl<T> Block<T> {
    /// Allocate an empty block with room for `capacity` elements.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of live elements in this block.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the filled prefix has reached the block capacity.
    pub(crate) fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Append an element. The caller guarantees the block is not full.
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push into a full block");
        self.data.push(value);
    }

    /// Shared access to the element at `offset`, if within the filled prefix.
    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        self.data.get(offset)
    }

    /// Mutable access to the element at `offset`, if within the filled prefix.
    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.data.get_mut(offset)
    }

    /// Consume the block, handing its live elements to the drain path.
    pub(crate) fn into_elements(self) -> Vec<T> {
        self.data
    }

    /// Storage footprint of the block's allocation in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }
}

impl<T: Default> Block<T> {
    /// Extend the filled prefix with default values up to `target_len`.
    ///
    /// Used by growing `resize` to expose new slots. `target_len` must not
    /// exceed the block capacity.
    pub(crate) fn fill_default_to(&mut self, target_len: usize) {
        debug_assert!(target_len <= self.capacity, "fill past block capacity");
        while self.data.len() < target_len {
            self.data.push(T::default());
        }
    }
}
