//! The container: a block-segmented sequence with a draining traversal.

use smallvec::SmallVec;

use crate::block::{split_index, Block};
use crate::config::StoreConfig;
use crate::cursor::{Cursor, Iter};
use crate::drain::Drain;

/// Number of block slots held inline in the spine before it spills to the
/// heap. Small containers never allocate the spine separately.
pub(crate) const INLINE_BLOCKS: usize = 4;

/// The block spine. A `None` slot is a block that a draining pass released.
pub(crate) type Spine<T> = SmallVec<[Option<Block<T>>; INLINE_BLOCKS]>;

/// A sequence container that grows block-by-block and can free memory
/// incrementally while being drained.
///
/// Elements live in fixed-capacity blocks allocated one at a time; growth
/// never copies or moves previously written elements. A [`drain`] pass
/// releases each block as soon as its last element has been consumed, so
/// peak resident memory during a drain is bounded by the *unvisited* suffix
/// plus one block — the property this container exists to provide.
///
/// Built for append-heavy, consume-once workloads (tens to hundreds of
/// millions of elements). Not a general `Vec` replacement: [`reserve`] is
/// deliberately a no-op, shrinking [`resize`] is destructive, and indexed
/// access into a released block panics.
///
/// [`drain`]: DrainVec::drain
/// [`reserve`]: DrainVec::reserve
/// [`resize`]: DrainVec::resize
pub struct DrainVec<T> {
    /// Elements per block. Fixed at construction.
    pub(crate) block_capacity: usize,
    /// Number of logically valid elements.
    pub(crate) len: usize,
    /// Ordered block slots, filled left to right. The only interior `None`
    /// slots are blocks released by a draining pass.
    pub(crate) blocks: Spine<T>,
}

impl<T> DrainVec<T> {
    /// Create an empty container with the default block capacity for `T`
    /// (see [`StoreConfig::for_element`]). One block is allocated up front.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::for_element::<T>())
    }

    /// Create an empty container with an explicit per-block element count.
    pub fn with_block_capacity(block_capacity: usize) -> Self {
        Self::with_config(StoreConfig::with_block_capacity(block_capacity))
    }

    /// Create an empty container from a [`StoreConfig`].
    ///
    /// Matches the construction contract: one block allocated, length 0.
    pub fn with_config(config: StoreConfig) -> Self {
        let mut blocks: Spine<T> = SmallVec::new();
        blocks.push(Some(Block::new(config.block_capacity)));
        Self {
            block_capacity: config.block_capacity,
            len: 0,
            blocks,
        }
    }

    /// Number of logically valid elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total element capacity across all block slots.
    ///
    /// Always an exact multiple of the block capacity, and always
    /// `>= len()`. Counts released slots too: capacity is a property of the
    /// spine, not of which blocks are still resident.
    pub fn capacity(&self) -> usize {
        self.blocks.len() * self.block_capacity
    }

    /// Elements per block, fixed at construction.
    pub fn block_capacity(&self) -> usize {
        self.block_capacity
    }

    /// Number of block slots in the spine, released or not.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of blocks still resident (not released by a drain).
    pub fn live_blocks(&self) -> usize {
        self.blocks.iter().filter(|slot| slot.is_some()).count()
    }

    /// Storage footprint of all resident blocks in bytes.
    ///
    /// Drops as a draining pass releases blocks.
    pub fn memory_bytes(&self) -> usize {
        self.blocks
            .iter()
            .flatten()
            .map(|block| block.memory_bytes())
            .sum()
    }

    /// Append an element, allocating a new block only when every slot in
    /// the current spine is filled. Amortised O(1): one allocation per
    /// `block_capacity` appends.
    ///
    /// # Panics
    ///
    /// Panics if the append lands in a block released by an earlier drain.
    /// A drained container must be [`clear`](DrainVec::clear)ed before reuse.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.blocks.push(Some(Block::new(self.block_capacity)));
        }
        let (block_index, _) = split_index(self.len, self.block_capacity);
        let block = self.blocks[block_index]
            .as_mut()
            .unwrap_or_else(|| panic!("push into released block {block_index}; clear() first"));
        block.push(value);
        self.len += 1;
    }

    /// Does nothing, by design.
    ///
    /// This container refuses to pre-allocate: a single huge reservation is
    /// exactly the cost it was built to avoid, and blocks are cheap to add
    /// as appends arrive. This is a deliberate contract deviation from
    /// `Vec::reserve`, not an unimplemented method.
    pub fn reserve(&mut self, _additional: usize) {}

    /// Shared access to the element at `index`.
    ///
    /// Returns `None` if `index >= len()` or the element's block has been
    /// released by a draining pass.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (block_index, offset) = split_index(index, self.block_capacity);
        self.blocks.get(block_index)?.as_ref()?.get(offset)
    }

    /// Mutable access to the element at `index`.
    ///
    /// Same range and released-block rules as [`get`](DrainVec::get).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let (block_index, offset) = split_index(index, self.block_capacity);
        self.blocks.get_mut(block_index)?.as_mut()?.get_mut(offset)
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Mutable access to the last element, if any.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.len.checked_sub(1)?;
        self.get_mut(self.len - 1)
    }

    /// Release every block, empty the spine, and reset the length to 0.
    ///
    /// After `clear()`, `capacity()` is 0 and the next push re-allocates
    /// from the empty state. This is also the way to return a drained
    /// container to service.
    pub fn clear(&mut self) {
        self.blocks = SmallVec::new();
        self.len = 0;
    }

    /// Exchange the entire state of two containers in O(1).
    ///
    /// No block is copied or reallocated; lengths, spines, and block
    /// capacities move wholesale.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Borrowed iterator over the elements in index order.
    ///
    /// # Panics
    ///
    /// Iteration panics if it reaches an index inside a released block.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A random-access cursor positioned at `index`.
    ///
    /// The cursor is the ordering-sensitive surface: it compares and
    /// measures distance by logical index. See [`Cursor::distance_to`] for
    /// the sign convention.
    pub fn cursor(&self, index: usize) -> Cursor<'_, T> {
        Cursor::new(self, index)
    }

    /// Begin a destructive draining traversal.
    ///
    /// The returned iterator yields every element by value in index order,
    /// releasing each block the moment its last element has been consumed.
    /// The exclusive borrow enforces the single-pass contract: no second
    /// drain and no reads can overlap an unfinished one.
    ///
    /// After the drain completes the container is in its released terminal
    /// state — `len()` is unchanged but every visited slot is vacant, and
    /// indexed access to it panics. Call [`clear`](DrainVec::clear) to
    /// return it to service.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }
}

impl<T: Default> DrainVec<T> {
    /// Resize the container to `new_len` elements.
    ///
    /// Growing appends whole blocks until capacity covers `new_len` and
    /// fills the newly exposed slots with `T::default()`; previously
    /// written elements are preserved.
    ///
    /// Shrinking is **destructive**: every block is released and a fresh
    /// spine of `1 + new_len / block_capacity` default-filled blocks is
    /// allocated. Data in the retained range `[0, new_len)` is NOT
    /// preserved — callers get defaults back. This mirrors the historical
    /// shrink behaviour this container was modelled on; tests pin it down
    /// so any future change to a preserving shrink is a deliberate one.
    ///
    /// # Panics
    ///
    /// Growing panics if it must fill through a released block.
    pub fn resize(&mut self, new_len: usize) {
        if new_len >= self.len {
            while self.capacity() < new_len {
                self.blocks.push(Some(Block::new(self.block_capacity)));
            }
            self.fill_defaults_to(new_len);
        } else {
            let block_count = 1 + new_len / self.block_capacity;
            self.blocks.clear();
            for i in 0..block_count {
                let start = i * self.block_capacity;
                let fill = new_len.saturating_sub(start).min(self.block_capacity);
                let mut block = Block::new(self.block_capacity);
                block.fill_default_to(fill);
                self.blocks.push(Some(block));
            }
        }
        self.len = new_len;
    }

    /// Fill every block's exposed prefix with defaults up to logical index
    /// `new_len`. Capacity must already cover `new_len`.
    fn fill_defaults_to(&mut self, new_len: usize) {
        for (i, slot) in self.blocks.iter_mut().enumerate() {
            let start = i * self.block_capacity;
            if start >= new_len {
                break;
            }
            let target = (new_len - start).min(self.block_capacity);
            let block = slot
                .as_mut()
                .unwrap_or_else(|| panic!("resize through released block {i}; clear() first"));
            if block.len() < target {
                block.fill_default_to(target);
            }
        }
    }
}

impl<T> Default for DrainVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for DrainVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrainVec")
            .field("len", &self.len)
            .field("block_capacity", &self.block_capacity)
            .field("blocks", &self.blocks.len())
            .field("live_blocks", &self.live_blocks())
            .finish()
    }
}

impl<T> Extend<T> for DrainVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for DrainVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> std::ops::Index<usize> for DrainVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()` or the element's block has been released.
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index).unwrap_or_else(|| {
            panic!("index {index} out of bounds (len {len}) or inside a released block")
        })
    }
}

impl<T> std::ops::IndexMut<usize> for DrainVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index).unwrap_or_else(|| {
            panic!("index {index} out of bounds (len {len}) or inside a released block")
        })
    }
}

impl<'a, T> IntoIterator for &'a DrainVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
