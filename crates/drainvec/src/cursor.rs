//! Non-destructive iteration: a std-style borrowed iterator and a
//! random-access logical-index cursor.
//!
//! Both views hold a shared borrow of the container, so the borrow checker
//! rules out the classic hazard of mutating (or draining) a container while
//! a live iterator points into it.

use crate::vec::DrainVec;

/// Borrowed iterator over a [`DrainVec`]'s elements in index order.
///
/// Visits exactly `len()` elements. Created by [`DrainVec::iter`].
pub struct Iter<'a, T> {
    vec: &'a DrainVec<T>,
    /// Next index to yield from the front.
    front: usize,
    /// One past the last index to yield from the back.
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(vec: &'a DrainVec<T>) -> Self {
        Self {
            vec,
            front: 0,
            back: vec.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self
            .vec
            .get(self.front)
            .unwrap_or_else(|| panic!("iterated into released block at index {}", self.front));
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let item = self
            .vec
            .get(self.back)
            .unwrap_or_else(|| panic!("iterated into released block at index {}", self.back));
        Some(item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// A random-access cursor over a [`DrainVec`]'s logical indices.
///
/// The cursor is a (logical index, container borrow) pair: it owns no
/// storage and every dereference goes through the block/offset index
/// mapping. Equality and ordering compare logical indices only, so cursors
/// behave correctly under ordering-sensitive consumers.
///
/// Created by [`DrainVec::cursor`].
pub struct Cursor<'a, T> {
    vec: &'a DrainVec<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(vec: &'a DrainVec<T>, index: usize) -> Self {
        Self { vec, index }
    }

    /// The cursor's logical index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the cursor by `n` positions, forward or backward.
    ///
    /// # Panics
    ///
    /// Panics if the move would take the index below 0. Moving past
    /// `len()` is allowed (an end cursor sits at `len()`); only
    /// dereferencing there returns `None`.
    pub fn advance(&mut self, n: isize) {
        let index = self.index;
        self.index = index
            .checked_add_signed(n)
            .unwrap_or_else(|| panic!("cursor moved {n} from index {index}"));
    }

    /// Signed distance from `self` to `other`: `other.index() - self.index()`.
    ///
    /// The sign convention is `other` minus `self`, and it is a contract:
    /// ordering-sensitive consumers that reorder through cursor distances
    /// depend on it, and reversing it silently breaks them.
    pub fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }

    /// Dereference the cursor through the index mapping.
    ///
    /// Returns `None` at or past `len()`, or inside a released block.
    pub fn get(&self) -> Option<&'a T> {
        self.vec.get(self.index)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> std::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor").field("index", &self.index).finish()
    }
}
