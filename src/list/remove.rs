// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList, store::SequenceStore};

impl<T, S: SequenceStore<T>> BoundedList<T, S> {
    /// Removes and returns the element at `index`, shifting later elements
    /// forward. Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.store.remove(index)
    }

    /// Fallible variant of [`remove`](Self::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.store.len();
        self.store
            .remove(index)
            .ok_or(Error::OutOfBounds { index, len })
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.store.pop()
    }

    /// Removes every element. The capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Shrinks to `len` elements if currently longer; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.store.truncate(len);
    }

    /// Retains only the elements for which `f` returns `true`, preserving order.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.store.retain(f);
    }
}
