// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList, store::SequenceStore};

impl<T, S: SequenceStore<T>> BoundedList<T, S> {
    /// Inserts `item` at `index`, shifting later elements one position back.
    ///
    /// - Returns [`Error::Full`] if `len == capacity`, whatever `index` is.
    /// - Otherwise the store decides on `index`; `index > len` yields the
    ///   store's [`Error::OutOfBounds`].
    ///
    /// On error the list is left unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        self.ensure_room()?;
        self.store.insert(index, item)
    }
}
