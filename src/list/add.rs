// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList, store::SequenceStore};

impl<T, S: SequenceStore<T>> BoundedList<T, S> {
    /// Appends `item` at the back.
    ///
    /// Returns [`Error::Full`] if `len == capacity`; the list is left
    /// unchanged and `item` is dropped.
    #[inline]
    pub fn add(&mut self, item: T) -> Result<(), Error> {
        self.ensure_room()?;
        self.store.push(item);
        Ok(())
    }

    /// Alias of [`add`](Self::add) for `Vec`-style call sites.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<(), Error> {
        self.add(item)
    }

    /// Adds every element of `iter` in order, one [`add`](Self::add) at a time.
    ///
    /// Not atomic: on overflow this returns [`Error::Full`] at the first
    /// element that does not fit, and every element added before it stays.
    /// The iterator is consumed up to and including the refused element.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        for item in iter {
            self.add(item)?;
        }
        Ok(())
    }

    /// Appends clones of every element of `src` if they all fit; otherwise
    /// returns [`Error::Full`] and leaves the list unchanged.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.spare_capacity() {
            return Err(Error::Full {
                capacity: self.capacity,
            });
        }
        for item in src {
            self.store.push(item.clone());
        }
        Ok(())
    }
}
