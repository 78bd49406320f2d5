// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList, store::SequenceStore};

// Core imports
use core::marker::PhantomData;

// Capacities above this grow the store on demand instead of reserving up front.
const MAX_PREALLOCATION: usize = 4096;

impl<T, S: SequenceStore<T>> BoundedList<T, S> {
    /// Constructs an empty list that holds at most `capacity` elements.
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity < 0`.
    ///
    /// ```rust
    /// use bounded_list::{BoundedList, Error};
    ///
    /// let list: BoundedList<u8> = BoundedList::new(2).unwrap();
    /// assert_eq!(list.capacity(), 2);
    /// assert_eq!(BoundedList::<u8>::new(-1).unwrap_err(), Error::InvalidCapacity);
    /// ```
    #[inline]
    pub fn new(capacity: isize) -> Result<Self, Error> {
        usize::try_from(capacity)
            .map(Self::with_capacity)
            .map_err(|_| Error::InvalidCapacity)
    }

    /// Constructs an empty list that holds at most `capacity` elements.
    ///
    /// The store is pre-sized for `capacity` elements, up to an internal limit.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: S::with_capacity(capacity.min(MAX_PREALLOCATION)),
            capacity,
            _marker: PhantomData,
        }
    }
}
