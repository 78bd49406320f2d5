// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, FromIterError},
    list::BoundedList,
    store::SequenceStore,
};

impl<T, S: SequenceStore<T>> BoundedList<T, S> {
    /// Constructs a list with `capacity` and adds every element of `iter` in
    /// order, as if by repeated [`add`](Self::add).
    ///
    /// Semantics:
    /// - `capacity < 0` fails with [`Error::InvalidCapacity`] before the
    ///   iterator is touched; the partial list is empty with capacity `0`.
    /// - On the first element that would exceed `capacity`, this fails with
    ///   [`Error::Full`].
    /// - Construction is **not** rolled back: the [`FromIterError`] carries
    ///   the list holding every element added before the failure.
    /// - The iterator is consumed up to and including the refused element.
    ///
    /// ```rust
    /// use bounded_list::BoundedList;
    ///
    /// let ok: BoundedList<i32> = BoundedList::try_from_iter(5, [1, 2, 3]).unwrap();
    /// assert_eq!(ok.as_slice(), &[1, 2, 3]);
    ///
    /// let err = BoundedList::<i32>::try_from_iter(2, [1, 2, 3]).unwrap_err();
    /// assert_eq!(err.partial().as_slice(), &[1, 2]);
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(
        capacity: isize,
        iter: I,
    ) -> Result<Self, FromIterError<T, S>> {
        match usize::try_from(capacity) {
            Ok(capacity) => Self::try_from_iter_with_capacity(capacity, iter),
            Err(_) => Err(FromIterError::new(
                Error::InvalidCapacity,
                Self::with_capacity(0),
            )),
        }
    }

    /// Like [`try_from_iter`](Self::try_from_iter), for a capacity that is
    /// already a `usize`.
    pub fn try_from_iter_with_capacity<I: IntoIterator<Item = T>>(
        capacity: usize,
        iter: I,
    ) -> Result<Self, FromIterError<T, S>> {
        let mut list = Self::with_capacity(capacity);
        match list.try_extend(iter) {
            Ok(()) => Ok(list),
            Err(error) => Err(FromIterError::new(error, list)),
        }
    }
}
