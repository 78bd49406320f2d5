// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `BoundedList`.
//!
//! [`Error`] represents capacity and bounds conditions. It is `Copy` and
//! implements `core::error::Error`.
//!
//! [`FromIterError`] is returned when building a list from an iterator fails
//! part-way through; it carries the partially filled list.

// Crate imports
use crate::{list::BoundedList, store::SequenceStore};

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`BoundedList`](crate::BoundedList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A negative capacity was requested at construction.
    InvalidCapacity,
    /// The operation would push the length past `capacity`.
    Full {
        /// Capacity of the list that refused the element.
        capacity: usize,
    },
    /// An index was outside the store's current bounds.
    ///
    /// Raised by the backing [`SequenceStore`](crate::SequenceStore) and passed
    /// through unchanged.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the store at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity => f.write_str("capacity must be >= 0"),
            Self::Full { capacity } => write!(f, "capacity of {capacity} exceeded"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl CoreError for Error {}

/// The error returned by [`BoundedList::try_from_iter`] and
/// [`BoundedList::try_from_iter_with_capacity`].
///
/// Construction from an iterator is **not** atomic: every element added
/// before the failing one stays in the list. The partially filled list is
/// available through [`partial`](Self::partial) and
/// [`into_partial`](Self::into_partial).
///
/// ```rust
/// use bounded_list::{BoundedList, Error};
///
/// let err = BoundedList::<i32>::try_from_iter(2, [1, 2, 3]).unwrap_err();
/// assert_eq!(err.error(), Error::Full { capacity: 2 });
/// assert_eq!(err.into_partial().as_slice(), &[1, 2]);
/// ```
pub struct FromIterError<T, S = alloc::vec::Vec<T>> {
    error: Error,
    partial: BoundedList<T, S>,
}

impl<T, S: SequenceStore<T>> FromIterError<T, S> {
    pub(crate) fn new(error: Error, partial: BoundedList<T, S>) -> Self {
        Self { error, partial }
    }

    /// Returns the error that stopped construction.
    #[inline]
    pub fn error(&self) -> Error {
        self.error
    }

    /// Returns the list as it was when construction stopped.
    #[inline]
    pub fn partial(&self) -> &BoundedList<T, S> {
        &self.partial
    }

    /// Consumes the error, returning the partially filled list.
    #[inline]
    pub fn into_partial(self) -> BoundedList<T, S> {
        self.partial
    }

    /// Consumes the error, returning both the cause and the partial list.
    #[inline]
    pub fn into_parts(self) -> (Error, BoundedList<T, S>) {
        (self.error, self.partial)
    }
}

impl<T, S: SequenceStore<T>> From<FromIterError<T, S>> for Error {
    fn from(err: FromIterError<T, S>) -> Self {
        err.error
    }
}

impl<T, S> fmt::Debug for FromIterError<T, S>
where
    S: SequenceStore<T>,
    BoundedList<T, S>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromIterError")
            .field("error", &self.error)
            .field("partial", &self.partial)
            .finish()
    }
}

impl<T, S: SequenceStore<T>> fmt::Display for FromIterError<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bounded list construction stopped after {} element(s): {}",
            self.partial.len(),
            self.error
        )
    }
}

impl<T, S> CoreError for FromIterError<T, S>
where
    S: SequenceStore<T>,
    BoundedList<T, S>: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn CoreError + 'static)> {
        Some(&self.error)
    }
}
