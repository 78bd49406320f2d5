// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability shared by bounded containers.

// Crate imports
use crate::{error::Error, policy::OverflowPolicy};

/// A container with a fixed capacity and an overflow policy.
///
/// Code that only needs "add or insert, subject to a ceiling" can be written
/// against this trait and stay agnostic of both the policy and the backing
/// store.
///
/// Implementors must keep `len() <= capacity()` after every call.
///
/// ```rust
/// use bounded_list::{Bounded, BoundedList, Error};
///
/// fn fill<B: Bounded<u32>>(b: &mut B) -> Result<(), Error> {
///     while !b.is_full() {
///         let next = b.len() as u32;
///         b.try_add(next)?;
///     }
///     Ok(())
/// }
///
/// let mut list: BoundedList<u32> = BoundedList::with_capacity(3);
/// fill(&mut list).unwrap();
/// assert_eq!(list.as_slice(), &[0, 1, 2]);
/// ```
pub trait Bounded<T> {
    /// The maximum number of elements the container may hold.
    fn capacity(&self) -> usize;

    /// The policy applied when a mutation would exceed [`capacity`](Self::capacity).
    fn overflow_policy(&self) -> OverflowPolicy;

    /// The current number of elements.
    fn len(&self) -> usize;

    /// Appends `item`, subject to the overflow policy.
    fn try_add(&mut self, item: T) -> Result<(), Error>;

    /// Inserts `item` at `index`, subject to the overflow policy.
    fn try_insert(&mut self, index: usize, item: T) -> Result<(), Error>;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when no further element fits.
    #[inline]
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns how many more elements fit.
    #[inline]
    fn spare_capacity(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }
}
