// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedList` type and its inherent API.
//!
//! `BoundedList<T, S>` owns an ordered-sequence store `S` and a capacity fixed
//! at construction. Size-increasing methods check the capacity first and fail
//! without touching the store; everything else is forwarded to the store.

mod add;
mod insert;
mod new;
mod remove;
mod slice;
mod try_from_iter;

// Crate imports
use crate::{bounded::Bounded, error::Error, policy::OverflowPolicy, store::SequenceStore};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// A fixed-capacity, order-preserving list that fails on overflow.
///
/// `BoundedList<T, S>` wraps an ordered-sequence store `S` (by default
/// `Vec<T>`) and refuses any mutation that would push its length past the
/// capacity given at construction.
///
/// # Invariants
///
/// - `capacity` never changes after construction.
/// - `0 <= len() <= capacity()` after every completed call.
/// - The store is owned exclusively; it is never handed out by value or
///   mutably except through size-preserving views (`get_mut`, `iter_mut`,
///   `as_mut_slice`).
///
/// # States
///
/// A list is either **not full** (`len() < capacity()`) or **full**
/// (`len() == capacity()`). [`add`](Self::add) and [`insert`](Self::insert)
/// move a list from not full to full and are rejected with [`Error::Full`]
/// while it is full. Any removal makes room again. There is no terminal
/// state.
///
/// # Fallible vs partial operations
///
/// - **Atomic** (error on overflow, no changes on error):
///   [`add`](Self::add), [`push`](Self::push), [`insert`](Self::insert),
///   [`extend_from_slice`](Self::extend_from_slice).
/// - **Partial** (elements added before the failure stay):
///   [`try_from_iter`](Self::try_from_iter),
///   [`try_from_iter_with_capacity`](Self::try_from_iter_with_capacity),
///   [`try_extend`](Self::try_extend).
///
/// # Complexity
///
/// Costs are those of the store. With `Vec`: `add` is amortized `O(1)`,
/// `insert`/`remove` at an arbitrary index are `O(len)`.
///
/// # Examples
///
/// ```rust
/// use bounded_list::{BoundedList, Error};
///
/// let mut list: BoundedList<char> = BoundedList::new(3).unwrap();
/// list.add('a').unwrap();
/// list.add('b').unwrap();
/// list.add('c').unwrap();
/// assert!(list.is_full());
/// assert_eq!(list.insert(1, 'x'), Err(Error::Full { capacity: 3 }));
///
/// list.remove(2);
/// list.insert(1, 'x').unwrap();
/// assert_eq!(list.as_slice(), &['a', 'x', 'b']);
/// ```
pub struct BoundedList<T, S = Vec<T>> {
    pub(crate) store: S,
    pub(crate) capacity: usize,
    pub(crate) _marker: PhantomData<fn() -> T>,
}

impl<T, S: SequenceStore<T>> BoundedList<T, S> {
    /// The overflow policy shared by every `BoundedList`.
    pub const OVERFLOW_POLICY: OverflowPolicy = OverflowPolicy::Fail;

    /// Returns the capacity fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the overflow policy (always [`OverflowPolicy::Fail`]).
    #[inline]
    pub fn overflow_policy(&self) -> OverflowPolicy {
        Self::OVERFLOW_POLICY
    }

    /// Returns the current number of elements (`0..=capacity`).
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns `true` if `len == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.store.len() >= self.capacity
    }

    /// Returns `capacity - len`, the number of additional elements that fit.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity - self.store.len()
    }

    /// Returns `Some(&T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.store.get(index)
    }

    /// Returns `Some(&mut T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.store.get_mut(index)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.store.get(0)
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.store.len().checked_sub(1).and_then(|i| self.store.get(i))
    }

    /// Returns `true` if the list contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.store.iter().any(|e| e == x)
    }

    // iterators
    /// Iterates over the elements front to back.
    #[inline]
    pub fn iter(&self) -> S::Iter<'_> {
        self.store.iter()
    }

    /// Iterates mutably over the elements front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> S::IterMut<'_> {
        self.store.iter_mut()
    }

    /// Fails with [`Error::Full`] if one more element would exceed capacity.
    #[inline]
    pub(crate) fn ensure_room(&self) -> Result<(), Error> {
        match Self::OVERFLOW_POLICY {
            OverflowPolicy::Fail if self.is_full() => Err(Error::Full {
                capacity: self.capacity,
            }),
            OverflowPolicy::Fail => Ok(()),
        }
    }
}

impl<T, S: SequenceStore<T>> Bounded<T> for BoundedList<T, S> {
    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn overflow_policy(&self) -> OverflowPolicy {
        Self::OVERFLOW_POLICY
    }

    #[inline]
    fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    fn try_add(&mut self, item: T) -> Result<(), Error> {
        self.add(item)
    }

    #[inline]
    fn try_insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        self.insert(index, item)
    }
}

struct Elements<'a, T, S>(&'a S, PhantomData<fn() -> T>);

impl<T: fmt::Debug, S: SequenceStore<T>> fmt::Debug for Elements<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: fmt::Debug, S: SequenceStore<T>> fmt::Debug for BoundedList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedList")
            .field("capacity", &self.capacity)
            .field("len", &self.store.len())
            .field("elements", &Elements(&self.store, PhantomData))
            .finish()
    }
}

impl<T, S: Clone> Clone for BoundedList<T, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            capacity: self.capacity,
            _marker: PhantomData,
        }
    }
}

// Two lists are equal when they have the same capacity and the same elements
// in the same order.
impl<T: PartialEq, S: SequenceStore<T>> PartialEq for BoundedList<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.store.iter().eq(other.store.iter())
    }
}
impl<T: Eq, S: SequenceStore<T>> Eq for BoundedList<T, S> {}

impl<T: Hash, S: SequenceStore<T>> Hash for BoundedList<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.store.len().hash(state);
        for item in self.store.iter() {
            item.hash(state);
        }
    }
}
