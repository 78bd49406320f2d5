// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The ordered-sequence store abstraction behind [`BoundedList`](crate::BoundedList).
//!
//! A store is an unbounded, index-addressable, insertion-ordered container.
//! It knows nothing about capacity; the list checks capacity before every
//! size-increasing call reaches the store.
//!
//! Implementations are provided for `Vec<T>` and `VecDeque<T>`.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::{
    collections::{VecDeque, vec_deque},
    vec::{self, Vec},
};

// Core imports
use core::slice;

/// An unbounded ordered sequence used as the backing storage of a
/// [`BoundedList`](crate::BoundedList).
///
/// Index semantics follow `Vec`: positions run from `0` to `len() - 1`, and
/// `insert` accepts any `index <= len()`.
pub trait SequenceStore<T> {
    /// Borrowing iterator, front to back.
    type Iter<'a>: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Mutably borrowing iterator, front to back.
    type IterMut<'a>: DoubleEndedIterator<Item = &'a mut T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Owning iterator, front to back.
    type IntoIter: DoubleEndedIterator<Item = T> + ExactSizeIterator;

    /// Creates an empty store, pre-allocating room for `capacity` elements.
    ///
    /// The hint only affects allocation, never behavior.
    fn with_capacity(capacity: usize) -> Self;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the element at `index` mutably, or `None` if `index >= len()`.
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Appends `value` at the back.
    fn push(&mut self, value: T);

    /// Inserts `value` at `index`, shifting later elements one position back.
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len()`; the store is left
    /// unchanged in that case.
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error>;

    /// Removes and returns the element at `index`, or `None` if out of bounds.
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Removes and returns the last element, if any.
    fn pop(&mut self) -> Option<T>;

    /// Removes every element.
    fn clear(&mut self);

    /// Shortens the store to `len` elements; no-op if already shorter.
    fn truncate(&mut self, len: usize);

    /// Keeps only the elements for which `f` returns `true`, preserving order.
    fn retain<F: FnMut(&T) -> bool>(&mut self, f: F);

    /// Iterates over the elements by reference.
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterates over the elements by mutable reference.
    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Consumes the store, yielding the elements by value.
    fn into_elements(self) -> Self::IntoIter;
}

impl<T> SequenceStore<T> for Vec<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        T: 'a;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = Vec::len(self);
        if index > len {
            return Err(Error::OutOfBounds { index, len });
        }
        Vec::insert(self, index, value);
        Ok(())
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| Vec::remove(self, index))
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    #[inline]
    fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        Vec::retain(self, f);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    #[inline]
    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }

    #[inline]
    fn into_elements(self) -> Self::IntoIter {
        IntoIterator::into_iter(self)
    }
}

impl<T> SequenceStore<T> for VecDeque<T> {
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;
    type IterMut<'a>
        = vec_deque::IterMut<'a, T>
    where
        T: 'a;
    type IntoIter = vec_deque::IntoIter<T>;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = VecDeque::len(self);
        if index > len {
            return Err(Error::OutOfBounds { index, len });
        }
        VecDeque::insert(self, index, value);
        Ok(())
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }

    #[inline]
    fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        VecDeque::retain(self, f);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    #[inline]
    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        VecDeque::iter_mut(self)
    }

    #[inline]
    fn into_elements(self) -> Self::IntoIter {
        IntoIterator::into_iter(self)
    }
}
