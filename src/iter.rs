// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedList`](crate::BoundedList).
//!
//! - `IntoIter<T, S>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&BoundedList` and `&mut BoundedList` iterate with the store's borrowing
//!   iterators.

// Crate imports
use crate::{list::BoundedList, store::SequenceStore};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{iter::FusedIterator, marker::PhantomData};

/// Owned iterator returned by `BoundedList::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, S: SequenceStore<T> = Vec<T>> {
    inner: S::IntoIter,
    _marker: PhantomData<fn() -> T>,
}

impl<T, S: SequenceStore<T>> Iterator for IntoIter<T, S> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T, S: SequenceStore<T>> DoubleEndedIterator for IntoIter<T, S> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}

impl<T, S: SequenceStore<T>> FusedIterator for IntoIter<T, S> where S::IntoIter: FusedIterator {}
impl<T, S: SequenceStore<T>> ExactSizeIterator for IntoIter<T, S> {}

impl<'a, T: 'a, S: SequenceStore<T> + 'a> IntoIterator for &'a BoundedList<T, S> {
    type Item = &'a T;
    type IntoIter = S::Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}
impl<'a, T: 'a, S: SequenceStore<T> + 'a> IntoIterator for &'a mut BoundedList<T, S> {
    type Item = &'a mut T;
    type IntoIter = S::IterMut<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.store.iter_mut()
    }
}
impl<T, S: SequenceStore<T>> IntoIterator for BoundedList<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T, S>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.store.into_elements(),
            _marker: PhantomData,
        }
    }
}
