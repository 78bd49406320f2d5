// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slice access for `Vec`-backed lists.

// Crate imports
use crate::list::BoundedList;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::ops::{Deref, DerefMut};

impl<T> BoundedList<T, Vec<T>> {
    /// Returns the elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Returns the elements as a mutable slice.
    ///
    /// The slice can reorder or overwrite elements but never change the length.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.store.as_mut_slice()
    }
}

impl<T> Deref for BoundedList<T, Vec<T>> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for BoundedList<T, Vec<T>> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for BoundedList<T, Vec<T>> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for BoundedList<T, Vec<T>> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
