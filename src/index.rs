// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`BoundedList`](crate::BoundedList).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice behavior:
//! - panics on out-of-bounds;
//! - positional indexing works for every store;
//! - range indexing is available for `Vec`-backed lists.
//!
//! Use [`BoundedList::get`](crate::BoundedList::get) for a non-panicking lookup.

// Crate imports
use crate::{list::BoundedList, store::SequenceStore};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

#[cold]
#[track_caller]
fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T, S: SequenceStore<T>> Index<usize> for BoundedList<T, S> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &Self::Output {
        match self.store.get(i) {
            Some(item) => item,
            None => out_of_bounds(i, self.store.len()),
        }
    }
}
impl<T, S: SequenceStore<T>> IndexMut<usize> for BoundedList<T, S> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        let len = self.store.len();
        match self.store.get_mut(i) {
            Some(item) => item,
            None => out_of_bounds(i, len),
        }
    }
}

// Ranges (Vec-backed only)
macro_rules! impl_range_index {
    ($($range:ty),* $(,)?) => {$(
        impl<T> Index<$range> for BoundedList<T, Vec<T>> {
            type Output = [T];
            fn index(&self, r: $range) -> &Self::Output {
                &self.as_slice()[r]
            }
        }
        impl<T> IndexMut<$range> for BoundedList<T, Vec<T>> {
            fn index_mut(&mut self, r: $range) -> &mut Self::Output {
                &mut self.as_mut_slice()[r]
            }
        }
    )*};
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
    RangeInclusive<usize>,
    RangeFull,
);

#[cfg(test)]
mod tests {
    // Imports
    use crate::BoundedList;
    use alloc::collections::VecDeque;

    #[test]
    fn test_positional_index_on_every_store() {
        let mut v: BoundedList<i32> = BoundedList::try_from_iter(4, [1, 2, 3]).unwrap();
        assert_eq!(v[0], 1);
        v[2] = 30;
        assert_eq!(v[2], 30);

        let mut d: BoundedList<i32, VecDeque<i32>> =
            BoundedList::try_from_iter(4, [1, 2, 3]).unwrap();
        d[1] = 20;
        assert_eq!(d[1], 20);
    }

    #[test]
    fn test_range_index() {
        let mut v: BoundedList<i32> = BoundedList::try_from_iter(8, [1, 2, 3, 4, 5]).unwrap();
        assert_eq!(&v[1..3], &[2, 3]);
        assert_eq!(&v[3..], &[4, 5]);
        assert_eq!(&v[..2], &[1, 2]);
        assert_eq!(&v[..=1], &[1, 2]);
        assert_eq!(&v[1..=2], &[2, 3]);
        assert_eq!(&v[..], &[1, 2, 3, 4, 5]);
        v[..2].copy_from_slice(&[9, 8]);
        assert_eq!(v.as_slice(), &[9, 8, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the len is 2 but the index is 2")]
    fn test_index_past_len_panics() {
        let v: BoundedList<i32> = BoundedList::try_from_iter(4, [1, 2]).unwrap();
        let _ = v[2];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_mut_on_deque_past_len_panics() {
        let mut d: BoundedList<i32, VecDeque<i32>> = BoundedList::with_capacity(4);
        d[0] = 1;
    }
}
