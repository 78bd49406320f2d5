// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-list`
//!
//! A `no_std` (with `alloc`), fixed-capacity, order-preserving list that
//! **refuses** any mutation which would push its length past a capacity
//! declared at construction time.
//!
//! The core type, [`BoundedList<T, S>`], wraps an ordered-sequence store `S`
//! (by default a [`Vec<T>`](alloc::vec::Vec)) and tracks a capacity chosen at
//! runtime. Every size-increasing call is checked against that capacity before
//! it reaches the store; everything else (indexing, iteration, removal) is
//! forwarded to the store unchanged.
//!
//! ## When to use this crate
//!
//! - You need a hard ceiling on the number of buffered items, chosen at
//!   runtime (configuration, protocol limits, ...).
//! - You want overflow to be an explicit, recoverable error instead of silent
//!   eviction or truncation.
//! - You want to keep the familiar `Vec`-like API for everything else.
//!
//! If the capacity is known at compile time and elements are small and `Copy`,
//! an inline array-backed vector is usually a better fit.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed for the lifetime of the list; `0 <= len <= capacity`
//!   holds after every completed operation.
//! - The [`OverflowPolicy`] of a `BoundedList` is always
//!   [`OverflowPolicy::Fail`]: [`BoundedList::add`] and [`BoundedList::insert`]
//!   return [`Error::Full`] when the list is full and leave it unchanged.
//! - Building from an iterator ([`BoundedList::try_from_iter`]) adds elements
//!   one at a time. On overflow it fails at the first element that does not
//!   fit, **without rolling back**: the [`FromIterError`] hands back the
//!   partially filled list.
//! - A negative capacity is rejected with [`Error::InvalidCapacity`].
//! - Index errors raised by the store ([`Error::OutOfBounds`]) pass through
//!   unchanged. Only slice-style indexing (`list[i]`) panics.
//!
//! ## Stores
//!
//! The backing container is any [`SequenceStore`]. Implementations are
//! provided for [`Vec<T>`](alloc::vec::Vec) (the default, which also unlocks
//! slice access) and [`VecDeque<T>`](alloc::collections::VecDeque).
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for [`BoundedList`] and
//!     [`OverflowPolicy`].
//!   - Lists serialize as `{ "capacity": .., "items": [..] }` and refuse to
//!     deserialize more items than their capacity.
//!
//! ## Example
//!
//! ```rust
//! use bounded_list::{BoundedList, Error, OverflowPolicy};
//!
//! let mut list: BoundedList<u8> = BoundedList::new(3).unwrap();
//! list.add(1).unwrap();
//! list.add(3).unwrap();
//! list.insert(1, 2).unwrap();
//! assert_eq!(list.as_slice(), &[1, 2, 3]);
//!
//! assert_eq!(list.add(4), Err(Error::Full { capacity: 3 }));
//! assert_eq!(list.as_slice(), &[1, 2, 3]);
//! assert_eq!(list.overflow_policy(), OverflowPolicy::Fail);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod bounded;
mod error;
mod index;
mod iter;
mod list;
mod policy;
#[cfg(feature = "serde")]
mod serde;
mod store;

// Public exports (crate API surface)
pub use bounded::Bounded;
pub use error::{Error, FromIterError};
pub use iter::IntoIter;
pub use list::BoundedList;
pub use policy::OverflowPolicy;
pub use store::SequenceStore;
