// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overflow policies for bounded containers.

// Core imports
use core::fmt;

/// What a bounded container does when a mutation would exceed its capacity.
///
/// Callers and tooling use this to tell bounded containers apart without
/// probing their behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OverflowPolicy {
    /// Reject the mutation with [`Error::Full`](crate::Error::Full) and leave
    /// the container unchanged.
    #[default]
    Fail,
}

impl OverflowPolicy {
    /// Returns the stable lowercase name of this policy.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
