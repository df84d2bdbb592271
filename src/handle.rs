// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Opaque register handles.
//!
//! A handle is an index into an engine-owned register. Dispatchers never look
//! inside it; they only copy it into native calls.

use std::fmt;

/// Common surface of quantum and classical handles.
pub trait Handle: Copy + fmt::Debug + PartialEq {
    /// Register index the handle refers to.
    fn index(self) -> usize;
}

/// Handle to one qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QBit(usize);

/// Handle to one classical bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bit(usize);

impl QBit {
    /// Wrap a raw register index. Engines mint handles; callers normally
    /// receive them from an allocator.
    pub const fn from_raw(index: usize) -> Self {
        Self(index)
    }
}

impl Bit {
    pub const fn from_raw(index: usize) -> Self {
        Self(index)
    }
}

impl Handle for QBit {
    fn index(self) -> usize {
        self.0
    }
}

impl Handle for Bit {
    fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for QBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}
