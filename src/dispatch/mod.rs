// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Invocation dispatch.
//!
//! Every dispatcher, generated or hand-written, follows one contract:
//!
//! 1. All operands must share a shape. Scalars and collections never mix.
//! 2. Collections fan out pairwise, in ascending order, up to the length of
//!    the shortest one. An empty collection is a no-op.
//! 3. Scalars select exactly one native entry point from the timing and
//!    conditioning of the call, and issue it.
//!
//! Fan-out is sequential and has no rollback: a fault at element `k` leaves
//! elements `0..k` applied.

pub mod measurement;
pub mod reset;
pub mod rotation;

use std::fmt;

use tracing::warn;

use crate::error::{DispatchError, Error};
use crate::handle::{Bit, Handle, QBit};

pub use measurement::{measurement, Basis};
pub use reset::reset;
pub use rotation::{cRotationU, ccRotationU, rotationU};

/// One operand of a dispatcher call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a, H> {
    Scalar(H),
    Collection(&'a [H]),
}

/// Shape of an operand, used in mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandShape {
    Scalar,
    Collection,
}

impl fmt::Display for OperandShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandShape::Scalar => write!(f, "scalar"),
            OperandShape::Collection => write!(f, "collection"),
        }
    }
}

impl<'a, H: Handle> Operand<'a, H> {
    pub fn shape(&self) -> OperandShape {
        match self {
            Operand::Scalar(_) => OperandShape::Scalar,
            Operand::Collection(_) => OperandShape::Collection,
        }
    }

    /// Number of handles: 1 for a scalar.
    pub fn len(&self) -> usize {
        match self {
            Operand::Scalar(_) => 1,
            Operand::Collection(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_scalar_operand {
    ($($handle:ty),*) => {
        $(
            impl<'a> From<$handle> for Operand<'a, $handle> {
                fn from(handle: $handle) -> Self {
                    Operand::Scalar(handle)
                }
            }
        )*
    };
}

impl_scalar_operand!(QBit, Bit);

impl<'a, H> From<&'a [H]> for Operand<'a, H> {
    fn from(items: &'a [H]) -> Self {
        Operand::Collection(items)
    }
}

impl<'a, H> From<&'a Vec<H>> for Operand<'a, H> {
    fn from(items: &'a Vec<H>) -> Self {
        Operand::Collection(items.as_slice())
    }
}

impl<'a, H, const N: usize> From<&'a [H; N]> for Operand<'a, H> {
    fn from(items: &'a [H; N]) -> Self {
        Operand::Collection(items.as_slice())
    }
}

/// Broadcast length for a set of collection lengths: the shortest one.
pub fn min_len(lengths: &[usize]) -> usize {
    lengths.iter().copied().min().unwrap_or(0)
}

/// Build the error for a call whose operands disagree on shape.
pub fn type_mismatch(function: &'static str, shapes: &[OperandShape]) -> Error {
    warn!(function, ?shapes, "Rejected call with mixed operand shapes");
    Error::Dispatch(DispatchError::TypeMismatch {
        function,
        shapes: shapes.to_vec(),
    })
}
