// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Generated gate dispatchers.
//!
//! One function per (catalog gate, control level), produced by the build
//! script from [`crate::catalog::CATALOG`]:
//!
//! | level | name       | operands                                   |
//! |-------|------------|--------------------------------------------|
//! | 0     | `pauliX`   | `[theta,] targets.., c_control, same_step` |
//! | 1     | `cPauliX`  | `[theta,] c_qbits, targets.., same_step`   |
//! | 2     | `ccPauliX` | `[theta,] c_qbits0, c_qbits1, targets.., same_step` |
//!
//! Operands accept a single [`QBit`](crate::handle::QBit) or a collection
//! (`&[QBit]`, `&Vec<QBit>`, `&[QBit; N]`).

include!(concat!(env!("OUT_DIR"), "/bindings/gates.rs"));
