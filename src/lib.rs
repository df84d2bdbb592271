// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Qukit gate bindings
//!
//! This crate exposes the qukit gate set as typed, broadcasting functions over
//! an opaque native amplitude engine. The gate functions are generated at
//! build time from a small catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Gate catalog (catalog.rs)           │
//! ├─────────────────────────────────────────┤
//! │  Binding generator (build.rs, CLI)       │
//! ├──────────────────┬──────────────────────┤
//! │ Generated gates  │ rotationU,           │
//! │ (gates)          │ measurement, reset   │
//! ├──────────────────┴──────────────────────┤
//! │  NativeGates / NativeSpecials verbs      │
//! ├─────────────────────────────────────────┤
//! │  NativeEngine::apply (external engine)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Gate descriptors and catalog validation
//! - [`generator`]: Catalog to source expansion
//! - [`gates`]: Generated dispatchers
//! - [`dispatch`]: Operand model and hand-written dispatchers
//! - [`engine`]: Native boundary and the reference recorder
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```ignore
//! use qukit_bindings::engine::CircuitRecorder;
//! use qukit_bindings::gates::{cPauliX, hadamard};
//!
//! let mut rec = CircuitRecorder::default();
//! let q = rec.qbits(4)?;
//! hadamard(&mut rec, &q, None, true)?;
//! cPauliX(&mut rec, &q[..2], &q[2..], false)?;
//! println!("{}", rec);
//! ```

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod gates;
pub mod generator;
pub mod handle;
pub mod variant;

pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
