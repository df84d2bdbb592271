// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Native engine boundary.
//!
//! The engine is consumed through one required method, [`NativeEngine::apply`].
//! Every native verb the dispatchers call is a provided method that builds a
//! [`NativeCall`] and funnels it through `apply`:
//!
//! - [`NativeGates`]: generated, one verb per catalog entry point
//! - [`NativeSpecials`]: `rotation_u`, measurement and reset entry points
//!
//! Both traits are implemented for every `NativeEngine`.

mod native;
pub mod recorder;
pub mod shared;
pub mod special;

use std::fmt;

use crate::error::EngineFault;
use crate::handle::{Bit, QBit};
use crate::variant::{ExecutionVariant, Timing};

pub use native::NativeGates;
pub use recorder::CircuitRecorder;
pub use shared::SharedEngine;
pub use special::NativeSpecials;

/// An engine that accepts native calls.
pub trait NativeEngine {
    /// Apply one native call to engine state.
    fn apply(&mut self, call: NativeCall) -> Result<(), EngineFault>;
}

impl<E: NativeEngine + ?Sized> NativeEngine for Box<E> {
    fn apply(&mut self, call: NativeCall) -> Result<(), EngineFault> {
        (**self).apply(call)
    }
}

/// One call across the native boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeCall {
    /// Native entry point, e.g. `controlled_pauli_x_same_step`
    pub entry: &'static str,
    /// Base operation, e.g. `pauli_x`
    pub operation: &'static str,
    pub timing: Timing,
    /// Rotation parameters, in declaration order
    pub angles: Vec<f64>,
    pub controls: Vec<QBit>,
    pub targets: Vec<QBit>,
    /// Classical bit gating the call
    pub condition: Option<Bit>,
    /// Classical bit receiving a measurement outcome
    pub destination: Option<Bit>,
}

impl NativeCall {
    pub fn new(entry: &'static str, operation: &'static str, timing: Timing) -> Self {
        Self {
            entry,
            operation,
            timing,
            angles: Vec::new(),
            controls: Vec::new(),
            targets: Vec::new(),
            condition: None,
            destination: None,
        }
    }

    pub fn angles(mut self, angles: &[f64]) -> Self {
        self.angles = angles.to_vec();
        self
    }

    pub fn controls(mut self, controls: &[QBit]) -> Self {
        self.controls = controls.to_vec();
        self
    }

    pub fn targets(mut self, targets: &[QBit]) -> Self {
        self.targets = targets.to_vec();
        self
    }

    pub fn condition(mut self, bit: Bit) -> Self {
        self.condition = Some(bit);
        self
    }

    pub fn destination(mut self, bit: Bit) -> Self {
        self.destination = Some(bit);
        self
    }

    /// Variant this call was issued under.
    pub fn variant(&self) -> ExecutionVariant {
        ExecutionVariant::select(self.timing == Timing::SameStep, self.condition.is_some())
    }

    /// Controls followed by targets.
    pub fn qubits(&self) -> impl Iterator<Item = QBit> + '_ {
        self.controls.iter().chain(self.targets.iter()).copied()
    }

    /// Condition and destination bits.
    pub fn bits(&self) -> impl Iterator<Item = Bit> + '_ {
        self.condition.iter().chain(self.destination.iter()).copied()
    }
}

impl fmt::Display for NativeCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args: Vec<String> = self.angles.iter().map(|a| format!("{}", a)).collect();
        args.extend(self.qubits().map(|q| q.to_string()));
        write!(f, "{}({})", self.entry, args.join(", "))?;
        if let Some(bit) = self.destination {
            write!(f, " -> {}", bit)?;
        }
        if let Some(bit) = self.condition {
            write!(f, " if {}", bit)?;
        }
        Ok(())
    }
}
