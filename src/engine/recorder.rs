// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Reference engine that records a step schedule instead of simulating.
//!
//! Immediate calls open a new step. Same-step calls join the most recent
//! step, or open the first one when the schedule is empty.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use super::{NativeCall, NativeEngine};
use crate::config::RecorderConfig;
use crate::error::EngineFault;
use crate::handle::{Bit, Handle, QBit};
use crate::variant::Timing;

/// Records native calls into timing steps.
#[derive(Debug, Clone)]
pub struct CircuitRecorder {
    limits: RecorderConfig,
    qubits: usize,
    bits: usize,
    steps: Vec<Vec<NativeCall>>,
}

impl CircuitRecorder {
    pub fn new(limits: RecorderConfig) -> Self {
        Self {
            limits,
            qubits: 0,
            bits: 0,
            steps: Vec::new(),
        }
    }

    /// Allocate one qubit.
    pub fn qbit(&mut self) -> Result<QBit, EngineFault> {
        if self.qubits >= self.limits.max_qubits {
            return Err(EngineFault::CapacityExceeded {
                resource: "qubits".into(),
                limit: self.limits.max_qubits,
            });
        }
        let handle = QBit::from_raw(self.qubits);
        self.qubits += 1;
        Ok(handle)
    }

    /// Allocate `n` qubits. Allocates nothing if they do not all fit.
    pub fn qbits(&mut self, n: usize) -> Result<Vec<QBit>, EngineFault> {
        if self
            .qubits
            .checked_add(n)
            .map_or(true, |total| total > self.limits.max_qubits)
        {
            return Err(EngineFault::CapacityExceeded {
                resource: "qubits".into(),
                limit: self.limits.max_qubits,
            });
        }
        (0..n).map(|_| self.qbit()).collect()
    }

    /// Allocate one classical bit.
    pub fn bit(&mut self) -> Result<Bit, EngineFault> {
        if self.bits >= self.limits.max_bits {
            return Err(EngineFault::CapacityExceeded {
                resource: "bits".into(),
                limit: self.limits.max_bits,
            });
        }
        let handle = Bit::from_raw(self.bits);
        self.bits += 1;
        Ok(handle)
    }

    /// Allocate `n` classical bits. Allocates nothing if they do not all fit.
    pub fn bits(&mut self, n: usize) -> Result<Vec<Bit>, EngineFault> {
        if self
            .bits
            .checked_add(n)
            .map_or(true, |total| total > self.limits.max_bits)
        {
            return Err(EngineFault::CapacityExceeded {
                resource: "bits".into(),
                limit: self.limits.max_bits,
            });
        }
        (0..n).map(|_| self.bit()).collect()
    }

    pub fn num_qubits(&self) -> usize {
        self.qubits
    }

    pub fn num_bits(&self) -> usize {
        self.bits
    }

    pub fn steps(&self) -> &[Vec<NativeCall>] {
        &self.steps
    }

    /// Every recorded call, in issue order.
    pub fn calls(&self) -> impl Iterator<Item = &NativeCall> {
        self.steps.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.steps.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Drop the schedule, keeping allocated registers.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    fn check(&self, call: &NativeCall) -> Result<(), EngineFault> {
        let mut seen = HashSet::new();
        for qbit in call.qubits() {
            if qbit.index() >= self.qubits {
                return Err(EngineFault::UnknownQubit {
                    index: qbit.index(),
                    allocated: self.qubits,
                });
            }
            if !seen.insert(qbit) {
                return Err(EngineFault::DuplicateQubit {
                    entry: call.entry.to_string(),
                    index: qbit.index(),
                });
            }
        }
        for bit in call.bits() {
            if bit.index() >= self.bits {
                return Err(EngineFault::UnknownBit {
                    index: bit.index(),
                    allocated: self.bits,
                });
            }
        }
        Ok(())
    }
}

impl Default for CircuitRecorder {
    fn default() -> Self {
        Self::new(RecorderConfig::default())
    }
}

impl NativeEngine for CircuitRecorder {
    fn apply(&mut self, call: NativeCall) -> Result<(), EngineFault> {
        self.check(&call)?;

        if call.timing == Timing::Immediate || self.steps.is_empty() {
            self.steps.push(Vec::new());
        }
        let step = self.steps.len() - 1;
        debug!(step, call = %call, "Recorded native call");
        self.steps[step].push(call);
        Ok(())
    }
}

impl fmt::Display for CircuitRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, step) in self.steps.iter().enumerate() {
            let calls: Vec<String> = step.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{:>3}: {}", idx, calls.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{NativeGates, NativeSpecials};

    fn recorder(max_qubits: usize, max_bits: usize) -> CircuitRecorder {
        CircuitRecorder::new(RecorderConfig {
            max_qubits,
            max_bits,
        })
    }

    #[test]
    fn test_allocation_respects_limits() {
        let mut rec = recorder(2, 1);
        assert_eq!(rec.qbits(2).unwrap(), vec![QBit::from_raw(0), QBit::from_raw(1)]);
        assert!(matches!(
            rec.qbit(),
            Err(EngineFault::CapacityExceeded { limit: 2, .. })
        ));
        assert_eq!(rec.bit().unwrap(), Bit::from_raw(0));
        assert!(rec.bits(1).is_err());
        assert_eq!(rec.num_qubits(), 2);
        assert_eq!(rec.num_bits(), 1);
    }

    #[test]
    fn test_bulk_allocation_is_all_or_nothing() {
        let mut rec = recorder(3, 1);
        rec.qbit().unwrap();
        assert!(rec.qbits(3).is_err());
        assert_eq!(rec.num_qubits(), 1);
    }

    #[test]
    fn test_huge_allocation_reports_capacity() {
        let mut rec = recorder(3, 1);
        rec.qbit().unwrap();
        rec.bit().unwrap();
        assert!(matches!(
            rec.qbits(usize::MAX),
            Err(EngineFault::CapacityExceeded { limit: 3, .. })
        ));
        assert!(matches!(
            rec.bits(usize::MAX),
            Err(EngineFault::CapacityExceeded { limit: 1, .. })
        ));
        assert_eq!(rec.num_qubits(), 1);
        assert_eq!(rec.num_bits(), 1);
    }

    #[test]
    fn test_immediate_opens_step_and_same_step_joins() {
        let mut rec = CircuitRecorder::default();
        let q = rec.qbits(3).unwrap();

        rec.hadamard_same_step(q[0]).unwrap();
        rec.hadamard_same_step(q[1]).unwrap();
        rec.pauli_x(q[2]).unwrap();
        rec.controlled_pauli_z(q[0], q[1]).unwrap();
        rec.controlled_pauli_z_same_step(q[1], q[2]).unwrap();

        let sizes: Vec<usize> = rec.steps().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 1, 2]);
        assert_eq!(rec.len(), 5);
    }

    #[test]
    fn test_rejects_unknown_handles() {
        let mut rec = CircuitRecorder::default();
        let q = rec.qbit().unwrap();

        let err = rec.pauli_x(QBit::from_raw(4)).unwrap_err();
        assert_eq!(
            err,
            EngineFault::UnknownQubit {
                index: 4,
                allocated: 1
            }
        );

        let err = rec.measurement_z(q, Bit::from_raw(0)).unwrap_err();
        assert!(matches!(err, EngineFault::UnknownBit { index: 0, .. }));
        assert!(rec.is_empty());
    }

    #[test]
    fn test_rejects_repeated_qubit() {
        let mut rec = CircuitRecorder::default();
        let q = rec.qbit().unwrap();
        let err = rec.controlled_pauli_x(q, q).unwrap_err();
        assert!(matches!(err, EngineFault::DuplicateQubit { index: 0, .. }));
    }

    #[test]
    fn test_display_lists_steps() {
        let mut rec = CircuitRecorder::default();
        let q = rec.qbits(2).unwrap();
        let c = rec.bit().unwrap();
        rec.hadamard(q[0]).unwrap();
        rec.hadamard_same_step(q[1]).unwrap();
        rec.measurement_z(q[0], c).unwrap();

        assert_eq!(
            rec.to_string(),
            "  0: hadamard(q0) | hadamard_same_step(q1)\n  1: measurement_z(q0) -> c0\n"
        );
    }

    #[test]
    fn test_clear_keeps_registers() {
        let mut rec = CircuitRecorder::default();
        let q = rec.qbit().unwrap();
        rec.reset(q).unwrap();
        rec.clear();
        assert!(rec.is_empty());
        assert_eq!(rec.num_qubits(), 1);
    }
}
