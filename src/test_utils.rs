// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities for dispatch tests.

use crate::engine::{NativeCall, NativeEngine};
use crate::error::EngineFault;
use crate::handle::QBit;

/// Mock engine that accepts and records every call.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Vec<NativeCall>,
}

impl RecordingEngine {
    pub fn calls(&self) -> &[NativeCall] {
        &self.calls
    }

    /// Entry point names, in call order.
    pub fn entries(&self) -> Vec<&'static str> {
        self.calls.iter().map(|c| c.entry).collect()
    }

    /// Qubit operands of each call, controls first.
    pub fn operands(&self) -> Vec<Vec<QBit>> {
        self.calls.iter().map(|c| c.qubits().collect()).collect()
    }
}

impl NativeEngine for RecordingEngine {
    fn apply(&mut self, call: NativeCall) -> Result<(), EngineFault> {
        self.calls.push(call);
        Ok(())
    }
}

/// Mock engine that accepts a fixed number of calls, then faults.
#[derive(Debug)]
pub struct FailingEngine {
    pub accept: usize,
    pub inner: RecordingEngine,
}

impl FailingEngine {
    /// Fault on every call after the first `accept`.
    pub fn after(accept: usize) -> Self {
        Self {
            accept,
            inner: RecordingEngine::default(),
        }
    }

    /// Fault on every call.
    pub fn always() -> Self {
        Self::after(0)
    }
}

impl NativeEngine for FailingEngine {
    fn apply(&mut self, call: NativeCall) -> Result<(), EngineFault> {
        if self.inner.calls().len() >= self.accept {
            return Err(EngineFault::Rejected(format!(
                "mock engine failure at {}",
                call.entry
            )));
        }
        self.inner.apply(call)
    }
}

/// `n` qubit handles starting at `first`.
pub fn qbits(first: usize, n: usize) -> Vec<QBit> {
    (first..first + n).map(QBit::from_raw).collect()
}
