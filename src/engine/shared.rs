// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Engine handle shared between several owners.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::{NativeCall, NativeEngine};
use crate::error::EngineFault;

/// Cloneable handle to one engine.
///
/// Each native call takes the lock for the duration of that call only, so a
/// broadcast issued through one clone may interleave with calls from another.
pub struct SharedEngine<E> {
    inner: Arc<Mutex<E>>,
}

impl<E> SharedEngine<E> {
    pub fn new(engine: E) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Lock the engine for direct access.
    pub fn lock(&self) -> MutexGuard<'_, E> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut E) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Recover the engine if this is the last handle.
    pub fn try_unwrap(self) -> Result<E, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<E> Clone for SharedEngine<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: NativeEngine> NativeEngine for SharedEngine<E> {
    fn apply(&mut self, call: NativeCall) -> Result<(), EngineFault> {
        self.inner.lock().apply(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NativeGates;
    use crate::handle::QBit;
    use crate::test_utils::RecordingEngine;

    #[test]
    fn test_clones_share_one_engine() {
        let mut a = SharedEngine::new(RecordingEngine::default());
        let mut b = a.clone();

        a.hadamard(QBit::from_raw(0)).unwrap();
        b.pauli_x(QBit::from_raw(1)).unwrap();

        assert_eq!(a.lock().entries(), vec!["hadamard", "pauli_x"]);
        drop(b);
        let engine = a.try_unwrap().ok().unwrap();
        assert_eq!(engine.calls().len(), 2);
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = SharedEngine::new(RecordingEngine::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let mut engine = shared.clone();
                std::thread::spawn(move || engine.pauli_z(QBit::from_raw(i)).unwrap())
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.with(|e| e.calls().len()), 4);
    }

    #[test]
    fn test_try_unwrap_fails_while_shared() {
        let a = SharedEngine::new(RecordingEngine::default());
        let _b = a.clone();
        assert!(a.try_unwrap().is_err());
    }
}
