// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Qubit reset.

use super::Operand;
use crate::engine::NativeSpecials;
use crate::error::Result;
use crate::handle::QBit;

/// Resets `qbits` to `|0>`.
pub fn reset<'a, E>(engine: &mut E, qbits: impl Into<Operand<'a, QBit>>, same_step: bool) -> Result<()>
where
    E: NativeSpecials + ?Sized,
{
    match qbits.into() {
        Operand::Scalar(qbit) => {
            if same_step {
                engine.reset_same_step(qbit)?;
            } else {
                engine.reset(qbit)?;
            }
            Ok(())
        }
        Operand::Collection(qbits) => {
            for qbit in qbits {
                reset(&mut *engine, *qbit, same_step)?;
            }
            Ok(())
        }
    }
}
