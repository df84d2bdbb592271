// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Measurement into classical bits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{min_len, type_mismatch, Operand};
use crate::engine::NativeSpecials;
use crate::error::{DispatchError, Error, Result};
use crate::handle::{Bit, QBit};

/// Measurement basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    X,
    Y,
    #[default]
    Z,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::X => write!(f, "x"),
            Basis::Y => write!(f, "y"),
            Basis::Z => write!(f, "z"),
        }
    }
}

impl FromStr for Basis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Basis::X),
            "y" => Ok(Basis::Y),
            "z" => Ok(Basis::Z),
            _ => Err(DispatchError::UnknownBasis(s.to_string()).into()),
        }
    }
}

/// Measures `qbits` in `basis`, writing each outcome to the matching bit of
/// `cbits`. Classical conditioning does not apply to measurement.
#[allow(clippy::needless_range_loop)]
pub fn measurement<'a, E>(
    engine: &mut E,
    qbits: impl Into<Operand<'a, QBit>>,
    cbits: impl Into<Operand<'a, Bit>>,
    basis: Basis,
    same_step: bool,
) -> Result<()>
where
    E: NativeSpecials + ?Sized,
{
    match (qbits.into(), cbits.into()) {
        (Operand::Scalar(qbit), Operand::Scalar(bit)) => {
            match (basis, same_step) {
                (Basis::X, false) => engine.measurement_x(qbit, bit)?,
                (Basis::Y, false) => engine.measurement_y(qbit, bit)?,
                (Basis::Z, false) => engine.measurement_z(qbit, bit)?,
                (Basis::X, true) => engine.measurement_x_same_step(qbit, bit)?,
                (Basis::Y, true) => engine.measurement_y_same_step(qbit, bit)?,
                (Basis::Z, true) => engine.measurement_z_same_step(qbit, bit)?,
            }
            Ok(())
        }
        (Operand::Collection(qbits), Operand::Collection(cbits)) => {
            let len = min_len(&[qbits.len(), cbits.len()]);
            for i in 0..len {
                measurement(&mut *engine, qbits[i], cbits[i], basis, same_step)?;
            }
            Ok(())
        }
        (qbits, cbits) => Err(type_mismatch("measurement", &[qbits.shape(), cbits.shape()])),
    }
}
