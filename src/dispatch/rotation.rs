// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! General single-qubit rotation `U(theta, lambda, phi)`.
//!
//! Same contract as the generated gate dispatchers, with three angles threaded
//! unchanged through every recursive and native call.

#![allow(non_snake_case, clippy::needless_range_loop)]

use super::{min_len, type_mismatch, Operand};
use crate::engine::NativeSpecials;
use crate::error::Result;
use crate::handle::{Bit, QBit};

/// Applies `U(theta, lambda, phi)`.
pub fn rotationU<'a, E>(
    engine: &mut E,
    theta: f64,
    lambda: f64,
    phi: f64,
    qbits: impl Into<Operand<'a, QBit>>,
    c_control: Option<Bit>,
    same_step: bool,
) -> Result<()>
where
    E: NativeSpecials + ?Sized,
{
    match qbits.into() {
        Operand::Scalar(qbits) => {
            match (c_control, same_step) {
                (Some(c_control), true) => engine
                    .rotation_u_same_step_classically_controlled(theta, lambda, phi, qbits, c_control)?,
                (Some(c_control), false) => {
                    engine.rotation_u_classically_controlled(theta, lambda, phi, qbits, c_control)?
                }
                (None, true) => engine.rotation_u_same_step(theta, lambda, phi, qbits)?,
                (None, false) => engine.rotation_u(theta, lambda, phi, qbits)?,
            }
            Ok(())
        }
        Operand::Collection(qbits) => {
            for i in 0..qbits.len() {
                rotationU(&mut *engine, theta, lambda, phi, qbits[i], c_control, same_step)?;
            }
            Ok(())
        }
    }
}

/// Applies `U(theta, lambda, phi)` controlled by `c_qbits`.
pub fn cRotationU<'a, E>(
    engine: &mut E,
    theta: f64,
    lambda: f64,
    phi: f64,
    c_qbits: impl Into<Operand<'a, QBit>>,
    qbits: impl Into<Operand<'a, QBit>>,
    same_step: bool,
) -> Result<()>
where
    E: NativeSpecials + ?Sized,
{
    match (c_qbits.into(), qbits.into()) {
        (Operand::Scalar(c_qbits), Operand::Scalar(qbits)) => {
            if same_step {
                engine.controlled_rotation_u_same_step(theta, lambda, phi, c_qbits, qbits)?;
            } else {
                engine.controlled_rotation_u(theta, lambda, phi, c_qbits, qbits)?;
            }
            Ok(())
        }
        (Operand::Collection(c_qbits), Operand::Collection(qbits)) => {
            let len = min_len(&[c_qbits.len(), qbits.len()]);
            for i in 0..len {
                cRotationU(&mut *engine, theta, lambda, phi, c_qbits[i], qbits[i], same_step)?;
            }
            Ok(())
        }
        (c_qbits, qbits) => Err(type_mismatch("cRotationU", &[c_qbits.shape(), qbits.shape()])),
    }
}

/// Applies `U(theta, lambda, phi)` controlled by both `c_qbits0` and `c_qbits1`.
#[allow(clippy::too_many_arguments)]
pub fn ccRotationU<'a, E>(
    engine: &mut E,
    theta: f64,
    lambda: f64,
    phi: f64,
    c_qbits0: impl Into<Operand<'a, QBit>>,
    c_qbits1: impl Into<Operand<'a, QBit>>,
    qbits: impl Into<Operand<'a, QBit>>,
    same_step: bool,
) -> Result<()>
where
    E: NativeSpecials + ?Sized,
{
    match (c_qbits0.into(), c_qbits1.into(), qbits.into()) {
        (Operand::Scalar(c_qbits0), Operand::Scalar(c_qbits1), Operand::Scalar(qbits)) => {
            if same_step {
                engine.controlled_controlled_rotation_u_same_step(
                    theta, lambda, phi, c_qbits0, c_qbits1, qbits,
                )?;
            } else {
                engine.controlled_controlled_rotation_u(
                    theta, lambda, phi, c_qbits0, c_qbits1, qbits,
                )?;
            }
            Ok(())
        }
        (
            Operand::Collection(c_qbits0),
            Operand::Collection(c_qbits1),
            Operand::Collection(qbits),
        ) => {
            let len = min_len(&[c_qbits0.len(), c_qbits1.len(), qbits.len()]);
            for i in 0..len {
                ccRotationU(
                    &mut *engine,
                    theta,
                    lambda,
                    phi,
                    c_qbits0[i],
                    c_qbits1[i],
                    qbits[i],
                    same_step,
                )?;
            }
            Ok(())
        }
        (c_qbits0, c_qbits1, qbits) => Err(type_mismatch(
            "ccRotationU",
            &[c_qbits0.shape(), c_qbits1.shape(), qbits.shape()],
        )),
    }
}
