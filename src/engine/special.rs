// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Native verbs outside the gate catalog.

use super::{NativeCall, NativeEngine};
use crate::error::EngineFault;
use crate::handle::{Bit, QBit};
use crate::variant::Timing;

/// `rotation_u`, measurement and reset entry points.
pub trait NativeSpecials: NativeEngine {
    fn rotation_u(
        &mut self,
        theta: f64,
        lambda: f64,
        phi: f64,
        qbits: QBit,
    ) -> Result<(), EngineFault> {
        self.apply(rotation_u(
            "rotation_u",
            Timing::Immediate,
            [theta, lambda, phi],
            &[],
            qbits,
        ))
    }

    fn rotation_u_same_step(
        &mut self,
        theta: f64,
        lambda: f64,
        phi: f64,
        qbits: QBit,
    ) -> Result<(), EngineFault> {
        self.apply(rotation_u(
            "rotation_u_same_step",
            Timing::SameStep,
            [theta, lambda, phi],
            &[],
            qbits,
        ))
    }

    fn rotation_u_classically_controlled(
        &mut self,
        theta: f64,
        lambda: f64,
        phi: f64,
        qbits: QBit,
        c_control: Bit,
    ) -> Result<(), EngineFault> {
        self.apply(
            rotation_u(
                "rotation_u_classically_controlled",
                Timing::Immediate,
                [theta, lambda, phi],
                &[],
                qbits,
            )
            .condition(c_control),
        )
    }

    fn rotation_u_same_step_classically_controlled(
        &mut self,
        theta: f64,
        lambda: f64,
        phi: f64,
        qbits: QBit,
        c_control: Bit,
    ) -> Result<(), EngineFault> {
        self.apply(
            rotation_u(
                "rotation_u_same_step_classically_controlled",
                Timing::SameStep,
                [theta, lambda, phi],
                &[],
                qbits,
            )
            .condition(c_control),
        )
    }

    fn controlled_rotation_u(
        &mut self,
        theta: f64,
        lambda: f64,
        phi: f64,
        c_qbits: QBit,
        qbits: QBit,
    ) -> Result<(), EngineFault> {
        self.apply(rotation_u(
            "controlled_rotation_u",
            Timing::Immediate,
            [theta, lambda, phi],
            &[c_qbits],
            qbits,
        ))
    }

    fn controlled_rotation_u_same_step(
        &mut self,
        theta: f64,
        lambda: f64,
        phi: f64,
        c_qbits: QBit,
        qbits: QBit,
    ) -> Result<(), EngineFault> {
        self.apply(rotation_u(
            "controlled_rotation_u_same_step",
            Timing::SameStep,
            [theta, lambda, phi],
            &[c_qbits],
            qbits,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn controlled_controlled_rotation_u(
        &mut self,
        theta: f64,
        lambda: f64,
        phi: f64,
        c_qbits0: QBit,
        c_qbits1: QBit,
        qbits: QBit,
    ) -> Result<(), EngineFault> {
        self.apply(rotation_u(
            "controlled_controlled_rotation_u",
            Timing::Immediate,
            [theta, lambda, phi],
            &[c_qbits0, c_qbits1],
            qbits,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn controlled_controlled_rotation_u_same_step(
        &mut self,
        theta: f64,
        lambda: f64,
        phi: f64,
        c_qbits0: QBit,
        c_qbits1: QBit,
        qbits: QBit,
    ) -> Result<(), EngineFault> {
        self.apply(rotation_u(
            "controlled_controlled_rotation_u_same_step",
            Timing::SameStep,
            [theta, lambda, phi],
            &[c_qbits0, c_qbits1],
            qbits,
        ))
    }

    fn measurement_x(&mut self, qbit: QBit, bit: Bit) -> Result<(), EngineFault> {
        self.apply(measurement("measurement_x", Timing::Immediate, qbit, bit))
    }

    fn measurement_y(&mut self, qbit: QBit, bit: Bit) -> Result<(), EngineFault> {
        self.apply(measurement("measurement_y", Timing::Immediate, qbit, bit))
    }

    fn measurement_z(&mut self, qbit: QBit, bit: Bit) -> Result<(), EngineFault> {
        self.apply(measurement("measurement_z", Timing::Immediate, qbit, bit))
    }

    fn measurement_x_same_step(&mut self, qbit: QBit, bit: Bit) -> Result<(), EngineFault> {
        self.apply(measurement("measurement_x_same_step", Timing::SameStep, qbit, bit))
    }

    fn measurement_y_same_step(&mut self, qbit: QBit, bit: Bit) -> Result<(), EngineFault> {
        self.apply(measurement("measurement_y_same_step", Timing::SameStep, qbit, bit))
    }

    fn measurement_z_same_step(&mut self, qbit: QBit, bit: Bit) -> Result<(), EngineFault> {
        self.apply(measurement("measurement_z_same_step", Timing::SameStep, qbit, bit))
    }

    fn reset(&mut self, qbit: QBit) -> Result<(), EngineFault> {
        self.apply(NativeCall::new("reset", "reset", Timing::Immediate).targets(&[qbit]))
    }

    fn reset_same_step(&mut self, qbit: QBit) -> Result<(), EngineFault> {
        self.apply(NativeCall::new("reset_same_step", "reset", Timing::SameStep).targets(&[qbit]))
    }
}

impl<E: NativeEngine + ?Sized> NativeSpecials for E {}

fn rotation_u(
    entry: &'static str,
    timing: Timing,
    angles: [f64; 3],
    controls: &[QBit],
    target: QBit,
) -> NativeCall {
    NativeCall::new(entry, "rotation_u", timing)
        .angles(&angles)
        .controls(controls)
        .targets(&[target])
}

fn measurement(entry: &'static str, timing: Timing, qbit: QBit, bit: Bit) -> NativeCall {
    NativeCall::new(entry, "measurement", timing)
        .targets(&[qbit])
        .destination(bit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingEngine;

    #[test]
    fn test_rotation_u_carries_three_angles() {
        let mut engine = RecordingEngine::default();
        engine
            .controlled_rotation_u_same_step(0.1, 0.2, 0.3, QBit::from_raw(0), QBit::from_raw(1))
            .unwrap();

        let call = &engine.calls()[0];
        assert_eq!(call.operation, "rotation_u");
        assert_eq!(call.angles, vec![0.1, 0.2, 0.3]);
        assert_eq!(call.controls, vec![QBit::from_raw(0)]);
        assert_eq!(call.timing, Timing::SameStep);
    }

    #[test]
    fn test_rotation_u_classical_condition() {
        let mut engine = RecordingEngine::default();
        engine
            .rotation_u_classically_controlled(1.0, 0.0, 0.0, QBit::from_raw(0), Bit::from_raw(2))
            .unwrap();
        assert_eq!(engine.calls()[0].condition, Some(Bit::from_raw(2)));
        assert!(engine.calls()[0].variant().is_classically_conditioned());
    }

    #[test]
    fn test_measurement_records_destination() {
        let mut engine = RecordingEngine::default();
        engine
            .measurement_y_same_step(QBit::from_raw(3), Bit::from_raw(1))
            .unwrap();

        let call = &engine.calls()[0];
        assert_eq!(call.entry, "measurement_y_same_step");
        assert_eq!(call.targets, vec![QBit::from_raw(3)]);
        assert_eq!(call.destination, Some(Bit::from_raw(1)));
        assert_eq!(call.condition, None);
    }

    #[test]
    fn test_reset_entries() {
        let mut engine = RecordingEngine::default();
        engine.reset(QBit::from_raw(0)).unwrap();
        engine.reset_same_step(QBit::from_raw(1)).unwrap();
        assert_eq!(engine.entries(), vec!["reset", "reset_same_step"]);
    }
}
