// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Execution variants of a native call.
//!
//! Shared by the generator (to name native entry points) and by the engine
//! layer (to classify recorded calls). Depends only on `std`.

use std::fmt;

/// When the engine schedules an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timing {
    /// Open a new timing step.
    #[default]
    Immediate,
    /// Join the step of the preceding operation.
    SameStep,
}

impl Timing {
    /// Timing selected by a dispatcher's `same_step` flag.
    pub fn from_same_step(same_step: bool) -> Self {
        if same_step {
            Timing::SameStep
        } else {
            Timing::Immediate
        }
    }
}

/// Whether an operation is gated on a classical bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conditioning {
    #[default]
    Unconditioned,
    ClassicallyConditioned,
}

/// One cell of the {timing} × {conditioning} lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExecutionVariant {
    pub timing: Timing,
    pub conditioning: Conditioning,
}

impl ExecutionVariant {
    /// All four variants, in entry-point generation order.
    pub const ALL: [ExecutionVariant; 4] = [
        ExecutionVariant::new(Timing::Immediate, Conditioning::Unconditioned),
        ExecutionVariant::new(Timing::SameStep, Conditioning::Unconditioned),
        ExecutionVariant::new(Timing::Immediate, Conditioning::ClassicallyConditioned),
        ExecutionVariant::new(Timing::SameStep, Conditioning::ClassicallyConditioned),
    ];

    /// The two variants without a classical condition.
    pub const UNCONDITIONED: [ExecutionVariant; 2] = [
        ExecutionVariant::new(Timing::Immediate, Conditioning::Unconditioned),
        ExecutionVariant::new(Timing::SameStep, Conditioning::Unconditioned),
    ];

    pub const fn new(timing: Timing, conditioning: Conditioning) -> Self {
        Self {
            timing,
            conditioning,
        }
    }

    /// Variant selected by a dispatcher's flag and condition.
    pub fn select(same_step: bool, classically_conditioned: bool) -> Self {
        let conditioning = if classically_conditioned {
            Conditioning::ClassicallyConditioned
        } else {
            Conditioning::Unconditioned
        };
        Self::new(Timing::from_same_step(same_step), conditioning)
    }

    pub fn is_same_step(&self) -> bool {
        self.timing == Timing::SameStep
    }

    pub fn is_classically_conditioned(&self) -> bool {
        self.conditioning == Conditioning::ClassicallyConditioned
    }

    /// Suffix appended to a native entry name.
    pub fn entry_suffix(&self) -> &'static str {
        match (self.timing, self.conditioning) {
            (Timing::Immediate, Conditioning::Unconditioned) => "",
            (Timing::SameStep, Conditioning::Unconditioned) => "_same_step",
            (Timing::Immediate, Conditioning::ClassicallyConditioned) => "_classically_controlled",
            (Timing::SameStep, Conditioning::ClassicallyConditioned) => {
                "_same_step_classically_controlled"
            }
        }
    }
}

impl fmt::Display for ExecutionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timing = match self.timing {
            Timing::Immediate => "immediate",
            Timing::SameStep => "same-step",
        };
        let conditioning = match self.conditioning {
            Conditioning::Unconditioned => "unconditioned",
            Conditioning::ClassicallyConditioned => "classically-conditioned",
        };
        write!(f, "{}/{}", timing, conditioning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_covers_lookup() {
        assert_eq!(
            ExecutionVariant::select(false, false),
            ExecutionVariant::new(Timing::Immediate, Conditioning::Unconditioned)
        );
        assert_eq!(
            ExecutionVariant::select(true, true),
            ExecutionVariant::new(Timing::SameStep, Conditioning::ClassicallyConditioned)
        );
        assert!(ExecutionVariant::select(true, false).is_same_step());
        assert!(ExecutionVariant::select(false, true).is_classically_conditioned());
    }

    #[test]
    fn test_entry_suffixes() {
        let suffixes: Vec<&str> = ExecutionVariant::ALL
            .iter()
            .map(|v| v.entry_suffix())
            .collect();
        assert_eq!(
            suffixes,
            vec![
                "",
                "_same_step",
                "_classically_controlled",
                "_same_step_classically_controlled"
            ]
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Timing::default(), Timing::Immediate);
        assert_eq!(ExecutionVariant::default(), ExecutionVariant::ALL[0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ExecutionVariant::ALL[3].to_string(),
            "same-step/classically-conditioned"
        );
    }
}
