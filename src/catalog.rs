// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Gate catalog consumed by the binding generator.
//!
//! The catalog is pure data: an ordered list of [`GateDescriptor`]s. Each
//! entry is expanded into one dispatcher per [`ControlLevel`], so the order
//! here is the order of the generated manifest.
//!
//! This module is also compiled into the build script, so it must not
//! depend on anything outside `std`.

use std::collections::HashSet;
use std::fmt;

/// Names owned by hand-written dispatchers; catalog entries may not use them.
pub const RESERVED_NAMES: &[&str] = &[
    "rotation_u",
    "measurement",
    "measurement_x",
    "measurement_y",
    "measurement_z",
    "reset",
];

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDescriptor {
    /// Base gate name in snake case (e.g. `pauli_x`).
    pub name: &'static str,
    /// Number of target qubits the gate acts on (1 or 2).
    pub arity: u8,
    /// Whether the gate takes a rotation angle `theta`.
    pub rotation: bool,
}

impl GateDescriptor {
    /// Fixed gate acting on `arity` targets.
    pub const fn fixed(name: &'static str, arity: u8) -> Self {
        Self {
            name,
            arity,
            rotation: false,
        }
    }

    /// Rotation gate acting on `arity` targets.
    pub const fn rotation(name: &'static str, arity: u8) -> Self {
        Self {
            name,
            arity,
            rotation: true,
        }
    }
}

/// The gates exposed through generated dispatchers.
pub const CATALOG: &[GateDescriptor] = &[
    GateDescriptor::fixed("hadamard", 1),
    GateDescriptor::fixed("pauli_x", 1),
    GateDescriptor::fixed("pauli_y", 1),
    GateDescriptor::fixed("pauli_z", 1),
    GateDescriptor::fixed("phase", 1),
    GateDescriptor::fixed("phase_dagger", 1),
    GateDescriptor::fixed("phase_root", 1),
    GateDescriptor::fixed("phase_root_dagger", 1),
    GateDescriptor::fixed("pauli_x_root", 1),
    GateDescriptor::fixed("swap", 2),
    GateDescriptor::fixed("swap_root", 2),
    GateDescriptor::rotation("rotation_hadamard", 1),
    GateDescriptor::rotation("rotation_pauli_x", 1),
    GateDescriptor::rotation("rotation_pauli_y", 1),
    GateDescriptor::rotation("rotation_pauli_z", 1),
    GateDescriptor::rotation("rotation_x", 1),
    GateDescriptor::rotation("rotation_y", 1),
    GateDescriptor::rotation("rotation_z", 1),
    GateDescriptor::rotation("rotation_swap", 2),
];

/// Number of additional quantum control operands a dispatcher takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlLevel {
    /// Bare gate, no quantum controls.
    Zero,
    /// One control qubit.
    One,
    /// Two control qubits.
    Two,
}

impl ControlLevel {
    /// Every level, in generation order.
    pub const ALL: [ControlLevel; 3] = [ControlLevel::Zero, ControlLevel::One, ControlLevel::Two];

    /// Number of control operands.
    pub fn count(self) -> usize {
        match self {
            ControlLevel::Zero => 0,
            ControlLevel::One => 1,
            ControlLevel::Two => 2,
        }
    }

    /// Level for a control count, if supported.
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            0 => Some(ControlLevel::Zero),
            1 => Some(ControlLevel::One),
            2 => Some(ControlLevel::Two),
            _ => None,
        }
    }

    /// Classical conditioning is only offered without quantum controls.
    pub fn allows_classical_condition(self) -> bool {
        self == ControlLevel::Zero
    }
}

impl fmt::Display for ControlLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Catalog authoring errors, detected before anything is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Entry at the given position has an empty name
    EmptyName(usize),
    /// Name is not lower snake case
    InvalidName { name: String, reason: String },
    /// Arity outside {1, 2}
    UnsupportedArity { name: String, arity: u8 },
    /// Same name listed twice
    DuplicateName(String),
    /// Name belongs to a hand-written dispatcher
    ReservedName(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyName(idx) => write!(f, "Entry {} has an empty name", idx),
            CatalogError::InvalidName { name, reason } => {
                write!(f, "Invalid gate name '{}': {}", name, reason)
            }
            CatalogError::UnsupportedArity { name, arity } => {
                write!(
                    f,
                    "Gate '{}' has unsupported arity {} (expected 1 or 2)",
                    name, arity
                )
            }
            CatalogError::DuplicateName(name) => write!(f, "Duplicate gate name '{}'", name),
            CatalogError::ReservedName(name) => {
                write!(f, "Gate name '{}' is reserved", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Validate every entry of a catalog.
pub fn validate(catalog: &[GateDescriptor]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for (idx, gate) in catalog.iter().enumerate() {
        if gate.name.is_empty() {
            return Err(CatalogError::EmptyName(idx));
        }
        validate_name(gate.name)?;

        if !(1..=2).contains(&gate.arity) {
            return Err(CatalogError::UnsupportedArity {
                name: gate.name.to_string(),
                arity: gate.arity,
            });
        }
        if RESERVED_NAMES.contains(&gate.name) {
            return Err(CatalogError::ReservedName(gate.name.to_string()));
        }
        if !seen.insert(gate.name) {
            return Err(CatalogError::DuplicateName(gate.name.to_string()));
        }
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    for segment in name.split('_') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Err(invalid("empty segment between underscores")),
            Some(c) if !c.is_ascii_lowercase() => {
                return Err(invalid("segments must start with a lowercase letter"))
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return Err(invalid("only lowercase letters and digits are allowed"));
        }
    }

    Ok(())
}
