// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Name derivation for generated bindings.
//!
//! Every name is a pure function of (base gate name, control level), so two
//! generator runs over the same catalog agree on every identifier.

use crate::catalog::ControlLevel;
use crate::variant::ExecutionVariant;

/// Camel form of a snake-case name: `pauli_x_root` becomes `pauliXRoot`.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Public dispatcher name: `pauliX`, `cPauliX`, `ccPauliX`.
pub fn function_name(gate: &str, level: ControlLevel) -> String {
    let camel = camel_case(gate);
    if level == ControlLevel::Zero {
        return camel;
    }

    let mut chars = camel.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    format!("{}{}", "c".repeat(level.count()), capitalized)
}

/// Artifact identity: `pauli-x`, `controlled-pauli-x`, ...
pub fn artifact_name(gate: &str, level: ControlLevel) -> String {
    format!(
        "{}{}",
        "controlled-".repeat(level.count()),
        gate.replace('_', "-")
    )
}

/// Artifact file name inside the `gates/` directory.
pub fn artifact_file(gate: &str, level: ControlLevel) -> String {
    format!("{}.rs", artifact_name(gate, level))
}

/// Module that wraps an artifact in the manifest.
pub fn module_name(gate: &str, level: ControlLevel) -> String {
    artifact_name(gate, level).replace('-', "_")
}

/// Base name of the native entry points: `controlled_controlled_swap`.
pub fn native_name(gate: &str, level: ControlLevel) -> String {
    format!("{}{}", "controlled_".repeat(level.count()), gate)
}

/// Full native entry point for one execution variant.
pub fn native_entry(gate: &str, level: ControlLevel, variant: ExecutionVariant) -> String {
    format!("{}{}", native_name(gate, level), variant.entry_suffix())
}

/// Variants a level exposes. Classical conditioning needs level zero.
pub fn variants(level: ControlLevel) -> &'static [ExecutionVariant] {
    if level.allows_classical_condition() {
        &ExecutionVariant::ALL
    } else {
        &ExecutionVariant::UNCONDITIONED
    }
}

/// Every native entry point a (gate, level) pair needs.
pub fn native_entries(gate: &str, level: ControlLevel) -> Vec<String> {
    variants(level)
        .iter()
        .map(|v| native_entry(gate, level, *v))
        .collect()
}

/// Control operand names.
///
/// Level one uses a single unindexed name while level two indexes both
/// operands. Downstream code depends on exactly these names.
pub fn control_operands(level: ControlLevel) -> Vec<&'static str> {
    match level {
        ControlLevel::Zero => vec![],
        ControlLevel::One => vec!["c_qbits"],
        ControlLevel::Two => vec!["c_qbits0", "c_qbits1"],
    }
}

/// Target operand names for a gate arity.
pub fn target_operands(arity: u8) -> Vec<&'static str> {
    if arity > 1 {
        vec!["qbits0", "qbits1"]
    } else {
        vec!["qbits"]
    }
}
