// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Source templates for generated bindings.
//!
//! Output depends only on its inputs: no timestamps, no hash-map ordering.

use super::naming;
use crate::catalog::{ControlLevel, GateDescriptor};
use crate::variant::{ExecutionVariant, Timing};

/// Header shared by every generated file.
pub const HEADER: &str = "// @generated by qukit-bindgen from the gate catalog. Do not edit.\n";

/// Directory, relative to `OUT_DIR`, the build script writes into.
pub const OUT_DIR_ROOT: &str = "/bindings";

/// Render the dispatcher for one (gate, level) pair.
pub fn artifact(gate: &GateDescriptor, level: ControlLevel) -> String {
    let function = naming::function_name(gate.name, level);
    let controls = naming::control_operands(level);
    let targets = naming::target_operands(gate.arity);
    let operands: Vec<&str> = controls.iter().chain(targets.iter()).copied().collect();
    let conditioned = level.allows_classical_condition();

    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str(&format!(
        "// gate: {}, control level: {}\n\n",
        gate.name, level
    ));

    if operands.len() > 1 {
        out.push_str("use crate::dispatch::{min_len, type_mismatch, Operand};\n");
    } else {
        out.push_str("use crate::dispatch::Operand;\n");
    }
    out.push_str("use crate::engine::NativeGates;\n");
    out.push_str("use crate::error::Result;\n");
    if conditioned {
        out.push_str("use crate::handle::{Bit, QBit};\n\n");
    } else {
        out.push_str("use crate::handle::QBit;\n\n");
    }

    out.push_str(&doc_comment(gate.name, level));

    // Signature
    out.push_str(&format!("pub fn {}<'a, E>(\n", function));
    out.push_str("    engine: &mut E,\n");
    if gate.rotation {
        out.push_str("    theta: f64,\n");
    }
    for operand in &operands {
        out.push_str(&format!("    {}: impl Into<Operand<'a, QBit>>,\n", operand));
    }
    if conditioned {
        out.push_str("    c_control: Option<Bit>,\n");
    }
    out.push_str("    same_step: bool,\n");
    out.push_str(") -> Result<()>\n");
    out.push_str("where\n");
    out.push_str("    E: NativeGates + ?Sized,\n");
    out.push_str("{\n");

    // Scrutinee
    let into: Vec<String> = operands.iter().map(|o| format!("{}.into()", o)).collect();
    if operands.len() == 1 {
        out.push_str(&format!("    match {} {{\n", into[0]));
    } else {
        out.push_str(&format!("    match ({}) {{\n", into.join(", ")));
    }

    // All scalar: one native call.
    out.push_str(&format!(
        "        {} => {{\n",
        pattern(&operands, "Scalar")
    ));
    out.push_str(&scalar_arm(gate, level, &operands));
    out.push_str("            Ok(())\n");
    out.push_str("        }\n");

    // All collections: ordered fan-out.
    out.push_str(&format!(
        "        {} => {{\n",
        pattern(&operands, "Collection")
    ));
    if operands.len() == 1 {
        out.push_str(&format!("            let len = {}.len();\n", operands[0]));
    } else {
        let lens: Vec<String> = operands.iter().map(|o| format!("{}.len()", o)).collect();
        out.push_str(&format!(
            "            let len = min_len(&[{}]);\n",
            lens.join(", ")
        ));
    }
    out.push_str(&format!(
        "            tracing::trace!(function = \"{}\", len, \"broadcasting over collections\");\n",
        function
    ));
    out.push_str("            for i in 0..len {\n");
    let mut args = vec!["&mut *engine".to_string()];
    if gate.rotation {
        args.push("theta".to_string());
    }
    args.extend(operands.iter().map(|o| format!("{}[i]", o)));
    if conditioned {
        args.push("c_control".to_string());
    }
    args.push("same_step".to_string());
    out.push_str(&format!(
        "                {}({})?;\n",
        function,
        args.join(", ")
    ));
    out.push_str("            }\n");
    out.push_str("            Ok(())\n");
    out.push_str("        }\n");

    // Mixed shapes.
    if operands.len() > 1 {
        let shapes: Vec<String> = operands.iter().map(|o| format!("{}.shape()", o)).collect();
        out.push_str(&format!(
            "        ({}) => Err(type_mismatch(\"{}\", &[{}])),\n",
            operands.join(", "),
            function,
            shapes.join(", ")
        ));
    }

    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

fn doc_comment(gate: &str, level: ControlLevel) -> String {
    let what = match level {
        ControlLevel::Zero => format!("Applies the `{}` gate.", gate),
        ControlLevel::One => format!("Applies the controlled `{}` gate.", gate),
        ControlLevel::Two => format!("Applies the two-qubit controlled `{}` gate.", gate),
    };
    let mut doc = format!("/// {}\n", what);
    doc.push_str("///\n");
    doc.push_str("/// Collection operands are applied pairwise, in order, up to the length of\n");
    doc.push_str("/// the shortest collection. Mixing scalar and collection operands is an error.\n");
    doc
}

fn pattern(operands: &[&str], variant: &str) -> String {
    let parts: Vec<String> = operands
        .iter()
        .map(|o| format!("Operand::{}({})", variant, o))
        .collect();
    if parts.len() == 1 {
        parts[0].clone()
    } else {
        format!("({})", parts.join(", "))
    }
}

fn scalar_arm(gate: &GateDescriptor, level: ControlLevel, operands: &[&str]) -> String {
    let mut args: Vec<&str> = Vec::new();
    if gate.rotation {
        args.push("theta");
    }
    args.extend(operands.iter().copied());
    let plain = args.join(", ");
    let with_condition = {
        let mut a = args.clone();
        a.push("c_control");
        a.join(", ")
    };
    let entry = |variant: ExecutionVariant| naming::native_entry(gate.name, level, variant);
    let [immediate, same_step, conditioned, same_step_conditioned] = ExecutionVariant::ALL;

    let mut out = String::new();
    if level.allows_classical_condition() {
        out.push_str("            match (c_control, same_step) {\n");
        out.push_str(&format!(
            "                (Some(c_control), true) => engine.{}({})?,\n",
            entry(same_step_conditioned),
            with_condition
        ));
        out.push_str(&format!(
            "                (Some(c_control), false) => engine.{}({})?,\n",
            entry(conditioned),
            with_condition
        ));
        out.push_str(&format!(
            "                (None, true) => engine.{}({})?,\n",
            entry(same_step),
            plain
        ));
        out.push_str(&format!(
            "                (None, false) => engine.{}({})?,\n",
            entry(immediate),
            plain
        ));
        out.push_str("            }\n");
    } else {
        out.push_str("            if same_step {\n");
        out.push_str(&format!(
            "                engine.{}({})?;\n",
            entry(same_step),
            plain
        ));
        out.push_str("            } else {\n");
        out.push_str(&format!(
            "                engine.{}({})?;\n",
            entry(immediate),
            plain
        ));
        out.push_str("            }\n");
    }
    out
}

/// Render the manifest that wraps and re-exports every artifact.
pub fn manifest(catalog: &[GateDescriptor]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);

    for gate in catalog {
        for level in ControlLevel::ALL {
            let module = naming::module_name(gate.name, level);
            out.push('\n');
            out.push_str("#[allow(non_snake_case, clippy::needless_range_loop)]\n");
            out.push_str(&format!("pub mod {} {{\n", module));
            out.push_str(&format!(
                "    include!(concat!(env!(\"OUT_DIR\"), \"{}/{}/{}\"));\n",
                OUT_DIR_ROOT,
                super::GATES_DIR,
                naming::artifact_file(gate.name, level)
            ));
            out.push_str("}\n");
            out.push_str(&format!(
                "pub use self::{}::{};\n",
                module,
                naming::function_name(gate.name, level)
            ));
        }
    }
    out
}

/// Render the native capability trait: one verb per entry point.
pub fn native_trait(catalog: &[GateDescriptor]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str("use crate::engine::{NativeCall, NativeEngine};\n");
    out.push_str("use crate::error::EngineFault;\n");
    out.push_str("use crate::handle::{Bit, QBit};\n");
    out.push_str("use crate::variant::Timing;\n\n");
    out.push_str("/// Native entry points for every catalog gate.\n");
    out.push_str("///\n");
    out.push_str("/// Each verb describes itself as a [`NativeCall`] and hands it to\n");
    out.push_str("/// [`NativeEngine::apply`]. Implemented for every engine.\n");
    out.push_str("pub trait NativeGates: NativeEngine {\n");

    let mut first = true;
    for gate in catalog {
        for level in ControlLevel::ALL {
            for variant in naming::variants(level) {
                if !first {
                    out.push('\n');
                }
                first = false;
                out.push_str(&native_verb(gate, level, *variant));
            }
        }
    }

    out.push_str("}\n\n");
    out.push_str("impl<E: NativeEngine + ?Sized> NativeGates for E {}\n");
    out
}

fn native_verb(gate: &GateDescriptor, level: ControlLevel, variant: ExecutionVariant) -> String {
    let entry = naming::native_entry(gate.name, level, variant);
    let controls = naming::control_operands(level);
    let targets = naming::target_operands(gate.arity);

    let mut params = vec!["&mut self".to_string()];
    if gate.rotation {
        params.push("theta: f64".to_string());
    }
    params.extend(controls.iter().map(|c| format!("{}: QBit", c)));
    params.extend(targets.iter().map(|t| format!("{}: QBit", t)));
    if variant.is_classically_conditioned() {
        params.push("c_control: Bit".to_string());
    }

    let timing = match variant.timing {
        Timing::Immediate => "Timing::Immediate",
        Timing::SameStep => "Timing::SameStep",
    };

    let mut out = String::new();
    out.push_str(&format!("    /// `{}`\n", entry));
    out.push_str("    #[allow(clippy::too_many_arguments)]\n");
    out.push_str(&format!(
        "    fn {}({}) -> Result<(), EngineFault> {{\n",
        entry,
        params.join(", ")
    ));
    out.push_str("        self.apply(\n");
    out.push_str(&format!(
        "            NativeCall::new(\"{}\", \"{}\", {})\n",
        entry, gate.name, timing
    ));
    if gate.rotation {
        out.push_str("                .angles(&[theta])\n");
    }
    if !controls.is_empty() {
        out.push_str(&format!("                .controls(&[{}])\n", controls.join(", ")));
    }
    out.push_str(&format!("                .targets(&[{}])", targets.join(", ")));
    if variant.is_classically_conditioned() {
        out.push_str("\n                .condition(c_control)");
    }
    out.push_str(",\n");
    out.push_str("        )\n");
    out.push_str("    }\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn gate(name: &str) -> GateDescriptor {
        *CATALOG.iter().find(|g| g.name == name).unwrap()
    }

    #[test]
    fn test_level_zero_artifact_offers_classical_condition() {
        let src = artifact(&gate("pauli_x"), ControlLevel::Zero);
        assert!(src.starts_with(HEADER));
        assert!(src.contains("pub fn pauliX<'a, E>("));
        assert!(src.contains("    c_control: Option<Bit>,\n"));
        assert!(src.contains(
            "(Some(c_control), true) => engine.pauli_x_same_step_classically_controlled(qbits, c_control)?,"
        ));
        assert!(src.contains("(None, false) => engine.pauli_x(qbits)?,"));
        // One operand: no mismatch arm needed.
        assert!(!src.contains("type_mismatch"));
    }

    #[test]
    fn test_level_one_artifact_uses_unindexed_control() {
        let src = artifact(&gate("pauli_x"), ControlLevel::One);
        assert!(src.contains("pub fn cPauliX<'a, E>("));
        assert!(src.contains("    c_qbits: impl Into<Operand<'a, QBit>>,\n"));
        assert!(!src.contains("c_control"));
        assert!(src.contains("engine.controlled_pauli_x_same_step(c_qbits, qbits)?;"));
        assert!(src.contains("engine.controlled_pauli_x(c_qbits, qbits)?;"));
        assert!(src.contains("let len = min_len(&[c_qbits.len(), qbits.len()]);"));
        assert!(src.contains("cPauliX(&mut *engine, c_qbits[i], qbits[i], same_step)?;"));
        assert!(src.contains(
            "(c_qbits, qbits) => Err(type_mismatch(\"cPauliX\", &[c_qbits.shape(), qbits.shape()])),"
        ));
    }

    #[test]
    fn test_level_two_rotation_swap_artifact() {
        let src = artifact(&gate("rotation_swap"), ControlLevel::Two);
        assert!(src.contains("pub fn ccRotationSwap<'a, E>("));
        assert!(src.contains("    theta: f64,\n    c_qbits0: impl Into<Operand<'a, QBit>>,\n    c_qbits1: impl Into<Operand<'a, QBit>>,\n    qbits0: impl Into<Operand<'a, QBit>>,\n    qbits1: impl Into<Operand<'a, QBit>>,\n"));
        assert!(src.contains(
            "engine.controlled_controlled_rotation_swap(theta, c_qbits0, c_qbits1, qbits0, qbits1)?;"
        ));
        assert!(src.contains(
            "ccRotationSwap(&mut *engine, theta, c_qbits0[i], c_qbits1[i], qbits0[i], qbits1[i], same_step)?;"
        ));
    }

    #[test]
    fn test_manifest_lists_every_artifact_in_order() {
        let src = manifest(CATALOG);
        assert_eq!(src.matches("pub mod ").count(), CATALOG.len() * 3);
        assert_eq!(src.matches("pub use self::").count(), CATALOG.len() * 3);

        let hadamard = src.find("pub use self::hadamard::hadamard;").unwrap();
        let c_hadamard = src
            .find("pub use self::controlled_hadamard::cHadamard;")
            .unwrap();
        let cc_swap = src
            .find("pub use self::controlled_controlled_swap::ccSwap;")
            .unwrap();
        assert!(hadamard < c_hadamard && c_hadamard < cc_swap);
        assert!(src.contains("\"/bindings/gates/controlled-controlled-swap.rs\""));
    }

    #[test]
    fn test_native_trait_has_one_verb_per_entry() {
        let src = native_trait(CATALOG);
        // 4 + 2 + 2 entry points per gate.
        assert_eq!(src.matches("    fn ").count(), CATALOG.len() * 8);
        assert!(src.contains(
            "    fn rotation_x_same_step_classically_controlled(&mut self, theta: f64, qbits: QBit, c_control: Bit) -> Result<(), EngineFault> {"
        ));
        assert!(src.contains(
            "NativeCall::new(\"controlled_swap_same_step\", \"swap\", Timing::SameStep)"
        ));
        assert!(src.contains("impl<E: NativeEngine + ?Sized> NativeGates for E {}"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        for g in CATALOG {
            for level in ControlLevel::ALL {
                assert_eq!(artifact(g, level), artifact(g, level));
            }
        }
        assert_eq!(manifest(CATALOG), manifest(CATALOG));
        assert_eq!(native_trait(CATALOG), native_trait(CATALOG));
    }
}
