// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Build script for qukit-bindings.
//! Expands the gate catalog into dispatcher sources under `$OUT_DIR/bindings`.
//!
//! The catalog, variant and generator modules are shared with the library
//! through `#[path]`, so both sides always agree on names and layout.

use std::env;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/catalog.rs"]
mod catalog;

#[allow(dead_code)]
#[path = "src/variant.rs"]
mod variant;

#[allow(dead_code)]
#[path = "src/generator/mod.rs"]
mod generator;

const SOURCES: &[&str] = &[
    "src/catalog.rs",
    "src/variant.rs",
    "src/generator/mod.rs",
    "src/generator/naming.rs",
    "src/generator/render.rs",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?)
        .join(generator::render::OUT_DIR_ROOT.trim_start_matches('/'));

    let manifest = generator::generate_into(catalog::CATALOG, &out_dir)?;
    if manifest.is_empty() {
        println!("cargo:warning=Gate catalog is empty, no dispatchers generated");
    }

    for path in SOURCES {
        println!("cargo:rerun-if-changed={}", path);
    }

    Ok(())
}
