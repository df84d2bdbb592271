// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Binding generator.
//!
//! Expands the gate catalog into one dispatcher per (gate, control level),
//! a manifest that re-exports all of them, and the native capability trait
//! the dispatchers call into.
//!
//! # Output layout
//!
//! ```text
//! <root>/
//! ├── gates.rs         manifest
//! ├── native.rs        NativeGates trait
//! └── gates/
//!     ├── hadamard.rs
//!     ├── controlled-hadamard.rs
//!     └── ...
//! ```
//!
//! The build script writes this tree to `$OUT_DIR/bindings`; the
//! `qukit-bindgen generate` command writes it to `bindings/`.

pub mod naming;
pub mod render;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{self, CatalogError, ControlLevel, GateDescriptor};

/// Subdirectory holding one file per dispatcher.
pub const GATES_DIR: &str = "gates";

/// Manifest file name.
pub const MANIFEST_FILE: &str = "gates.rs";

/// Native capability trait file name.
pub const NATIVE_FILE: &str = "native.rs";

/// Generation errors.
#[derive(Debug)]
pub enum GenerateError {
    /// Catalog failed validation
    Catalog(CatalogError),
    /// Writing the output tree failed
    Io(std::io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Catalog(e) => write!(f, "Catalog error: {}", e),
            GenerateError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Catalog(e) => Some(e),
            GenerateError::Io(e) => Some(e),
        }
    }
}

impl From<CatalogError> for GenerateError {
    fn from(e: CatalogError) -> Self {
        GenerateError::Catalog(e)
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(e: std::io::Error) -> Self {
        GenerateError::Io(e)
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the output root
    pub path: PathBuf,
    /// File contents
    pub contents: String,
}

/// Manifest entry for one generated dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Base gate name
    pub gate: String,
    /// Number of target qubits
    pub arity: u8,
    /// Whether the gate takes `theta`
    pub rotation: bool,
    /// Number of control qubits
    pub control_level: usize,
    /// Public dispatcher name
    pub function: String,
    /// Artifact file, relative to the output root
    pub artifact: String,
    /// Native entry points the dispatcher may call
    pub native_entries: Vec<String>,
}

impl ManifestEntry {
    fn new(gate: &GateDescriptor, level: ControlLevel) -> Self {
        Self {
            gate: gate.name.to_string(),
            arity: gate.arity,
            rotation: gate.rotation,
            control_level: level.count(),
            function: naming::function_name(gate.name, level),
            artifact: format!("{}/{}", GATES_DIR, naming::artifact_file(gate.name, level)),
            native_entries: naming::native_entries(gate.name, level),
        }
    }
}

/// Listing of everything a generator run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Look up an entry by dispatcher name.
    pub fn find(&self, function: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.function == function)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The complete output of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub manifest: Manifest,
    pub artifacts: Vec<Artifact>,
}

impl Bindings {
    /// Write the tree under `root`, replacing any previous `gates/` subtree.
    pub fn write_to(&self, root: &Path) -> Result<(), GenerateError> {
        let gates_dir = root.join(GATES_DIR);
        if gates_dir.exists() {
            debug!(path = %gates_dir.display(), "Removing previous bindings");
            fs::remove_dir_all(&gates_dir)?;
        }
        fs::create_dir_all(&gates_dir)?;

        for artifact in &self.artifacts {
            let path = root.join(&artifact.path);
            fs::write(&path, &artifact.contents)?;
            debug!(path = %path.display(), bytes = artifact.contents.len(), "Wrote artifact");
        }

        info!(
            root = %root.display(),
            dispatchers = self.manifest.len(),
            files = self.artifacts.len(),
            "Generated bindings"
        );
        Ok(())
    }

    /// Artifact at a relative path.
    pub fn artifact(&self, path: impl AsRef<Path>) -> Option<&Artifact> {
        let path = path.as_ref();
        self.artifacts.iter().find(|a| a.path == path)
    }
}

/// Expand a catalog into bindings. Nothing is rendered for an invalid catalog.
pub fn generate(catalog: &[GateDescriptor]) -> Result<Bindings, GenerateError> {
    catalog::validate(catalog)?;

    let mut manifest = Manifest::default();
    let mut artifacts = Vec::with_capacity(catalog.len() * ControlLevel::ALL.len() + 2);

    artifacts.push(Artifact {
        path: PathBuf::from(MANIFEST_FILE),
        contents: render::manifest(catalog),
    });
    artifacts.push(Artifact {
        path: PathBuf::from(NATIVE_FILE),
        contents: render::native_trait(catalog),
    });

    for gate in catalog {
        for level in ControlLevel::ALL {
            let entry = ManifestEntry::new(gate, level);
            artifacts.push(Artifact {
                path: PathBuf::from(&entry.artifact),
                contents: render::artifact(gate, level),
            });
            manifest.entries.push(entry);
        }
    }

    Ok(Bindings {
        manifest,
        artifacts,
    })
}

/// Generate and write in one step.
pub fn generate_into(catalog: &[GateDescriptor], root: &Path) -> Result<Manifest, GenerateError> {
    let bindings = generate(catalog)?;
    bindings.write_to(root)?;
    Ok(bindings.manifest)
}
