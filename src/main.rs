// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Qukit binding generator
//!
//! Inspects the gate catalog, writes the generated binding tree and records
//! demo circuits through the generated dispatchers.
//!
//! # Usage
//!
//! ```bash
//! # List catalog gates
//! qukit-bindgen catalog
//!
//! # Write the binding tree to ./bindings
//! qukit-bindgen generate
//!
//! # Record a Bernstein-Vazirani circuit
//! qukit-bindgen demo --width 5 --secret 10110
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qukit_bindings::catalog::{self, CATALOG};
use qukit_bindings::dispatch::{measurement, Basis};
use qukit_bindings::engine::CircuitRecorder;
use qukit_bindings::gates::{cPauliX, hadamard, pauliX};
use qukit_bindings::generator;
use qukit_bindings::{config::Config, Error, Result, VERSION};

/// Output directory of the `generate` command.
const BINDINGS_DIR: &str = "bindings";

/// Qukit gate binding generator
#[derive(Parser)]
#[command(name = "qukit-bindgen")]
#[command(author = "QubitOS Contributors")]
#[command(version = VERSION)]
#[command(about = "Generate and inspect qukit gate bindings")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog gates
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the binding tree to ./bindings for inspection
    ///
    /// The written gates.rs includes its artifacts from `$OUT_DIR/bindings`,
    /// so the tree mirrors what the build script compiles but does not build
    /// on its own.
    Generate,

    /// Print the generated manifest as JSON
    Manifest,

    /// Record a Bernstein-Vazirani circuit and print its schedule
    Demo {
        /// Number of input qubits
        #[arg(short, long, default_value_t = 4)]
        width: usize,

        /// Hidden bit string (defaults to alternating 1010...)
        #[arg(short, long)]
        secret: Option<String>,

        /// Measurement basis (x, y, z)
        #[arg(short, long, default_value = "z")]
        basis: Basis,
    },

    /// Show effective configuration
    Config,

    /// Validate configuration and catalog
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_logging(&config.logging.level, &config.logging.format);

    match cli.command {
        Commands::Catalog { json } => print_catalog(json)?,

        Commands::Generate => {
            let manifest = generator::generate_into(CATALOG, Path::new(BINDINGS_DIR))?;
            println!(
                "Generated {} dispatchers in {}/",
                manifest.len(),
                BINDINGS_DIR
            );
        }

        Commands::Manifest => {
            let bindings = generator::generate(CATALOG)?;
            println!("{}", serde_json::to_string_pretty(&bindings.manifest)?);
        }

        Commands::Demo {
            width,
            secret,
            basis,
        } => {
            config.validate()?;
            check_demo_width(&config, width)?;
            let secret = parse_secret(secret.as_deref(), width)?;
            let recorder = bernstein_vazirani(&config, &secret, basis)?;
            info!(
                width,
                steps = recorder.steps().len(),
                calls = recorder.len(),
                "Recorded demo circuit"
            );
            print!("{}", recorder);
        }

        Commands::Config => {
            println!("{}", serde_yaml::to_string(&config)?);
        }

        Commands::Validate => {
            let result = config
                .validate()
                .and_then(|()| catalog::validate(CATALOG).map_err(Error::from));
            match result {
                Ok(()) => {
                    println!("Configuration and catalog are valid");
                }
                Err(e) => {
                    error!(error = %e, "Validation failed");
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Initialize logging with tracing.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn print_catalog(as_json: bool) -> Result<()> {
    if as_json {
        let gates: Vec<_> = CATALOG
            .iter()
            .map(|g| {
                json!({
                    "name": g.name,
                    "arity": g.arity,
                    "rotation": g.rotation,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&gates)?);
        return Ok(());
    }

    let bindings = generator::generate(CATALOG)?;
    println!("{:<28} {:>5} {:>8}  function", "gate", "level", "rotation");
    for entry in &bindings.manifest.entries {
        println!(
            "{:<28} {:>5} {:>8}  {}",
            entry.gate, entry.control_level, entry.rotation, entry.function
        );
    }
    Ok(())
}

/// The demo needs `width` inputs plus one ancilla, and `width` outcome bits.
fn check_demo_width(config: &Config, width: usize) -> Result<()> {
    let limits = &config.recorder;
    if width >= limits.max_qubits {
        return Err(Error::Config(format!(
            "Demo width {} needs {} qubits, recorder allows {}",
            width,
            width.saturating_add(1),
            limits.max_qubits
        )));
    }
    if width > limits.max_bits {
        return Err(Error::Config(format!(
            "Demo width {} needs {} bits, recorder allows {}",
            width, width, limits.max_bits
        )));
    }
    Ok(())
}

fn parse_secret(secret: Option<&str>, width: usize) -> Result<Vec<bool>> {
    let Some(secret) = secret else {
        return Ok((0..width).map(|i| i % 2 == 0).collect());
    };
    let bits = secret.chars().count();
    if bits != width {
        return Err(Error::Config(format!(
            "Secret '{}' has {} bits, expected {}",
            secret, bits, width
        )));
    }
    secret
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(Error::Config(format!("Invalid secret bit '{}'", other))),
        })
        .collect()
}

/// Bernstein-Vazirani over `secret.len()` inputs plus one ancilla.
fn bernstein_vazirani(config: &Config, secret: &[bool], basis: Basis) -> Result<CircuitRecorder> {
    let mut rec = CircuitRecorder::new(config.recorder.clone());
    let inputs = rec.qbits(secret.len())?;
    let ancilla = rec.qbit()?;
    let outcomes = rec.bits(secret.len())?;

    pauliX(&mut rec, ancilla, None, false)?;
    hadamard(&mut rec, &inputs, None, true)?;
    hadamard(&mut rec, ancilla, None, false)?;

    // Oracle: one CNOT from every input whose secret bit is set.
    let controls: Vec<_> = inputs
        .iter()
        .zip(secret)
        .filter(|(_, bit)| **bit)
        .map(|(q, _)| *q)
        .collect();
    let targets = vec![ancilla; controls.len()];
    cPauliX(&mut rec, &controls, &targets, false)?;

    hadamard(&mut rec, &inputs, None, false)?;
    measurement(&mut rec, &inputs, &outcomes, basis, false)?;

    Ok(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use qukit_bindings::config::RecorderConfig;

    fn config(max_qubits: usize, max_bits: usize) -> Config {
        Config {
            recorder: RecorderConfig {
                max_qubits,
                max_bits,
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_demo_width_bounded_by_recorder() {
        let cfg = config(5, 4);
        assert!(check_demo_width(&cfg, 4).is_ok());
        assert!(matches!(check_demo_width(&cfg, 5), Err(Error::Config(_))));
        assert!(matches!(
            check_demo_width(&cfg, 99_999_999_999),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            check_demo_width(&config(10, 2), 3),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_secret_length_counts_characters() {
        let err = parse_secret(Some("1é"), 2).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Invalid secret bit 'é'");

        let err = parse_secret(Some("1é"), 3).unwrap_err();
        assert!(err.to_string().contains("has 2 bits, expected 3"));
    }

    #[test]
    fn test_secret_defaults_to_alternating() {
        assert_eq!(
            parse_secret(None, 3).unwrap(),
            vec![true, false, true]
        );
        assert_eq!(parse_secret(Some("01"), 2).unwrap(), vec![false, true]);
    }

    #[test]
    fn test_demo_records_oracle_and_measurements() {
        let secret = parse_secret(Some("101"), 3).unwrap();
        let rec = bernstein_vazirani(&Config::default(), &secret, Basis::Z).unwrap();
        assert_eq!(rec.num_qubits(), 4);
        assert_eq!(rec.num_bits(), 3);
        assert_eq!(
            rec.calls()
                .filter(|c| c.entry == "controlled_pauli_x")
                .count(),
            2
        );
        assert_eq!(
            rec.calls().filter(|c| c.entry == "measurement_z").count(),
            3
        );
    }

    #[test]
    fn test_generate_help_marks_tree_as_inspection_only() {
        let cli = Cli::command();
        let generate = cli
            .get_subcommands()
            .find(|c| c.get_name() == "generate")
            .unwrap();
        let about = generate.get_about().unwrap().to_string();
        assert!(about.contains("for inspection"));
        let long = generate.get_long_about().unwrap().to_string();
        assert!(long.contains("does not build"));
    }
}
