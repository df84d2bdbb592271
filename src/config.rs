// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the `qukit-bindgen` tool and the reference recorder.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. config.yaml file
//! 3. Environment variables (QUKIT_*)
//! 4. CLI arguments

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Reference recorder settings
    #[serde(default)]
    pub recorder: RecorderConfig,
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            for path in &["config.yaml", "config.yml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("QUKIT_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("QUKIT_LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("QUKIT_MAX_QUBITS") {
            if let Ok(n) = val.parse() {
                self.recorder.max_qubits = n;
            }
        }
        if let Ok(val) = env::var("QUKIT_MAX_BITS") {
            if let Ok(n) = val.parse() {
                self.recorder.max_bits = n;
            }
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(Error::Config(format!(
                "Unknown log format '{}' (expected json or pretty)",
                self.logging.format
            )));
        }
        if self.recorder.max_qubits == 0 {
            return Err(Error::Config("recorder.max_qubits cannot be 0".into()));
        }
        if self.recorder.max_bits == 0 {
            return Err(Error::Config("recorder.max_bits cannot be 0".into()));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

/// Register limits for [`CircuitRecorder`](crate::engine::CircuitRecorder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Maximum number of qubits that can be allocated
    #[serde(default = "default_max_qubits")]
    pub max_qubits: usize,

    /// Maximum number of classical bits that can be allocated
    #[serde(default = "default_max_bits")]
    pub max_bits: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            max_qubits: default_max_qubits(),
            max_bits: default_max_bits(),
        }
    }
}

fn default_max_qubits() -> usize {
    32
}

fn default_max_bits() -> usize {
    64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.recorder.max_qubits, 32);
        assert_eq!(config.recorder.max_bits, 64);
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let mut bad_config = Config::default();
        bad_config.recorder.max_qubits = 0;
        assert!(bad_config.validate().is_err());
    }

    #[test]
    fn test_validate_max_bits_zero() {
        let mut config = Config::default();
        config.recorder.max_bits = 0;
        let msg = format!("{}", config.validate().unwrap_err());
        assert!(msg.contains("max_bits"));
    }

    #[test]
    fn test_validate_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".into();
        let msg = format!("{}", config.validate().unwrap_err());
        assert!(msg.contains("xml"));
    }

    #[test]
    fn test_config_load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
logging:
  level: "debug"
recorder:
  max_bits: 8
"#
        )
        .unwrap();

        let config = Config::load(Some(f.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.recorder.max_bits, 8);
    }

    #[test]
    fn test_config_load_nonexistent_file() {
        // A missing explicit path falls back to defaults.
        let path = std::path::Path::new("/tmp/does_not_exist_qukit_test.yaml");
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.recorder.max_bits, 64);
    }

    #[test]
    fn test_config_load_invalid_yaml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "{{{{not: valid: yaml::::").unwrap();

        let result = Config::load(Some(f.path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_yaml_roundtrip_is_stable() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_env_override_log_format() {
        let mut config = Config::default();
        std::env::set_var("QUKIT_LOG_FORMAT", "json");
        config.apply_env_overrides();
        assert_eq!(config.logging.format, "json");
        std::env::remove_var("QUKIT_LOG_FORMAT");
    }

    #[test]
    fn test_env_override_max_qubits() {
        let mut config = Config::default();
        std::env::set_var("QUKIT_MAX_QUBITS", "5");
        config.apply_env_overrides();
        assert_eq!(config.recorder.max_qubits, 5);
        std::env::remove_var("QUKIT_MAX_QUBITS");
    }

    #[test]
    fn test_env_override_ignores_unparsable_numbers() {
        let mut config = Config::default();
        std::env::set_var("QUKIT_MAX_BITS", "many");
        config.apply_env_overrides();
        assert_eq!(config.recorder.max_bits, 64);
        std::env::remove_var("QUKIT_MAX_BITS");
    }
}
