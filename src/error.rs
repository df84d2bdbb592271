// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the bindings.

use std::fmt;

use crate::catalog::CatalogError;
use crate::dispatch::OperandShape;
use crate::generator::GenerateError;

/// Result type alias for dispatch and tooling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Config(String),
    /// Call rejected by a dispatcher before reaching the engine
    Dispatch(DispatchError),
    /// Failure reported by the native engine
    Engine(EngineFault),
    /// Gate catalog authoring error
    Catalog(CatalogError),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Dispatch(e) => write!(f, "Dispatch error: {}", e),
            Error::Engine(e) => write!(f, "Engine fault: {}", e),
            Error::Catalog(e) => write!(f, "Catalog error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Dispatch(e) => Some(e),
            Error::Engine(e) => Some(e),
            Error::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<DispatchError> for Error {
    fn from(e: DispatchError) -> Self {
        Error::Dispatch(e)
    }
}

impl From<EngineFault> for Error {
    fn from(e: EngineFault) -> Self {
        Error::Engine(e)
    }
}

impl From<CatalogError> for Error {
    fn from(e: CatalogError) -> Self {
        Error::Catalog(e)
    }
}

impl From<GenerateError> for Error {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::Catalog(e) => Error::Catalog(e),
            GenerateError::Io(e) => Error::Io(e),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Errors raised by dispatchers themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Operands of one call disagree on scalar vs collection
    TypeMismatch {
        function: &'static str,
        shapes: Vec<OperandShape>,
    },
    /// Measurement basis name not recognised
    UnknownBasis(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::TypeMismatch { function, shapes } => {
                let shapes: Vec<String> = shapes.iter().map(|s| s.to_string()).collect();
                write!(
                    f,
                    "Type mismatch in {}: operands must all be scalars or all collections, got [{}]",
                    function,
                    shapes.join(", ")
                )
            }
            DispatchError::UnknownBasis(name) => {
                write!(f, "Unknown measurement basis '{}' (expected x, y or z)", name)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Failures reported across the native boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineFault {
    /// Qubit handle was never allocated
    UnknownQubit { index: usize, allocated: usize },
    /// Bit handle was never allocated
    UnknownBit { index: usize, allocated: usize },
    /// Same qubit used twice in one call
    DuplicateQubit { entry: String, index: usize },
    /// Register capacity exhausted
    CapacityExceeded { resource: String, limit: usize },
    /// Engine refused the call
    Rejected(String),
}

impl fmt::Display for EngineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineFault::UnknownQubit { index, allocated } => {
                write!(f, "Unknown qubit q{} ({} allocated)", index, allocated)
            }
            EngineFault::UnknownBit { index, allocated } => {
                write!(f, "Unknown bit c{} ({} allocated)", index, allocated)
            }
            EngineFault::DuplicateQubit { entry, index } => {
                write!(f, "Qubit q{} used more than once in {}", index, entry)
            }
            EngineFault::CapacityExceeded { resource, limit } => {
                write!(f, "Capacity exceeded for {}: limit={}", resource, limit)
            }
            EngineFault::Rejected(msg) => write!(f, "Call rejected: {}", msg),
        }
    }
}

impl std::error::Error for EngineFault {}
