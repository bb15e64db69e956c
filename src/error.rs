//! Error types for layout and BOM calculation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for calculator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input parameter outside its contract (-1)
    InvalidParameter = -1,
    /// Dimension is not a finite number (-2)
    InvalidDimension = -2,
    /// Input validation failed (-3)
    Validation = -3,
    /// Project not found in store (E100)
    ProjectNotFound = 100,
    /// Storage backend failure (E200)
    Storage = 200,
    /// JSON (de)serialization failure (E201)
    Serialization = 201,
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum SacadaError {
    #[error("Invalid parameter '{name}': {reason} (got {value})")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("Invalid dimension '{name}': expected a finite length in mm, got {value}")]
    InvalidDimension { name: String, value: f64 },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    #[error("Storage error at {path}: {message}")]
    Storage { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SacadaError {
    /// Build an `InvalidParameter` error.
    pub fn invalid_parameter(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        SacadaError::InvalidParameter {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SacadaError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            SacadaError::InvalidDimension { .. } => ErrorCode::InvalidDimension,
            SacadaError::Validation { .. } => ErrorCode::Validation,
            SacadaError::ProjectNotFound { .. } => ErrorCode::ProjectNotFound,
            SacadaError::Storage { .. } => ErrorCode::Storage,
            SacadaError::Serialization(_) => ErrorCode::Serialization,
            SacadaError::Io(_) => ErrorCode::Storage,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, SacadaError>;
