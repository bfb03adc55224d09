//! Core error types for ritmi-core.
//!
//! The allocation engine itself degrades silently (insufficient capacity
//! means partial placement, never an error); the types here cover the
//! configuration, storage, and input-validation boundaries around it.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ritmi-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schedule snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load the planner file
    #[error("Failed to load planner file from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the planner file
    #[error("Failed to save planner file to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse the planner file
    #[error("Failed to parse planner file: {0}")]
    ParseFailed(String),
}

/// Schedule snapshot storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a stored schedule snapshot
    #[error("Failed to read schedule snapshot from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Failed to write a schedule snapshot
    #[error("Failed to write schedule snapshot to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Malformed HH:MM clock string
    #[error("Invalid clock time '{0}': expected HH:MM")]
    InvalidClock(String),

    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be greater than start ({start})")]
    InvalidTimeRange { start: String, end: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Unknown week day name
    #[error("Unknown week day: '{0}'")]
    UnknownWeekDay(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
