//! Core error types for agenda-core.
//!
//! The schedule calculator, the view projector and clock formatting are
//! total and never produce these. They come from the edges: loading the
//! talk feed, reading and writing the config file, and opt-in validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for agenda-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Talk feed could not be loaded
    #[error("Failed to load talks from {source_name}: {message}")]
    Feed {
        source_name: String,
        message: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Could not determine or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Talk with a zero or negative duration
    #[error("Talk {index} ('{title}') has non-positive duration {duration}")]
    NonPositiveDuration {
        index: usize,
        title: String,
        duration: i64,
    },

    /// Talk with a blank title
    #[error("Talk {index} has an empty title")]
    EmptyTitle { index: usize },

    /// Clock string that is not a 24-hour HH:MM
    #[error("Invalid clock time '{0}': expected HH:MM")]
    InvalidClock(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
