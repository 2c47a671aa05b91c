//! Error types for the Glaze export pipeline.
//!
//! Errors are organized by stage so each per-item failure carries the
//! context (file path, limit, stage-specific detail) a batch report needs.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Glaze operations.
#[derive(Error, Debug)]
pub enum GlazeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Per-item export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Per-item export errors, organized by pipeline stage.
///
/// Every variant is recoverable at the batch level: the item is recorded
/// as failed and the remaining sources continue.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Source file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Source file exceeds the size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Image dimensions exceed the limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Decoding did not finish within the configured timeout
    #[error("Decode timed out for {path} after {timeout_ms}ms")]
    Timeout { path: PathBuf, timeout_ms: u64 },

    /// Output directory could not be created
    #[error("Cannot create output directory {dir}: {message}")]
    CreateDir { dir: PathBuf, message: String },

    /// No encodable format can be derived for the destination
    #[error("Unsupported output format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// Writing the tinted image failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Convenience type alias for Glaze results.
pub type Result<T> = std::result::Result<T, GlazeError>;
