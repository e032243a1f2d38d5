//! Error types for the drawlib core crate.
//!
//! This module provides structured error types for library document parsing,
//! configuration persistence, and validation. Selection, resolution and
//! instancing never fail; only serialization and configuration I/O surface
//! errors to the caller.

use std::io;
use thiserror::Error;

/// Errors that can occur while handling library documents and configuration.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// The library document is malformed or unsupported.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

/// Errors related to the shape of a library document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The top-level type tag does not identify a library document.
    #[error("Unexpected document type: expected {expected}, got {actual}")]
    WrongType { expected: String, actual: String },

    /// The document was written by a newer schema than this build understands.
    #[error("Unsupported document version {version} (max supported {supported})")]
    UnsupportedVersion { version: u32, supported: u32 },

    /// Two elements inside one library item share an identifier.
    #[error("Duplicate element id '{element_id}' in library item '{item_id}'")]
    DuplicateElementId { item_id: String, element_id: String },
}

/// Result type alias for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Result type alias for document validation.
pub type DocumentResult<T> = Result<T, DocumentError>;
