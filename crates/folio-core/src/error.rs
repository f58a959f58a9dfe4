//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// An element named by the page manifest has no registered handle
    #[error("Missing element: {role} '{key}' is not present on the page")]
    MissingElement { role: &'static str, key: String },

    /// The same element key was declared twice in the manifest
    #[error("Duplicate element: '{0}' is declared more than once")]
    DuplicateElement(String),

    /// A nav link points at something other than a declared section
    #[error("Unknown anchor: nav link '{0}' does not point at a declared section")]
    UnknownAnchor(String),

    /// Counter target is missing or not a non-negative integer
    #[error("Invalid counter target for '{key}': {raw:?}")]
    InvalidCounterTarget { key: String, raw: String },

    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
