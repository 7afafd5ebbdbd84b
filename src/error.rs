//! Error types for the fallible surfaces around the engine.
//!
//! Gestures themselves never fail; a missing shape or an unmounted container
//! is an early return, not an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing or serialization error
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration version is newer than supported
    #[error("Configuration file version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A field holds a value the engine cannot work with
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Errors for image payloads handed to the engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    /// Not a data URI at all
    #[error("Not a data URI")]
    NotDataUri,

    /// A data URI whose media type is not an image
    #[error("Unsupported media type '{media_type}', expected image/*")]
    UnsupportedMediaType {
        /// The declared media type
        media_type: String,
    },
}

/// Errors that can occur while running a replay script.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Script or config file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Script is not valid JSON for the replay format
    #[error("Invalid replay script: {0}")]
    Json(#[from] serde_json::Error),

    /// Config embedded in or passed alongside the script is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An image payload step was rejected
    #[error("Image payload rejected: {0}")]
    Payload(#[from] PayloadError),
}

impl ReplayError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
