//! Error types for dataset loading.
//!
//! Every variant is fatal for a validation run: no partial dataset is ever
//! returned alongside an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the guideline dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// No document exists at the given location.
    #[error("Dataset not found: {path}")]
    NotFound { path: PathBuf },

    /// The document exists but could not be read.
    #[error("Failed to read dataset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the dataset shape.
    #[error("Invalid dataset {path} at {field_path}: {message}")]
    Schema {
        path: PathBuf,
        /// Location of the offending value, e.g. `specialites[0].interventions[2]`.
        field_path: String,
        message: String,
    },
}

impl LoadError {
    /// Field path for schema errors.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Self::Schema { field_path, .. } => Some(field_path),
            _ => None,
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
