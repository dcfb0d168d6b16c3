//! Error handling module for GifCut

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for GifCut operations
#[derive(Error, Debug)]
pub enum GifCutError {
    /// Domain rule or collaborator failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Input file is not a GIF
    #[error("Input file is not a GIF file: {path}")]
    NotAGif { path: String },

    /// Report serialization error
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("Failed to serialize report: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for GifCut operations
pub type GifCutResult<T> = std::result::Result<T, GifCutError>;
