// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Zero frames, or delay data that cannot be reconciled with the frame count
    InvalidTimeline(String),
    /// Trim interval with no frame overlap, or out-of-bounds frame indices
    InvalidRange(String),
    /// Fewer than two usable boundaries remained after filtering split points
    EmptySplitPlan(String),
    /// Invalid arguments provided
    BadArgs(String),
    /// Metadata probe failed or returned unreadable output
    ProbeFailed(String),
    /// External codec invocation failed
    CodecFailed(String),
    /// External tool is not installed or not on PATH
    ToolUnavailable(String),
    /// Configuration could not be loaded or is invalid
    ConfigError(String),
    /// File system error
    IoError(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidTimeline(msg) => write!(f, "Invalid timeline: {}", msg),
            DomainError::InvalidRange(msg) => write!(f, "Invalid range: {}", msg),
            DomainError::EmptySplitPlan(msg) => write!(f, "No segmentation possible: {}", msg),
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::ProbeFailed(msg) => write!(f, "Probe failed: {}", msg),
            DomainError::CodecFailed(msg) => write!(f, "Codec failed: {}", msg),
            DomainError::ToolUnavailable(msg) => write!(f, "Tool unavailable: {}", msg),
            DomainError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            DomainError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
