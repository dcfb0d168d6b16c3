// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for reading animation metadata
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe an animation and return its dimensions, palette size and timeline
    async fn probe(&self, file_path: &Path) -> Result<GifInfo, DomainError>;
}

/// Port for the external codec that re-encodes frames
#[async_trait]
pub trait CodecPort: Send + Sync {
    /// Check whether the codec can be invoked at all
    async fn is_available(&self) -> bool;

    /// Extract the inclusive frame range of `input`, apply `options` and write
    /// an optimized animation to `output`
    async fn extract(
        &self,
        input: &Path,
        frames: FrameRange,
        options: &TransformOptions,
        output: &Path,
    ) -> Result<(), DomainError>;
}

/// Port for file system queries
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if file exists
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Get file size in bytes
    async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError>;
}
