// Local file system adapter

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// File system adapter backed by tokio::fs
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new file system adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        match tokio::fs::metadata(file_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::IoError(format!(
                "Failed to stat {}: {}",
                file_path.display(),
                e
            ))),
        }
    }

    async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError> {
        let metadata = tokio::fs::metadata(file_path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to stat {}: {}", file_path.display(), e))
        })?;
        Ok(metadata.len())
    }
}
