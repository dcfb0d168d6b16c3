// Application layer - Use case interactors

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::error::{GifCutError, GifCutResult};
use crate::ports::FsPort;
use crate::utils::path::{is_gif, same_location};

pub mod compare_interactor;
pub mod container;
pub mod inspect_interactor;
pub mod split_interactor;
pub mod trim_interactor;

// Re-export interactors
pub use compare_interactor::CompareInteractor;
pub use container::AppContainer;
pub use inspect_interactor::InspectInteractor;
pub use split_interactor::SplitInteractor;
pub use trim_interactor::TrimInteractor;

/// Rendering of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Check that `input` is an existing `.gif` file
pub(crate) async fn validate_input(fs: &dyn FsPort, input: &Path) -> GifCutResult<()> {
    if !fs.file_exists(input).await? {
        return Err(GifCutError::InputFileNotFound {
            path: input.display().to_string(),
        });
    }
    if !is_gif(input) {
        return Err(GifCutError::NotAGif {
            path: input.display().to_string(),
        });
    }
    Ok(())
}

/// Refuse to clobber the input, or an existing output unless `overwrite` is set
pub(crate) async fn validate_output(
    fs: &dyn FsPort,
    input: &Path,
    output: &Path,
    overwrite: bool,
) -> GifCutResult<()> {
    if same_location(input, output) {
        return Err(DomainError::BadArgs(format!(
            "output would overwrite the input: {}",
            output.display()
        ))
        .into());
    }
    if !overwrite && fs.file_exists(output).await? {
        return Err(DomainError::BadArgs(format!(
            "output already exists: {} (pass --overwrite to replace it)",
            output.display()
        ))
        .into());
    }
    Ok(())
}
