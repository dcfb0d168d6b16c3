// Trim interactor - Orchestrates the trim use case

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::app::{validate_input, validate_output};
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::error::GifCutResult;
use crate::planner::TrimPlanner;
use crate::ports::*;
use crate::utils::path::optimized_output;
use crate::utils::time::format_span;
use crate::utils::Utils;

/// Interactor for the trim use case
pub struct TrimInteractor {
    probe_port: Arc<dyn ProbePort>,
    codec_port: Arc<dyn CodecPort>,
    fs_port: Arc<dyn FsPort>,
    planner: TrimPlanner,
}

impl TrimInteractor {
    /// Create new trim interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        codec_port: Arc<dyn CodecPort>,
        fs_port: Arc<dyn FsPort>,
    ) -> Self {
        Self {
            probe_port,
            codec_port,
            fs_port,
            planner: TrimPlanner::new(),
        }
    }

    /// Keep one range of the input and write it as a new optimized animation.
    ///
    /// Without a range the whole animation is re-encoded with `request.options`.
    pub async fn execute(&self, request: TrimRequest) -> GifCutResult<TrimResponse> {
        validate_input(self.fs_port.as_ref(), &request.input).await?;

        let output = request
            .output
            .clone()
            .unwrap_or_else(|| optimized_output(&request.input));
        validate_output(
            self.fs_port.as_ref(),
            &request.input,
            &output,
            request.overwrite,
        )
        .await?;

        let info = self.probe_port.probe(&request.input).await?;
        let frames = match &request.range {
            Some(range) => self.planner.plan(&info.timeline, range)?,
            None => info.timeline.full_range(),
        };
        let kept_duration = info.timeline.range_duration(&frames);
        info!(
            frames = %frames,
            of = info.frame_count(),
            kept_duration,
            "Planned trim"
        );

        if !self.codec_port.is_available().await {
            return Err(DomainError::ToolUnavailable(
                "ImageMagick is required to write animations".to_string(),
            )
            .into());
        }

        let options = request.options.clone().sanitized();
        self.codec_port
            .extract(&request.input, frames, &options, &output)
            .await?;

        let new_size = self.fs_port.file_size(&output).await?;
        if new_size >= info.file_size && options.is_empty() {
            warn!(
                original = info.file_size,
                new = new_size,
                "Trimmed animation is not smaller than the input"
            );
        }

        Ok(TrimResponse {
            output,
            frames,
            start_time: info.timeline.frame_start_time(frames.start_frame).unwrap_or(0.0),
            kept_duration,
            original_size: info.file_size,
            new_size,
        })
    }
}

/// Request for the trim use case
#[derive(Debug, Clone, Default)]
pub struct TrimRequest {
    pub input: PathBuf,
    /// Defaults to `<stem>_optimized.gif` next to the input
    pub output: Option<PathBuf>,
    /// `None` keeps every frame
    pub range: Option<TrimRange>,
    pub options: TransformOptions,
    pub overwrite: bool,
}

/// Result of a trim
#[derive(Debug, Clone, PartialEq)]
pub struct TrimResponse {
    pub output: PathBuf,
    pub frames: FrameRange,
    pub start_time: f64,
    pub kept_duration: f64,
    pub original_size: u64,
    pub new_size: u64,
}

impl TrimResponse {
    pub fn percent_saved(&self) -> f64 {
        Utils::percent_saved(self.original_size, self.new_size)
    }
}

impl fmt::Display for TrimResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote {}", self.output.display())?;
        writeln!(
            f,
            "  Frames: {} ({} frames, {})",
            self.frames,
            self.frames.frame_count(),
            format_span(self.start_time, self.start_time + self.kept_duration)
        )?;
        write!(
            f,
            "  Size: {} -> {} ({:.1}% saved)",
            Utils::format_file_size(self.original_size),
            Utils::format_file_size(self.new_size),
            self.percent_saved()
        )
    }
}
