// Inspect interactor - Orchestrates animation inspection use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::app::{validate_input, ReportFormat};
use crate::domain::model::*;
use crate::error::GifCutResult;
use crate::ports::*;
use crate::utils::time::format_time;
use crate::utils::Utils;

/// Interactor for the inspect use case
pub struct InspectInteractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
}

impl InspectInteractor {
    /// Create new inspect interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            probe_port,
            fs_port,
        }
    }

    /// Probe `request.input` and render its metadata
    pub async fn execute(&self, request: InspectRequest) -> GifCutResult<InspectResponse> {
        info!(input = %request.input.display(), "Inspecting animation");
        validate_input(self.fs_port.as_ref(), &request.input).await?;

        let info = self.probe_port.probe(&request.input).await?;
        let report = InspectReport::new(&request.input, &info);

        let summary = match request.format {
            ReportFormat::Json => serde_json::to_string_pretty(&report)?,
            ReportFormat::Yaml => serde_yaml::to_string(&report)?,
            ReportFormat::Text => report.to_text(request.show_delays),
        };

        Ok(InspectResponse { info, summary })
    }
}

/// Request for animation inspection
#[derive(Debug, Clone)]
pub struct InspectRequest {
    pub input: PathBuf,
    pub format: ReportFormat,
    /// List every frame delay in text output
    pub show_delays: bool,
}

impl InspectRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: ReportFormat::Text,
            show_delays: false,
        }
    }
}

/// Response from animation inspection
#[derive(Debug, Clone)]
pub struct InspectResponse {
    pub info: GifInfo,
    pub summary: String,
}

/// Serializable view of a probed animation
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub file: String,
    pub file_size: u64,
    pub width: u32,
    pub height: u32,
    pub frames: usize,
    pub duration: f64,
    pub fps: f64,
    pub average_delay: f64,
    pub colors: u32,
    pub delays: Vec<u32>,
}

impl InspectReport {
    pub fn new(path: &Path, info: &GifInfo) -> Self {
        Self {
            file: path.display().to_string(),
            file_size: info.file_size,
            width: info.width,
            height: info.height,
            frames: info.frame_count(),
            duration: info.duration(),
            fps: info.fps(),
            average_delay: info.timeline.average_delay(),
            colors: info.colors,
            delays: info.timeline.delays().to_vec(),
        }
    }

    fn to_text(&self, show_delays: bool) -> String {
        let mut output = String::new();
        output.push_str("GIF Information:\n");
        output.push_str(&format!("  File: {}\n", self.file));
        output.push_str(&format!(
            "  File Size: {} ({} bytes)\n",
            Utils::format_file_size(self.file_size),
            Utils::group_thousands(self.file_size)
        ));
        output.push_str(&format!("  Dimensions: {}x{}\n", self.width, self.height));
        output.push_str(&format!(
            "  Frames: {} (0-{})\n",
            self.frames,
            self.frames.saturating_sub(1)
        ));
        output.push_str(&format!(
            "  Duration: {} ({:.2}s)\n",
            format_time(self.duration),
            self.duration
        ));
        output.push_str(&format!("  Frame Rate: {:.2} fps\n", self.fps));
        output.push_str(&format!("  Average Delay: {:.2} cs\n", self.average_delay));
        output.push_str(&format!("  Colors: {}\n", self.colors));

        if show_delays {
            output.push_str("\nFrame Delays (cs):\n");
            for (i, delay) in self.delays.iter().enumerate() {
                output.push_str(&format!("  #{:<4} {}\n", i, delay));
            }
        }
        output
    }
}
