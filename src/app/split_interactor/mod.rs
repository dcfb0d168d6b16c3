// Split interactor - Orchestrates the split use case

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::app::{validate_input, validate_output};
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::error::GifCutResult;
use crate::planner::{SplitPlan, SplitPlanner};
use crate::ports::*;
use crate::utils::path::segment_output;
use crate::utils::time::format_span;
use crate::utils::Utils;

/// Interactor for the split use case
pub struct SplitInteractor {
    probe_port: Arc<dyn ProbePort>,
    codec_port: Arc<dyn CodecPort>,
    fs_port: Arc<dyn FsPort>,
    planner: SplitPlanner,
}

impl SplitInteractor {
    /// Create new split interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        codec_port: Arc<dyn CodecPort>,
        fs_port: Arc<dyn FsPort>,
    ) -> Self {
        Self {
            probe_port,
            codec_port,
            fs_port,
            planner: SplitPlanner::new(),
        }
    }

    /// Split the input at `request.points` and write every segment.
    ///
    /// A segment the codec fails on is recorded in the report and the
    /// remaining segments are still written. When no segmentation is possible
    /// the input is left untouched and the report says why.
    pub async fn execute(&self, request: SplitRequest) -> GifCutResult<SplitReport> {
        validate_input(self.fs_port.as_ref(), &request.input).await?;
        if request.points.is_empty() {
            return Err(DomainError::BadArgs("no split points given".to_string()).into());
        }

        let info = self.probe_port.probe(&request.input).await?;
        let mut report = SplitReport {
            input: request.input.clone(),
            original_size: info.file_size,
            ..Default::default()
        };

        let plan = match self.planner.plan(&info.timeline, &request.points) {
            Ok(plan) => plan,
            Err(DomainError::EmptySplitPlan(reason)) => {
                warn!(%reason, "No segmentation possible, keeping original");
                report.kept_original = Some(reason);
                return Ok(report);
            }
            Err(e) => return Err(e.into()),
        };

        let outputs: Vec<PathBuf> = plan
            .segments
            .iter()
            .map(|s| segment_output(&request.input, request.output_dir.as_deref(), s.index))
            .collect();
        for output in &outputs {
            validate_output(
                self.fs_port.as_ref(),
                &request.input,
                output,
                request.overwrite,
            )
            .await?;
        }

        if !self.codec_port.is_available().await {
            return Err(DomainError::ToolUnavailable(
                "ImageMagick is required to write animations".to_string(),
            )
            .into());
        }

        let options = request.options.clone().sanitized();
        for (segment, output) in plan.segments.iter().zip(outputs) {
            let result = self.write_segment(&request.input, segment, &options, &output).await;
            match &result {
                Ok(size) => info!(
                    index = segment.index,
                    output = %output.display(),
                    size,
                    "Segment written"
                ),
                Err(e) => error!(index = segment.index, error = %e, "Segment failed"),
            }
            report.outcomes.push(SegmentOutcome {
                segment: segment.clone(),
                output,
                result,
            });
        }
        report.plan = plan;

        info!(
            written = report.written(),
            failed = report.failed(),
            skipped = report.plan.skipped.len(),
            "Split finished"
        );
        Ok(report)
    }

    async fn write_segment(
        &self,
        input: &Path,
        segment: &Segment,
        options: &TransformOptions,
        output: &Path,
    ) -> Result<u64, DomainError> {
        self.codec_port
            .extract(input, segment.frames(), options, output)
            .await?;
        self.fs_port.file_size(output).await
    }
}

/// Request for the split use case
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub input: PathBuf,
    /// Directory for the parts; defaults to the input's directory
    pub output_dir: Option<PathBuf>,
    pub points: SplitPoints,
    pub options: TransformOptions,
    pub overwrite: bool,
}

/// What happened to one planned segment
#[derive(Debug, Clone)]
pub struct SegmentOutcome {
    pub segment: Segment,
    pub output: PathBuf,
    /// Size of the written file, or why the codec failed
    pub result: Result<u64, DomainError>,
}

/// Result of a split: planning decisions plus per-segment codec outcomes
#[derive(Debug, Clone, Default)]
pub struct SplitReport {
    pub input: PathBuf,
    pub original_size: u64,
    pub plan: SplitPlan,
    pub outcomes: Vec<SegmentOutcome>,
    /// Set when no segmentation was possible and the input was kept as is
    pub kept_original: Option<String>,
}

impl SplitReport {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Combined size of every written segment
    pub fn total_size(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }

    /// Every requested segment was written
    pub fn is_complete(&self) -> bool {
        self.kept_original.is_none() && self.failed() == 0 && !self.plan.has_skips()
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(reason) = &self.kept_original {
            return write!(
                f,
                "No segmentation possible ({}); {} left unchanged",
                reason,
                self.input.display()
            );
        }

        writeln!(
            f,
            "Split {} into {} of {} segments",
            self.input.display(),
            self.written(),
            self.plan.requested_segments()
        )?;
        for outcome in &self.outcomes {
            let span = format_span(outcome.segment.start_time, outcome.segment.end_time);
            match &outcome.result {
                Ok(size) => writeln!(
                    f,
                    "  [{}] {} ({:.2}s) frames {} {} -> {}",
                    outcome.segment.index,
                    span,
                    outcome.segment.duration(),
                    outcome.segment.frames(),
                    Utils::format_file_size(*size),
                    outcome.output.display()
                )?,
                Err(e) => writeln!(
                    f,
                    "  [{}] {} frames {} FAILED: {}",
                    outcome.segment.index,
                    span,
                    outcome.segment.frames(),
                    e
                )?,
            }
        }
        for skipped in &self.plan.skipped {
            writeln!(
                f,
                "  [{}] {} skipped: no frames in range",
                skipped.index,
                format_span(skipped.start_time, skipped.end_time)
            )?;
        }
        for discarded in &self.plan.discarded {
            writeln!(f, "  ignored split point {}: {}", discarded.point, discarded.reason)?;
        }
        write!(
            f,
            "  Total: {} -> {} ({:.1}% saved)",
            Utils::format_file_size(self.original_size),
            Utils::format_file_size(self.total_size()),
            Utils::percent_saved(self.original_size, self.total_size())
        )
    }
}
