// Compare interactor - Side-by-side metrics of two animations

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::app::{validate_input, ReportFormat};
use crate::domain::model::GifInfo;
use crate::error::GifCutResult;
use crate::ports::*;
use crate::utils::Utils;

/// Interactor for the compare use case
pub struct CompareInteractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
}

impl CompareInteractor {
    pub fn new(probe_port: Arc<dyn ProbePort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            probe_port,
            fs_port,
        }
    }

    /// Probe both files and tabulate their differences
    pub async fn execute(&self, request: CompareRequest) -> GifCutResult<CompareResponse> {
        validate_input(self.fs_port.as_ref(), &request.original).await?;
        validate_input(self.fs_port.as_ref(), &request.modified).await?;

        let original = self.probe_port.probe(&request.original).await?;
        let modified = self.probe_port.probe(&request.modified).await?;
        let report = ComparisonReport::new(&original, &modified);
        info!(
            original = %request.original.display(),
            modified = %request.modified.display(),
            "Compared animations"
        );

        let summary = match request.format {
            ReportFormat::Json => serde_json::to_string_pretty(&report)?,
            ReportFormat::Yaml => serde_yaml::to_string(&report)?,
            ReportFormat::Text => report.to_string(),
        };
        Ok(CompareResponse { report, summary })
    }
}

/// Request for the compare use case
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub original: PathBuf,
    pub modified: PathBuf,
    pub format: ReportFormat,
}

#[derive(Debug, Clone)]
pub struct CompareResponse {
    pub report: ComparisonReport,
    pub summary: String,
}

/// Relative change from an original value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PercentDiff {
    Percent(f64),
    /// Original was zero, modified was not
    Infinite,
    /// Both zero
    NotApplicable,
}

impl PercentDiff {
    pub fn between(original: f64, modified: f64) -> Self {
        if original == 0.0 {
            if modified == 0.0 {
                PercentDiff::NotApplicable
            } else {
                PercentDiff::Infinite
            }
        } else {
            PercentDiff::Percent((modified - original) / original * 100.0)
        }
    }
}

impl fmt::Display for PercentDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentDiff::Percent(p) => write!(f, "{:+.1}%", p),
            PercentDiff::Infinite => write!(f, "inf"),
            PercentDiff::NotApplicable => write!(f, "n/a"),
        }
    }
}

/// One compared metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: &'static str,
    pub original: f64,
    pub modified: f64,
    pub change: PercentDiff,
}

impl MetricRow {
    fn new(metric: &'static str, original: f64, modified: f64) -> Self {
        Self {
            metric,
            original,
            modified,
            change: PercentDiff::between(original, modified),
        }
    }
}

/// Direction of the file size change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeChange {
    Smaller,
    Larger,
    Same,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub rows: Vec<MetricRow>,
    pub original_bytes: u64,
    pub modified_bytes: u64,
    pub dimensions_match: bool,
    pub size_change: SizeChange,
}

impl ComparisonReport {
    pub fn new(original: &GifInfo, modified: &GifInfo) -> Self {
        let rows = vec![
            MetricRow::new(
                "file_size_mb",
                Utils::megabytes(original.file_size),
                Utils::megabytes(modified.file_size),
            ),
            MetricRow::new(
                "frames",
                original.frame_count() as f64,
                modified.frame_count() as f64,
            ),
            MetricRow::new("width", original.width.into(), modified.width.into()),
            MetricRow::new("height", original.height.into(), modified.height.into()),
            MetricRow::new("duration", original.duration(), modified.duration()),
            MetricRow::new("fps", original.fps(), modified.fps()),
            MetricRow::new("colors", original.colors.into(), modified.colors.into()),
        ];
        let size_change = match modified.file_size.cmp(&original.file_size) {
            std::cmp::Ordering::Less => SizeChange::Smaller,
            std::cmp::Ordering::Greater => SizeChange::Larger,
            std::cmp::Ordering::Equal => SizeChange::Same,
        };
        Self {
            rows,
            original_bytes: original.file_size,
            modified_bytes: modified.file_size,
            dimensions_match: original.width == modified.width
                && original.height == modified.height,
            size_change,
        }
    }

    pub fn row(&self, metric: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.metric == metric)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<14} {:>12} {:>12} {:>10}",
            "Metric", "Original", "Modified", "Change"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<14} {:>12.2} {:>12.2} {:>10}",
                row.metric,
                row.original,
                row.modified,
                row.change.to_string()
            )?;
        }
        writeln!(
            f,
            "\nDimensions: {}",
            if self.dimensions_match { "same" } else { "different" }
        )?;
        let delta = self.original_bytes.abs_diff(self.modified_bytes);
        match self.size_change {
            SizeChange::Same => write!(f, "Result: same size"),
            change => write!(
                f,
                "Result: {} by {} bytes ({:.1}%)",
                if change == SizeChange::Smaller { "smaller" } else { "larger" },
                Utils::group_thousands(delta),
                Utils::percent_saved(self.original_bytes, self.modified_bytes).abs()
            ),
        }
    }
}
