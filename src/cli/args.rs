//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;
use clap_num::number_range;

use crate::app::ReportFormat;
use crate::domain::model::{SegmentationRequest, SplitPoints, TransformOptions, TrimRange};

fn width_range(s: &str) -> Result<u32, String> {
    number_range(s, 1, 10_000)
}

fn fps_range(s: &str) -> Result<u32, String> {
    number_range(s, 1, 100)
}

fn frame_count_range(s: &str) -> Result<usize, String> {
    number_range(s, 1, 100_000)
}

fn colors_range(s: &str) -> Result<u32, String> {
    number_range(s, 2, 256)
}

/// Re-encoding options shared by trim and split
#[derive(Args, Debug, Clone, Default)]
pub struct TransformArgs {
    /// Resize to this width, keeping the aspect ratio
    #[arg(long, value_parser = width_range)]
    pub width: Option<u32>,

    /// Target frame rate
    #[arg(long, value_parser = fps_range)]
    pub fps: Option<u32>,

    /// Palette size (2-256)
    #[arg(long, value_parser = colors_range)]
    pub colors: Option<u32>,
}

impl TransformArgs {
    /// Command-line values, falling back to configured defaults
    pub fn resolve(&self, defaults: &TransformOptions) -> TransformOptions {
        TransformOptions {
            width: self.width.or(defaults.width),
            fps: self.fps.or(defaults.fps),
            colors: self.colors.or(defaults.colors),
        }
    }
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input GIF file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// List every frame delay
    #[arg(long)]
    pub delays: bool,
}

/// Arguments for the trim command
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Input GIF file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path (default: <name>_optimized.gif)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Start time in seconds
    #[arg(short, long, conflicts_with_all = ["start_frame", "end_frame"])]
    pub start: Option<f64>,

    /// End time in seconds (default: end of the animation)
    #[arg(short, long, conflicts_with_all = ["start_frame", "end_frame"])]
    pub end: Option<f64>,

    /// First frame to keep (0-based)
    #[arg(long, requires = "end_frame")]
    pub start_frame: Option<usize>,

    /// Last frame to keep (inclusive)
    #[arg(long, requires = "start_frame")]
    pub end_frame: Option<usize>,

    #[command(flatten)]
    pub transform: TransformArgs,
}

impl TrimArgs {
    /// The requested range, `None` to keep every frame
    pub fn range(&self) -> Option<TrimRange> {
        range_from(self.start, self.end, self.start_frame, self.end_frame)
    }
}

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input GIF file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for the parts (default: next to the input)
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,

    /// Split times in seconds, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1.., required_unless_present = "at_frames", conflicts_with = "at_frames")]
    pub at_times: Vec<f64>,

    /// Split frame indices, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub at_frames: Vec<usize>,

    #[command(flatten)]
    pub transform: TransformArgs,
}

impl SplitArgs {
    pub fn points(&self) -> SplitPoints {
        points_from(&self.at_times, &self.at_frames)
    }
}

/// Arguments for the compare command
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Reference GIF
    pub original: PathBuf,

    /// GIF to compare against the reference
    pub modified: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Frame delays in centiseconds, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    pub delays: Vec<u32>,

    /// Authoritative frame count (default: number of delays)
    #[arg(long, value_parser = frame_count_range)]
    pub frame_count: Option<usize>,

    /// Split times in seconds
    #[arg(long, value_delimiter = ',', num_args = 1.., conflicts_with_all = ["at_frames", "start", "end", "start_frame", "end_frame"])]
    pub at_times: Vec<f64>,

    /// Split frame indices
    #[arg(long, value_delimiter = ',', num_args = 1.., conflicts_with_all = ["start", "end", "start_frame", "end_frame"])]
    pub at_frames: Vec<usize>,

    /// Trim start time in seconds
    #[arg(long, conflicts_with_all = ["start_frame", "end_frame"])]
    pub start: Option<f64>,

    /// Trim end time in seconds
    #[arg(long, conflicts_with_all = ["start_frame", "end_frame"])]
    pub end: Option<f64>,

    /// Trim start frame
    #[arg(long, requires = "end_frame")]
    pub start_frame: Option<usize>,

    /// Trim end frame
    #[arg(long, requires = "start_frame")]
    pub end_frame: Option<usize>,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn split_points(&self) -> Option<SplitPoints> {
        let points = points_from(&self.at_times, &self.at_frames);
        (!points.is_empty()).then_some(points)
    }

    pub fn trim_range(&self) -> Option<TrimRange> {
        range_from(self.start, self.end, self.start_frame, self.end_frame)
    }

    /// Split points win over a trim range; `None` when neither was given
    pub fn request(&self) -> Option<SegmentationRequest> {
        self.split_points()
            .map(SegmentationRequest::Split)
            .or_else(|| self.trim_range().map(SegmentationRequest::Trim))
    }
}

fn range_from(
    start: Option<f64>,
    end: Option<f64>,
    start_frame: Option<usize>,
    end_frame: Option<usize>,
) -> Option<TrimRange> {
    match (start_frame, end_frame) {
        (Some(start), Some(end)) => Some(TrimRange::Frames { start, end }),
        _ if start.is_some() || end.is_some() => Some(TrimRange::Time {
            start: start.unwrap_or(0.0),
            end,
        }),
        _ => None,
    }
}

fn points_from(times: &[f64], frames: &[usize]) -> SplitPoints {
    if frames.is_empty() {
        SplitPoints::Times(times.to_vec())
    } else {
        SplitPoints::Frames(frames.to_vec())
    }
}
