// Domain models - Core types and data structures

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::errors::DomainError;

/// Delay used to pad a timeline when the probe reported no delays at all
pub const DEFAULT_FALLBACK_DELAY: u32 = 10;

/// GIF delays are expressed in centiseconds
pub const CENTISECONDS_PER_SECOND: f64 = 100.0;

/// Per-frame display delays of one animation plus derived cumulative timing.
///
/// Frame `i` occupies the half-open interval
/// `[cumulative_end_times[i - 1], cumulative_end_times[i])`, frame 0 starting at 0.
/// Cumulative times are summed in integer centiseconds and converted once, so a
/// frame boundary always has exactly one floating-point representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    delays: Vec<u32>,
    cumulative_end_times: Vec<f64>,
}

impl Timeline {
    /// Build a timeline, reconciling `delays` against the authoritative `frame_count`.
    ///
    /// Missing delays are padded with the last known delay and surplus delays are
    /// truncated. Fails when `frame_count` is zero or when no delay is available to
    /// pad with.
    pub fn build(delays: &[u32], frame_count: usize) -> Result<Self, DomainError> {
        Self::build_with_fallback(delays, frame_count, None)
    }

    /// Like [`Timeline::build`], but pads with `fallback` when `delays` is empty.
    pub fn build_with_fallback(
        delays: &[u32],
        frame_count: usize,
        fallback: Option<u32>,
    ) -> Result<Self, DomainError> {
        if frame_count == 0 {
            return Err(DomainError::InvalidTimeline(
                "animation has no frames".to_string(),
            ));
        }

        let mut reconciled = delays.to_vec();
        if reconciled.len() < frame_count {
            let pad = delays.last().copied().or(fallback).ok_or_else(|| {
                DomainError::InvalidTimeline(format!(
                    "no delay data for {} frames and no fallback delay",
                    frame_count
                ))
            })?;
            warn!(
                delays = delays.len(),
                frames = frame_count,
                pad,
                "Delay count is short of frame count, padding"
            );
            reconciled.resize(frame_count, pad);
        } else if reconciled.len() > frame_count {
            warn!(
                delays = delays.len(),
                frames = frame_count,
                "Delay count exceeds frame count, truncating"
            );
            reconciled.truncate(frame_count);
        }

        Ok(Self::from_reconciled(reconciled))
    }

    /// Build a timeline where every delay is one frame.
    pub fn from_delays(delays: Vec<u32>) -> Result<Self, DomainError> {
        if delays.is_empty() {
            return Err(DomainError::InvalidTimeline(
                "animation has no frames".to_string(),
            ));
        }
        Ok(Self::from_reconciled(delays))
    }

    fn from_reconciled(delays: Vec<u32>) -> Self {
        let mut running: u64 = 0;
        let cumulative_end_times = delays
            .iter()
            .map(|&delay| {
                running += u64::from(delay);
                running as f64 / CENTISECONDS_PER_SECOND
            })
            .collect();

        debug!(frames = delays.len(), total_cs = running, "Timeline built");

        Self {
            delays,
            cumulative_end_times,
        }
    }

    /// Per-frame delays in centiseconds
    pub fn delays(&self) -> &[u32] {
        &self.delays
    }

    /// End time of every frame in seconds
    pub fn cumulative_end_times(&self) -> &[f64] {
        &self.cumulative_end_times
    }

    pub fn frame_count(&self) -> usize {
        self.delays.len()
    }

    /// Total duration in seconds
    pub fn total_duration(&self) -> f64 {
        // Construction guarantees at least one frame
        self.cumulative_end_times.last().copied().unwrap_or(0.0)
    }

    /// Time at which `frame` starts displaying, `None` past the last frame.
    pub fn frame_start_time(&self, frame: usize) -> Option<f64> {
        match frame {
            0 => Some(0.0),
            f if f < self.frame_count() => Some(self.cumulative_end_times[f - 1]),
            _ => None,
        }
    }

    /// Time at which `frame` stops displaying, `None` past the last frame.
    pub fn frame_end_time(&self, frame: usize) -> Option<f64> {
        self.cumulative_end_times.get(frame).copied()
    }

    /// Mean delay in centiseconds
    pub fn average_delay(&self) -> f64 {
        let total: u64 = self.delays.iter().map(|&d| u64::from(d)).sum();
        total as f64 / self.frame_count() as f64
    }

    /// Nominal frame rate, rounded to two decimals; 0 when every delay is 0.
    pub fn fps(&self) -> f64 {
        let avg = self.average_delay();
        if avg > 0.0 {
            (CENTISECONDS_PER_SECOND / avg * 100.0).round() / 100.0
        } else {
            0.0
        }
    }

    /// Summed display time of the frames in `range`, in seconds.
    pub fn range_duration(&self, range: &FrameRange) -> f64 {
        let end = range.end_frame.min(self.frame_count().saturating_sub(1));
        if range.start_frame > end {
            return 0.0;
        }
        let cs: u64 = self.delays[range.start_frame..=end]
            .iter()
            .map(|&d| u64::from(d))
            .sum();
        cs as f64 / CENTISECONDS_PER_SECOND
    }

    /// The range covering every frame
    pub fn full_range(&self) -> FrameRange {
        FrameRange::new(0, self.frame_count() - 1)
    }
}

/// Inclusive pair of frame indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub start_frame: usize,
    pub end_frame: usize,
}

impl FrameRange {
    pub fn new(start_frame: usize, end_frame: usize) -> Self {
        Self {
            start_frame,
            end_frame,
        }
    }

    /// Number of frames in the range
    pub fn frame_count(&self) -> usize {
        self.end_frame.saturating_sub(self.start_frame) + 1
    }

    /// Check `0 <= start <= end < frame_count`
    pub fn fits(&self, frame_count: usize) -> bool {
        self.start_frame <= self.end_frame && self.end_frame < frame_count
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_frame, self.end_frame)
    }
}

/// One planned output unit, in both time and frame coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based position of the boundary pair this segment was planned from
    pub index: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub start_frame: usize,
    pub end_frame: usize,
}

impl Segment {
    pub fn frames(&self) -> FrameRange {
        FrameRange::new(self.start_frame, self.end_frame)
    }

    /// Length of the time span in seconds
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// A caller-supplied split position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum SplitPoint {
    Time(f64),
    Frame(usize),
}

impl fmt::Display for SplitPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitPoint::Time(t) => write!(f, "{:.2}s", t),
            SplitPoint::Frame(i) => write!(f, "frame {}", i),
        }
    }
}

/// Range to keep when trimming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrimRange {
    /// Seconds; an absent end means "to the end of the animation"
    Time { start: f64, end: Option<f64> },
    /// Inclusive frame indices
    Frames { start: usize, end: usize },
}

/// Positions to split at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitPoints {
    Times(Vec<f64>),
    Frames(Vec<usize>),
}

impl SplitPoints {
    pub fn is_empty(&self) -> bool {
        match self {
            SplitPoints::Times(t) => t.is_empty(),
            SplitPoints::Frames(f) => f.is_empty(),
        }
    }
}

/// Pre-parsed user intent handed to the planners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SegmentationRequest {
    Trim(TrimRange),
    Split(SplitPoints),
}

/// Probed information about one animation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GifInfo {
    pub width: u32,
    pub height: u32,
    /// Maximum color count across frames
    pub colors: u32,
    pub file_size: u64,
    pub timeline: Timeline,
}

impl GifInfo {
    pub fn frame_count(&self) -> usize {
        self.timeline.frame_count()
    }

    pub fn duration(&self) -> f64 {
        self.timeline.total_duration()
    }

    pub fn fps(&self) -> f64 {
        self.timeline.fps()
    }
}

/// Pass-through encoding parameters for the codec collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Target width in pixels, height follows the aspect ratio
    pub width: Option<u32>,
    /// Target frame rate
    pub fps: Option<u32>,
    /// Palette size
    pub colors: Option<u32>,
}

impl TransformOptions {
    /// Drop non-positive values, warning for each one.
    pub fn sanitized(self) -> Self {
        fn keep(name: &str, value: Option<u32>) -> Option<u32> {
            match value {
                Some(0) => {
                    warn!("{} must be positive, skipping", name);
                    None
                }
                other => other,
            }
        }

        Self {
            width: keep("width", self.width),
            fps: keep("fps", self.fps),
            colors: keep("colors", self.colors),
        }
    }

    /// Per-frame delay in centiseconds for the requested frame rate
    pub fn delay_centiseconds(&self) -> Option<u32> {
        self.fps.filter(|&fps| fps > 0).map(|fps| 100 / fps)
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.fps.is_none() && self.colors.is_none()
    }
}

#[cfg(test)]
mod tests;
