//! Trim planning

use tracing::{info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{FrameRange, Timeline, TrimRange};
use crate::domain::rules::TimeFrameMapper;

/// Resolves a single keep-range into a validated frame range
pub struct TrimPlanner;

impl TrimPlanner {
    /// Create a new trim planner
    pub fn new() -> Self {
        Self
    }

    /// Plan from a pre-parsed trim request
    pub fn plan(&self, timeline: &Timeline, range: &TrimRange) -> Result<FrameRange, DomainError> {
        match *range {
            TrimRange::Time { start, end } => self.trim_by_time(timeline, start, end),
            TrimRange::Frames { start, end } => self.trim_by_frames(timeline, start, end),
        }
    }

    /// Keep the frames overlapping `[start_time, end_time)`.
    ///
    /// Unlike splitting, an interval with no overlap is a hard failure.
    pub fn trim_by_time(
        &self,
        timeline: &Timeline,
        start_time: f64,
        end_time: Option<f64>,
    ) -> Result<FrameRange, DomainError> {
        let range = TimeFrameMapper::map(timeline, start_time, end_time).ok_or_else(|| {
            let end = end_time.unwrap_or_else(|| timeline.total_duration());
            warn!(start_time, end, "Trim interval overlaps no frames");
            DomainError::InvalidRange(format!(
                "time range {:.2}-{:.2}s overlaps no frames (valid range: 0-{:.2} seconds)",
                start_time,
                end,
                timeline.total_duration()
            ))
        })?;

        info!(
            start_time,
            start_frame = range.start_frame,
            end_frame = range.end_frame,
            "Trim resolved to frames"
        );
        Ok(range)
    }

    /// Keep frames `start_frame..=end_frame`.
    pub fn trim_by_frames(
        &self,
        timeline: &Timeline,
        start_frame: usize,
        end_frame: usize,
    ) -> Result<FrameRange, DomainError> {
        let range = FrameRange::new(start_frame, end_frame);
        if !range.fits(timeline.frame_count()) {
            warn!(start_frame, end_frame, "Frame range is out of bounds");
            return Err(DomainError::InvalidRange(format!(
                "frame range {} is invalid (valid range: 0-{})",
                range,
                timeline.frame_count() - 1
            )));
        }
        Ok(range)
    }
}

impl Default for TrimPlanner {
    fn default() -> Self {
        Self::new()
    }
}
