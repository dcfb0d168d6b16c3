//! Split planning

use tracing::{debug, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{Segment, SplitPoint, SplitPoints, Timeline};
use crate::domain::rules::TimeFrameMapper;
use crate::planner::{DiscardReason, DiscardedPoint, SkippedSegment, SplitPlan};

/// Partitions a timeline into contiguous segments at caller-chosen split points
pub struct SplitPlanner;

impl SplitPlanner {
    /// Create a new split planner
    pub fn new() -> Self {
        Self
    }

    /// Plan from a pre-parsed split request
    pub fn plan(&self, timeline: &Timeline, points: &SplitPoints) -> Result<SplitPlan, DomainError> {
        match points {
            SplitPoints::Times(times) => self.plan_time_splits(timeline, times),
            SplitPoints::Frames(frames) => self.plan_frame_splits(timeline, frames),
        }
    }

    /// Split at time points in seconds.
    ///
    /// Boundaries are `{0} ∪ {t : 0 < t < total} ∪ {total}`, sorted and
    /// deduplicated. Each adjacent pair becomes one segment unless it maps to no
    /// frame, in which case it is recorded as skipped. Fails with
    /// [`DomainError::EmptySplitPlan`] when fewer than two boundaries remain.
    pub fn plan_time_splits(
        &self,
        timeline: &Timeline,
        split_times: &[f64],
    ) -> Result<SplitPlan, DomainError> {
        let points = split_times
            .iter()
            .map(|&t| (SplitPoint::Time(t), t))
            .collect();
        self.plan_boundaries(timeline, points, Vec::new())
    }

    /// Split at frame indices; each frame becomes its start time and the plan
    /// continues through the time-based path.
    pub fn plan_frame_splits(
        &self,
        timeline: &Timeline,
        split_frames: &[usize],
    ) -> Result<SplitPlan, DomainError> {
        let mut discarded = Vec::new();
        let mut points = Vec::with_capacity(split_frames.len());

        for &frame in split_frames {
            match timeline.frame_start_time(frame) {
                Some(time) => points.push((SplitPoint::Frame(frame), time)),
                None => {
                    warn!(
                        frame,
                        frame_count = timeline.frame_count(),
                        "Split frame is out of range, skipping"
                    );
                    discarded.push(DiscardedPoint {
                        point: SplitPoint::Frame(frame),
                        reason: DiscardReason::FrameOutOfRange,
                    });
                }
            }
        }

        self.plan_boundaries(timeline, points, discarded)
    }

    fn plan_boundaries(
        &self,
        timeline: &Timeline,
        mut points: Vec<(SplitPoint, f64)>,
        mut discarded: Vec<DiscardedPoint>,
    ) -> Result<SplitPlan, DomainError> {
        let total = timeline.total_duration();

        points.retain(|&(point, time)| {
            let inside = time > 0.0 && time < total;
            if !inside {
                warn!(%point, total, "Split point is outside the timeline, skipping");
                discarded.push(DiscardedPoint {
                    point,
                    reason: DiscardReason::OutsideTimeline,
                });
            }
            inside
        });
        points.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut boundaries = vec![0.0];
        for (point, time) in points {
            if boundaries.last() == Some(&time) {
                debug!(%point, "Duplicate split point");
                discarded.push(DiscardedPoint {
                    point,
                    reason: DiscardReason::Duplicate,
                });
            } else {
                boundaries.push(time);
            }
        }
        if total > 0.0 {
            boundaries.push(total);
        }

        if boundaries.len() < 2 {
            return Err(DomainError::EmptySplitPlan(format!(
                "timeline of {:.2}s has no usable boundaries",
                total
            )));
        }

        let mut plan = SplitPlan {
            discarded,
            ..Default::default()
        };

        for (i, pair) in boundaries.windows(2).enumerate() {
            let (start_time, end_time) = (pair[0], pair[1]);
            match TimeFrameMapper::map(timeline, start_time, Some(end_time)) {
                Some(range) => plan.segments.push(Segment {
                    index: i + 1,
                    start_time,
                    end_time,
                    start_frame: range.start_frame,
                    end_frame: range.end_frame,
                }),
                // Distinct boundaries inside the timeline always overlap a
                // frame; a pair that does not is recorded, never dropped
                None => {
                    warn!(
                        segment = i + 1,
                        start_time, end_time, "Segment maps to no frames, skipping"
                    );
                    plan.skipped.push(SkippedSegment {
                        index: i + 1,
                        start_time,
                        end_time,
                    });
                }
            }
        }

        info!(
            segments = plan.segments.len(),
            skipped = plan.skipped.len(),
            discarded = plan.discarded.len(),
            "Split plan ready"
        );
        Ok(plan)
    }
}

impl Default for SplitPlanner {
    fn default() -> Self {
        Self::new()
    }
}
