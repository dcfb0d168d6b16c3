//! Trim and split planning
//!
//! Planners turn a [`Timeline`](crate::domain::model::Timeline) plus user intent
//! into frame coordinates for the codec collaborator. They never touch files.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::model::{FrameRange, Segment, SegmentationRequest, SplitPoint, Timeline};

pub mod split;
pub mod trim;

pub use split::SplitPlanner;
pub use trim::TrimPlanner;

/// Why a split point was not used as a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    /// Time point at or before 0, or at or past the total duration
    OutsideTimeline,
    /// Frame index at or past the frame count
    FrameOutOfRange,
    /// Same boundary as an earlier point
    Duplicate,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::OutsideTimeline => write!(f, "outside the timeline"),
            DiscardReason::FrameOutOfRange => write!(f, "frame out of range"),
            DiscardReason::Duplicate => write!(f, "duplicate boundary"),
        }
    }
}

/// A split point that was dropped before planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscardedPoint {
    pub point: SplitPoint,
    pub reason: DiscardReason,
}

/// A boundary pair whose time span maps to no frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedSegment {
    /// 1-based boundary pair position
    pub index: usize,
    pub start_time: f64,
    pub end_time: f64,
}

/// Ordered segments plus an itemized account of everything left out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitPlan {
    /// Segments in boundary order
    pub segments: Vec<Segment>,
    /// Boundary pairs with no frame overlap
    pub skipped: Vec<SkippedSegment>,
    /// Split points rejected before building boundaries
    pub discarded: Vec<DiscardedPoint>,
}

impl SplitPlan {
    /// Number of boundary pairs considered, emitted or skipped
    pub fn requested_segments(&self) -> usize {
        self.segments.len() + self.skipped.len()
    }

    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Planner output for either kind of request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentationPlan {
    Trim { frames: FrameRange },
    Split(SplitPlan),
}

/// Dispatch a pre-parsed request to the matching planner
pub fn plan_request(
    timeline: &Timeline,
    request: &SegmentationRequest,
) -> Result<SegmentationPlan, DomainError> {
    match request {
        SegmentationRequest::Trim(range) => Ok(SegmentationPlan::Trim {
            frames: TrimPlanner::new().plan(timeline, range)?,
        }),
        SegmentationRequest::Split(points) => {
            SplitPlanner::new().plan(timeline, points).map(SegmentationPlan::Split)
        }
    }
}
