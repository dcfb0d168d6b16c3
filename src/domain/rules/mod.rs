// Domain rules - Frame/time mapping

use tracing::trace;

use crate::domain::model::{FrameRange, Timeline};

/// Maps time intervals onto inclusive frame intervals of a [`Timeline`].
///
/// Frames are closed-open: frame `i` covers `[start_i, end_i)`. A requested
/// interval `[start_time, end_time)` selects every frame that overlaps it.
/// Zero-delay frames have no extent and are attributed to the interval that
/// contains their start point, so no frame is lost between adjacent intervals.
pub struct TimeFrameMapper;

impl TimeFrameMapper {
    /// Map `[start_time, end_time)` to the frames it overlaps.
    ///
    /// `start_time` is clamped to 0 and `end_time` to the total duration (an
    /// absent end means the total duration). Returns `None` when the clamped
    /// interval is empty or touches no frame.
    pub fn map(timeline: &Timeline, start_time: f64, end_time: Option<f64>) -> Option<FrameRange> {
        let total = timeline.total_duration();
        let start = start_time.max(0.0);
        let end = end_time.map_or(total, |e| e.min(total));

        // f64::max/min discard NaN operands, so both bounds are real numbers here
        if start >= end {
            trace!(start, end, "Empty interval after clamping");
            return None;
        }

        let ends = timeline.cumulative_end_times();
        let frame_count = ends.len();
        let frame_start = |i: usize| if i == 0 { 0.0 } else { ends[i - 1] };

        // First frame that ends past the start point, or a zero-delay frame sitting on it
        let start_frame = partition_point(frame_count, |i| ends[i] <= start && frame_start(i) < start);
        if start_frame == frame_count {
            return None;
        }

        let end_frame = if end >= total {
            frame_count - 1
        } else {
            // Last frame that begins strictly before the end point
            match partition_point(frame_count, |i| frame_start(i) < end) {
                0 => return None,
                n => n - 1,
            }
        };

        if start_frame > end_frame {
            return None;
        }

        trace!(start, end, start_frame, end_frame, "Mapped interval");
        Some(FrameRange::new(start_frame, end_frame))
    }
}

/// Index of the first `i` in `0..len` for which `pred` is false; `pred` must be
/// true on a prefix and false afterwards.
fn partition_point(len: usize, pred: impl Fn(usize) -> bool) -> usize {
    let (mut lo, mut hi) = (0, len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests;
