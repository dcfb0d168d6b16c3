// Unit tests for frame/time mapping

use super::*;

fn even_timeline() -> Timeline {
    Timeline::build(&[10, 10, 10, 10, 10], 5).unwrap()
}

#[test]
fn test_map_partial_overlap() {
    let timeline = even_timeline();
    let range = TimeFrameMapper::map(&timeline, 0.05, Some(0.35)).unwrap();
    assert_eq!(range, FrameRange::new(0, 3));
}

#[test]
fn test_map_whole_timeline() {
    for delays in [vec![10, 10, 10, 10, 10], vec![3, 17, 1, 250], vec![0, 5, 0, 0, 9, 0]] {
        let timeline = Timeline::from_delays(delays).unwrap();
        let range = TimeFrameMapper::map(&timeline, 0.0, Some(timeline.total_duration())).unwrap();
        assert_eq!(range, timeline.full_range());
    }
}

#[test]
fn test_map_single_frame_intervals() {
    let timeline = Timeline::from_delays(vec![7, 3, 12, 1, 40, 5]).unwrap();
    for i in 0..timeline.frame_count() {
        let start = timeline.frame_start_time(i).unwrap();
        let end = timeline.frame_end_time(i).unwrap();
        assert_eq!(
            TimeFrameMapper::map(&timeline, start, Some(end)),
            Some(FrameRange::new(i, i)),
            "frame {}",
            i
        );
    }
}

#[test]
fn test_map_absent_end_means_total() {
    let timeline = even_timeline();
    assert_eq!(
        TimeFrameMapper::map(&timeline, 0.25, None),
        Some(FrameRange::new(2, 4))
    );
}

#[test]
fn test_map_clamps_bounds() {
    let timeline = even_timeline();
    assert_eq!(
        TimeFrameMapper::map(&timeline, -3.0, Some(99.0)),
        Some(FrameRange::new(0, 4))
    );
}

#[test]
fn test_map_empty_interval() {
    let timeline = even_timeline();
    assert_eq!(TimeFrameMapper::map(&timeline, 0.3, Some(0.3)), None);
    assert_eq!(TimeFrameMapper::map(&timeline, 0.4, Some(0.2)), None);
    assert_eq!(TimeFrameMapper::map(&timeline, 0.5, None), None);
    assert_eq!(TimeFrameMapper::map(&timeline, 7.0, Some(9.0)), None);
}

#[test]
fn test_map_boundary_tie_break() {
    let timeline = even_timeline();
    // A boundary belongs to the frame that starts on it
    assert_eq!(
        TimeFrameMapper::map(&timeline, 0.0, Some(0.2)),
        Some(FrameRange::new(0, 1))
    );
    assert_eq!(
        TimeFrameMapper::map(&timeline, 0.2, Some(0.5)),
        Some(FrameRange::new(2, 4))
    );
}

#[test]
fn test_map_zero_delay_frames_not_lost() {
    // Frame 2 has no extent and starts at 0.2
    let timeline = Timeline::from_delays(vec![10, 10, 0, 10]).unwrap();
    assert_eq!(
        TimeFrameMapper::map(&timeline, 0.0, Some(0.2)),
        Some(FrameRange::new(0, 1))
    );
    assert_eq!(
        TimeFrameMapper::map(&timeline, 0.2, None),
        Some(FrameRange::new(2, 3))
    );
}

#[test]
fn test_map_all_zero_delays() {
    let timeline = Timeline::from_delays(vec![0, 0, 0]).unwrap();
    assert_eq!(TimeFrameMapper::map(&timeline, 0.0, None), None);
}

#[test]
fn test_map_is_deterministic() {
    let timeline = Timeline::from_delays(vec![4, 9, 2, 6]).unwrap();
    let first = TimeFrameMapper::map(&timeline, 0.07, Some(0.15));
    let second = TimeFrameMapper::map(&timeline, 0.07, Some(0.15));
    assert_eq!(first, second);
    assert_eq!(first, Some(FrameRange::new(1, 2)));
}
