// Unit tests for domain models

use super::*;

fn five_even_frames() -> Timeline {
    Timeline::build(&[10, 10, 10, 10, 10], 5).unwrap()
}

#[test]
fn test_timeline_cumulative_times() {
    let timeline = five_even_frames();
    assert_eq!(timeline.frame_count(), 5);
    assert_eq!(timeline.cumulative_end_times(), &[0.1, 0.2, 0.3, 0.4, 0.5]);
    assert_eq!(timeline.total_duration(), 0.5);
}

#[test]
fn test_timeline_cumulative_times_non_decreasing() {
    let timeline = Timeline::build(&[3, 0, 7, 12, 0, 0, 25, 1], 8).unwrap();
    let ends = timeline.cumulative_end_times();
    assert!(ends.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*ends.last().unwrap(), timeline.total_duration());
    assert_eq!(timeline.total_duration(), 0.48);
}

#[test]
fn test_timeline_pads_with_last_delay() {
    let timeline = Timeline::build(&[4, 8], 4).unwrap();
    assert_eq!(timeline.delays(), &[4, 8, 8, 8]);
    assert_eq!(timeline.total_duration(), 0.28);
}

#[test]
fn test_timeline_truncates_surplus_delays() {
    let timeline = Timeline::build(&[5, 6, 7, 8], 2).unwrap();
    assert_eq!(timeline.delays(), &[5, 6]);
    assert_eq!(timeline.frame_count(), 2);
}

#[test]
fn test_timeline_empty_delays_without_fallback() {
    let err = Timeline::build(&[], 3).unwrap_err();
    assert!(matches!(err, DomainError::InvalidTimeline(_)));
}

#[test]
fn test_timeline_empty_delays_with_fallback() {
    let timeline = Timeline::build_with_fallback(&[], 3, Some(DEFAULT_FALLBACK_DELAY)).unwrap();
    assert_eq!(timeline.delays(), &[10, 10, 10]);
    assert_eq!(timeline.total_duration(), 0.3);
}

#[test]
fn test_timeline_zero_frames() {
    assert!(matches!(
        Timeline::build(&[10], 0),
        Err(DomainError::InvalidTimeline(_))
    ));
    assert!(matches!(
        Timeline::from_delays(vec![]),
        Err(DomainError::InvalidTimeline(_))
    ));
}

#[test]
fn test_frame_start_and_end_times() {
    let timeline = Timeline::build(&[10, 20, 30], 3).unwrap();
    assert_eq!(timeline.frame_start_time(0), Some(0.0));
    assert_eq!(timeline.frame_start_time(1), Some(0.1));
    assert_eq!(timeline.frame_start_time(2), Some(0.3));
    assert_eq!(timeline.frame_start_time(3), None);
    assert_eq!(timeline.frame_end_time(2), Some(0.6));
    assert_eq!(timeline.frame_end_time(3), None);
}

#[test]
fn test_timeline_fps_and_average_delay() {
    let timeline = Timeline::build(&[4, 4, 4], 3).unwrap();
    assert_eq!(timeline.average_delay(), 4.0);
    assert_eq!(timeline.fps(), 25.0);

    let uneven = Timeline::build(&[3, 3, 3], 3).unwrap();
    assert_eq!(uneven.fps(), 33.33);

    let zero = Timeline::build(&[0, 0], 2).unwrap();
    assert_eq!(zero.fps(), 0.0);
    assert_eq!(zero.total_duration(), 0.0);
}

#[test]
fn test_range_duration() {
    let timeline = Timeline::build(&[10, 20, 30, 40], 4).unwrap();
    assert_eq!(timeline.range_duration(&FrameRange::new(1, 2)), 0.5);
    assert_eq!(timeline.range_duration(&timeline.full_range()), 1.0);
}

#[test]
fn test_frame_range_fits() {
    assert!(FrameRange::new(0, 4).fits(5));
    assert!(!FrameRange::new(0, 5).fits(5));
    assert!(!FrameRange::new(3, 2).fits(5));
    assert_eq!(FrameRange::new(2, 4).frame_count(), 3);
    assert_eq!(FrameRange::new(2, 4).to_string(), "2-4");
}

#[test]
fn test_segment_accessors() {
    let segment = Segment {
        index: 2,
        start_time: 0.2,
        end_time: 0.5,
        start_frame: 2,
        end_frame: 4,
    };
    assert_eq!(segment.frames(), FrameRange::new(2, 4));
    assert!((segment.duration() - 0.3).abs() < 1e-9);
}

#[test]
fn test_transform_options_sanitized() {
    let options = TransformOptions {
        width: Some(0),
        fps: Some(10),
        colors: Some(64),
    }
    .sanitized();
    assert_eq!(options.width, None);
    assert_eq!(options.fps, Some(10));
    assert_eq!(options.delay_centiseconds(), Some(10));
    assert!(!options.is_empty());
    assert!(TransformOptions::default().is_empty());
}

#[test]
fn test_transform_delay_truncates() {
    let options = TransformOptions {
        fps: Some(12),
        ..Default::default()
    };
    assert_eq!(options.delay_centiseconds(), Some(8));
}

#[test]
fn test_split_points_display_and_empty() {
    assert_eq!(SplitPoint::Time(2.5).to_string(), "2.50s");
    assert_eq!(SplitPoint::Frame(7).to_string(), "frame 7");
    assert!(SplitPoints::Times(vec![]).is_empty());
    assert!(!SplitPoints::Frames(vec![3]).is_empty());
}
