use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use gifcut_cli::adapters::LocalFsAdapter;
use gifcut_cli::app::compare_interactor::{CompareRequest, PercentDiff};
use gifcut_cli::app::inspect_interactor::InspectRequest;
use gifcut_cli::app::split_interactor::SplitRequest;
use gifcut_cli::app::trim_interactor::TrimRequest;
use gifcut_cli::app::{AppContainer, ReportFormat};
use gifcut_cli::domain::model::{SplitPoints, TrimRange};
use gifcut_cli::ports::{CodecPort, ProbePort};
use gifcut_cli::*;

/// In-memory collaborators standing in for ImageMagick
mod test_utils {
    use super::*;

    /// Probe returning a fixed timeline for every file
    pub struct FakeProbe {
        pub delays: Vec<u32>,
        pub file_size: u64,
    }

    #[async_trait]
    impl ProbePort for FakeProbe {
        async fn probe(&self, _file_path: &Path) -> Result<GifInfo, DomainError> {
            Ok(GifInfo {
                width: 320,
                height: 240,
                colors: 256,
                file_size: self.file_size,
                timeline: Timeline::from_delays(self.delays.clone())?,
            })
        }
    }

    /// Codec writing one byte per frame, failing on chosen start frames
    #[derive(Default)]
    pub struct FakeCodec {
        pub available: bool,
        pub fail_on_start_frame: Vec<usize>,
        pub calls: Mutex<Vec<(FrameRange, TransformOptions, PathBuf)>>,
    }

    impl FakeCodec {
        pub fn new() -> Self {
            Self {
                available: true,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<(FrameRange, TransformOptions, PathBuf)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CodecPort for FakeCodec {
        async fn is_available(&self) -> bool {
            self.available
        }

        async fn extract(
            &self,
            _input: &Path,
            frames: FrameRange,
            options: &TransformOptions,
            output: &Path,
        ) -> Result<(), DomainError> {
            self.calls
                .lock()
                .unwrap()
                .push((frames, options.clone(), output.to_path_buf()));
            if self.fail_on_start_frame.contains(&frames.start_frame) {
                return Err(DomainError::CodecFailed(format!("cannot encode {}", frames)));
            }
            tokio::fs::write(output, vec![0u8; frames.frame_count()]).await?;
            Ok(())
        }
    }

    pub struct Fixture {
        pub dir: TempDir,
        pub input: PathBuf,
        pub codec: Arc<FakeCodec>,
        pub container: AppContainer,
    }

    pub fn fixture(delays: Vec<u32>, codec: FakeCodec) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("anim.gif");
        std::fs::write(&input, b"GIF89a").unwrap();

        let codec = Arc::new(codec);
        let container = AppContainer::with_ports(
            Arc::new(FakeProbe {
                delays,
                file_size: 100,
            }),
            Arc::clone(&codec) as Arc<dyn CodecPort>,
            Arc::new(LocalFsAdapter::new()),
        );
        Fixture {
            dir,
            input,
            codec,
            container,
        }
    }

    pub fn trim_request(input: &Path, range: Option<TrimRange>) -> TrimRequest {
        TrimRequest {
            input: input.to_path_buf(),
            range,
            ..Default::default()
        }
    }

    pub fn split_request(input: &Path, points: SplitPoints) -> SplitRequest {
        SplitRequest {
            input: input.to_path_buf(),
            output_dir: None,
            points,
            options: TransformOptions::default(),
            overwrite: false,
        }
    }
}

use test_utils::*;

#[tokio::test]
async fn test_trim_by_time_writes_optimized_output() {
    let fx = fixture(vec![10; 5], FakeCodec::new());
    let request = trim_request(
        &fx.input,
        Some(TrimRange::Time {
            start: 0.05,
            end: Some(0.35),
        }),
    );

    let response = fx.container.trim_interactor().execute(request).await.unwrap();

    assert_eq!(response.frames, FrameRange::new(0, 3));
    assert_eq!(response.output, fx.dir.path().join("anim_optimized.gif"));
    assert_eq!(response.kept_duration, 0.4);
    assert_eq!(response.original_size, 100);
    assert_eq!(response.new_size, 4);
    assert!((response.percent_saved() - 96.0).abs() < 1e-9);
    assert!(response.output.exists());
}

#[tokio::test]
async fn test_trim_without_range_keeps_every_frame() {
    let fx = fixture(vec![4, 0, 6], FakeCodec::new());
    let response = fx
        .container
        .trim_interactor()
        .execute(trim_request(&fx.input, None))
        .await
        .unwrap();
    assert_eq!(response.frames, FrameRange::new(0, 2));
}

#[tokio::test]
async fn test_trim_passes_sanitized_options() {
    let fx = fixture(vec![10; 5], FakeCodec::new());
    let mut request = trim_request(&fx.input, Some(TrimRange::Frames { start: 1, end: 3 }));
    request.options = TransformOptions {
        width: Some(0),
        fps: Some(20),
        colors: Some(64),
    };

    fx.container.trim_interactor().execute(request).await.unwrap();

    let calls = fx.codec.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, FrameRange::new(1, 3));
    assert_eq!(
        calls[0].1,
        TransformOptions {
            width: None,
            fps: Some(20),
            colors: Some(64),
        }
    );
}

#[tokio::test]
async fn test_trim_invalid_range_never_reaches_codec() {
    let fx = fixture(vec![10; 5], FakeCodec::new());
    let request = trim_request(
        &fx.input,
        Some(TrimRange::Time {
            start: 3.0,
            end: Some(4.0),
        }),
    );

    let err = fx.container.trim_interactor().execute(request).await.unwrap_err();
    assert!(matches!(
        err,
        GifCutError::Domain(DomainError::InvalidRange(_))
    ));
    assert!(fx.codec.calls().is_empty());
}

#[tokio::test]
async fn test_trim_respects_overwrite() {
    let fx = fixture(vec![10; 5], FakeCodec::new());
    let existing = fx.dir.path().join("anim_optimized.gif");
    std::fs::write(&existing, b"old").unwrap();

    let err = fx
        .container
        .trim_interactor()
        .execute(trim_request(&fx.input, None))
        .await
        .unwrap_err();
    assert!(matches!(err, GifCutError::Domain(DomainError::BadArgs(_))));

    let mut request = trim_request(&fx.input, None);
    request.overwrite = true;
    let response = fx.container.trim_interactor().execute(request).await.unwrap();
    assert_eq!(response.new_size, 5);
}

#[tokio::test]
async fn test_trim_refuses_to_overwrite_input_through_alias() {
    let fx = fixture(vec![10; 5], FakeCodec::new());
    let mut request = trim_request(&fx.input, None);
    request.output = Some(fx.dir.path().join(".").join("anim.gif"));
    request.overwrite = true;

    let err = fx.container.trim_interactor().execute(request).await.unwrap_err();
    assert!(matches!(err, GifCutError::Domain(DomainError::BadArgs(_))));
    assert!(fx.codec.calls().is_empty());
}

#[tokio::test]
async fn test_trim_rejects_missing_and_non_gif_input() {
    let fx = fixture(vec![10; 5], FakeCodec::new());

    let missing = fx.dir.path().join("missing.gif");
    let err = fx
        .container
        .trim_interactor()
        .execute(trim_request(&missing, None))
        .await
        .unwrap_err();
    assert!(matches!(err, GifCutError::InputFileNotFound { .. }));

    let png = fx.dir.path().join("still.png");
    std::fs::write(&png, b"png").unwrap();
    let err = fx
        .container
        .trim_interactor()
        .execute(trim_request(&png, None))
        .await
        .unwrap_err();
    assert!(matches!(err, GifCutError::NotAGif { .. }));
}

#[tokio::test]
async fn test_trim_requires_codec() {
    let codec = FakeCodec {
        available: false,
        ..Default::default()
    };
    let fx = fixture(vec![10; 5], codec);
    let err = fx
        .container
        .trim_interactor()
        .execute(trim_request(&fx.input, None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GifCutError::Domain(DomainError::ToolUnavailable(_))
    ));
}

#[tokio::test]
async fn test_split_writes_every_segment() {
    let fx = fixture(vec![10; 5], FakeCodec::new());
    let report = fx
        .container
        .split_interactor()
        .execute(split_request(&fx.input, SplitPoints::Times(vec![0.2])))
        .await
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.written(), 2);
    assert_eq!(report.total_size(), 5);

    let frames: Vec<FrameRange> = fx.codec.calls().into_iter().map(|c| c.0).collect();
    assert_eq!(frames, vec![FrameRange::new(0, 1), FrameRange::new(2, 4)]);
    assert!(fx.dir.path().join("anim_part1.gif").exists());
    assert!(fx.dir.path().join("anim_part2.gif").exists());
}

#[tokio::test]
async fn test_split_continues_after_codec_failure() {
    let codec = FakeCodec {
        available: true,
        fail_on_start_frame: vec![0],
        ..Default::default()
    };
    let fx = fixture(vec![10; 5], codec);
    let report = fx
        .container
        .split_interactor()
        .execute(split_request(&fx.input, SplitPoints::Times(vec![0.2])))
        .await
        .unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(report.written(), 1);
    assert!(!report.is_complete());
    assert!(matches!(
        report.outcomes[0].result,
        Err(DomainError::CodecFailed(_))
    ));
    assert_eq!(report.outcomes[1].result, Ok(3));
    assert!(report.to_string().contains("FAILED"));
}

#[tokio::test]
async fn test_split_by_frames_into_output_dir() {
    let fx = fixture(vec![10; 6], FakeCodec::new());
    let parts = fx.dir.path().join("parts");
    std::fs::create_dir(&parts).unwrap();

    let mut request = split_request(&fx.input, SplitPoints::Frames(vec![2, 4, 99]));
    request.output_dir = Some(parts.clone());
    let report = fx.container.split_interactor().execute(request).await.unwrap();

    assert_eq!(report.written(), 3);
    assert_eq!(report.plan.discarded.len(), 1);
    assert!(parts.join("anim_part3.gif").exists());
    let frames: Vec<FrameRange> = fx.codec.calls().into_iter().map(|c| c.0).collect();
    assert_eq!(
        frames,
        vec![FrameRange::new(0, 1), FrameRange::new(2, 3), FrameRange::new(4, 5)]
    );
}

#[tokio::test]
async fn test_split_keeps_original_when_timeline_is_empty() {
    let fx = fixture(vec![0, 0, 0], FakeCodec::new());
    let report = fx
        .container
        .split_interactor()
        .execute(split_request(&fx.input, SplitPoints::Times(vec![0.1])))
        .await
        .unwrap();

    assert!(report.kept_original.is_some());
    assert!(report.outcomes.is_empty());
    assert!(fx.codec.calls().is_empty());
    assert!(report.to_string().contains("left unchanged"));
}

#[tokio::test]
async fn test_inspect_renders_json() {
    let fx = fixture(vec![10, 10, 20], FakeCodec::new());
    let mut request = InspectRequest::new(&fx.input);
    request.format = ReportFormat::Json;

    let response = fx.container.inspect_interactor().execute(request).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&response.summary).unwrap();
    assert_eq!(json["frames"], 3);
    assert_eq!(json["width"], 320);
    assert_eq!(response.info.duration(), 0.4);
}

#[tokio::test]
async fn test_compare_identical_files() {
    let fx = fixture(vec![10; 4], FakeCodec::new());
    let request = CompareRequest {
        original: fx.input.clone(),
        modified: fx.input.clone(),
        format: ReportFormat::Text,
    };
    let response = fx.container.compare_interactor().execute(request).await.unwrap();
    assert!(response
        .report
        .rows
        .iter()
        .all(|row| row.change == PercentDiff::Percent(0.0)));
    assert!(response.summary.contains("Metric"));
}
