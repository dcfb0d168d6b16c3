//! ImageMagick adapter
//!
//! Probes metadata with `magick identify` and re-encodes frame ranges with
//! `magick`. All pixel work stays inside the external process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Per-frame identify format: width, height, unique colors, delay
const IDENTIFY_FORMAT: &str = "%w %h %k %T\n";

/// ImageMagick-backed probe and codec adapter
pub struct MagickAdapter {
    binary: String,
    fallback_delay: u32,
}

impl MagickAdapter {
    /// Create new adapter invoking `binary`
    pub fn new(binary: impl Into<String>, fallback_delay: u32) -> Self {
        Self {
            binary: binary.into(),
            fallback_delay,
        }
    }

    /// Resolve the binary on PATH
    pub fn locate(&self) -> Result<PathBuf, DomainError> {
        which::which(&self.binary).map_err(|e| {
            DomainError::ToolUnavailable(format!(
                "{} not found ({}). Install ImageMagick: `brew install imagemagick` or `apt-get install imagemagick`",
                self.binary, e
            ))
        })
    }

    async fn run(&self, args: Vec<OsString>) -> Result<Output, DomainError> {
        debug!(binary = %self.binary, ?args, "Running ImageMagick");

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    DomainError::ToolUnavailable(format!("{} not found in PATH", self.binary))
                }
                _ => DomainError::CodecFailed(format!("failed to start {}: {}", self.binary, e)),
            })?;

        if !output.status.success() {
            return Err(DomainError::CodecFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(output)
    }
}

#[async_trait]
impl ProbePort for MagickAdapter {
    async fn probe(&self, file_path: &Path) -> Result<GifInfo, DomainError> {
        let file_size = tokio::fs::metadata(file_path).await?.len();
        let output = self
            .run(vec![
                "identify".into(),
                "-format".into(),
                IDENTIFY_FORMAT.into(),
                file_path.as_os_str().to_owned(),
            ])
            .await
            .map_err(|e| match e {
                DomainError::CodecFailed(msg) => DomainError::ProbeFailed(msg),
                other => other,
            })?;

        let info = parse_identify_output(
            &String::from_utf8_lossy(&output.stdout),
            file_size,
            self.fallback_delay,
        )?;
        info!(
            path = %file_path.display(),
            frames = info.frame_count(),
            duration = info.duration(),
            "Probed animation"
        );
        Ok(info)
    }
}

#[async_trait]
impl CodecPort for MagickAdapter {
    async fn is_available(&self) -> bool {
        self.locate().is_ok()
    }

    async fn extract(
        &self,
        input: &Path,
        frames: FrameRange,
        options: &TransformOptions,
        output: &Path,
    ) -> Result<(), DomainError> {
        // Removed on drop, including when either step fails
        let temp = tempfile::Builder::new()
            .prefix("gifcut_")
            .suffix(".gif")
            .tempfile()?
            .into_temp_path();

        self.run(extract_args(input, frames, &temp)).await?;
        self.run(optimize_args(&temp, options, output)).await?;

        info!(frames = %frames, output = %output.display(), "Wrote animation");
        Ok(())
    }
}

/// Arguments selecting `frames` of `input` into `output`
pub fn extract_args(input: &Path, frames: FrameRange, output: &Path) -> Vec<OsString> {
    let mut selector = input.as_os_str().to_owned();
    selector.push(format!("[{}]", frames));
    vec![selector, output.as_os_str().to_owned()]
}

/// Arguments applying `options` to `input` and optimizing layers into `output`
pub fn optimize_args(input: &Path, options: &TransformOptions, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![input.as_os_str().to_owned()];
    if let Some(width) = options.width {
        args.push("-resize".into());
        args.push(format!("{}x", width).into());
    }
    if let Some(delay) = options.delay_centiseconds() {
        args.push("-delay".into());
        args.push(delay.to_string().into());
    }
    if let Some(colors) = options.colors {
        args.push("-colors".into());
        args.push(colors.to_string().into());
    }
    args.push("-layers".into());
    args.push("Optimize".into());
    args.push(output.as_os_str().to_owned());
    args
}

/// Parse `identify -format "%w %h %k %T\n"` output, one line per frame.
///
/// The line count is the authoritative frame count; lines without a readable
/// delay leave the timeline short and it is padded from the last known delay.
pub fn parse_identify_output(
    stdout: &str,
    file_size: u64,
    fallback_delay: u32,
) -> Result<GifInfo, DomainError> {
    let lines: Vec<&str> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = lines
        .first()
        .ok_or_else(|| DomainError::ProbeFailed("identify produced no frames".to_string()))?;
    let mut fields = first.split_whitespace();
    let mut dimension = |name: &str| -> Result<u32, DomainError> {
        fields
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| DomainError::ProbeFailed(format!("unreadable {} in '{}'", name, first)))
    };
    let width = dimension("width")?;
    let height = dimension("height")?;

    fn field(line: &str, n: usize) -> Option<u32> {
        line.split_whitespace().nth(n).and_then(|v| v.parse().ok())
    }
    let colors = lines.iter().filter_map(|line| field(line, 2)).max().unwrap_or(0);
    let delays: Vec<u32> = lines.iter().filter_map(|line| field(line, 3)).collect();

    let timeline = Timeline::build_with_fallback(&delays, lines.len(), Some(fallback_delay))?;

    Ok(GifInfo {
        width,
        height,
        colors,
        file_size,
        timeline,
    })
}
