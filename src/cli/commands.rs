//! Command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::adapters::AppConfig;
use crate::app::compare_interactor::CompareRequest;
use crate::app::inspect_interactor::InspectRequest;
use crate::app::split_interactor::SplitRequest;
use crate::app::trim_interactor::TrimRequest;
use crate::app::AppContainer;
use crate::cli::args::{CompareArgs, InspectArgs, PlanArgs, SplitArgs, TrimArgs};
use crate::domain::model::{FrameRange, Timeline, TransformOptions};
use crate::planner::{plan_request, SegmentationPlan, SplitPlan};
use crate::utils::time::format_span;

/// Execute the inspect command
pub async fn inspect(container: &AppContainer, args: InspectArgs) -> Result<()> {
    let request = InspectRequest {
        input: args.input,
        format: args.format,
        show_delays: args.delays,
    };
    let response = container
        .inspect_interactor()
        .execute(request)
        .await
        .context("Failed to inspect input file")?;
    println!("{}", response.summary.trim_end());
    Ok(())
}

/// Execute the trim command
pub async fn trim(container: &AppContainer, config: &AppConfig, args: TrimArgs) -> Result<()> {
    let request = TrimRequest {
        range: args.range(),
        options: args.transform.resolve(&configured_options(config)),
        input: args.input,
        output: args.output,
        overwrite: config.overwrite,
    };
    info!(input = %request.input.display(), range = ?request.range, "Starting trim");

    let input = request.input.display().to_string();
    let response = container
        .trim_interactor()
        .execute(request)
        .await
        .with_context(|| format!("Trim failed; {} left unchanged", input))?;
    println!("{}", response);
    Ok(())
}

/// Execute the split command
pub async fn split(container: &AppContainer, config: &AppConfig, args: SplitArgs) -> Result<()> {
    let request = SplitRequest {
        points: args.points(),
        options: args.transform.resolve(&configured_options(config)),
        input: args.input,
        output_dir: args.output_dir,
        overwrite: config.overwrite,
    };
    info!(input = %request.input.display(), points = ?request.points, "Starting split");

    let report = container.split_interactor().execute(request).await?;
    println!("{}", report);

    if report.failed() > 0 {
        anyhow::bail!(
            "{} of {} segments failed",
            report.failed(),
            report.outcomes.len()
        );
    }
    if report.plan.has_skips() {
        warn!(
            skipped = report.plan.skipped.len(),
            "Some segments contained no frames and were not written"
        );
    }
    Ok(())
}

/// Execute the compare command
pub async fn compare(container: &AppContainer, args: CompareArgs) -> Result<()> {
    let request = CompareRequest {
        original: args.original,
        modified: args.modified,
        format: args.format,
    };
    let response = container
        .compare_interactor()
        .execute(request)
        .await
        .context("Failed to compare files")?;
    println!("{}", response.summary.trim_end());
    Ok(())
}

/// Execute the plan command
pub fn plan(args: PlanArgs) -> Result<()> {
    println!("{}", render_plan(&args)?);
    Ok(())
}

/// What the plan command computed
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanOutput {
    Timeline {
        frames: usize,
        duration: f64,
        fps: f64,
        cumulative_end_times: Vec<f64>,
    },
    Trim {
        frames: FrameRange,
        start_time: f64,
        duration: f64,
    },
    Split(SplitPlan),
}

/// Build the timeline from `args` and plan the requested trim or split
pub fn compute_plan(args: &PlanArgs) -> Result<PlanOutput> {
    let frame_count = args.frame_count.unwrap_or(args.delays.len());
    let timeline = Timeline::build(&args.delays, frame_count)?;

    if let Some(request) = args.request() {
        let output = match plan_request(&timeline, &request)? {
            SegmentationPlan::Trim { frames } => PlanOutput::Trim {
                frames,
                start_time: timeline.frame_start_time(frames.start_frame).unwrap_or(0.0),
                duration: timeline.range_duration(&frames),
            },
            SegmentationPlan::Split(plan) => PlanOutput::Split(plan),
        };
        return Ok(output);
    }
    Ok(PlanOutput::Timeline {
        frames: timeline.frame_count(),
        duration: timeline.total_duration(),
        fps: timeline.fps(),
        cumulative_end_times: timeline.cumulative_end_times().to_vec(),
    })
}

/// Render the plan as JSON or text
pub fn render_plan(args: &PlanArgs) -> Result<String> {
    let output = compute_plan(args)?;
    if args.json {
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let text = match output {
        PlanOutput::Timeline {
            frames,
            duration,
            fps,
            cumulative_end_times,
        } => {
            let ends: Vec<String> = cumulative_end_times.iter().map(|t| format!("{:.2}", t)).collect();
            format!(
                "{} frames, {:.2}s, {:.2} fps\nFrame end times: {}",
                frames,
                duration,
                fps,
                ends.join(", ")
            )
        }
        PlanOutput::Trim {
            frames,
            start_time,
            duration,
        } => format!(
            "Keep frames {} ({} frames, {})",
            frames,
            frames.frame_count(),
            format_span(start_time, start_time + duration)
        ),
        PlanOutput::Split(plan) => {
            let mut lines = Vec::new();
            for segment in &plan.segments {
                lines.push(format!(
                    "[{}] {} ({:.2}s) frames {} ({} frames)",
                    segment.index,
                    format_span(segment.start_time, segment.end_time),
                    segment.duration(),
                    segment.frames(),
                    segment.frames().frame_count()
                ));
            }
            for skipped in &plan.skipped {
                lines.push(format!(
                    "[{}] {} skipped: no frames in range",
                    skipped.index,
                    format_span(skipped.start_time, skipped.end_time)
                ));
            }
            for discarded in &plan.discarded {
                lines.push(format!("ignored {}: {}", discarded.point, discarded.reason));
            }
            lines.join("\n")
        }
    };
    Ok(text)
}

fn configured_options(config: &AppConfig) -> TransformOptions {
    TransformOptions {
        width: config.default_width,
        fps: config.default_fps,
        colors: config.default_colors,
    }
}
