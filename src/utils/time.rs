//! Time formatting utilities

/// Format seconds as `MM:SS.mmm`, or `HH:MM:SS.mmm` past one hour
pub fn format_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let milliseconds = total_ms % 1000;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, milliseconds)
    } else {
        format!("{:02}:{:02}.{:03}", minutes, secs, milliseconds)
    }
}

/// Format a time span as `a.aa-b.bbs`
pub fn format_span(start: f64, end: f64) -> String {
    format!("{:.2}-{:.2}s", start, end)
}
