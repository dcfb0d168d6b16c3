//! Common utilities and helpers

pub mod path;
pub mod time;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Utility functions for GifCut
pub struct Utils;

impl Utils {
    /// Format file size for display
    pub fn format_file_size(size: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    /// Size in mebibytes
    pub fn megabytes(size: u64) -> f64 {
        size as f64 / BYTES_PER_MEGABYTE
    }

    /// Share of `original` saved by `new`, in percent; 0 when `original` is 0
    pub fn percent_saved(original: u64, new: u64) -> f64 {
        if original == 0 {
            0.0
        } else {
            (original as f64 - new as f64) / original as f64 * 100.0
        }
    }

    /// Insert thousands separators: 1234567 -> "1,234,567"
    pub fn group_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}
