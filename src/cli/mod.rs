//! CLI module for GifCut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::LogFormat;

pub mod args;
pub mod commands;

pub use args::{CompareArgs, InspectArgs, PlanArgs, SplitArgs, TransformArgs, TrimArgs};

/// GifCut - Trim and split animated GIFs on frame boundaries
///
/// Times are in seconds and map onto whole frames using each frame's display
/// delay. Re-encoding is delegated to ImageMagick.
#[derive(Parser, Debug)]
#[command(name = "gifcut")]
#[command(about = "Trim and split animated GIFs on frame boundaries")]
#[command(version)]
pub struct Cli {
    /// Logging level or filter directive (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Configuration file (default: ./gifcut.toml, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Replace existing output files
    #[arg(long, global = true)]
    pub overwrite: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show dimensions, timing and palette of a GIF
    Inspect(InspectArgs),
    /// Keep one time or frame range of a GIF
    Trim(TrimArgs),
    /// Cut a GIF into consecutive parts
    Split(SplitArgs),
    /// Compare two GIFs metric by metric
    Compare(CompareArgs),
    /// Preview trim or split frame ranges for a list of delays
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_split_times() {
        let cli = Cli::try_parse_from([
            "gifcut", "split", "-i", "cat.gif", "--at-times", "0.5,1.25", "--overwrite",
        ])
        .unwrap();
        assert!(cli.overwrite);
        match cli.command {
            Commands::Split(args) => assert_eq!(args.at_times, vec![0.5, 1.25]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_trim_rejects_mixed_modes() {
        assert!(Cli::try_parse_from([
            "gifcut", "trim", "-i", "a.gif", "--start", "1", "--start-frame", "2", "--end-frame", "4",
        ])
        .is_err());
    }

    #[test]
    fn test_plan_frame_count_is_bounded() {
        assert!(Cli::try_parse_from(["gifcut", "plan", "--delays", "10", "--frame-count", "4000000000"]).is_err());
        assert!(Cli::try_parse_from(["gifcut", "plan", "--delays", "10", "--frame-count", "0"]).is_err());
        assert!(Cli::try_parse_from(["gifcut", "plan", "--delays", "10", "--frame-count", "240"]).is_ok());
    }

    #[test]
    fn test_colors_range_is_enforced() {
        assert!(Cli::try_parse_from(["gifcut", "trim", "-i", "a.gif", "--colors", "1"]).is_err());
        assert!(Cli::try_parse_from(["gifcut", "trim", "-i", "a.gif", "--colors", "256"]).is_ok());
    }
}
