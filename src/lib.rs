//! GifCut Library
//!
//! Frame-accurate trimming and splitting of animated GIFs. Per-frame delays
//! form a [`Timeline`]; the [`TimeFrameMapper`] turns time intervals into frame
//! ranges, and the [`SplitPlanner`] and [`TrimPlanner`] build on it. Encoding is
//! delegated to ImageMagick through the [`ports`] layer.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{FrameRange, GifInfo, Segment, SplitPoint, Timeline, TransformOptions};
pub use domain::rules::TimeFrameMapper;
pub use error::{GifCutError, GifCutResult};
pub use planner::{SplitPlan, SplitPlanner, TrimPlanner};
