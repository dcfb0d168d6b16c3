// Adapters - External system implementations

pub mod local_fs;
pub mod magick;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use local_fs::LocalFsAdapter;
pub use magick::MagickAdapter;
pub use toml_config::{AppConfig, TomlConfigAdapter};
pub use tracing_log::{LogFormat, TracingLogAdapter};
