// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::adapters::tracing_log::{LogFormat, TracingLogAdapter};
use crate::domain::errors::*;
use crate::domain::model::DEFAULT_FALLBACK_DELAY;

/// Settings read from the `[gifcut]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    /// ImageMagick executable name or path
    pub magick_binary: String,
    pub default_width: Option<u32>,
    pub default_fps: Option<u32>,
    pub default_colors: Option<u32>,
    /// Delay in centiseconds used when a probe reports no delays
    pub fallback_delay: u32,
    /// Replace existing output files without failing
    pub overwrite: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            magick_binary: "magick".to_string(),
            default_width: None,
            default_fps: None,
            default_colors: None,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            overwrite: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    gifcut: AppConfig,
}

/// Environment variables and the setting each overrides
pub const ENV_MAPPINGS: &[(&str, &str)] = &[
    ("GIFCUT_LOG_LEVEL", "log_level"),
    ("GIFCUT_LOG_FORMAT", "log_format"),
    ("GIFCUT_MAGICK", "magick_binary"),
    ("GIFCUT_WIDTH", "default_width"),
    ("GIFCUT_FPS", "default_fps"),
    ("GIFCUT_COLORS", "default_colors"),
    ("GIFCUT_FALLBACK_DELAY", "fallback_delay"),
    ("GIFCUT_OVERWRITE", "overwrite"),
];

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse a configuration document
    pub fn parse(content: &str) -> Result<AppConfig, DomainError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| DomainError::ConfigError(format!("Failed to parse TOML config: {}", e)))?;
        Ok(file.gifcut)
    }

    /// Read and parse a configuration file
    pub fn load_file(path: &Path) -> Result<AppConfig, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Candidate file locations, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("gifcut.toml")];
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("gifcut").join("config.toml"));
        } else if let Some(home) = std::env::var_os("HOME") {
            paths.push(PathBuf::from(home).join(".config").join("gifcut").join("config.toml"));
        }
        paths
    }

    /// First existing file among the search paths
    pub fn discover() -> Option<PathBuf> {
        Self::search_paths().into_iter().find(|p| p.is_file())
    }

    /// Apply environment overrides; returns the number of variables applied.
    pub fn apply_env(
        config: &mut AppConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<usize, DomainError> {
        let mut applied = 0;
        for &(var, key) in ENV_MAPPINGS {
            let Some(value) = lookup(var) else {
                continue;
            };
            Self::set(config, key, value.trim())
                .map_err(|e| DomainError::ConfigError(format!("{}: {}", var, e)))?;
            applied += 1;
        }
        Ok(applied)
    }

    fn set(config: &mut AppConfig, key: &str, value: &str) -> Result<(), DomainError> {
        fn number(value: &str) -> Result<u32, DomainError> {
            value
                .parse()
                .map_err(|e| DomainError::ConfigError(format!("invalid number '{}': {}", value, e)))
        }

        match key {
            "log_level" => config.log_level = value.to_string(),
            "log_format" => {
                config.log_format = LogFormat::from_str(value, true)
                    .map_err(DomainError::ConfigError)?
            }
            "magick_binary" => config.magick_binary = value.to_string(),
            "default_width" => config.default_width = Some(number(value)?),
            "default_fps" => config.default_fps = Some(number(value)?),
            "default_colors" => config.default_colors = Some(number(value)?),
            "fallback_delay" => config.fallback_delay = number(value)?,
            "overwrite" => {
                config.overwrite = value.parse().map_err(|e| {
                    DomainError::ConfigError(format!("invalid boolean '{}': {}", value, e))
                })?
            }
            other => {
                return Err(DomainError::ConfigError(format!(
                    "unknown setting '{}'",
                    other
                )))
            }
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(config: &AppConfig) -> Result<(), DomainError> {
        TracingLogAdapter::filter(&config.log_level)?;

        if config.magick_binary.trim().is_empty() {
            return Err(DomainError::ConfigError(
                "magick_binary cannot be empty".to_string(),
            ));
        }
        for (name, value) in [
            ("default_width", config.default_width),
            ("default_fps", config.default_fps),
        ] {
            if value == Some(0) {
                return Err(DomainError::ConfigError(format!("{} must be positive", name)));
            }
        }
        if let Some(colors) = config.default_colors {
            if !(2..=256).contains(&colors) {
                return Err(DomainError::ConfigError(
                    "default_colors must be between 2 and 256".to_string(),
                ));
            }
        }
        if config.fallback_delay == 0 {
            return Err(DomainError::ConfigError(
                "fallback_delay must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
