//! Configuration initialization and hierarchy management

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::adapters::{AppConfig, TomlConfigAdapter};
use crate::cli::Cli;

/// Standard tracing filter variable
const RUST_LOG: &str = "RUST_LOG";

/// Effective configuration plus where its values came from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: AppConfig,
    pub file: Option<PathBuf>,
    pub env_overrides: usize,
    pub cli_overrides: usize,
}

/// Initialize configuration hierarchy following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> Result<ResolvedConfig> {
    resolve(cli, |var| std::env::var(var).ok())
}

/// Resolve the hierarchy with a custom environment lookup
pub fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<ResolvedConfig> {
    // Step 1 and 2: defaults, then the file if one is given or found
    let file = cli.config.clone().or_else(TomlConfigAdapter::discover);
    let mut config = match &file {
        Some(path) => TomlConfigAdapter::load_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::default(),
    };

    // Step 3: environment variables, RUST_LOG above GIFCUT_LOG_LEVEL
    let mut env_overrides = TomlConfigAdapter::apply_env(&mut config, &env)
        .context("Invalid environment override")?;
    if let Some(filter) = env(RUST_LOG).filter(|v| !v.trim().is_empty()) {
        config.log_level = filter.trim().to_string();
        env_overrides += 1;
    }

    // Step 4: command-line arguments
    let cli_overrides = apply_cli_overrides(&mut config, cli);

    TomlConfigAdapter::validate(&config).context("Invalid configuration")?;

    Ok(ResolvedConfig {
        config,
        file,
        env_overrides,
        cli_overrides,
    })
}

fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) -> usize {
    let mut applied = 0;
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
        applied += 1;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
        applied += 1;
    }
    if cli.overwrite {
        config.overwrite = true;
        applied += 1;
    }
    applied
}
