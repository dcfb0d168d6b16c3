//! GifCut CLI
//!
//! Trim and split animated GIFs on frame boundaries.
//!
//! # Usage
//!
//! ```bash
//! gifcut inspect -i cat.gif
//! gifcut trim -i cat.gif --start 0.5 --end 2.0 --width 320
//! gifcut split -i cat.gif --at-times 1.0,2.5
//! gifcut plan --delays 10,10,10,10,10 --at-times 0.2
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use gifcut_cli::adapters::TracingLogAdapter;
use gifcut_cli::app::AppContainer;
use gifcut_cli::cli::{commands, Cli, Commands};
use gifcut_cli::config_initialization::initialize_configuration_hierarchy;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let resolved = initialize_configuration_hierarchy(&cli)?;
    let config = resolved.config;
    TracingLogAdapter::init(&config.log_level, config.log_format)?;

    debug!(
        file = ?resolved.file,
        env_overrides = resolved.env_overrides,
        cli_overrides = resolved.cli_overrides,
        "Configuration resolved"
    );
    info!("Starting GifCut");

    let container = AppContainer::new(&config);
    match cli.command {
        Commands::Inspect(args) => commands::inspect(&container, args).await,
        Commands::Trim(args) => commands::trim(&container, &config, args).await,
        Commands::Split(args) => commands::split(&container, &config, args).await,
        Commands::Compare(args) => commands::compare(&container, args).await,
        Commands::Plan(args) => commands::plan(args),
    }
}
