//! tilegen - cut a large map image into a preview and a tile grid.
//!
//! This binary parses the configuration, runs the generator once, and
//! reports a summary. Any failure exits with a non-zero status.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilegen::{Config, TileGenerator};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Source:      {}", config.source.display());
    info!("  Preview:     {} (max {} px)", config.preview.display(), config.preview_max);
    info!(
        "  Tiles:       {} ({} px, PNG)",
        config.tile_dir.display(),
        config.tile_size
    );

    let generator = TileGenerator::new(config);

    match generator.run() {
        Ok(report) => {
            info!(
                "Done: {}x{} source, {}x{} grid",
                report.source_width, report.source_height, report.cols, report.rows
            );
            info!(
                "  Preview: {}",
                if report.preview_written {
                    "written"
                } else {
                    "already present"
                }
            );
            info!(
                "  Tiles:   {} written, {} skipped",
                report.tiles_written, report.tiles_skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose { "tilegen=debug" } else { "tilegen=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
