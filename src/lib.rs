//! # tilegen
//!
//! Cuts one large map image into a bounded preview and a grid of fixed-size
//! tiles for progressive web viewers.
//!
//! Given a source raster, the generator produces:
//!
//! - a JPEG preview scaled to fit within a bounding box (1200×1200 by
//!   default), aspect ratio preserved
//! - one lossless PNG per grid cell, `tile_{col}_{row}.png`, with edge
//!   cells clipped to the image bounds
//!
//! Artifacts already on disk are skipped by filename existence, so
//! re-running over unchanged inputs performs no work and deleting a single
//! tile regenerates exactly that tile. The skip is content-oblivious: a
//! source change without clearing the output directory keeps stale tiles.
//!
//! ## Architecture
//!
//! - [`config`] - CLI and configuration types
//! - [`error`] - tagged error kinds (load / encode / I/O)
//! - [`tile`] - grid partitioning and tile persistence
//! - [`preview`] - bounded preview generation
//! - [`generator`] - the sequential pipeline
//!
//! ## Example
//!
//! ```no_run
//! use tilegen::{Config, TileGenerator};
//!
//! let config = Config::default();
//! let report = TileGenerator::new(config).run()?;
//! println!(
//!     "{}x{} grid, {} tiles written, {} skipped",
//!     report.cols, report.rows, report.tiles_written, report.tiles_skipped
//! );
//! # Ok::<(), tilegen::GeneratorError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod preview;
pub mod tile;

// Re-export commonly used types
pub use config::{
    Config, DEFAULT_JPEG_QUALITY, DEFAULT_PREVIEW, DEFAULT_PREVIEW_MAX, DEFAULT_SOURCE,
    DEFAULT_TILE_DIR, DEFAULT_TILE_SIZE,
};
pub use error::GeneratorError;
pub use generator::{RunReport, TileGenerator};
pub use preview::write_preview;
pub use tile::{tile_filename, tile_path, write_tile, TileBox, TileGrid, TileOutcome};
