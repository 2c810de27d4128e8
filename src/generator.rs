//! Tile generator orchestration.
//!
//! [`TileGenerator`] runs the full pipeline over one source image:
//!
//! 1. Ensure the tile output directory exists
//! 2. Decode the source image once
//! 3. Write the bounded preview (skip if present)
//! 4. Write every grid tile (skip each tile already present)
//!
//! The pipeline is sequential and synchronous. Skipping is keyed purely on
//! filename existence: re-running over unchanged inputs performs zero
//! writes, and a changed source with a populated output directory silently
//! keeps the stale artifacts. Partial output from a failed run is kept, not
//! rolled back; the next run resumes at the first missing artifact.

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::GeneratorError;
use crate::preview::write_preview;
use crate::tile::{write_tile, TileGrid, TileOutcome};

// =============================================================================
// Run Report
// =============================================================================

/// Summary of one generator run.
///
/// Exposes the skip/write split so idempotence is observable without
/// inspecting the filesystem: a second run over unchanged inputs reports
/// `preview_written == false` and `tiles_written == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Source image width in pixels.
    pub source_width: u32,
    /// Source image height in pixels.
    pub source_height: u32,
    /// Grid columns.
    pub cols: u32,
    /// Grid rows.
    pub rows: u32,
    /// Whether the preview was written this run (false: already on disk).
    pub preview_written: bool,
    /// Tiles written this run.
    pub tiles_written: u64,
    /// Tiles skipped because their file already existed.
    pub tiles_skipped: u64,
}

// =============================================================================
// Tile Generator
// =============================================================================

/// Orchestrates preview and tile production from one source raster.
#[derive(Debug, Clone)]
pub struct TileGenerator {
    config: Config,
}

impl TileGenerator {
    /// Create a generator for the given configuration.
    ///
    /// The configuration should be validated first; see [`Config::validate`].
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered: [`GeneratorError::Load`] if
    /// the source is missing or cannot be decoded, [`GeneratorError::Io`]
    /// for directory or file-write failures, [`GeneratorError::Encode`] for
    /// resize or encode failures. Artifacts written before the failure
    /// remain on disk.
    pub fn run(&self) -> Result<RunReport, GeneratorError> {
        self.ensure_tile_dir()?;

        info!(source = %self.config.source.display(), "loading source image");
        let source = self.load_source()?;
        let (width, height) = (source.width(), source.height());
        info!(width, height, "source image decoded");

        let preview = write_preview(
            &source,
            &self.config.preview,
            self.config.preview_max,
            self.config.jpeg_quality,
        )?;

        let grid = TileGrid::new(width, height, self.config.tile_size);
        info!(
            cols = grid.cols(),
            rows = grid.rows(),
            tile_size = self.config.tile_size,
            "generating tiles"
        );

        let mut written = 0u64;
        let mut skipped = 0u64;
        for (col, row, cell) in grid.cells() {
            match write_tile(&source, &self.config.tile_dir, col, row, cell)? {
                TileOutcome::Written => written += 1,
                TileOutcome::Skipped => skipped += 1,
            }
        }

        Ok(RunReport {
            source_width: width,
            source_height: height,
            cols: grid.cols(),
            rows: grid.rows(),
            preview_written: preview == TileOutcome::Written,
            tiles_written: written,
            tiles_skipped: skipped,
        })
    }

    /// Create the tile output directory and any missing parents.
    ///
    /// Runs before the source load, matching the reference pipeline; a
    /// pre-existing directory is left untouched.
    fn ensure_tile_dir(&self) -> Result<(), GeneratorError> {
        let dir: &Path = &self.config.tile_dir;
        if dir.exists() {
            debug!(dir = %dir.display(), "tile directory already exists");
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|e| GeneratorError::io(dir, e))?;
        info!(dir = %dir.display(), "created tile directory");
        Ok(())
    }

    /// Decode the source image.
    ///
    /// Decoder memory limits are disabled: map sources routinely exceed the
    /// default allocation guard, the same reason the reference disables its
    /// decompression-bomb check.
    fn load_source(&self) -> Result<DynamicImage, GeneratorError> {
        let source = &self.config.source;
        let mut reader = ImageReader::open(source)
            .map_err(|e| GeneratorError::load(source, e))?
            .with_guessed_format()
            .map_err(|e| GeneratorError::load(source, e))?;
        reader.no_limits();
        reader
            .decode()
            .map_err(|e| GeneratorError::load(source, e))
    }
}

// =============================================================================
// Tests
// =============================================================================
