//! Tile extraction and persistence.
//!
//! Crops one grid cell out of the source raster and writes it losslessly as
//! PNG. A tile whose file already exists is skipped without inspecting its
//! content: presence on disk is the cache contract, and the remedy for a
//! suspect file is deleting it so the next run regenerates it.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use tracing::{debug, info};

use crate::error::GeneratorError;

use super::grid::{tile_filename, TileBox};

/// Outcome of a single tile: written fresh, or already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileOutcome {
    Written,
    Skipped,
}

/// Path of the tile for cell `(col, row)` under `tile_dir`.
pub fn tile_path(tile_dir: &Path, col: u32, row: u32) -> PathBuf {
    tile_dir.join(tile_filename(col, row))
}

/// Write the tile for one grid cell, unless it already exists.
///
/// The crop is an independent copy of the cell's pixels; the source raster
/// is not mutated or consumed.
pub fn write_tile(
    source: &DynamicImage,
    tile_dir: &Path,
    col: u32,
    row: u32,
    cell: TileBox,
) -> Result<TileOutcome, GeneratorError> {
    let path = tile_path(tile_dir, col, row);

    if path.exists() {
        debug!(tile = %path.display(), "tile already exists, skipping");
        return Ok(TileOutcome::Skipped);
    }

    let tile = source.crop_imm(cell.x, cell.y, cell.width, cell.height);
    tile.save_with_format(&path, ImageFormat::Png)
        .map_err(|e| GeneratorError::encode(&path, e))?;

    info!(tile = %path.display(), width = cell.width, height = cell.height, "saved tile");
    Ok(TileOutcome::Written)
}

// =============================================================================
// Tests
// =============================================================================
