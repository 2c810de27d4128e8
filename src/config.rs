//! Configuration for the tile generator.
//!
//! The reference deployment hard-codes its paths and sizes; here they are an
//! explicit configuration structure so the generator can be pointed at
//! synthetic images and temporary directories in tests. All options support:
//! - Command-line arguments via clap
//! - Environment variables with `TILEGEN_` prefix
//! - Defaults matching the production asset layout
//!
//! # Environment Variables
//!
//! - `TILEGEN_SOURCE` - Source image path (default: assets/images/map.jpg)
//! - `TILEGEN_TILE_DIR` - Tile output directory (default: assets/tiles)
//! - `TILEGEN_PREVIEW` - Preview output path (default: assets/images/map-small.jpg)
//! - `TILEGEN_TILE_SIZE` - Tile side length in pixels (default: 2048)
//! - `TILEGEN_PREVIEW_MAX` - Preview bounding box side (default: 1200)
//! - `TILEGEN_JPEG_QUALITY` - Preview JPEG quality (default: 80)

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default source image path.
pub const DEFAULT_SOURCE: &str = "assets/images/map.jpg";

/// Default tile output directory.
pub const DEFAULT_TILE_DIR: &str = "assets/tiles";

/// Default preview output path.
pub const DEFAULT_PREVIEW: &str = "assets/images/map-small.jpg";

/// Default tile side length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 2048;

/// Default preview bounding box: neither preview dimension exceeds this.
pub const DEFAULT_PREVIEW_MAX: u32 = 1200;

/// Default JPEG quality for the preview (1-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

// =============================================================================
// CLI Arguments
// =============================================================================

/// tilegen - cut a large map image into a preview and a tile grid.
///
/// Produces a downscaled JPEG preview and a directory of fixed-size PNG
/// tiles from one source image. Artifacts already on disk are skipped, so
/// re-running against unchanged inputs does no work.
#[derive(Parser, Debug, Clone)]
#[command(name = "tilegen")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the source image.
    #[arg(long, default_value = DEFAULT_SOURCE, env = "TILEGEN_SOURCE")]
    pub source: PathBuf,

    /// Directory the tiles are written into (created if missing).
    #[arg(long, default_value = DEFAULT_TILE_DIR, env = "TILEGEN_TILE_DIR")]
    pub tile_dir: PathBuf,

    /// Path the preview image is written to.
    #[arg(long, default_value = DEFAULT_PREVIEW, env = "TILEGEN_PREVIEW")]
    pub preview: PathBuf,

    /// Tile side length in pixels.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, env = "TILEGEN_TILE_SIZE")]
    pub tile_size: u32,

    /// Maximum preview dimension; the preview is scaled to fit within
    /// a square box of this side, preserving aspect ratio.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_MAX, env = "TILEGEN_PREVIEW_MAX")]
    pub preview_max: u32,

    /// JPEG quality for the preview (1-100).
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, env = "TILEGEN_JPEG_QUALITY")]
    pub jpeg_quality: u8,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.tile_size == 0 {
            return Err("tile_size must be greater than 0".to_string());
        }

        if self.preview_max == 0 {
            return Err("preview_max must be greater than 0".to_string());
        }

        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err("jpeg_quality must be between 1 and 100".to_string());
        }

        if self.source.as_os_str().is_empty() {
            return Err("source path is required. Set --source or TILEGEN_SOURCE".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            tile_dir: PathBuf::from(DEFAULT_TILE_DIR),
            preview: PathBuf::from(DEFAULT_PREVIEW),
            tile_size: DEFAULT_TILE_SIZE,
            preview_max: DEFAULT_PREVIEW_MAX,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            verbose: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
