//! Preview generation.
//!
//! The preview is a single downscaled copy of the whole source, scaled so
//! neither dimension exceeds the configured bound (aspect ratio preserved)
//! and encoded as JPEG at the configured quality. Like tiles, an existing
//! preview file is skipped without any staleness check against the source.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use tracing::{debug, info};

use crate::error::GeneratorError;
use crate::tile::TileOutcome;

/// Write the bounded preview, unless it already exists.
///
/// The preview is an independent raster; the source is left untouched.
/// `thumbnail` never upscales a source that already fits within the box.
pub fn write_preview(
    source: &DynamicImage,
    path: &Path,
    max_dim: u32,
    jpeg_quality: u8,
) -> Result<TileOutcome, GeneratorError> {
    if path.exists() {
        debug!(preview = %path.display(), "preview already exists, skipping");
        return Ok(TileOutcome::Skipped);
    }

    let preview = source.thumbnail(max_dim, max_dim);

    // JPEG has no alpha channel; flatten before encoding.
    let rgb = preview.to_rgb8();

    let file = File::create(path).map_err(|e| GeneratorError::io(path, e))?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, jpeg_quality);

    rgb.write_with_encoder(encoder)
        .map_err(|e| GeneratorError::encode(path, e))?;

    info!(
        preview = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "saved preview"
    );
    Ok(TileOutcome::Written)
}

// =============================================================================
// Tests
// =============================================================================
