//! Tile grid index.
//!
//! A [`TileGrid`] partitions the source extent `[0,W) x [0,H)` into cells of
//! side `tile_size`. Edge cells are clipped to the image bounds, never
//! padded, so the clipped boxes exactly tile the extent with no gaps or
//! overlaps. Each cell maps to a deterministic, collision-free filename
//! `tile_{col}_{row}.png`.

// =============================================================================
// Tile Box
// =============================================================================

/// Pixel rectangle of one grid cell, clipped to the source bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBox {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels (at most the grid's tile size).
    pub width: u32,
    /// Height in pixels (at most the grid's tile size).
    pub height: u32,
}

// =============================================================================
// Tile Grid
// =============================================================================

/// Grid partition of a `width x height` image into `tile_size` cells.
#[derive(Debug, Clone, Copy)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_size: u32,
}

impl TileGrid {
    /// Create a grid over an image of the given dimensions.
    ///
    /// `tile_size` must be non-zero; [`crate::Config::validate`] enforces
    /// this before a grid is ever built.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        debug_assert!(tile_size > 0);
        Self {
            width,
            height,
            tile_size,
        }
    }

    /// Number of columns: `ceil(width / tile_size)`.
    pub fn cols(&self) -> u32 {
        self.width.div_ceil(self.tile_size)
    }

    /// Number of rows: `ceil(height / tile_size)`.
    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.tile_size)
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> u64 {
        self.cols() as u64 * self.rows() as u64
    }

    /// Clipped pixel box for cell `(col, row)`.
    ///
    /// Cell `(c, r)` covers `(c*T, r*T)` to `(min((c+1)*T, W), min((r+1)*T, H))`.
    pub fn cell_box(&self, col: u32, row: u32) -> TileBox {
        let x = col * self.tile_size;
        let y = row * self.tile_size;
        TileBox {
            x,
            y,
            width: self.tile_size.min(self.width - x),
            height: self.tile_size.min(self.height - y),
        }
    }

    /// Iterate over all cells in row-major order (row outer, column inner),
    /// yielding `(col, row, box)`.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, TileBox)> + '_ {
        let cols = self.cols();
        (0..self.rows())
            .flat_map(move |row| (0..cols).map(move |col| (col, row, self.cell_box(col, row))))
    }
}

/// Deterministic tile filename for cell `(col, row)`.
///
/// Zero-indexed, no zero padding: `tile_0_0.png`, `tile_12_3.png`.
pub fn tile_filename(col: u32, row: u32) -> String {
    format!("tile_{}_{}.png", col, row)
}

// =============================================================================
// Tests
// =============================================================================
