//! Tile grid math and tile persistence.
//!
//! # Components
//!
//! - [`TileGrid`]: partitions the source extent into clipped, fixed-size
//!   cells and iterates them in row-major order
//! - [`TileBox`]: the clipped pixel rectangle of one cell
//! - [`write_tile`]: crops one cell out of the source and writes it as PNG,
//!   skipping tiles that already exist on disk
//!
//! # Example
//!
//! ```
//! use tilegen::tile::{tile_filename, TileGrid};
//!
//! let grid = TileGrid::new(4096, 3000, 2048);
//! assert_eq!((grid.cols(), grid.rows()), (2, 2));
//!
//! let (col, row, cell) = grid.cells().last().unwrap();
//! assert_eq!(tile_filename(col, row), "tile_1_1.png");
//! assert_eq!((cell.width, cell.height), (2048, 952));
//! ```

mod grid;
mod writer;

pub use grid::{tile_filename, TileBox, TileGrid};
pub use writer::{tile_path, write_tile, TileOutcome};
