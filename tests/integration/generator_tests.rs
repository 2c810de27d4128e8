//! End-to-end generator runs over synthetic sources.

use image::GenericImageView;

use tilegen::TileGenerator;

use super::test_utils::{gradient_image, tile_listing, workspace};

#[test]
fn test_four_tile_grid_from_4096x3000() {
    // Reference scenario: 4096x3000 at T=2048 gives a 2x2 grid with the
    // bottom row clipped to 952 px.
    let ws = workspace(4096, 3000, 2048);

    let report = TileGenerator::new(ws.config.clone()).run().unwrap();

    assert_eq!((report.cols, report.rows), (2, 2));
    assert_eq!(report.tiles_written, 4);
    assert_eq!(
        tile_listing(&ws.config.tile_dir),
        vec![
            "tile_0_0.png",
            "tile_0_1.png",
            "tile_1_0.png",
            "tile_1_1.png"
        ]
    );

    let full = image::open(&ws.config.tile_dir.join("tile_0_0.png")).unwrap();
    assert_eq!(full.dimensions(), (2048, 2048));

    let clipped = image::open(&ws.config.tile_dir.join("tile_1_1.png")).unwrap();
    assert_eq!(clipped.dimensions(), (2048, 952));
}

#[test]
fn test_tiles_reassemble_into_source() {
    // Stitching every tile back at its grid offset must reproduce the
    // source exactly: no gaps, no overlaps, lossless encoding.
    let ws = workspace(250, 170, 64);
    let report = TileGenerator::new(ws.config.clone()).run().unwrap();

    let mut stitched = image::RgbImage::new(250, 170);
    for row in 0..report.rows {
        for col in 0..report.cols {
            let tile = image::open(
                ws.config
                    .tile_dir
                    .join(format!("tile_{}_{}.png", col, row)),
            )
            .unwrap()
            .to_rgb8();
            for (x, y, pixel) in tile.enumerate_pixels() {
                stitched.put_pixel(col * 64 + x, row * 64 + y, *pixel);
            }
        }
    }

    assert_eq!(stitched, gradient_image(250, 170));
}

#[test]
fn test_sub_tile_source_single_tile() {
    // 100x100 at T=2048: a single tile identical to the source.
    let ws = workspace(100, 100, 2048);

    let report = TileGenerator::new(ws.config.clone()).run().unwrap();

    assert_eq!((report.cols, report.rows), (1, 1));
    assert_eq!(tile_listing(&ws.config.tile_dir), vec!["tile_0_0.png"]);

    let tile = image::open(ws.config.tile_dir.join("tile_0_0.png"))
        .unwrap()
        .to_rgb8();
    assert_eq!(tile, gradient_image(100, 100));
}

#[test]
fn test_preview_is_bounded_and_proportional() {
    let ws = workspace(4096, 3000, 2048);

    let report = TileGenerator::new(ws.config.clone()).run().unwrap();
    assert!(report.preview_written);

    let preview = image::open(&ws.config.preview).unwrap();
    assert!(preview.width().max(preview.height()) <= 1200);

    let source_ratio = 4096.0 / 3000.0;
    let preview_ratio = preview.width() as f64 / preview.height() as f64;
    assert!((source_ratio - preview_ratio).abs() < 0.01);
}

#[test]
fn test_report_matches_grid_arithmetic() {
    // cols = ceil(W/T), rows = ceil(H/T) on a deliberately awkward size.
    let ws = workspace(130, 65, 32);

    let report = TileGenerator::new(ws.config.clone()).run().unwrap();

    assert_eq!(report.cols, 5); // ceil(130/32)
    assert_eq!(report.rows, 3); // ceil(65/32)
    assert_eq!(report.tiles_written, 15);
    assert_eq!(tile_listing(&ws.config.tile_dir).len(), 15);
}
