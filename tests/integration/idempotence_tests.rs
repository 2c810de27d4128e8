//! Idempotence of the existence-keyed skip policy.

use tilegen::TileGenerator;

use super::test_utils::{mtime, workspace};

#[test]
fn test_second_run_performs_zero_writes() {
    let ws = workspace(300, 300, 100);
    let generator = TileGenerator::new(ws.config.clone());

    let first = generator.run().unwrap();
    assert!(first.preview_written);
    assert_eq!(first.tiles_written, 9);
    assert_eq!(first.tiles_skipped, 0);

    let second = generator.run().unwrap();
    assert!(!second.preview_written);
    assert_eq!(second.tiles_written, 0);
    assert_eq!(second.tiles_skipped, 9);
}

#[test]
fn test_deleting_one_tile_regenerates_exactly_that_tile() {
    let ws = workspace(300, 300, 100);
    let generator = TileGenerator::new(ws.config.clone());
    generator.run().unwrap();

    let target = ws.config.tile_dir.join("tile_1_2.png");
    let neighbor = ws.config.tile_dir.join("tile_0_0.png");
    let neighbor_before = mtime(&neighbor);

    std::fs::remove_file(&target).unwrap();

    let report = generator.run().unwrap();
    assert_eq!(report.tiles_written, 1);
    assert_eq!(report.tiles_skipped, 8);
    assert!(target.exists());

    // Untouched files are never rewritten.
    assert_eq!(mtime(&neighbor), neighbor_before);
}

#[test]
fn test_stale_artifacts_survive_source_change() {
    // Known limitation: the skip is keyed on existence only, so changing
    // the source without clearing outputs keeps the old tiles.
    let ws = workspace(100, 100, 100);
    let generator = TileGenerator::new(ws.config.clone());
    generator.run().unwrap();

    let tile = ws.config.tile_dir.join("tile_0_0.png");
    let bytes_before = std::fs::read(&tile).unwrap();

    // Overwrite the source with different content.
    image::RgbImage::from_pixel(100, 100, image::Rgb([1, 2, 3]))
        .save(&ws.config.source)
        .unwrap();

    let report = generator.run().unwrap();
    assert_eq!(report.tiles_written, 0);
    assert_eq!(std::fs::read(&tile).unwrap(), bytes_before);
}

#[test]
fn test_truncated_tile_is_treated_as_present() {
    // Existence-only validity: a corrupt file on disk is skipped, not
    // repaired. Deleting it is the documented remedy.
    let ws = workspace(100, 100, 100);
    let generator = TileGenerator::new(ws.config.clone());
    generator.run().unwrap();

    let tile = ws.config.tile_dir.join("tile_0_0.png");
    std::fs::write(&tile, b"truncated").unwrap();

    let report = generator.run().unwrap();
    assert_eq!(report.tiles_written, 0);
    assert_eq!(std::fs::read(&tile).unwrap(), b"truncated");
}
