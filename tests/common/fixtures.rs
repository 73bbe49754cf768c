use divider::FilterConfig;
use image::{Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;

/// A color inside the default border range: blue 0, green 100, red 130
pub const BORDER_COLOR: Rgb<u8> = Rgb([130, 100, 0]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 100x100 black image with a 20x20 border-colored block in the top-left corner
pub fn corner_block_image() -> RgbImage {
    RgbImage::from_fn(100, 100, |x, y| {
        if x < 20 && y < 20 { BORDER_COLOR } else { BLACK }
    })
}

/// Dark background, one large bright square and a bright 3x3 speck; nothing in the border range
pub fn shapes_image() -> RgbImage {
    RgbImage::from_fn(120, 90, |x, y| {
        let in_square = (40..80).contains(&x) && (25..65).contains(&y);
        let in_speck = (5..8).contains(&x) && (5..8).contains(&y);
        if in_square || in_speck {
            Rgb([220, 210, 200])
        } else {
            Rgb([30, 35, 40])
        }
    })
}

/// Writes `img` as `test.png` in a fresh temp dir and returns a config reading it
/// and writing `morph.jpg` next to it.
/// The TempDir must be kept alive for the duration of the test.
pub fn config_in_temp_dir(img: &RgbImage) -> (FilterConfig, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = dir.path().join("test.png");
    img.save(&input).expect("Failed to save test image");
    let config = FilterConfig::default()
        .with_input(input)
        .with_output(dir.path().join("morph.jpg"));
    (config, dir)
}

pub fn is_binary(img: &image::GrayImage) -> bool {
    img.pixels().all(|p| p[0] == 0 || p[0] == 255)
}

pub fn exists(dir: &Path, name: &str) -> bool {
    dir.join(name).exists()
}
