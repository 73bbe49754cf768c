use image::{GrayImage, Luma, RgbImage};
use imageproc::contrast::otsu_level;

// ITU-R BT.601 luma weights in 14-bit fixed point (0.299, 0.587, 0.114)
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Convert to grayscale with BT.601 weights, `Y = 0.299 R + 0.587 G + 0.114 B`, rounded
pub fn to_grayscale_bt601(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b] = img.get_pixel(x, y).0;
        let weighted = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
        let luma = (weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT;
        Luma([luma as u8])
    })
}

/// Pixels strictly above `level` become 255, the rest 0
pub fn threshold_binary(gray: &GrayImage, level: u8) -> GrayImage {
    let mut out = gray.clone();
    for p in out.pixels_mut() {
        p[0] = if p[0] > level { 255 } else { 0 };
    }
    out
}

/// Global Otsu binarization; returns the chosen level and the binary image
pub fn otsu_threshold(gray: &GrayImage) -> (u8, GrayImage) {
    let level = otsu_level(gray);
    (level, threshold_binary(gray, level))
}
