use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology;

use crate::models::StructuringElement;

// imageproc falls back to min(width + height, 255) as the distance when the
// image has no pixel of the source class, which turns an empty mask solid on
// images smaller than the element. Those two cases are answered here instead.

fn has_foreground(bin: &GrayImage) -> bool {
    bin.pixels().any(|p| p[0] != 0)
}

fn has_background(bin: &GrayImage) -> bool {
    bin.pixels().any(|p| p[0] == 0)
}

/// Nonzero samples become 255
fn normalized(bin: &GrayImage) -> GrayImage {
    let mut out = bin.clone();
    for p in out.pixels_mut() {
        if p[0] != 0 {
            p[0] = 255;
        }
    }
    out
}

/// Binary dilation with a square element; an empty mask stays empty
pub fn dilate_binary(bin: &GrayImage, element: StructuringElement) -> GrayImage {
    if !has_foreground(bin) {
        return bin.clone();
    }
    morphology::dilate(bin, Norm::LInf, element.radius())
}

/// Binary erosion with a square element; only background inside the image erodes
pub fn erode_binary(bin: &GrayImage, element: StructuringElement) -> GrayImage {
    if !has_background(bin) {
        return normalized(bin);
    }
    morphology::erode(bin, Norm::LInf, element.radius())
}

/// Erode then dilate with a square element; nonzero pixels count as foreground.
/// Pixels outside the image never erode the foreground.
pub fn open_binary(bin: &GrayImage, element: StructuringElement) -> GrayImage {
    dilate_binary(&erode_binary(bin, element), element)
}

/// Replace every sample `v` with `255 - v`
pub fn invert(img: &GrayImage) -> GrayImage {
    let mut out = img.clone();
    image::imageops::invert(&mut out);
    out
}
