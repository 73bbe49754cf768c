use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::filtering::morphology;
use crate::models::{ChannelOrder, ColorRange, StructuringElement};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Binary mask of pixels whose channels all fall inside `range` (255 inside, 0 outside)
pub fn color_range_mask(img: &RgbImage, range: &ColorRange, order: ChannelOrder) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if range.contains_pixel(img.get_pixel(x, y), order) {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

/// Grow the mask by a square structuring element; an empty mask stays empty
pub fn dilate_mask(mask: &GrayImage, element: StructuringElement) -> GrayImage {
    morphology::dilate_binary(mask, element)
}

/// Overwrite every pixel selected by `mask` with `color`, returning how many changed hands
pub fn recolor_masked(img: &mut RgbImage, mask: &GrayImage, color: Rgb<u8>) -> usize {
    let mut count = 0;
    for (pixel, m) in img.pixels_mut().zip(mask.pixels()) {
        if m[0] == 255 {
            *pixel = color;
            count += 1;
        }
    }
    count
}

pub fn count_set(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] == 255).count()
}

/// Result of painting the border out of an image
#[derive(Debug, Clone)]
pub struct BorderRemoval {
    /// Pixels matching the border color exactly
    pub matched: usize,
    /// Pixels painted white (matched plus the dilation halo)
    pub recolored: usize,
    pub mask: GrayImage,
    pub dilated_mask: GrayImage,
}

/// Mask the border color, dilate, and paint the dilated region white in place
pub fn remove_border(
    img: &mut RgbImage,
    range: &ColorRange,
    order: ChannelOrder,
    element: StructuringElement,
) -> BorderRemoval {
    let mask = color_range_mask(img, range, order);
    let dilated_mask = dilate_mask(&mask, element);
    let recolored = recolor_masked(img, &dilated_mask, WHITE);

    BorderRemoval {
        matched: count_set(&mask),
        recolored,
        mask,
        dilated_mask,
    }
}
