mod common;

use common::*;
use divider::filtering::{binarize, border, morphology};
use divider::{StructuringElement, build_standard_pipeline, process_image};
use image::{DynamicImage, Rgb, RgbImage};

#[test]
fn test_output_keeps_input_dimensions() -> anyhow::Result<()> {
    init_logging();
    let outcome = process_image(DynamicImage::ImageRgb8(shapes_image()), &FilterConfig::default())?;
    assert_eq!(outcome.image.dimensions(), (120, 90));
    assert!(is_binary(&outcome.image));
    Ok(())
}

#[test]
fn test_corner_border_block_is_removed() -> anyhow::Result<()> {
    init_logging();
    let outcome = process_image(
        DynamicImage::ImageRgb8(corner_block_image()),
        &FilterConfig::default(),
    )?;

    assert_eq!(outcome.border_pixels, 20 * 20);
    // 20x20 block grown by the 15x15 dilation on its two inner sides
    assert_eq!(outcome.recolored_pixels, 27 * 27);

    let out = &outcome.image;
    assert_eq!(out.dimensions(), (100, 100));
    assert!(is_binary(out));
    for y in 0..20 {
        for x in 0..20 {
            assert_eq!(out.get_pixel(x, y)[0], 0, "corner pixel ({x}, {y}) is white");
        }
    }
    assert_eq!(out.get_pixel(99, 99)[0], 255);
    assert_eq!(out.get_pixel(50, 50)[0], 255);
    Ok(())
}

#[test]
fn test_no_border_pixels_matches_plain_chain() -> anyhow::Result<()> {
    init_logging();
    let img = shapes_image();
    let config = FilterConfig::default();

    let outcome = process_image(DynamicImage::ImageRgb8(img.clone()), &config)?;
    assert_eq!(outcome.border_pixels, 0);
    assert_eq!(outcome.recolored_pixels, 0);

    let gray = binarize::to_grayscale_bt601(&img);
    let (level, bin) = binarize::otsu_threshold(&gray);
    let expected = morphology::invert(&morphology::open_binary(&bin, config.opening));

    assert_eq!(outcome.otsu_level, level);
    assert_eq!(outcome.image, expected);

    // the speck is opened away, the square survives (inverted to black)
    assert_eq!(outcome.image.get_pixel(6, 6)[0], 255);
    assert_eq!(outcome.image.get_pixel(60, 45)[0], 0);
    Ok(())
}

#[test]
fn test_final_output_is_inverted_open() -> anyhow::Result<()> {
    let pipeline = build_standard_pipeline(&FilterConfig::default());
    let input = DynamicImage::ImageRgb8(corner_block_image());

    let opened = pipeline.run_partial(input.clone(), 4)?.image.to_luma8();
    let inverted = pipeline.run(input)?.image.to_luma8();

    for (o, i) in opened.pixels().zip(inverted.pixels()) {
        assert_eq!(i[0], 255 - o[0]);
    }
    Ok(())
}

#[test]
fn test_border_stage_leaves_other_pixels_alone() -> anyhow::Result<()> {
    let mut img = RgbImage::from_fn(80, 80, |x, y| Rgb([(x * 3) as u8, (y * 3) as u8, 90]));
    img.put_pixel(10, 10, BORDER_COLOR);
    img.put_pixel(60, 30, BORDER_COLOR);
    let config = FilterConfig::default();

    let after = build_standard_pipeline(&config)
        .run_partial(DynamicImage::ImageRgb8(img.clone()), 1)?
        .image
        .to_rgb8();

    let mask = border::color_range_mask(&img, &config.border_range, config.channel_order);
    let dilated = border::dilate_mask(&mask, config.border_dilation);

    for (x, y, p) in img.enumerate_pixels() {
        if dilated.get_pixel(x, y)[0] == 0 {
            assert_eq!(after.get_pixel(x, y), p);
        } else {
            assert_eq!(*after.get_pixel(x, y), Rgb([255, 255, 255]));
        }
    }
    Ok(())
}

#[test]
fn test_rgb_channel_order_changes_what_counts_as_border() -> anyhow::Result<()> {
    let config = FilterConfig::default().with_border_range(
        ColorRange::new([0, 80, 110], [0, 120, 150]),
        ChannelOrder::Rgb,
    );
    let outcome = process_image(DynamicImage::ImageRgb8(corner_block_image()), &config)?;
    assert_eq!(outcome.border_pixels, 0);

    let swapped = RgbImage::from_fn(30, 30, |x, _| {
        if x < 5 { Rgb([0, 100, 130]) } else { BLACK }
    });
    let outcome = process_image(DynamicImage::ImageRgb8(swapped), &config)?;
    assert_eq!(outcome.border_pixels, 5 * 30);
    Ok(())
}

#[test]
fn test_smaller_opening_keeps_more_detail() -> anyhow::Result<()> {
    let img = DynamicImage::ImageRgb8(shapes_image());
    let config = FilterConfig::default().with_opening(StructuringElement::square(3)?);

    let outcome = process_image(img, &config)?;
    // 3x3 speck survives a 3x3 open
    assert_eq!(outcome.image.get_pixel(6, 6)[0], 0);
    Ok(())
}

#[test]
fn test_grayscale_and_alpha_inputs_are_accepted() -> anyhow::Result<()> {
    let config = FilterConfig::default();

    let gray = DynamicImage::ImageRgb8(shapes_image()).to_luma8();
    let outcome = process_image(DynamicImage::ImageLuma8(gray), &config)?;
    assert_eq!(outcome.image.dimensions(), (120, 90));

    let rgba = DynamicImage::ImageRgb8(corner_block_image()).to_rgba8();
    let outcome = process_image(DynamicImage::ImageRgba8(rgba), &config)?;
    assert_eq!(outcome.border_pixels, 400);
    Ok(())
}

#[test]
fn test_tiny_black_images_come_out_white() -> anyhow::Result<()> {
    for side in 1..=3 {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(side, side, BLACK));
        let outcome = process_image(img, &FilterConfig::default())?;

        assert_eq!(outcome.recolored_pixels, 0, "{side}x{side}");
        assert_eq!(outcome.image.dimensions(), (side, side));
        assert!(
            outcome.image.pixels().all(|p| p[0] == 255),
            "{side}x{side} output is not all white"
        );
    }
    Ok(())
}
