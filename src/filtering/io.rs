use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GrayImage, ImageError};
use log::info;

use crate::error::FilterError;

/// Decode an image file into memory
/// Zero-sized images are rejected here so later steps never see them
pub fn load_image(path: &Path) -> Result<DynamicImage, FilterError> {
    let img = image::open(path).map_err(|source| FilterError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    if img.width() == 0 || img.height() == 0 {
        return Err(FilterError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    info!("Image loaded: {}x{} from {}", img.width(), img.height(), path.display());
    Ok(img)
}

/// Write a single-channel JPEG
pub fn save_jpeg(img: &GrayImage, path: &Path, quality: u8) -> Result<(), FilterError> {
    let save_error = |source: ImageError| FilterError::Save {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| save_error(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(img)
        .map_err(save_error)?;

    info!("Saved {}", path.display());
    Ok(())
}

/// Show the image in a window and block until a key is pressed
#[cfg(feature = "gui")]
pub fn show_preview(img: &GrayImage, title: &str) -> Result<(), FilterError> {
    crate::gui::show(img, title)
}

#[cfg(not(feature = "gui"))]
pub fn show_preview(_img: &GrayImage, _title: &str) -> Result<(), FilterError> {
    Err(FilterError::PreviewUnavailable)
}
