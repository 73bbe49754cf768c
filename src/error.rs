//! Error types for the divider filter

use std::path::PathBuf;

use thiserror::Error;

/// Failures the filter reports explicitly instead of crashing mid-pipeline
#[derive(Error, Debug)]
pub enum FilterError {
    /// Input file missing, unreadable, or not a decodable image
    #[error("Failed to load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Decoded image has no pixels
    #[error("Image {} has zero width or height", path.display())]
    EmptyImage { path: PathBuf },

    /// Output file could not be encoded or written
    #[error("Failed to write image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Square structuring elements need an odd side no larger than imageproc can apply
    #[error("Invalid structuring element size {size}: must be odd, between 1 and 509")]
    InvalidStructuringElement { size: u32 },

    /// Preview requested from a build without the `gui` feature
    #[error("Interactive preview is unavailable: built without the `gui` feature")]
    PreviewUnavailable,

    /// The window system failed while showing the preview
    #[error("Preview window failed: {message}")]
    Preview { message: String },
}
