//! Named parameters of the border-removal filter.
//!
//! Every value the filter uses lives here with its default. The command line
//! always runs with [`FilterConfig::default`]; the builder methods exist for
//! library callers and tests.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{ChannelOrder, ColorRange, StructuringElement};

pub const DEFAULT_INPUT_PATH: &str = "test.png";
pub const DEFAULT_OUTPUT_PATH: &str = "morph.jpg";
pub const DEFAULT_WINDOW_TITLE: &str = "morph";

/// Border color bounds, listed blue, green, red
pub const BORDER_LOWER: [u8; 3] = [0, 80, 110];
pub const BORDER_UPPER: [u8; 3] = [0, 120, 150];

pub const BORDER_DILATION_SIZE: u32 = 15;
pub const OPENING_SIZE: u32 = 17;
pub const JPEG_QUALITY: u8 = 95;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Image to read
    pub input_path: PathBuf,

    /// Where the final single-channel JPEG goes
    pub output_path: PathBuf,

    /// Color treated as border and painted white before thresholding
    pub border_range: ColorRange,

    /// Channel order `border_range` is written in
    pub channel_order: ChannelOrder,

    /// Grows the border mask over anti-aliased edge pixels
    pub border_dilation: StructuringElement,

    /// Open applied after Otsu thresholding
    pub opening: StructuringElement,

    pub jpeg_quality: u8,

    /// Title of the preview window
    pub window_title: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            border_range: ColorRange::new(BORDER_LOWER, BORDER_UPPER),
            channel_order: ChannelOrder::Bgr,
            border_dilation: StructuringElement::from_radius((BORDER_DILATION_SIZE / 2) as u8),
            opening: StructuringElement::from_radius((OPENING_SIZE / 2) as u8),
            jpeg_quality: JPEG_QUALITY,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl FilterConfig {
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_border_range(mut self, range: ColorRange, order: ChannelOrder) -> Self {
        self.border_range = range;
        self.channel_order = order;
        self
    }

    pub fn with_opening(mut self, element: StructuringElement) -> Self {
        self.opening = element;
        self
    }

    /// Pretty JSON, written next to debug dumps
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
