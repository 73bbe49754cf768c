use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Order in which a color triple lists its channels.
///
/// Decoded images are always RGB in memory; `Bgr` bounds are swizzled before
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelOrder {
    #[default]
    Bgr,
    Rgb,
}

impl ChannelOrder {
    /// Reorder an in-memory RGB pixel into this channel order
    pub fn arrange(self, pixel: &Rgb<u8>) -> [u8; 3] {
        let [r, g, b] = pixel.0;
        match self {
            ChannelOrder::Bgr => [b, g, r],
            ChannelOrder::Rgb => [r, g, b],
        }
    }
}

/// Inclusive per-channel range, `lower[c] <= v[c] <= upper[c]` for all three channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, channels: [u8; 3]) -> bool {
        channels
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }

    /// Test an RGB pixel against bounds expressed in `order`
    pub fn contains_pixel(&self, pixel: &Rgb<u8>, order: ChannelOrder) -> bool {
        self.contains(order.arrange(pixel))
    }
}

/// Square structuring element with an odd side length.
///
/// Applied as a Chebyshev (L-infinity) neighbourhood, so every pixel of the
/// square counts (8-connected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StructuringElement {
    radius: u8,
}

/// Largest accepted side. imageproc saturates distances at 255 and keeps
/// every pixel at distance `<= radius`, so the radius must stay below 255.
pub const MAX_ELEMENT_SIZE: u32 = 509;

impl StructuringElement {
    pub fn square(size: u32) -> Result<Self, FilterError> {
        if size % 2 == 0 || size > MAX_ELEMENT_SIZE {
            return Err(FilterError::InvalidStructuringElement { size });
        }
        Ok(Self {
            radius: (size / 2) as u8,
        })
    }

    pub(crate) const fn from_radius(radius: u8) -> Self {
        Self { radius }
    }

    pub fn size(&self) -> u32 {
        self.radius as u32 * 2 + 1
    }

    /// Distance from the centre to an edge of the square
    pub fn radius(&self) -> u8 {
        self.radius
    }
}

impl TryFrom<u32> for StructuringElement {
    type Error = FilterError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::square(size)
    }
}

impl From<StructuringElement> for u32 {
    fn from(element: StructuringElement) -> Self {
        element.size()
    }
}
