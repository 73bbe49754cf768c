use crate::filtering::{binarize, border, morphology};
use crate::models::{ChannelOrder, ColorRange, StructuringElement};
use crate::pipeline::{MetadataValue, PipelineContext, PipelineData, PipelineStep};
use anyhow::Result;
use image::DynamicImage;
use log::debug;

/// Paint the border color (and its dilated halo) white
pub struct BorderRemovalStep {
    pub range: ColorRange,
    pub order: ChannelOrder,
    pub dilation: StructuringElement,
}

impl PipelineStep for BorderRemovalStep {
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData> {
        let mut rgb = data.image.to_rgb8();
        let removal = border::remove_border(&mut rgb, &self.range, self.order, self.dilation);

        debug!(
            "Border color matched {} pixels, recolored {} after {}x{} dilation",
            removal.matched,
            removal.recolored,
            self.dilation.size(),
            self.dilation.size()
        );

        context.save_artifact("border_mask", &DynamicImage::ImageLuma8(removal.mask))?;
        context.save_artifact(
            "border_mask_dilated",
            &DynamicImage::ImageLuma8(removal.dilated_mask),
        )?;

        Ok(data
            .with_image(DynamicImage::ImageRgb8(rgb))
            .with_metadata("border_pixels", MetadataValue::Int(removal.matched as i64))
            .with_metadata("recolored_pixels", MetadataValue::Int(removal.recolored as i64)))
    }

    fn name(&self) -> &str {
        "Border Removal"
    }
}

/// Convert image to grayscale with BT.601 weights
pub struct GrayscaleStep;

impl PipelineStep for GrayscaleStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let gray = binarize::to_grayscale_bt601(&data.image.to_rgb8());
        Ok(data.with_image(DynamicImage::ImageLuma8(gray)))
    }

    fn name(&self) -> &str {
        "Grayscale Conversion"
    }
}

/// Binarize with an automatically chosen global threshold
pub struct OtsuThresholdStep;

impl PipelineStep for OtsuThresholdStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let (level, bin) = binarize::otsu_threshold(&data.image.to_luma8());
        debug!("Otsu level: {}", level);

        Ok(data
            .with_image(DynamicImage::ImageLuma8(bin))
            .with_metadata("otsu_level", MetadataValue::Int(level as i64)))
    }

    fn name(&self) -> &str {
        "Otsu Threshold"
    }
}

/// Morphological open (erode then dilate)
pub struct OpeningStep {
    pub element: StructuringElement,
}

impl PipelineStep for OpeningStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let opened = morphology::open_binary(&data.image.to_luma8(), self.element);
        Ok(data.with_image(DynamicImage::ImageLuma8(opened)))
    }

    fn name(&self) -> &str {
        "Morphological Open"
    }
}

/// Swap foreground and background
pub struct InvertStep;

impl PipelineStep for InvertStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let inverted = morphology::invert(&data.image.to_luma8());
        Ok(data.with_image(DynamicImage::ImageLuma8(inverted)))
    }

    fn name(&self) -> &str {
        "Invert"
    }
}
