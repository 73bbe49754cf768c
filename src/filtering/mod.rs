pub mod binarize;
pub mod border;
pub mod io;
pub mod morphology;
pub mod steps;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use image::{DynamicImage, GrayImage};
use log::info;

use crate::config::FilterConfig;
use crate::pipeline::{Pipeline, PipelineData};
use steps::*;

/// What a full run produced
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Final inverted binary image, same size as the input
    pub image: GrayImage,
    pub otsu_level: u8,
    /// Pixels matching the border color before dilation
    pub border_pixels: usize,
    /// Pixels painted white by the border stage
    pub recolored_pixels: usize,
}

impl FilterOutcome {
    fn from_data(data: PipelineData) -> Self {
        let count = |key: &str| data.get_int(key).unwrap_or(0).max(0) as usize;
        Self {
            otsu_level: data.get_int("otsu_level").unwrap_or(0).clamp(0, 255) as u8,
            border_pixels: count("border_pixels"),
            recolored_pixels: count("recolored_pixels"),
            image: data.image.to_luma8(),
        }
    }
}

/// Build the standard filter: border removal, grayscale, Otsu, open, invert
pub fn build_standard_pipeline(config: &FilterConfig) -> Pipeline {
    Pipeline::new()
        .add_step(Arc::new(BorderRemovalStep {
            range: config.border_range,
            order: config.channel_order,
            dilation: config.border_dilation,
        }))
        .add_step(Arc::new(GrayscaleStep))
        .add_step(Arc::new(OtsuThresholdStep))
        .add_step(Arc::new(OpeningStep {
            element: config.opening,
        }))
        .add_step(Arc::new(InvertStep))
}

/// Run the filter steps on an in-memory image, no file access
pub fn process_image(img: DynamicImage, config: &FilterConfig) -> Result<FilterOutcome> {
    let data = build_standard_pipeline(config).run(img)?;
    Ok(FilterOutcome::from_data(data))
}

/// Options that only affect diagnostics and presentation, never the pixels
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Dump every step's output here (must be empty or non-existent)
    pub debug_out: Option<PathBuf>,
    /// Show the result in a window and wait for a key press
    pub preview: bool,
}

/// Load the input, filter it, write the JPEG, optionally preview
pub fn run(config: &FilterConfig, options: &RunOptions) -> Result<FilterOutcome> {
    let img = io::load_image(&config.input_path)?;

    let mut pipeline = build_standard_pipeline(config);
    if let Some(dir) = &options.debug_out {
        pipeline = pipeline.with_debug(dir.clone())?;
        std::fs::write(dir.join("config.json"), config.to_json()?)?;
    }

    let outcome = FilterOutcome::from_data(pipeline.run(img)?);
    info!(
        "Otsu level {}, {} border pixels ({} recolored)",
        outcome.otsu_level, outcome.border_pixels, outcome.recolored_pixels
    );

    io::save_jpeg(&outcome.image, &config.output_path, config.jpeg_quality)?;

    if options.preview {
        io::show_preview(&outcome.image, &config.window_title)?;
    }

    Ok(outcome)
}
