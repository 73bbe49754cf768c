use anyhow::Result;
use image::DynamicImage;
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Data that flows through the pipeline
/// Holds the full-frame image produced by the previous step plus whatever the steps recorded
#[derive(Clone)]
pub struct PipelineData {
    /// The image data (color until grayscale conversion, single-channel after)
    pub image: DynamicImage,

    /// Values steps record along the way (e.g., "otsu_level", "border_pixels")
    pub metadata: HashMap<String, MetadataValue>,
}

/// Metadata value types
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Int(i64),
}

impl PipelineData {
    /// Create PipelineData for a full image
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image,
            metadata: HashMap::new(),
        }
    }

    /// Replace the image, keeping everything recorded so far
    pub fn with_image(self, image: DynamicImage) -> Self {
        Self {
            image,
            metadata: self.metadata,
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: MetadataValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.metadata.get(key) {
            Some(MetadataValue::Int(v)) => Some(*v),
            _ => None,
        }
    }
}

/// Context available to all pipeline steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    /// Root directory for debug outputs, set when debug mode is on
    debug_dir: Option<PathBuf>,
    /// 1-based index of the step currently running (0 before the first step)
    pub step_index: usize,
}

impl PipelineContext {
    fn for_step(&self, step_index: usize) -> Self {
        Self {
            debug_dir: self.debug_dir.clone(),
            step_index,
        }
    }

    /// Directory debug outputs go to, if debug mode is on
    pub fn debug_dir(&self) -> Option<&Path> {
        self.debug_dir.as_deref()
    }

    /// Save an intermediate image for the current step (no-op outside debug mode)
    /// Files are named "<step>_<name>.png", e.g. "01_border_mask.png"
    pub fn save_artifact(&self, name: &str, image: &DynamicImage) -> Result<()> {
        let Some(dir) = self.debug_dir() else {
            return Ok(());
        };

        let filename = format!("{:02}_{}.png", self.step_index, slug(name));
        image
            .save(dir.join(&filename))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image {}: {}", filename, e))?;
        debug!("Debug: saved {}", filename);
        Ok(())
    }
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Transform the full-frame image; width and height must be preserved
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData>;

    /// Human-readable name for this step (used in log output and debug file names)
    fn name(&self) -> &str;
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug_dir = Some(output_dir);

        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order on an input image
    pub fn run(&self, input: DynamicImage) -> Result<PipelineData> {
        self.run_partial(input, self.steps.len())
    }

    /// Run the pipeline but stop after `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, input: DynamicImage, num_steps: usize) -> Result<PipelineData> {
        let (width, height) = (input.width(), input.height());
        self.context.save_artifact("input", &input)?;

        let mut data = PipelineData::from_image(input);

        for (i, step) in self.steps.iter().take(num_steps).enumerate() {
            let step_context = self.context.for_step(i + 1);
            info!("Running step {}: {}", i + 1, step.name());

            data = step.process(data, &step_context)?;

            if data.image.width() != width || data.image.height() != height {
                return Err(anyhow::anyhow!(
                    "Step '{}' changed image size from {}x{} to {}x{}",
                    step.name(),
                    width,
                    height,
                    data.image.width(),
                    data.image.height()
                ));
            }

            step_context.save_artifact(step.name(), &data.image)?;
        }

        Ok(data)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
