pub mod config;
pub mod error;
pub mod filtering;
pub mod models;
pub mod pipeline;

pub use config::FilterConfig;
pub use error::FilterError;
pub use filtering::{FilterOutcome, RunOptions, build_standard_pipeline, process_image, run};
pub use models::{ChannelOrder, ColorRange, StructuringElement};
pub use pipeline::{MetadataValue, Pipeline, PipelineContext, PipelineData, PipelineStep};

#[cfg(feature = "gui")]
pub mod gui;
