mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from divider for tests
pub use divider::{ChannelOrder, ColorRange, FilterConfig, FilterError, FilterOutcome, RunOptions};
