// Public modules; the command-line entry point lives in main.rs.
pub mod commands;
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{Dimensions, ImageTask, Progress, ResizeJob, ResizeResult, RunSummary};
pub use crate::utils::{OptimizerError, OptimizerResult};
pub use crate::commands::{discover_images, resize_images};
