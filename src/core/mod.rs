//! Core types of the resizer.
//!
//! - [`ResizeJob`]: Parameters of one run
//! - [`ImageTask`]: A discovered source file and its destination
//! - [`ResizeResult`]: Outcome for one file
//! - [`RunSummary`]: Aggregate outcome of a run
//! - [`Progress`]: Notifications emitted while a run is underway

mod types;
mod task;
mod progress;

pub use types::{Dimensions, ResizeJob, ResizeResult, RunSummary, reduction_percent};
pub use task::ImageTask;
pub use progress::Progress;
