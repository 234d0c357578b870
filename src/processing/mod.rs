//! Image processing via the `image` crate.
//!
//! - [`BatchExecutor`]: Drives sequential processing and reports each result.
//! - [`resize`]: Target-dimension math and Lanczos3 resampling.
//! - [`formats`]: Colour conversion and JPEG encoding.

mod executor;
pub mod formats;
pub mod resize;

pub use executor::BatchExecutor;
pub use resize::target_dimensions;
