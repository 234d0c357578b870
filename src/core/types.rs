//! Core types for resize jobs and their results.

use std::fmt;
use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::utils::{OptimizerResult, output_dir_for};

/// Parameters of one resize run.
///
/// Built once from the command line and never mutated during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeJob {
    /// Folder whose direct entries are resized
    pub input_dir: PathBuf,
    /// Width in pixels that wider images are scaled down to
    pub target_width: u32,
    /// JPEG quality, clamped to 1-100 at encode time
    pub quality: u8,
}

impl ResizeJob {
    /// Width used when none is given.
    pub const DEFAULT_WIDTH: u32 = 300;
    /// JPEG quality used when none is given.
    pub const DEFAULT_QUALITY: u8 = 85;

    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            target_width: Self::DEFAULT_WIDTH,
            quality: Self::DEFAULT_QUALITY,
        }
    }

    pub fn with_target_width(mut self, target_width: u32) -> Self {
        self.target_width = target_width;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Sibling folder the resized copies are written to.
    pub fn output_dir(&self) -> OptimizerResult<PathBuf> {
        output_dir_for(&self.input_dir, self.target_width)
    }
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Outcome of resizing a single image.
///
/// Contains the original and resized file information along with
/// compression statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeResult {
    /// Path to the source image
    pub original_path: PathBuf,
    /// Path the JPEG copy was (or would have been) written to
    pub optimized_path: PathBuf,
    /// Decoded size of the source, if decoding got that far
    pub original_dimensions: Option<Dimensions>,
    /// Size of the written JPEG
    pub new_dimensions: Option<Dimensions>,
    /// Source file size in bytes
    pub original_size: u64,
    /// Written file size in bytes
    pub optimized_size: u64,
    /// Whether the image was written successfully
    pub success: bool,
    /// Error message if processing failed
    pub error: Option<String>,
    /// Bytes saved (negative if the copy is larger)
    pub saved_bytes: i64,
    /// `(1 - new/original) * 100`
    pub reduction_percent: f64,
}

impl ResizeResult {
    pub fn succeeded(
        original_path: PathBuf,
        optimized_path: PathBuf,
        original_dimensions: Dimensions,
        new_dimensions: Dimensions,
        original_size: u64,
        optimized_size: u64,
    ) -> Self {
        Self {
            original_path,
            optimized_path,
            original_dimensions: Some(original_dimensions),
            new_dimensions: Some(new_dimensions),
            original_size,
            optimized_size,
            success: true,
            error: None,
            saved_bytes: original_size as i64 - optimized_size as i64,
            reduction_percent: reduction_percent(original_size, optimized_size),
        }
    }

    pub fn failed(original_path: PathBuf, optimized_path: PathBuf, original_size: u64, error: String) -> Self {
        Self {
            original_path,
            optimized_path,
            original_dimensions: None,
            new_dimensions: None,
            original_size,
            optimized_size: 0,
            success: false,
            error: Some(error),
            saved_bytes: 0,
            reduction_percent: 0.0,
        }
    }
}

/// Percentage by which `new_size` is smaller than `original_size`.
pub fn reduction_percent(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (1.0 - new_size as f64 / original_size as f64) * 100.0
}

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Candidate images discovered in the input folder
    pub found: usize,
    /// Images written successfully
    pub processed: usize,
    pub results: Vec<ResizeResult>,
}

impl RunSummary {
    pub fn new(input_dir: &Path, output_dir: PathBuf, results: Vec<ResizeResult>) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            output_dir,
            found: results.len(),
            processed: results.iter().filter(|r| r.success).count(),
            results,
        }
    }

    pub fn failed(&self) -> usize {
        self.found - self.processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_defaults() {
        let job = ResizeJob::new("photos");
        assert_eq!(job.target_width, 300);
        assert_eq!(job.quality, 85);
        assert_eq!(job.output_dir().unwrap(), PathBuf::from("photos-w-300"));
    }

    #[test]
    fn reduction_is_relative_to_original() {
        assert_eq!(reduction_percent(1000, 250), 75.0);
        assert_eq!(reduction_percent(1000, 1500), -50.0);
        assert_eq!(reduction_percent(0, 100), 0.0);
    }

    #[test]
    fn summary_counts_successes() {
        let ok = ResizeResult::succeeded(
            "a.png".into(), "out/a.jpg".into(),
            Dimensions::new(600, 400), Dimensions::new(300, 200),
            4096, 1024,
        );
        let bad = ResizeResult::failed("b.png".into(), "out/b.jpg".into(), 10, "broken".into());

        let summary = RunSummary::new(Path::new("in"), "in-w-300".into(), vec![ok, bad]);
        assert_eq!(summary.found, 2);
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed(), 1);
    }

    #[test]
    fn result_serializes_camel_case() {
        let ok = ResizeResult::succeeded(
            "a.png".into(), "out/a.jpg".into(),
            Dimensions::new(600, 400), Dimensions::new(300, 200),
            2048, 1024,
        );
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["newDimensions"]["width"], 300);
        assert_eq!(json["savedBytes"], 1024);
        assert_eq!(json["reductionPercent"], 50.0);
    }
}
