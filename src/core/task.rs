//! Image task definition and creation.

use std::path::{Path, PathBuf};

/// Represents a single image resize task.
///
/// Pairs a discovered source file with the JPEG path it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path where the resized JPEG will be written
    pub output_path: PathBuf,
}

impl ImageTask {
    /// Creates the task for `input_path`, targeting `<output_dir>/<stem>.jpg`.
    pub fn for_source(input_path: impl Into<PathBuf>, output_dir: &Path) -> Self {
        let input_path = input_path.into();
        // Appended rather than `with_extension` so stems like `a.2024` survive
        let mut file_name = input_path
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_default();
        file_name.push(".jpg");
        let output_path = output_dir.join(file_name);

        Self { input_path, output_path }
    }
}
