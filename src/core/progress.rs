use std::fmt;
use std::path::Path;
use crate::core::{ResizeResult, RunSummary};
use crate::utils::{extract_filename, to_kib};

const RULE: &str = "--------------------------------------------------";

/// Progress notifications emitted while a run is underway.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Candidates were found and processing is about to start
    Start { found: usize, output_dir: &'a Path },
    /// One file finished, successfully or not
    File(&'a ResizeResult),
    /// The folder held no supported images
    NoImages { input_dir: &'a Path },
    /// Every candidate has been handled
    Complete(&'a RunSummary),
}

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start { found, output_dir } => {
                writeln!(f, "Found {found} images")?;
                writeln!(f, "Output folder: {}", output_dir.display())?;
                write!(f, "{RULE}")
            }
            Self::File(result) => write!(f, "{}", FileLine(result)),
            Self::NoImages { input_dir } => {
                write!(f, "No images found in '{}'", input_dir.display())
            }
            Self::Complete(summary) => {
                writeln!(f, "{RULE}")?;
                writeln!(f, "Done! Processed {}/{} images", summary.processed, summary.found)?;
                write!(f, "Output: {}", summary.output_dir.display())
            }
        }
    }
}

struct FileLine<'a>(&'a ResizeResult);

impl fmt::Display for FileLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let name = extract_filename(&result.original_path);

        match (&result.error, result.original_dimensions, result.new_dimensions) {
            (None, Some(before), Some(after)) => write!(
                f,
                "✓ {name}: {before} -> {after} ({:.1}KB -> {:.1}KB, -{:.1}%)",
                to_kib(result.original_size),
                to_kib(result.optimized_size),
                result.reduction_percent,
            ),
            (error, _, _) => write!(
                f,
                "✗ {name}: Error - {}",
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}
