//! Folder-level resize command.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::core::{ImageTask, Progress, ResizeJob, RunSummary};
use crate::processing::BatchExecutor;
use crate::utils::{OptimizerResult, create_dir_all, is_supported_image, validate_job};

/// Resizes every supported image directly inside `job.input_dir`.
///
/// The output folder is created before discovery, so it exists (possibly
/// empty) after any run that got past validation. Per-file failures are
/// recorded in the summary; only a missing or invalid input folder, or an
/// output folder that cannot be created, fails the whole run.
///
/// # Arguments
/// * `job` - Folder, target width and quality for the run
/// * `on_progress` - Receives a [`Progress`] notification at each step
///
/// # Returns
/// The [`RunSummary`] with one result per discovered image.
pub fn resize_images<F>(job: &ResizeJob, mut on_progress: F) -> OptimizerResult<RunSummary>
where
    F: FnMut(Progress<'_>),
{
    validate_job(job)?;

    let output_dir = job.output_dir()?;
    create_dir_all(&output_dir)?;
    debug!("Output folder ready: {}", output_dir.display());

    let sources = discover_images(&job.input_dir)?;
    if sources.is_empty() {
        info!("No supported images in {}", job.input_dir.display());
        on_progress(Progress::NoImages { input_dir: &job.input_dir });
        return Ok(RunSummary::new(&job.input_dir, output_dir, Vec::new()));
    }

    on_progress(Progress::Start { found: sources.len(), output_dir: &output_dir });

    let tasks = plan_tasks(sources, &output_dir);
    let executor = BatchExecutor::new(job);
    let results = executor.execute_batch(&tasks, |result| on_progress(Progress::File(result)));

    let summary = RunSummary::new(&job.input_dir, output_dir, results);
    on_progress(Progress::Complete(&summary));

    if summary.failed() > 0 {
        warn!("{} of {} images failed", summary.failed(), summary.found);
    } else {
        info!("All {} images resized", summary.processed);
    }

    Ok(summary)
}

/// Lists the supported images directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Symlinks count when they point at a
/// regular file.
pub fn discover_images(dir: &Path) -> OptimizerResult<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !path.is_file() {
            continue;
        }
        if !is_supported_image(&path) {
            debug!("Ignoring {}", path.display());
            continue;
        }
        images.push(path);
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// Maps each source to its destination, warning when two sources share one.
fn plan_tasks(sources: Vec<PathBuf>, output_dir: &Path) -> Vec<ImageTask> {
    let tasks: Vec<ImageTask> = sources
        .into_iter()
        .map(|source| ImageTask::for_source(source, output_dir))
        .collect();

    let mut claimed: HashMap<&Path, &Path> = HashMap::new();
    for task in &tasks {
        if let Some(previous) = claimed.insert(&task.output_path, &task.input_path) {
            warn!(
                "{} and {} both write {}; the latter wins",
                previous.display(),
                task.input_path.display(),
                task.output_path.display()
            );
        }
    }

    tasks
}
