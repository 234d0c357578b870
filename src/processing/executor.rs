//! Sequential executor that resizes one image at a time.
//!
//! Each image is decoded, resized, converted and encoded inside
//! [`resize_single`]; its pixel buffers are dropped before the next task
//! starts, whether it succeeded or not.

use image::ImageReader;
use tracing::{debug, warn};

use crate::core::{Dimensions, ImageTask, ResizeJob, ResizeResult};
use crate::utils::{OptimizerError, OptimizerResult, extract_filename, get_file_size};

use super::formats::{prepare_for_jpeg, save_jpeg};
use super::resize::{apply_resize, target_dimensions};

/// Executor that processes image tasks in order with fixed job settings.
#[derive(Debug, Clone, Copy)]
pub struct BatchExecutor {
    target_width: u32,
    quality: u8,
}

impl BatchExecutor {
    pub fn new(job: &ResizeJob) -> Self {
        Self {
            target_width: job.target_width,
            quality: job.quality,
        }
    }

    /// Processes all `tasks` sequentially, calling `on_result` after each image.
    ///
    /// A failing image is recorded as a failed result and never stops the batch,
    /// so the output always holds one result per task.
    pub fn execute_batch<F>(&self, tasks: &[ImageTask], mut on_result: F) -> Vec<ResizeResult>
    where
        F: FnMut(&ResizeResult),
    {
        let mut results = Vec::with_capacity(tasks.len());

        for (idx, task) in tasks.iter().enumerate() {
            debug!("[{}/{}] {}", idx + 1, tasks.len(), task.input_path.display());

            let result = match self.resize_single(task) {
                Ok(result) => result,
                Err(e) => {
                    let error_msg = e.to_string();
                    warn!("Resize failed for {}: {}", task.input_path.display(), error_msg);

                    ResizeResult::failed(
                        task.input_path.clone(),
                        task.output_path.clone(),
                        get_file_size(&task.input_path).unwrap_or(0),
                        error_msg,
                    )
                }
            };

            on_result(&result);
            results.push(result);
        }

        results
    }

    /// Resizes one image task to a JPEG.
    pub fn resize_single(&self, task: &ImageTask) -> OptimizerResult<ResizeResult> {
        let input_path = &task.input_path;
        let file_name = extract_filename(input_path);

        // Content sniffing first; the extension only matters when that fails
        let image = ImageReader::open(input_path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| OptimizerError::io(format!("Cannot read '{file_name}': {e}")))?
            .decode()?;

        let original = Dimensions::new(image.width(), image.height());
        let target = target_dimensions(original, self.target_width);
        debug!("Loaded '{file_name}': {original} -> {target}");

        let image = prepare_for_jpeg(apply_resize(image, target));
        save_jpeg(&image, &task.output_path, self.quality)?;
        drop(image);

        let original_size = get_file_size(input_path)?;
        let optimized_size = get_file_size(&task.output_path)?;

        let result = ResizeResult::succeeded(
            input_path.clone(),
            task.output_path.clone(),
            original,
            target,
            original_size,
            optimized_size,
        );

        debug!(
            "'{}' -> {} bytes saved ({:.1}%)",
            file_name, result.saved_bytes, result.reduction_percent
        );

        Ok(result)
    }
}
