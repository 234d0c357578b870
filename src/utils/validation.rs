use std::path::Path;
use crate::core::ResizeJob;
use crate::utils::{OptimizerResult, ValidationError};

/// Validates a resize job before anything touches the file system
pub fn validate_job(job: &ResizeJob) -> OptimizerResult<()> {
    validate_input_dir(&job.input_dir)?;
    validate_settings(job)?;
    Ok(())
}

/// Validates that the input folder exists and is a directory
pub fn validate_input_dir(path: &Path) -> OptimizerResult<()> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_dir() {
        return Err(ValidationError::not_a_directory(path).into());
    }

    Ok(())
}

/// Validates job settings.
///
/// Quality is deliberately not range-checked here: the JPEG encoder clamps it.
pub fn validate_settings(job: &ResizeJob) -> OptimizerResult<()> {
    if job.target_width == 0 {
        return Err(ValidationError::settings("Width cannot be 0").into());
    }

    Ok(())
}
