use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::utils::{OptimizerError, OptimizerResult};

/// Get file size in bytes
pub fn get_file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| OptimizerError::io(format!("Failed to get file size: {}", e)))
}

/// Byte count expressed in kibibytes.
pub fn to_kib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Lossy file name of `path` for reporting.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Sibling output folder for `input_dir`: `<parent>/<name>-w-<width>`.
///
/// Paths without a final name (`.`, `..`, `foo/..`) are canonicalized first so
/// the folder is named after the real directory.
pub fn output_dir_for(input_dir: &Path, target_width: u32) -> OptimizerResult<PathBuf> {
    let resolved;
    let input_dir = if input_dir.file_name().is_some() {
        input_dir
    } else {
        resolved = fs::canonicalize(input_dir)?;
        resolved.as_path()
    };

    let name = input_dir.file_name().ok_or_else(|| {
        OptimizerError::io(format!("Cannot derive an output folder name from '{}'", input_dir.display()))
    })?;
    let parent = input_dir.parent().unwrap_or(Path::new(""));

    Ok(parent.join(format!("{}-w-{target_width}", name.to_string_lossy())))
}

/// Creates `path` and any missing parents; succeeds if it already exists.
pub fn create_dir_all(path: impl AsRef<Path>) -> OptimizerResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(|e| {
        OptimizerError::io(format!("Cannot create output folder '{}': {e}", path.as_ref().display()))
    })
}

/// Hidden scratch path next to `dest` used while it is being written.
fn temp_path_for(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

/// Writes `dest` through `write`, publishing it only if `write` succeeds.
///
/// The content goes to a temporary sibling file which is renamed over `dest`
/// afterwards, so a failed encode never leaves a truncated file at `dest`.
pub fn write_atomically<F>(dest: &Path, write: F) -> OptimizerResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> OptimizerResult<()>,
{
    let tmp = temp_path_for(dest);

    let result = File::create(&tmp)
        .map_err(OptimizerError::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
            Ok(())
        })
        .and_then(|()| fs::rename(&tmp, dest).map_err(OptimizerError::from));

    if result.is_err() && tmp.exists() {
        debug!("Removing partial output {}", tmp.display());
        let _ = fs::remove_file(&tmp);
    }

    result
}
