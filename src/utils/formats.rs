use std::path::Path;
use std::str::FromStr;
use crate::utils::OptimizerError;

/// Source formats picked up by folder discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    JPEG,
    PNG,
    GIF,
    BMP,
    WebP,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 5] = [Self::JPEG, Self::PNG, Self::GIF, Self::BMP, Self::WebP];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::GIF => &["gif"],
            Self::BMP => &["bmp"],
            Self::WebP => &["webp"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = OptimizerError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.matches_extension(ext))
            .ok_or_else(|| OptimizerError::format(format!("Unsupported image format: {ext}")))
    }
}

/// Get format from file extension
pub fn format_from_extension(path: impl AsRef<Path>) -> Result<ImageFormat, OptimizerError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| OptimizerError::format(
            format!("File has no extension: {}", path.display())
        ))?;

    ImageFormat::from_str(ext)
}

/// `true` when the file name carries one of the supported image extensions.
pub fn is_supported_image(path: impl AsRef<Path>) -> bool {
    format_from_extension(path).is_ok()
}
