//! JPEG encoding of resized images.

use std::io::Write;
use std::path::Path;
use image::{ColorType, DynamicImage};
use jpeg_encoder::{ColorType as JpegColor, Encoder};
use tracing::debug;
use crate::utils::{OptimizerError, OptimizerResult, write_atomically};

type Result<T> = OptimizerResult<T>;

/// Converts `image` to a pixel layout the JPEG encoder accepts.
///
/// 8-bit gray and 8-bit RGB pass through. Everything else (alpha channels,
/// decoded palettes, 16-bit and float samples) becomes 8-bit RGB; alpha is
/// dropped, not composited.
pub fn prepare_for_jpeg(image: DynamicImage) -> DynamicImage {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => image,
        other => {
            debug!("Converting {other:?} to Rgb8 for JPEG");
            DynamicImage::ImageRgb8(image.to_rgb8())
        }
    }
}

/// Encodes `image` as a JPEG with optimized Huffman tables.
///
/// `quality` is clamped to 1-100. `image` must already be 8-bit gray or RGB
/// (see [`prepare_for_jpeg`]), and each side must fit the format's 65535 limit.
pub fn encode_jpeg<W: Write>(w: W, image: &DynamicImage, quality: u8) -> Result<()> {
    let color = match image.color() {
        ColorType::Rgb8 => JpegColor::Rgb,
        ColorType::L8 => JpegColor::Luma,
        other => {
            return Err(OptimizerError::format(format!("JPEG encoder cannot take {other:?} pixels")));
        }
    };

    let (width, height) = (image.width(), image.height());
    let (Ok(w16), Ok(h16)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(OptimizerError::format(format!("{width}x{height} exceeds the JPEG size limit")));
    };

    let mut encoder = Encoder::new(w, quality.clamp(1, 100));
    encoder.set_optimized_huffman_tables(true);

    encoder
        .encode(image.as_bytes(), w16, h16, color)
        .map_err(|e| OptimizerError::processing(format!("JPEG save failed: {e}")))
}

/// Saves `image` as an optimized JPEG at `quality`.
///
/// The file only appears at `output_path` once encoding has fully succeeded.
pub fn save_jpeg(image: &DynamicImage, output_path: &Path, quality: u8) -> Result<()> {
    write_atomically(output_path, |writer| encode_jpeg(writer, image, quality))
}
