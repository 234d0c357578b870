//! Fixture folders shared by the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Scratch root holding a `photos` input folder; removed on drop.
pub struct Fixture {
    pub root: PathBuf,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let root = std::env::temp_dir().join(format!(
            "batch-resizer-{name}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(root.join("photos")).unwrap();
        Self { root }
    }

    pub fn input(&self) -> PathBuf {
        self.root.join("photos")
    }

    pub fn output(&self, width: u32) -> PathBuf {
        self.root.join(format!("photos-w-{width}"))
    }

    pub fn rgb(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let image = RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
        self.save(name, DynamicImage::ImageRgb8(image))
    }

    pub fn rgba(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let image = RgbaImage::from_fn(width, height, |x, y| Rgba([200, (x % 256) as u8, (y % 256) as u8, (x % 2 * 255) as u8]));
        self.save(name, DynamicImage::ImageRgba8(image))
    }

    pub fn save(&self, name: &str, image: DynamicImage) -> PathBuf {
        let path = self.input().join(name);
        image.save(&path).unwrap();
        path
    }

    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.input().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn dimensions_of(path: &Path) -> (u32, u32) {
    let image = image::open(path).unwrap();
    (image.width(), image.height())
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
