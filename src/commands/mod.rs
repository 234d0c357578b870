//! Entry points invoked by the command line.

pub mod image;

pub use image::{discover_images, resize_images};
