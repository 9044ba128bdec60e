//! Shared test utilities for the quadsheet test suite.
//!
//! Synthetic images are generated on the fly, so tests need no binary
//! fixtures on disk.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! fill_input_dir(tmp.path(), &[(400, 300), (300, 400)]);
//! // → 000.jpg (landscape), 001.jpg (portrait)
//! ```

use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Synthetic images
// =========================================================================

/// A gradient, so resampling and rotation bugs show up as visible changes.
fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a JPEG of the given size.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

/// Write a PNG of the given size, whatever the file extension says.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

/// Fill `dir` with JPEGs named `000.jpg`, `001.jpg`, ... of the given sizes.
pub fn fill_input_dir(dir: &Path, sizes: &[(u32, u32)]) -> Vec<PathBuf> {
    std::fs::create_dir_all(dir).unwrap();
    sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| {
            let path = dir.join(format!("{i:03}.jpg"));
            create_test_jpeg(&path, w, h);
            path
        })
        .collect()
}
