//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate, format sniffed from content |
//! | Rotate | `DynamicImage::rotate270` |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Pad / paste | `imageops::replace` onto border-colored buffers |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::compose::{blank_page, compose_page_from};
use super::params::{BlankParams, ComposeParams};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbImage};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open an image reader, trusting file content over the extension.
///
/// Inputs are not filtered by extension, so a PNG named `.jpg` or a file
/// with no extension at all still decodes.
fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?.decode().map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
    })
}

/// Encode as baseline JPEG in memory, then write the file in one go.
///
/// A failed encode leaves nothing on disk.
fn save_jpeg(img: &RgbImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, quality as u8)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "JPEG encode failed for {}: {}",
                path.display(),
                e
            ))
        })?;
    fs::write(path, encoded)?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?.into_dimensions().map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn blank(&self, params: &BlankParams) -> Result<(), BackendError> {
        let img = blank_page(params.width, params.height, params.color);
        save_jpeg(&img, &params.output, params.quality.value())
    }

    fn compose(&self, params: &ComposeParams) -> Result<(), BackendError> {
        let sources = params.sources.iter().map(|source| load_image(source));
        let page = compose_page_from(sources, &params.layout)?;
        save_jpeg(&page, &params.output, params.quality.value())
    }
}
