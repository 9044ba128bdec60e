//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::params::{BlankParams, ComposeParams, Layout, Quality};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Write a full-page, border-colored filler image into `dir`.
///
/// The file is hidden (dot-prefixed) and owned by the returned guard: it is
/// deleted when the guard drops, including on an early `?` return.
pub fn write_filler(
    backend: &impl ImageBackend,
    dir: &Path,
    layout: &Layout,
    quality: Quality,
) -> Result<NamedTempFile> {
    let file = tempfile::Builder::new()
        .prefix(".filler-")
        .suffix(".jpg")
        .tempfile_in(dir)?;

    backend.blank(&BlankParams {
        output: file.path().to_path_buf(),
        width: layout.page_width,
        height: layout.page_height,
        color: layout.color,
        quality,
    })?;
    Ok(file)
}

/// Plan a compose operation without executing it.
pub fn plan_compose(
    sources: [PathBuf; 4],
    output: &Path,
    layout: &Layout,
    quality: Quality,
) -> ComposeParams {
    ComposeParams {
        sources,
        output: output.to_path_buf(),
        layout: *layout,
        quality,
    }
}
