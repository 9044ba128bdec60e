//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the batcher (which decides which pages to write) and
//! the [`backend`](super::backend) (which does the pixel work), so a mock
//! backend can stand in during tests.
//!
//! ## Types
//!
//! - [`Quality`]: JPEG encoding quality (1–100, default 75). Clamped on construction.
//! - [`Layout`]: Page size, border thickness and border color shared by every page of a run.
//! - [`ComposeParams`]: Four source paths, the output path, layout and quality for one page.
//! - [`BlankParams`]: A solid-color filler image to write to disk.

use image::Rgb;
use std::path::PathBuf;

/// Quality setting for JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// Page geometry and border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub page_width: u32,
    pub page_height: u32,
    /// Border thickness in pixels.
    pub border: u32,
    /// Border color, also the page background.
    pub color: Rgb<u8>,
}

impl Layout {
    pub fn page_size(&self) -> (u32, u32) {
        (self.page_width, self.page_height)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            page_width: 1100,
            page_height: 1700,
            border: 59,
            color: Rgb([255, 255, 255]),
        }
    }
}

/// Parameters for composing one page from four sources.
///
/// Slot order is grid order: top-left, top-right, bottom-left, bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeParams {
    pub sources: [PathBuf; 4],
    pub output: PathBuf,
    pub layout: Layout,
    pub quality: Quality,
}

/// Parameters for writing a solid filler image.
#[derive(Debug, Clone, PartialEq)]
pub struct BlankParams {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub color: Rgb<u8>,
    pub quality: Quality,
}
