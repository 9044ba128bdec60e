//! # quadsheet
//!
//! Lays out a folder of photos four to a page, ready for printing.
//! Every page is a 2×2 grid with one consistent border between and around
//! the pictures; a short final group is completed with blank cells.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      images/  →  groups of four      (listing, sorting, padding)
//! 2. Compose   group    →  one page in memory  (rotate, fit, pad, paste)
//! 3. Encode    page     →  merged_<n>.jpg
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the input directory and cuts it into groups of four |
//! | [`process`] | Drives a whole folder: fillers, compositing, progress events, dry-run plans |
//! | [`imaging`] | Layout math, page compositing, and the `image`-crate backend |
//! | [`config`] | `SheetConfig` loading, layering, and validation |
//! | [`color`] | CSS color strings to RGB for the border |
//! | [`output`] | CLI output formatting for `plan` and `merge` |
//!
//! # Design Decisions
//!
//! ## Two Cell Sizes
//!
//! Left-column cells reserve border on one side, right-column cells on two.
//! Each picture is padded on its right (and, in the right column, its
//! bottom) before pasting, so the gaps between pictures all come out the
//! same width. Pictures are scaled to fit, never cropped or stretched.
//!
//! ## Portrait Everywhere
//!
//! Landscape sources are turned a quarter counter-clockwise before fitting,
//! so every cell holds a portrait and pictures use the tall cells fully.
//!
//! ## Fillers Are Ordinary Inputs
//!
//! Padding a short group writes a blank page-sized JPEG and feeds it through
//! the same path as a photo. The compositor never special-cases a missing
//! picture, and the temporary file is owned by a guard that removes it.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, resampling (Lanczos3) and JPEG encoding all come from the
//! `image` crate. No ImageMagick, no system libraries: one static binary.

pub mod color;
pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
