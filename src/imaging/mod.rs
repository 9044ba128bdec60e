//! Image processing: pure Rust on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Upright** | `rotate270` for landscape sources |
//! | **Fit** | `resize_exact` with Lanczos3 |
//! | **Frame / paste** | `imageops::replace` |
//! | **Encode** | JPEG |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for cell, fit and anchor math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Compose**: In-memory framing and page assembly
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod compose;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    Cells, calculate_anchors, calculate_cells, calculate_fit_dimensions, calculate_padding,
    calculate_placement, upright_dimensions,
};
pub use compose::{blank_page, compose_page, compose_page_from};
pub use operations::{get_dimensions, plan_compose, write_filler};
pub use params::{BlankParams, ComposeParams, Layout, Quality};
pub use rust_backend::RustBackend;
