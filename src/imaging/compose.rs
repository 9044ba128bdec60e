//! In-memory page composition.
//!
//! Pixel work only: no files, no decoding. The backend decodes each source,
//! hands it to [`frame_image`] and drops the original before the next one is
//! read. [`compose_page_from`] drives that loop for both the backend and
//! [`compose_page`].

use super::calculations::{
    calculate_anchors, calculate_cells, calculate_fit_dimensions, calculate_padding,
    upright_dimensions,
};
use super::params::Layout;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use std::convert::Infallible;

/// Rotate landscape images a quarter turn counter-clockwise.
///
/// The canvas swaps width and height, so nothing is cropped.
pub fn upright(img: DynamicImage) -> DynamicImage {
    let (_, rotate) = upright_dimensions((img.width(), img.height()));
    if rotate { img.rotate270() } else { img }
}

/// Prepare one source for its slot: upright, fit to the cell with Lanczos3,
/// then pad with the border color (right edge, plus bottom for odd slots).
pub fn frame_image(img: DynamicImage, index: usize, layout: &Layout) -> RgbImage {
    let img = upright(img);
    let cells = calculate_cells(layout.page_size(), layout.border);
    let (w, h) = calculate_fit_dimensions((img.width(), img.height()), cells.for_slot(index));
    let resized = img.resize_exact(w, h, FilterType::Lanczos3).to_rgb8();
    drop(img);

    let (right, bottom) = calculate_padding(index, layout.border);
    let mut framed = RgbImage::from_pixel(w + right, h + bottom, layout.color);
    imageops::replace(&mut framed, &resized, 0, 0);
    framed
}

/// Compose a page from four sources in grid order, framing each one as it
/// arrives and pasting it onto a fresh border-colored page.
///
/// The iterator is pulled lazily, so a decoding iterator holds only one
/// full-size source at a time. The first `Err` stops the page. Padding that
/// runs past the page edge is clipped.
pub fn compose_page_from<E>(
    sources: impl IntoIterator<Item = Result<DynamicImage, E>>,
    layout: &Layout,
) -> Result<RgbImage, E> {
    let mut page = blank_page(layout.page_width, layout.page_height, layout.color);
    let anchors = calculate_anchors(layout.page_size(), layout.border);
    for (index, (source, (x, y))) in sources.into_iter().zip(anchors).enumerate() {
        let framed = frame_image(source?, index, layout);
        imageops::replace(&mut page, &framed, x.into(), y.into());
    }
    Ok(page)
}

/// Compose a page from four decoded images in grid order.
pub fn compose_page(images: [DynamicImage; 4], layout: &Layout) -> RgbImage {
    match compose_page_from(images.map(Ok::<_, Infallible>), layout) {
        Ok(page) => page,
        Err(never) => match never {},
    }
}

/// A solid page, used both as the page background and as filler.
pub fn blank_page(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}
