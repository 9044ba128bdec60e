//! Pure calculation functions for page layout.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! The page is split into a 2×2 grid with two cell sizes. The left column
//! reserves border only on its right edge; the right column reserves it on
//! the left and, vertically, the bottom. Together they give one consistent
//! gap between cells:
//!
//! ```text
//! (0,0)                 (sw+B, 0)
//!   ┌──────────┐   B    ┌────────┐
//!   │ single 0 │        │ double │
//!   │          │        │   1    │
//!   │          │        └────────┘  dh
//!   │          │           B
//!   └──────────┘ sh     ┌────────┐ (sw+B, dh+B)
//!   ┌──────────┐        │ double │
//!   │ single 2 │        │   3    │
//!   └──────────┘        └────────┘
//! ```

/// The two cell sizes of a page, as `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cells {
    /// Cell for even slots (left column).
    pub single: (u32, u32),
    /// Cell for odd slots (right column).
    pub double: (u32, u32),
}

impl Cells {
    /// Cell size for a grid slot (0..4).
    pub fn for_slot(&self, index: usize) -> (u32, u32) {
        if index % 2 == 1 {
            self.double
        } else {
            self.single
        }
    }
}

/// Calculate both cell sizes for a page and border width.
///
/// # Examples
/// ```
/// # use quadsheet::imaging::calculate_cells;
/// let cells = calculate_cells((1100, 1700), 59);
/// assert_eq!(cells.single, (520, 850));
/// assert_eq!(cells.double, (491, 820));
/// ```
pub fn calculate_cells(page: (u32, u32), border: u32) -> Cells {
    let (w, h) = page;
    Cells {
        single: (w.saturating_sub(border) / 2, h / 2),
        double: (
            w.saturating_sub(border.saturating_mul(2)) / 2,
            h.saturating_sub(border) / 2,
        ),
    }
}

/// Top-left paste position of each slot, in grid order.
pub fn calculate_anchors(page: (u32, u32), border: u32) -> [(u32, u32); 4] {
    let Cells { single, double } = calculate_cells(page, border);
    let right = single.0 + border;
    [
        (0, 0),
        (right, 0),
        (0, single.1),
        (right, double.1 + border),
    ]
}

/// Orientation after the landscape rule: wider-than-tall images are turned
/// a quarter turn so every slot holds a portrait.
///
/// Returns the upright dimensions and whether a rotation is needed.
pub fn upright_dimensions(source: (u32, u32)) -> ((u32, u32), bool) {
    let (w, h) = source;
    if w > h { ((h, w), true) } else { ((w, h), false) }
}

/// Largest size with the source aspect ratio that fits inside `cell`.
///
/// Scales up or down; one side ends up equal to the cell (up to float
/// truncation) and the other no larger. Never returns a zero side.
pub fn calculate_fit_dimensions(source: (u32, u32), cell: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (cell_w, cell_h) = cell;
    if src_w == 0 || src_h == 0 {
        return (cell_w.max(1), cell_h.max(1));
    }

    let ratio = (cell_w as f64 / src_w as f64).min(cell_h as f64 / src_h as f64);
    let w = (src_w as f64 * ratio) as u32;
    let h = (src_h as f64 * ratio) as u32;
    (w.max(1), h.max(1))
}

/// Border padding `(right, bottom)` added around a resized image.
///
/// Even slots get a right edge only; odd slots get right and bottom.
pub fn calculate_padding(index: usize, border: u32) -> (u32, u32) {
    if index % 2 == 1 {
        (border, border)
    } else {
        (border, 0)
    }
}

/// Where a slot's picture lands on the page: `(x, y, width, height)`.
///
/// Combines the landscape rule, cell fit and anchor for one source size.
pub fn calculate_placement(
    page: (u32, u32),
    border: u32,
    index: usize,
    source: (u32, u32),
) -> (u32, u32, u32, u32) {
    let cells = calculate_cells(page, border);
    let (upright, _) = upright_dimensions(source);
    let (w, h) = calculate_fit_dimensions(upright, cells.for_slot(index));
    let (x, y) = calculate_anchors(page, border)[index];
    (x, y, w, h)
}
