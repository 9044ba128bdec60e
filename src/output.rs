//! CLI output formatting for the `plan` and `merge` commands.
//!
//! # Page-First Display
//!
//! Every block leads with the page: its positional index and the file it is
//! (or would be) written to. Source images follow as indented context, one
//! line per grid slot, so the output reads as an inventory of pages while
//! still tracing each picture back to its file.
//!
//! # Output Format
//!
//! ## Plan
//!
//! ```text
//! 001 merged_0.jpg
//!     top-left: a.jpg 4000×3000, rotated → 520×693 at (0, 0)
//!     top-right: b.jpg 3000×4000 → 490×654 at (579, 0)
//!     bottom-left: filler
//!     bottom-right: filler
//!
//! 1 page from 2 images (2 fillers)
//! ```
//!
//! ## Merge
//!
//! ```text
//! Merging 5 images onto 2 pages
//! 001 merged_0.jpg
//!     Source: a.jpg
//!     Source: b.jpg
//!     Source: c.png
//!     Source: d.jpg
//! 002 merged_1.jpg
//!     Source: e.tif
//!     Fillers: 3
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::process::{MergeSummary, PagePlan, ProcessEvent, SlotPlan};
use std::path::Path;

/// Grid positions in slot order.
const SLOT_NAMES: [&str; 4] = ["top-left", "top-right", "bottom-left", "bottom-right"];

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Page header: 1-based position + output file name.
///
/// ```text
/// 001 merged_0.jpg
/// ```
fn page_header(index: usize, filename: &str) -> String {
    format!("{} {}", format_index(index + 1), filename)
}

/// File name of `path`, falling back to the whole path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `1 page`, `2 pages`.
pub(crate) fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

// ============================================================================
// plan
// ============================================================================

/// Format the page plan: one block per page, one line per slot.
pub fn format_plan_output(pages: &[PagePlan]) -> Vec<String> {
    if pages.is_empty() {
        return vec!["No images found".to_string()];
    }

    let mut lines = Vec::new();
    let mut images = 0;
    let mut fillers = 0;

    for page in pages {
        lines.push(page_header(page.index, &page.filename));
        for (slot, name) in page.slots.iter().zip(SLOT_NAMES) {
            match slot {
                SlotPlan::Image {
                    path,
                    dimensions: (w, h),
                    rotated,
                    position: (x, y),
                    fitted: (fw, fh),
                } => {
                    images += 1;
                    let turn = if *rotated { ", rotated" } else { "" };
                    lines.push(format!(
                        "{}{}: {} {}×{}{} → {}×{} at ({}, {})",
                        indent(1),
                        name,
                        display_name(path),
                        w,
                        h,
                        turn,
                        fw,
                        fh,
                        x,
                        y
                    ));
                }
                SlotPlan::Filler => {
                    fillers += 1;
                    lines.push(format!("{}{}: filler", indent(1), name));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push(
        MergeSummary {
            pages: pages.len(),
            images,
            fillers,
        }
        .to_string(),
    );
    lines
}

pub fn print_plan_output(pages: &[PagePlan]) {
    for line in format_plan_output(pages) {
        println!("{}", line);
    }
}

// ============================================================================
// merge
// ============================================================================

/// Format a single merge progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started {
            image_count,
            page_count,
        } => {
            if *image_count == 0 {
                vec!["No images found".to_string()]
            } else {
                vec![format!(
                    "Merging {} onto {}",
                    plural(*image_count, "image"),
                    plural(*page_count, "page")
                )]
            }
        }
        ProcessEvent::PageWritten {
            index,
            filename,
            sources,
            fillers,
        } => {
            let mut lines = vec![page_header(*index, filename)];
            for source in sources {
                lines.push(format!(
                    "{}Source: {}",
                    indent(1),
                    display_name(Path::new(source))
                ));
            }
            if *fillers > 0 {
                lines.push(format!("{}Fillers: {}", indent(1), fillers));
            }
            lines
        }
    }
}
