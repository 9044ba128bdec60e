//! Batch merging of an input folder into pages.
//!
//! Takes every image in the input directory, four at a time, and writes one
//! composite page per group into the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! images/                  merged_images/
//! ├── a.jpg                ├── merged_0.jpg   a b c d
//! ├── b.jpg        →       └── merged_1.jpg   e + 3 fillers
//! ├── c.png
//! ├── d.jpg
//! └── e.tif
//! ```
//!
//! ## Fillers
//!
//! A short final group is completed with blank, border-colored pages. The
//! filler is encoded to a hidden temporary file in the output directory and
//! fed to the compositor like any other source. Its guard deletes it once
//! the page is written, or as soon as an error unwinds the group.
//!
//! ## Failure Model
//!
//! The first unreadable directory, undecodable file, or failed write aborts
//! the run. Pages already written stay on disk; nothing is retried.

use crate::config::{ConfigError, SheetConfig};
use crate::output::plural;
use crate::imaging::{
    BackendError, ImageBackend, RustBackend, calculate_placement, get_dimensions, plan_compose,
    upright_dimensions, write_filler,
};
use crate::scan::{self, ScanError, Slot};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// Progress events emitted while merging.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// Inputs listed; emitted once before any page is written.
    Started {
        image_count: usize,
        page_count: usize,
    },
    /// One page written to disk.
    PageWritten {
        index: usize,
        filename: String,
        sources: Vec<String>,
        fillers: usize,
    },
}

/// Totals for a completed merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub pages: usize,
    pub images: usize,
    pub fillers: usize,
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {}",
            plural(self.pages, "page"),
            plural(self.images, "image")
        )?;
        if self.fillers > 0 {
            write!(f, " ({})", plural(self.fillers, "filler"))?;
        }
        Ok(())
    }
}

/// Merge every image in `input` into pages under `output`.
pub fn merge_folder(
    input: &Path,
    output: &Path,
    config: &SheetConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<MergeSummary, ProcessError> {
    let backend = RustBackend::new();
    merge_folder_with_backend(&backend, input, output, config, events)
}

/// Merge using a specific backend (allows testing with mock).
pub fn merge_folder_with_backend(
    backend: &impl ImageBackend,
    input: &Path,
    output: &Path,
    config: &SheetConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<MergeSummary, ProcessError> {
    config.validate()?;
    let layout = config.layout()?;
    let quality = config.quality();

    let groups = scan::scan(input)?;
    std::fs::create_dir_all(output)?;

    let mut summary = MergeSummary::default();
    emit(
        &events,
        ProcessEvent::Started {
            image_count: groups.iter().map(|g| g.images().count()).sum(),
            page_count: groups.len(),
        },
    );

    for group in &groups {
        let fillers = group.filler_count();
        let filler = if fillers > 0 {
            Some(write_filler(backend, output, &layout, quality)?)
        } else {
            None
        };
        let filler_path = filler
            .as_ref()
            .map(|f| f.path().to_path_buf())
            .unwrap_or_default();

        let sources = group.slots.clone().map(|slot| match slot {
            Slot::Image(path) => path,
            Slot::Filler => filler_path.clone(),
        });

        let filename = config.page_filename(group.index);
        let params = plan_compose(sources, &output.join(&filename), &layout, quality);
        backend.compose(&params)?;
        drop(filler);

        let images: Vec<String> = group
            .images()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        summary.pages += 1;
        summary.images += images.len();
        summary.fillers += fillers;

        emit(
            &events,
            ProcessEvent::PageWritten {
                index: group.index,
                filename,
                sources: images,
                fillers,
            },
        );
    }

    Ok(summary)
}

fn emit(events: &Option<Sender<ProcessEvent>>, event: ProcessEvent) {
    if let Some(tx) = events {
        // A closed receiver only means nobody is listening.
        tx.send(event).ok();
    }
}

// ============================================================================
// Dry run
// ============================================================================

/// Where one slot of a planned page ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotPlan {
    Image {
        path: PathBuf,
        /// Source dimensions as stored on disk.
        dimensions: (u32, u32),
        /// Landscape source, turned upright before fitting.
        rotated: bool,
        /// Top-left corner on the page.
        position: (u32, u32),
        /// Size after fitting into the cell.
        fitted: (u32, u32),
    },
    Filler,
}

/// A page as `merge` would write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    pub index: usize,
    pub filename: String,
    pub slots: Vec<SlotPlan>,
}

/// Plan the pages for `input` without writing anything.
///
/// Reads image headers for dimensions; pixel data is never decoded.
pub fn plan(input: &Path, config: &SheetConfig) -> Result<Vec<PagePlan>, ProcessError> {
    plan_with_backend(&RustBackend::new(), input, config)
}

/// Plan using a specific backend (allows testing with mock).
pub fn plan_with_backend(
    backend: &impl ImageBackend,
    input: &Path,
    config: &SheetConfig,
) -> Result<Vec<PagePlan>, ProcessError> {
    config.validate()?;
    let layout = config.layout()?;
    let page = layout.page_size();

    scan::scan(input)?
        .into_iter()
        .map(|group| {
            let slots = group
                .slots
                .iter()
                .enumerate()
                .map(|(index, slot)| match slot {
                    Slot::Image(path) => {
                        let dimensions = get_dimensions(backend, path)?;
                        let (_, rotated) = upright_dimensions(dimensions);
                        let (x, y, w, h) =
                            calculate_placement(page, layout.border, index, dimensions);
                        Ok(SlotPlan::Image {
                            path: path.clone(),
                            dimensions,
                            rotated,
                            position: (x, y),
                            fitted: (w, h),
                        })
                    }
                    Slot::Filler => Ok(SlotPlan::Filler),
                })
                .collect::<Result<Vec<_>, ProcessError>>()?;

            Ok(PagePlan {
                index: group.index,
                filename: config.page_filename(group.index),
                slots,
            })
        })
        .collect()
}
