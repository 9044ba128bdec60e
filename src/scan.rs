//! Input discovery and grouping.
//!
//! Lists the input directory and cuts the file list into groups of four,
//! one group per output page.
//!
//! ## Listing rules
//!
//! - Every regular file is a candidate image. There is no extension filter:
//!   a file that is not an image fails later, at decode time.
//! - Hidden entries (`.name`) are skipped, the same as a `*` glob.
//! - Subdirectories are skipped; the scan is not recursive.
//! - Files are sorted by name so the same folder always gives the same pages.
//!
//! ## Grouping
//!
//! ```text
//! a.jpg b.jpg c.jpg d.jpg e.jpg
//! └──── page 0 ─────────┘ └── page 1: e.jpg + 3 fillers
//! ```
//!
//! Slot order is grid order: top-left, top-right, bottom-left, bottom-right.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Images per page.
pub const GROUP_SIZE: usize = 4;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// One grid position on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Image(PathBuf),
    /// Blank, border-colored stand-in padding a short final group.
    Filler,
}

impl Slot {
    pub fn is_filler(&self) -> bool {
        matches!(self, Slot::Filler)
    }
}

/// Four slots destined for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Zero-based page number.
    pub index: usize,
    pub slots: [Slot; GROUP_SIZE],
}

impl Group {
    /// Real source images in slot order.
    pub fn images(&self) -> impl Iterator<Item = &Path> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Image(path) => Some(path.as_path()),
            Slot::Filler => None,
        })
    }

    pub fn filler_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filler()).count()
    }
}

/// List candidate input files, sorted by file name.
pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        // Follows symlinks, so a linked photo counts as a file.
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Partition paths into groups of four, padding the last with fillers.
pub fn plan_groups(paths: Vec<PathBuf>) -> Vec<Group> {
    paths
        .chunks(GROUP_SIZE)
        .enumerate()
        .map(|(index, chunk)| Group {
            index,
            slots: std::array::from_fn(|i| {
                chunk
                    .get(i)
                    .map_or(Slot::Filler, |path| Slot::Image(path.clone()))
            }),
        })
        .collect()
}

/// List `dir` and group its files.
pub fn scan(dir: &Path) -> Result<Vec<Group>, ScanError> {
    Ok(plan_groups(list_inputs(dir)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("img{i:02}.jpg"))).collect()
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    // =========================================================================
    // plan_groups
    // =========================================================================

    #[test]
    fn group_count_is_ceiling_of_quarter() {
        for (n, expected) in [(0, 0), (1, 1), (3, 1), (4, 1), (5, 2), (8, 2), (9, 3), (17, 5)] {
            assert_eq!(plan_groups(paths(n)).len(), expected, "{n} images");
        }
    }

    #[test]
    fn no_images_no_groups() {
        assert!(plan_groups(Vec::new()).is_empty());
    }

    #[test]
    fn full_group_has_no_fillers() {
        let groups = plan_groups(paths(4));
        assert_eq!(groups[0].filler_count(), 0);
        assert_eq!(groups[0].images().count(), 4);
    }

    #[test]
    fn short_final_group_padded_with_fillers() {
        let groups = plan_groups(paths(5));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].filler_count(), 0);
        assert_eq!(groups[1].filler_count(), 3);
        assert_eq!(
            groups[1].slots,
            [
                Slot::Image(PathBuf::from("img04.jpg")),
                Slot::Filler,
                Slot::Filler,
                Slot::Filler,
            ]
        );
    }

    #[test]
    fn groups_keep_order_and_index() {
        let groups = plan_groups(paths(6));
        assert_eq!(groups[0].index, 0);
        assert_eq!(groups[1].index, 1);
        let first: Vec<_> = groups[0].images().collect();
        assert_eq!(
            first,
            ["img00.jpg", "img01.jpg", "img02.jpg", "img03.jpg"].map(Path::new)
        );
        let second: Vec<_> = groups[1].images().collect();
        assert_eq!(second, ["img04.jpg", "img05.jpg"].map(Path::new));
    }

    #[test]
    fn every_group_has_exactly_four_slots() {
        for group in plan_groups(paths(11)) {
            assert_eq!(group.slots.len(), GROUP_SIZE);
            assert_eq!(group.images().count() + group.filler_count(), GROUP_SIZE);
        }
    }

    // =========================================================================
    // list_inputs
    // =========================================================================

    #[test]
    fn list_inputs_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.jpg", "a.png", "b.tif"] {
            touch(tmp.path(), name);
        }
        let files = list_inputs(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.png", "b.tif", "c.jpg"]);
    }

    #[test]
    fn list_inputs_does_not_filter_by_type() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "photo.jpg");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "no-extension");
        assert_eq!(list_inputs(tmp.path()).unwrap().len(), 3);
    }

    #[test]
    fn list_inputs_skips_hidden_and_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "photo.jpg");
        touch(tmp.path(), ".DS_Store");
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.jpg");

        let files = list_inputs(tmp.path()).unwrap();
        assert_eq!(files, vec![tmp.path().join("photo.jpg")]);
    }

    #[test]
    fn list_inputs_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(list_inputs(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn list_inputs_missing_dir_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = list_inputs(&tmp.path().join("missing"));
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[test]
    fn list_inputs_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "single.jpg");
        let result = list_inputs(&tmp.path().join("single.jpg"));
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn scan_groups_listed_files() {
        let tmp = TempDir::new().unwrap();
        for i in 0..5 {
            touch(tmp.path(), &format!("{i}.jpg"));
        }
        let groups = scan(tmp.path()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].images().next(), Some(tmp.path().join("4.jpg").as_path()));
    }
}
