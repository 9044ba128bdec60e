//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations the batcher
//! needs: identify, blank and compose.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a recording mock so batching logic can be checked
//! without decoding or encoding pixels.

use super::params::{BlankParams, ComposeParams};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Write a solid-color image (used for filler slots).
    fn blank(&self, params: &BlankParams) -> Result<(), BackendError>;

    /// Decode four sources, compose them onto one page and write it.
    fn compose(&self, params: &ComposeParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::params::{Layout, Quality};
    use std::cell::RefCell;

    /// Mock backend that records operations without executing them.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: RefCell<Vec<Dimensions>>,
        pub operations: RefCell<Vec<RecordedOp>>,
        /// Compose fails when any source path contains this string.
        pub fail_on: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Blank {
            output: String,
            width: u32,
            height: u32,
        },
        Compose {
            sources: Vec<String>,
            output: String,
            page: (u32, u32),
            border: u32,
            quality: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Results are popped from the end, so list them last-first.
        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: RefCell::new(dims),
                ..Self::default()
            }
        }

        pub fn failing_on(needle: &str) -> Self {
            Self {
                fail_on: Some(needle.to_string()),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }

        pub fn compose_ops(&self) -> Vec<RecordedOp> {
            self.get_operations()
                .into_iter()
                .filter(|op| matches!(op, RecordedOp::Compose { .. }))
                .collect()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .borrow_mut()
                .pop()
                .ok_or_else(|| BackendError::ProcessingFailed("No mock dimensions".to_string()))
        }

        fn blank(&self, params: &BlankParams) -> Result<(), BackendError> {
            self.operations.borrow_mut().push(RecordedOp::Blank {
                output: params.output.to_string_lossy().to_string(),
                width: params.width,
                height: params.height,
            });
            Ok(())
        }

        fn compose(&self, params: &ComposeParams) -> Result<(), BackendError> {
            let sources: Vec<String> = params
                .sources
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect();

            let failing = self
                .fail_on
                .as_deref()
                .filter(|needle| sources.iter().any(|s| s.contains(needle)));
            if let Some(needle) = failing {
                return Err(BackendError::ProcessingFailed(format!(
                    "mock decode failure on {needle}"
                )));
            }

            self.operations.borrow_mut().push(RecordedOp::Compose {
                sources,
                output: params.output.to_string_lossy().to_string(),
                page: params.layout.page_size(),
                border: params.layout.border,
                quality: params.quality.value(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_identify_without_results_errors() {
        let backend = MockBackend::new();
        assert!(backend.identify(Path::new("/a.jpg")).is_err());
    }

    #[test]
    fn mock_records_compose() {
        let backend = MockBackend::new();

        backend
            .compose(&ComposeParams {
                sources: ["/a.jpg", "/b.jpg", "/c.jpg", "/d.jpg"].map(Into::into),
                output: "/out/merged_0.jpg".into(),
                layout: Layout::default(),
                quality: Quality::new(90),
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Compose {
                page: (1100, 1700),
                border: 59,
                quality: 90,
                ..
            }
        ));
    }

    #[test]
    fn mock_fails_on_matching_source() {
        let backend = MockBackend::failing_on("broken");
        let result = backend.compose(&ComposeParams {
            sources: ["/a.jpg", "/broken.jpg", "/c.jpg", "/d.jpg"].map(Into::into),
            output: "/out/merged_0.jpg".into(),
            layout: Layout::default(),
            quality: Quality::default(),
        });
        assert!(result.is_err());
        assert!(backend.get_operations().is_empty());
    }
}
