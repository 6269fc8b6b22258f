//! Per-file outcome of a placement.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::FilingError;
use crate::model::FileBucket;

/// A file that reached its destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bucket: FileBucket,
}

/// A file that did not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bucket: FileBucket,
    pub reason: String,
}

/// What happened to every file of a placement, in request order.
///
/// Files already copied are never rolled back when a later one fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlacementReport {
    pub copied: Vec<CopiedFile>,
    pub failed: Vec<CopyFailure>,
}

impl PlacementReport {
    pub fn record_copied(&mut self, source: &Path, destination: PathBuf, bucket: FileBucket) {
        self.copied.push(CopiedFile {
            source: source.to_path_buf(),
            destination,
            bucket,
        });
    }

    pub fn record_failed(
        &mut self,
        source: &Path,
        destination: PathBuf,
        bucket: FileBucket,
        reason: impl Into<String>,
    ) {
        self.failed.push(CopyFailure {
            source: source.to_path_buf(),
            destination,
            bucket,
            reason: reason.into(),
        });
    }

    /// True if every file was copied.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn copied_sources(&self) -> Vec<PathBuf> {
        self.copied.iter().map(|c| c.source.clone()).collect()
    }

    /// The report itself if complete, otherwise a [`FilingError::CopyError`]
    /// carrying both lists.
    pub fn into_result(self) -> Result<Self, FilingError> {
        if self.is_complete() {
            return Ok(self);
        }
        Err(FilingError::CopyError {
            copied: self.copied_sources(),
            failed: self.failed,
        })
    }
}
