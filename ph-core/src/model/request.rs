//! Per-submission upload request.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{FileBucket, OrderType, ToolId, WorkOrderId};
use crate::error::ValidationError;

/// One file picked or dropped onto the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub bucket: FileBucket,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn inside(path: impl Into<PathBuf>) -> Self {
        Self {
            bucket: FileBucket::Inside,
            path: path.into(),
        }
    }

    pub fn outside(path: impl Into<PathBuf>) -> Self {
        Self {
            bucket: FileBucket::Outside,
            path: path.into(),
        }
    }
}

/// Everything the form collected, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub tool: String,
    pub work_order: String,
    pub order_type: OrderType,
    pub required_files_acknowledged: bool,
    pub files: Vec<SelectedFile>,
}

/// A validated submission, handed by value to the filer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    tool: ToolId,
    work_order: WorkOrderId,
    order_type: OrderType,
    files: Vec<SelectedFile>,
}

impl UploadRequest {
    /// Build a request, checking the acknowledgement box first and then
    /// that both buckets hold at least one file.
    pub fn new(
        tool: ToolId,
        work_order: WorkOrderId,
        order_type: OrderType,
        files: Vec<SelectedFile>,
        required_files_acknowledged: bool,
    ) -> Result<Self, ValidationError> {
        if !required_files_acknowledged {
            return Err(ValidationError::RequiredFilesNotAcknowledged);
        }
        for bucket in [FileBucket::Inside, FileBucket::Outside] {
            if !files.iter().any(|f| f.bucket == bucket) {
                return Err(ValidationError::NoFiles { bucket });
            }
        }

        Ok(Self {
            tool,
            work_order,
            order_type,
            files,
        })
    }

    pub fn tool(&self) -> &ToolId {
        &self.tool
    }

    pub fn work_order(&self) -> &WorkOrderId {
        &self.work_order
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// All selected files in the order they were added.
    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    /// Inside-bucket paths, in selection order.
    pub fn inside_paths(&self) -> Vec<&Path> {
        self.paths_in(FileBucket::Inside)
    }

    /// Outside-bucket paths, in selection order.
    pub fn outside_paths(&self) -> Vec<&Path> {
        self.paths_in(FileBucket::Outside)
    }

    fn paths_in(&self, bucket: FileBucket) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| f.bucket == bucket)
            .map(|f| f.path.as_path())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids() -> (ToolId, WorkOrderId) {
        (
            ToolId::parse("12345").unwrap(),
            WorkOrderId::parse("WO123456").unwrap(),
        )
    }

    #[test]
    fn test_request_splits_buckets_in_order() {
        let (tool, work_order) = ids();
        let files = vec![
            SelectedFile::inside("/tmp/a.pdf"),
            SelectedFile::outside("/tmp/b.pdf"),
            SelectedFile::inside("/tmp/c.pdf"),
        ];
        let request =
            UploadRequest::new(tool, work_order, OrderType::NonItar, files, true).unwrap();

        assert_eq!(
            request.inside_paths(),
            vec![Path::new("/tmp/a.pdf"), Path::new("/tmp/c.pdf")]
        );
        assert_eq!(request.outside_paths(), vec![Path::new("/tmp/b.pdf")]);
        assert_eq!(request.order_type(), OrderType::NonItar);
    }

    #[test]
    fn test_request_requires_acknowledgement_first() {
        let (tool, work_order) = ids();
        // Both checks would fail; the checkbox is reported.
        let err = UploadRequest::new(tool, work_order, OrderType::Itar, vec![], false).unwrap_err();
        assert_eq!(err, ValidationError::RequiredFilesNotAcknowledged);
    }

    #[test]
    fn test_request_requires_inside_file() {
        let (tool, work_order) = ids();
        let files = vec![SelectedFile::outside("/tmp/b.pdf")];
        let err = UploadRequest::new(tool, work_order, OrderType::Itar, files, true).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NoFiles {
                bucket: FileBucket::Inside
            }
        );
    }

    #[test]
    fn test_request_requires_outside_file() {
        let (tool, work_order) = ids();
        let files = vec![SelectedFile::inside("/tmp/a.pdf")];
        let err = UploadRequest::new(tool, work_order, OrderType::Itar, files, true).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NoFiles {
                bucket: FileBucket::Outside
            }
        );
    }
}
