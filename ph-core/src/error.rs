//! Error types for production history uploads.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::filer::CopyFailure;
use crate::model::FileBucket;

/// Error codes for upload failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Tool or work order left empty (1)
    MissingField = 1,
    /// Tool override not confirmed (2)
    ToolMismatch = 2,
    /// Work order override not confirmed (3)
    WorkOrderMismatch = 3,
    /// "Required files" box not ticked (4)
    RequiredFilesNotAcknowledged = 4,
    /// Inside or outside bucket empty (5)
    NoFiles = 5,
    /// Directory could not be created (10)
    DirectoryCreateFailed = 10,
    /// One or more files could not be copied (11)
    CopyError = 11,
}

/// Form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Tool,
    WorkOrder,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Tool => write!(f, "tool"),
            Field::WorkOrder => write!(f, "work order"),
        }
    }
}

/// Rejections raised before anything touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing {field}: value is empty or unset")]
    MissingField { field: Field },

    #[error("Tool number '{tool}' was not confirmed")]
    ToolMismatch { tool: String },

    #[error("Work order '{work_order}' was not confirmed")]
    WorkOrderMismatch { work_order: String },

    #[error("Required files have not been acknowledged")]
    RequiredFilesNotAcknowledged,

    #[error("No {bucket} files selected")]
    NoFiles { bucket: FileBucket },
}

impl ValidationError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField { .. } => ErrorCode::MissingField,
            ValidationError::ToolMismatch { .. } => ErrorCode::ToolMismatch,
            ValidationError::WorkOrderMismatch { .. } => ErrorCode::WorkOrderMismatch,
            ValidationError::RequiredFilesNotAcknowledged => {
                ErrorCode::RequiredFilesNotAcknowledged
            }
            ValidationError::NoFiles { .. } => ErrorCode::NoFiles,
        }
    }

    /// One-line message for the form's error box.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. }
            | ValidationError::ToolMismatch { .. }
            | ValidationError::WorkOrderMismatch { .. } => "Tool or Workorder is incorrect",
            ValidationError::RequiredFilesNotAcknowledged => {
                "Required files are not uploaded (check box)"
            }
            ValidationError::NoFiles { .. } => "No files were uploaded inside, outside, or both.",
        }
    }
}

/// Failures while building the destination tree or copying files.
#[derive(Debug, Error)]
pub enum FilingError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {} file(s): {}", .failed.len(), describe_failures(.failed))]
    CopyError {
        /// Sources that reached their destination before or after the failures.
        copied: Vec<PathBuf>,
        /// Sources that did not, in request order.
        failed: Vec<CopyFailure>,
    },
}

impl FilingError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            FilingError::DirectoryCreateFailed { .. } => ErrorCode::DirectoryCreateFailed,
            FilingError::CopyError { .. } => ErrorCode::CopyError,
        }
    }
}

fn describe_failures(failed: &[CopyFailure]) -> String {
    failed
        .iter()
        .map(|f| format!("{} ({})", f.source.display(), f.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Any failure of a single submission.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Filing(#[from] FilingError),
}

impl UploadError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            UploadError::Validation(e) => e.code(),
            UploadError::Filing(e) => e.code(),
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// One-line message for the form's error box.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Validation(e) => e.user_message().to_string(),
            UploadError::Filing(e) => format!("Upload failed: {}", e),
        }
    }
}

/// Result type alias for upload operations.
pub type Result<T> = std::result::Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_share_form_message() {
        let missing = ValidationError::MissingField { field: Field::Tool };
        let tool = ValidationError::ToolMismatch {
            tool: "1234".into(),
        };
        let work_order = ValidationError::WorkOrderMismatch {
            work_order: "WO1".into(),
        };
        for err in [missing, tool, work_order] {
            assert_eq!(err.user_message(), "Tool or Workorder is incorrect");
        }
    }

    #[test]
    fn test_no_files_message() {
        let err = ValidationError::NoFiles {
            bucket: FileBucket::Outside,
        };
        assert_eq!(err.to_string(), "No Outside files selected");
        assert_eq!(err.code(), ErrorCode::NoFiles);
    }

    #[test]
    fn test_copy_error_lists_failed_sources() {
        let err = FilingError::CopyError {
            copied: vec![PathBuf::from("/tmp/a.pdf")],
            failed: vec![CopyFailure {
                source: PathBuf::from("/tmp/missing.pdf"),
                destination: PathBuf::from("/base/missing.pdf"),
                bucket: FileBucket::Inside,
                reason: "not found".into(),
            }],
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.pdf (not found)"));
        assert!(!message.contains("a.pdf"));
    }

    #[test]
    fn test_upload_error_code_value() {
        let err: UploadError = ValidationError::RequiredFilesNotAcknowledged.into();
        assert_eq!(err.code_value(), 4);
        assert_eq!(
            err.user_message(),
            "Required files are not uploaded (check box)"
        );
    }
}
