//! ph-core - Core library for filing production history uploads.
//!
//! An upload names a tool and a work order, picks an order type and
//! selects files in two buckets. This crate validates the identifiers,
//! builds the tool's folder structure under a shared base directory and
//! copies the files into the work-order branch.
//!
//! # Example
//!
//! ```no_run
//! use ph_core::{submit, Filer, FilerConfig, OrderType, RawSubmission, SelectedFile};
//!
//! let filer = Filer::new(FilerConfig::new("/srv/production-history"));
//! let raw = RawSubmission {
//!     tool: "12345".into(),
//!     work_order: "WO123456".into(),
//!     order_type: OrderType::NonItar,
//!     required_files_acknowledged: true,
//!     files: vec![
//!         SelectedFile::inside("/tmp/a.pdf"),
//!         SelectedFile::outside("/tmp/b.pdf"),
//!     ],
//! };
//! let report = submit(&filer, raw, || None, || None).unwrap();
//! println!("{} file(s) copied", report.copied.len());
//! ```

pub mod config;
pub mod error;
pub mod filer;
pub mod model;
pub mod validation;

// Re-exports for convenience
pub use config::FilerConfig;
pub use error::{ErrorCode, Field, FilingError, Result, UploadError, ValidationError};
pub use filer::{
    stock_folder_name, CopiedFile, CopyFailure, DestinationTree, Filer, PlacementReport,
};
pub use model::{
    normalize_dropped_path, selection_summary, FileBucket, OrderType, RawSubmission,
    SelectedFile, ToolId, UploadRequest, WorkOrderId,
};
pub use validation::{validate, TOOL_CONFIRM_PROMPT, WORK_ORDER_CONFIRM_PROMPT};

use tracing::{debug, error, info};

/// Run one submission end to end.
///
/// This is the full pipeline behind the form's Upload button:
/// 1. Validate tool and work order, prompting for re-entry if needed
/// 2. Build the upload request (acknowledgement box, both buckets filled)
/// 3. Create the folder structure
/// 4. Copy the files
///
/// Any failure is logged and returned; the caller decides whether to let the
/// operator try again. Nothing is retried or rolled back here.
pub fn submit<T, W>(
    filer: &Filer,
    raw: RawSubmission,
    confirm_tool: T,
    confirm_work_order: W,
) -> Result<PlacementReport>
where
    T: FnOnce() -> Option<String>,
    W: FnOnce() -> Option<String>,
{
    info!("Uploading");
    let outcome = run_submission(filer, raw, confirm_tool, confirm_work_order);
    if let Err(e) = &outcome {
        error!("Upload failed: {}", e);
    }
    outcome
}

fn run_submission<T, W>(
    filer: &Filer,
    raw: RawSubmission,
    confirm_tool: T,
    confirm_work_order: W,
) -> Result<PlacementReport>
where
    T: FnOnce() -> Option<String>,
    W: FnOnce() -> Option<String>,
{
    let (tool, work_order) =
        validate(&raw.tool, &raw.work_order, confirm_tool, confirm_work_order)?;
    let request = UploadRequest::new(
        tool,
        work_order,
        raw.order_type,
        raw.files,
        raw.required_files_acknowledged,
    )?;
    debug!("Checks done");

    filer.upload(request)
}
