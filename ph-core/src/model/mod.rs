//! Data model for a production history upload.

mod ids;
mod order;
mod request;
mod selection;

pub use ids::{ToolId, WorkOrderId};
pub use order::{FileBucket, OrderType, ParseOrderTypeError};
pub use request::{RawSubmission, SelectedFile, UploadRequest};
pub use selection::{normalize_dropped_path, selection_summary};
