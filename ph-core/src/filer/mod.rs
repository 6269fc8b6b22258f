//! Filing of uploaded files into the shared Production History tree.

mod place;
mod report;
mod structure;
mod tree;

pub use report::{CopiedFile, CopyFailure, PlacementReport};
pub use tree::{stock_folder_name, DestinationTree};

use std::path::Path;
use tracing::{debug, info};

use crate::config::FilerConfig;
use crate::error::Result;
use crate::model::{ToolId, UploadRequest, WorkOrderId};

/// Creates the folder hierarchy and copies files under one base directory.
#[derive(Debug, Clone)]
pub struct Filer {
    config: FilerConfig,
}

impl Filer {
    /// Create a filer for the session's configuration.
    pub fn new(config: FilerConfig) -> Self {
        Self { config }
    }

    pub fn base_directory(&self) -> &Path {
        self.config.base_directory()
    }

    /// Paths derived for a tool / work-order pair under this filer's base.
    pub fn tree(&self, tool: &ToolId, work_order: &WorkOrderId) -> DestinationTree {
        DestinationTree::new(self.base_directory(), tool, work_order)
    }

    /// Build the folder structure and copy every file of `request`.
    pub fn upload(&self, request: UploadRequest) -> Result<PlacementReport> {
        info!(
            "Filing {} file(s) for tool {} work order {} ({})",
            request.files().len(),
            request.tool(),
            request.work_order(),
            request.order_type()
        );

        self.ensure_structure(request.tool(), request.work_order())?;
        debug!("Folder structure created, uploading files");

        let report = self.place(
            request.tool(),
            request.work_order(),
            request.order_type(),
            &request.inside_paths(),
            &request.outside_paths(),
        )?;
        debug!("Files uploaded");

        Ok(report)
    }
}
