//! Idempotent creation of the per-tool folder structure.

use std::fs;
use std::path::Path;
use tracing::{debug, error};

use super::Filer;
use crate::error::FilingError;
use crate::model::{ToolId, WorkOrderId};

impl Filer {
    /// Create the tool folder, the team folders and the customer history
    /// folder for `work_order`, skipping any that already exist.
    ///
    /// Calling this again for the same pair is a no-op.
    pub fn ensure_structure(
        &self,
        tool: &ToolId,
        work_order: &WorkOrderId,
    ) -> Result<(), FilingError> {
        for dir in self.tree(tool, work_order).structure_dirs() {
            check_create(&dir)?;
        }
        Ok(())
    }
}

/// Create `path` unless something already exists there. Returns whether a
/// directory was created.
///
/// Known limitation: the existence check and the create are separate calls
/// and the destination tree is not locked, so two uploaders working on the
/// same shared folder at once can still fail here with "already exists".
pub(crate) fn check_create(path: &Path) -> Result<bool, FilingError> {
    if path.exists() {
        return Ok(false);
    }
    create_dir(path)?;
    Ok(true)
}

/// Create `path`, failing if it already exists.
pub(crate) fn create_dir(path: &Path) -> Result<(), FilingError> {
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("Created {}", path.display());
            Ok(())
        }
        Err(source) => {
            error!("Failed to create {}: {}", path.display(), source);
            Err(FilingError::DirectoryCreateFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
