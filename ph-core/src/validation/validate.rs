//! Syntactic checks with a single re-entry override.
//!
//! A value that fails its check is accepted anyway if the operator re-types
//! it exactly. This only catches typos; it is not a stricter format check.

use tracing::debug;

use crate::config::NULL_SENTINEL;
use crate::error::{Field, ValidationError};
use crate::model::{ToolId, WorkOrderId};

/// Prompt shown when the tool number looks wrong.
pub const TOOL_CONFIRM_PROMPT: &str =
    "Tool number does not seem correct, retype the tool number to confirm.";

/// Prompt shown when the work order looks wrong.
pub const WORK_ORDER_CONFIRM_PROMPT: &str =
    "Work order does not seem correct, retype the work order to confirm.";

/// Validate a tool / work-order pair.
///
/// `confirm_tool` and `confirm_work_order` are called at most once each, and
/// only when the matching value fails its check. They return the re-typed
/// value, or `None` if the operator cancelled. The work order is only checked
/// when the tool passes its check; confirming a malformed tool accepts the
/// work order as typed without a second prompt.
pub fn validate<T, W>(
    tool: &str,
    work_order: &str,
    confirm_tool: T,
    confirm_work_order: W,
) -> Result<(ToolId, WorkOrderId), ValidationError>
where
    T: FnOnce() -> Option<String>,
    W: FnOnce() -> Option<String>,
{
    if is_unset(tool) || is_unset(work_order) {
        debug!("Tool({}) or workorder({}) not filled in", tool, work_order);
        let field = if is_unset(tool) {
            Field::Tool
        } else {
            Field::WorkOrder
        };
        return Err(ValidationError::MissingField { field });
    }

    let tool_id = match ToolId::parse(tool) {
        Some(id) => id,
        None => {
            debug!("Tool({}) does not seem correct", tool);
            if !reentry_matches(tool, confirm_tool) {
                return Err(ValidationError::ToolMismatch {
                    tool: tool.to_string(),
                });
            }
            // A confirmed tool accepts the pair as typed.
            debug!("Tool confirmed");
            return Ok((ToolId::confirmed(tool), WorkOrderId::confirmed(work_order)));
        }
    };

    let work_order_id = match WorkOrderId::parse(work_order) {
        Some(id) => id,
        None => {
            debug!(
                "Workorder({}) does not seem correct, check length",
                work_order
            );
            if !reentry_matches(work_order, confirm_work_order) {
                return Err(ValidationError::WorkOrderMismatch {
                    work_order: work_order.to_string(),
                });
            }
            debug!("Workorder confirmed");
            WorkOrderId::confirmed(work_order)
        }
    };

    Ok((tool_id, work_order_id))
}

fn is_unset(value: &str) -> bool {
    value.is_empty() || value == NULL_SENTINEL
}

fn reentry_matches<F>(original: &str, confirm: F) -> bool
where
    F: FnOnce() -> Option<String>,
{
    confirm().is_some_and(|retyped| retyped == original)
}
