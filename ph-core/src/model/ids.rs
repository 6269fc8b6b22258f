//! Validated tool and work-order identifiers.

use serde::Serialize;
use std::fmt;

use crate::config::{TOOL_ID_LEN, WORK_ORDER_ID_LEN};

/// A tool number that passed validation or was confirmed by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ToolId(String);

impl ToolId {
    /// Exactly five ASCII digits.
    pub fn is_well_formed(value: &str) -> bool {
        value.len() == TOOL_ID_LEN && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Accept a well-formed tool number.
    pub fn parse(value: &str) -> Option<Self> {
        Self::is_well_formed(value).then(|| Self(value.to_string()))
    }

    /// Accept `value` as-is because the operator re-typed it to confirm.
    pub fn confirmed(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A work order that passed validation or was confirmed by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WorkOrderId(String);

impl WorkOrderId {
    /// Exactly eight characters, any kind.
    pub fn is_well_formed(value: &str) -> bool {
        value.chars().count() == WORK_ORDER_ID_LEN
    }

    /// Accept a well-formed work order.
    pub fn parse(value: &str) -> Option<Self> {
        Self::is_well_formed(value).then(|| Self(value.to_string()))
    }

    /// Accept `value` as-is because the operator re-typed it to confirm.
    pub fn confirmed(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
