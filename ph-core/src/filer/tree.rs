//! Destination paths derived from a tool and work order.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::config::{
    CUSTOMER_FILE_HISTORY_DIR, PRODUCTION_TEAMS_DIR, STOCK_DATE_FORMAT, STOCK_ORDER_PREFIX,
    TEAM_DIRS, WORK_ORDERS_DIR,
};
use crate::model::{ToolId, WorkOrderId};

/// Every folder the filer touches for one tool / work-order pair.
///
/// ```text
/// <base>/<tool>/
///   01 Production Teams/{Team 1..Team 4}/
///   02 Customer File History/<work order>/
///   02 - Work Orders/<work order>/[STOCK ORDER_MM.DD.YYYY/]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationTree {
    tool_dir: PathBuf,
    teams_dir: PathBuf,
    history_dir: PathBuf,
    work_orders_dir: PathBuf,
    work_order: String,
}

impl DestinationTree {
    pub fn new(base: &Path, tool: &ToolId, work_order: &WorkOrderId) -> Self {
        let tool_dir = base.join(tool.as_str());
        Self {
            teams_dir: tool_dir.join(PRODUCTION_TEAMS_DIR),
            history_dir: tool_dir.join(CUSTOMER_FILE_HISTORY_DIR),
            work_orders_dir: tool_dir.join(WORK_ORDERS_DIR),
            work_order: work_order.as_str().to_string(),
            tool_dir,
        }
    }

    /// `<base>/<tool>`
    pub fn tool_dir(&self) -> &Path {
        &self.tool_dir
    }

    /// `<tool>/01 Production Teams/Team N` for each team.
    pub fn team_dirs(&self) -> Vec<PathBuf> {
        TEAM_DIRS.iter().map(|t| self.teams_dir.join(t)).collect()
    }

    /// `<tool>/02 Customer File History/<work order>`
    pub fn history_work_order_dir(&self) -> PathBuf {
        self.history_dir.join(&self.work_order)
    }

    /// `<tool>/02 - Work Orders`; outside files land here.
    pub fn work_orders_dir(&self) -> &Path {
        &self.work_orders_dir
    }

    /// `<tool>/02 - Work Orders/<work order>`; inside files land here.
    pub fn work_order_dir(&self) -> PathBuf {
        self.work_orders_dir.join(&self.work_order)
    }

    /// Dated stock order folder inside the work-order folder.
    pub fn stock_dir(&self, date: NaiveDate) -> PathBuf {
        self.work_order_dir().join(stock_folder_name(date))
    }

    /// Folders created by the structure pass, parents first.
    pub fn structure_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![
            self.tool_dir.clone(),
            self.teams_dir.clone(),
            self.history_dir.clone(),
        ];
        dirs.extend(self.team_dirs());
        dirs.push(self.history_work_order_dir());
        dirs
    }
}

/// `STOCK ORDER_MM.DD.YYYY`
pub fn stock_folder_name(date: NaiveDate) -> String {
    format!("{}{}", STOCK_ORDER_PREFIX, date.format(STOCK_DATE_FORMAT))
}
