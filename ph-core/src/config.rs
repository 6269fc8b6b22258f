//! Folder layout constants and filer configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tool numbers are this many decimal digits.
pub const TOOL_ID_LEN: usize = 5;

/// Work orders are this many characters.
pub const WORK_ORDER_ID_LEN: usize = 8;

/// Placeholder the form shows for an unset field.
pub const NULL_SENTINEL: &str = "Null";

/// Team folders live here, under the tool folder.
pub const PRODUCTION_TEAMS_DIR: &str = "01 Production Teams";

/// Team sub-folders created under [`PRODUCTION_TEAMS_DIR`].
pub const TEAM_DIRS: [&str; 4] = ["Team 1", "Team 2", "Team 3", "Team 4"];

/// Work-order history folder created by the structure pass.
pub const CUSTOMER_FILE_HISTORY_DIR: &str = "02 Customer File History";

/// Folder uploads are copied into.
///
/// Differs from [`CUSTOMER_FILE_HISTORY_DIR`]; both names are in use on the
/// shared drive and neither may be renamed until production confirms which
/// one is authoritative.
pub const WORK_ORDERS_DIR: &str = "02 - Work Orders";

/// Prefix of the dated stock order folder.
pub const STOCK_ORDER_PREFIX: &str = "STOCK ORDER_";

/// `chrono` format of the stock order date (MM.DD.YYYY).
pub const STOCK_DATE_FORMAT: &str = "%m.%d.%Y";

/// Filer configuration, loaded once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilerConfig {
    /// Root of the shared Production History tree.
    pub base_directory: PathBuf,
}

impl FilerConfig {
    /// Create a configuration rooted at `base_directory`.
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
        }
    }

    /// Root of the shared Production History tree.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filer_config_from_json() {
        let config: FilerConfig =
            serde_json::from_str(r#"{ "base_directory": "/srv/history" }"#).unwrap();
        assert_eq!(config.base_directory(), Path::new("/srv/history"));
    }

    #[test]
    fn test_filer_config_requires_base_directory() {
        let result = serde_json::from_str::<FilerConfig>("{}");
        assert!(result.is_err());
    }
}
