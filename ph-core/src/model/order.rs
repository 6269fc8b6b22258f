//! Order type and file bucket classifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order classification chosen on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    #[default]
    Unspecified,
    Itar,
    NonItar,
    /// Inventory replenishment; inside files go to a dated sub-folder.
    Stock,
}

impl OrderType {
    /// Map the form's radio button value (0 = none selected).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(OrderType::Unspecified),
            1 => Some(OrderType::Itar),
            2 => Some(OrderType::NonItar),
            3 => Some(OrderType::Stock),
            _ => None,
        }
    }

    /// Radio button value for this order type.
    pub fn code(&self) -> u8 {
        match self {
            OrderType::Unspecified => 0,
            OrderType::Itar => 1,
            OrderType::NonItar => 2,
            OrderType::Stock => 3,
        }
    }

    pub fn is_stock(&self) -> bool {
        matches!(self, OrderType::Stock)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Unspecified => write!(f, "Unspecified"),
            OrderType::Itar => write!(f, "ITAR"),
            OrderType::NonItar => write!(f, "Non-ITAR"),
            OrderType::Stock => write!(f, "Stock"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order type '{0}' (expected unspecified, itar, non-itar or stock)")]
pub struct ParseOrderTypeError(String);

impl FromStr for OrderType {
    type Err = ParseOrderTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unspecified" | "none" => Ok(OrderType::Unspecified),
            "itar" => Ok(OrderType::Itar),
            "non-itar" | "non_itar" | "nonitar" => Ok(OrderType::NonItar),
            "stock" => Ok(OrderType::Stock),
            _ => Err(ParseOrderTypeError(s.to_string())),
        }
    }
}

/// Which drop zone a file was added through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileBucket {
    /// Filed inside the work-order folder.
    Inside,
    /// Filed one level up, beside the work-order folders.
    Outside,
}

impl FileBucket {
    pub fn label(&self) -> &'static str {
        match self {
            FileBucket::Inside => "Inside",
            FileBucket::Outside => "Outside",
        }
    }
}

impl fmt::Display for FileBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
