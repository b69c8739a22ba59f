use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseLabelError;

/// Stock above `threshold * WELL_STOCKED_RATIO` counts as well stocked.
pub const WELL_STOCKED_RATIO: f64 = 1.5;

/// Stock level of an item relative to its reorder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Low,
    Normal,
    WellStocked,
}

impl StockStatus {
    /// Both boundaries belong to the lower branch:
    /// `value == threshold` is `Low`, `value == threshold * 1.5` is `Normal`.
    pub fn of(value: f64, threshold: f64) -> Self {
        if value <= threshold {
            StockStatus::Low
        } else if value <= threshold * WELL_STOCKED_RATIO {
            StockStatus::Normal
        } else {
            StockStatus::WellStocked
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Low => "Low Stock",
            StockStatus::Normal => "In Stock",
            StockStatus::WellStocked => "Well Stocked",
        }
    }

    /// Order used by the status dropdown.
    pub fn all() -> [StockStatus; 3] {
        [
            StockStatus::WellStocked,
            StockStatus::Normal,
            StockStatus::Low,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.label() == label)
    }
}

/// Free-function form of [`StockStatus::of`].
pub fn status_of(value: f64, threshold: f64) -> StockStatus {
    StockStatus::of(value, threshold)
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseLabelError::new("stock status", s))
    }
}
