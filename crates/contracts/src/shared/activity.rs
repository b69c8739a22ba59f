use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseLabelError;

/// Account / partner state shown as a badge on suppliers and users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    Active,
    Inactive,
}

impl ActivityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "Active",
            ActivityStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActivityStatus::Active)
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(ActivityStatus::Active),
            "Inactive" => Ok(ActivityStatus::Inactive),
            _ => Err(ParseLabelError::new("activity status", s)),
        }
    }
}
