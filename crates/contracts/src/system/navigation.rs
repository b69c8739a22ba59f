use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::ParseLabelError;

/// Content page of the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Dashboard,
    Inventory,
    Predictions,
    Reports,
    Suppliers,
    Users,
    Settings,
}

impl Page {
    /// Sidebar order.
    pub fn all() -> [Page; 7] {
        [
            Page::Dashboard,
            Page::Inventory,
            Page::Predictions,
            Page::Reports,
            Page::Suppliers,
            Page::Users,
            Page::Settings,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Inventory => "inventory",
            Page::Predictions => "predictions",
            Page::Reports => "reports",
            Page::Suppliers => "suppliers",
            Page::Users => "users",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Inventory",
            Page::Predictions => "AI Predictions",
            Page::Reports => "Reports",
            Page::Suppliers => "Suppliers",
            Page::Users => "User Roles",
            Page::Settings => "Settings",
        }
    }

    /// Unknown keys land on the dashboard.
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| ParseLabelError::new("page", s))
    }
}
