use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::activity::ActivityStatus;
use crate::shared::error::ParseLabelError;
use crate::shared::filter::{count_where, FilterCriterion};
use crate::shared::indicators::{IndicatorStatus, SummaryCard};
use crate::shared::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";
    pub const DEPARTMENT: &str = "department";
    pub const STATUS: &str = "status";
    pub const LAST_LOGIN: &str = "last_login";
}

pub const SEARCH_FIELDS: [&str; 3] = [fields::NAME, fields::EMAIL, fields::DEPARTMENT];

pub const LAST_LOGIN_FORMAT: &str = "%Y-%m-%d %H:%M";

// ============================================================================
// Roles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

/// Description card of a role on the "Role Permissions" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub description: &'static str,
    pub permissions: &'static [&'static str],
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
        }
    }

    pub fn all() -> [Role; 3] {
        [Role::Admin, Role::Manager, Role::Staff]
    }

    pub fn profile(&self) -> RoleProfile {
        match self {
            Role::Admin => RoleProfile {
                description: "Full system access with user and system management capabilities",
                permissions: &[
                    "View and edit all inventory",
                    "Manage suppliers and orders",
                    "Access all reports and analytics",
                    "Manage user accounts and permissions",
                    "Configure system settings",
                    "AI prediction overrides",
                ],
            },
            Role::Manager => RoleProfile {
                description: "Advanced access with inventory and supplier management",
                permissions: &[
                    "View and edit inventory",
                    "Manage suppliers and orders",
                    "Access reports and analytics",
                    "Approve AI predictions",
                    "Limited user management",
                ],
            },
            Role::Staff => RoleProfile {
                description: "Basic access for daily inventory operations",
                permissions: &[
                    "View inventory",
                    "Add/update stock levels",
                    "Create basic reports",
                    "View low stock alerts",
                ],
            },
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| ParseLabelError::new("role", s))
    }
}

// ============================================================================
// User
// ============================================================================

/// Per-user permission switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Permissions {
    pub view_inventory: bool,
    pub edit_inventory: bool,
    pub manage_suppliers: bool,
    pub view_reports: bool,
    pub manage_users: bool,
    pub system_settings: bool,
}

impl Permissions {
    /// `(label, granted)` pairs in the order of the permissions dialog.
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("View Inventory", self.view_inventory),
            ("Edit Inventory", self.edit_inventory),
            ("Manage Suppliers", self.manage_suppliers),
            ("View Reports", self.view_reports),
            ("Manage Users", self.manage_users),
            ("System Settings", self.system_settings),
        ]
    }

    pub fn granted_count(&self) -> usize {
        self.entries().iter().filter(|(_, granted)| *granted).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: ActivityStatus,
    pub last_login: NaiveDateTime,
    pub permissions: Permissions,
}

impl User {
    /// Two-letter avatar fallback ("John Doe" -> "JD").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Record for User {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            fields::ID => self.id.0.into(),
            fields::NAME => self.name.as_str().into(),
            fields::EMAIL => self.email.as_str().into(),
            fields::ROLE => self.role.label().into(),
            fields::DEPARTMENT => self.department.as_str().into(),
            fields::STATUS => self.status.label().into(),
            fields::LAST_LOGIN => self.last_login.format(LAST_LOGIN_FORMAT).to_string().into(),
            _ => FieldValue::Null,
        }
    }
}

/// Search box over name/email/department plus the role dropdown.
pub fn user_criteria(search: &str, role: &str) -> Vec<FilterCriterion> {
    vec![
        FilterCriterion::text(SEARCH_FIELDS, search),
        FilterCriterion::select(fields::ROLE, role),
    ]
}

/// Header cards of the users page, over the whole user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSummary {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
    pub managers: usize,
}

impl UserSummary {
    pub fn new(users: &[User]) -> Self {
        Self {
            total: users.len(),
            active: count_where(users, |u| u.status.is_active()),
            admins: Self::with_role(users, Role::Admin),
            managers: Self::with_role(users, Role::Manager),
        }
    }

    /// Users per role, as shown on each role card.
    pub fn with_role(users: &[User], role: Role) -> usize {
        count_where(users, |u| u.role == role)
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::count("total_users", "Total Users", self.total, IndicatorStatus::Neutral),
            SummaryCard::count("active_users", "Active Users", self.active, IndicatorStatus::Good),
            SummaryCard::count("admins", "Administrators", self.admins, IndicatorStatus::Bad),
            SummaryCard::count("managers", "Managers", self.managers, IndicatorStatus::Warning),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::filter_records;
    use crate::system::users::fixtures::users;

    fn names(search: &str, role: &str) -> Vec<String> {
        filter_records(users(), &user_criteria(search, role))
            .iter()
            .map(|u| u.name.clone())
            .collect()
    }

    #[test]
    fn test_role_filter() {
        assert_eq!(names("", "Manager"), vec!["Sarah Wilson", "Lisa Chen"]);
        assert_eq!(names("", "all").len(), 5);
        assert!(names("", "Owner").is_empty());
    }

    #[test]
    fn test_search_with_role() {
        assert_eq!(names("warehouse", "all"), vec!["Mike Johnson", "David Smith"]);
        assert_eq!(names("warehouse", "Staff"), vec!["Mike Johnson", "David Smith"]);
        assert!(names("warehouse", "Admin").is_empty());
        assert_eq!(names("LISA.CHEN@", "all"), vec!["Lisa Chen"]);
    }

    #[test]
    fn test_summary() {
        let summary = UserSummary::new(users());
        assert_eq!(
            summary,
            UserSummary {
                total: 5,
                active: 4,
                admins: 1,
                managers: 2,
            }
        );
        assert_eq!(UserSummary::with_role(users(), Role::Staff), 2);
        assert_eq!(UserSummary::new(&[]), UserSummary::default());
    }

    #[test]
    fn test_role_parsing_and_profiles() {
        assert_eq!("Manager".parse::<Role>(), Ok(Role::Manager));
        assert!("manager".parse::<Role>().is_err());
        assert_eq!(Role::Admin.profile().permissions.len(), 6);
        assert_eq!(Role::Staff.profile().permissions.len(), 4);
    }

    #[test]
    fn test_user_helpers() {
        let john = &users()[0];
        assert_eq!(john.initials(), "JD");
        assert_eq!(john.permissions.granted_count(), 6);
        assert_eq!(john.field(fields::LAST_LOGIN), FieldValue::from("2024-01-20 14:30"));
        assert_eq!(users()[4].permissions.granted_count(), 1);
    }
}
