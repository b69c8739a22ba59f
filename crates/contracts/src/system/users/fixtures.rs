use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use super::aggregate::{Permissions, Role, User, UserId};
use crate::shared::activity::ActivityStatus;

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Permission set from six flags, in dialog order.
fn perms(flags: [bool; 6]) -> Permissions {
    let [view_inventory, edit_inventory, manage_suppliers, view_reports, manage_users, system_settings] =
        flags;
    Permissions {
        view_inventory,
        edit_inventory,
        manage_suppliers,
        view_reports,
        manage_users,
        system_settings,
    }
}

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    use ActivityStatus::{Active, Inactive};

    let user = |id: u32,
                name: &str,
                email: &str,
                role: Role,
                department: &str,
                status: ActivityStatus,
                last_login: NaiveDateTime,
                permissions: Permissions| User {
        id: UserId(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        department: department.to_string(),
        status,
        last_login,
        permissions,
    };

    vec![
        user(1, "John Doe", "john.doe@company.com", Role::Admin, "IT", Active, at(2024, 1, 20, 14, 30), perms([true; 6])),
        user(2, "Sarah Wilson", "sarah.wilson@company.com", Role::Manager, "Procurement", Active, at(2024, 1, 20, 9, 15), perms([true, true, true, true, false, false])),
        user(3, "Mike Johnson", "mike.johnson@company.com", Role::Staff, "Warehouse", Active, at(2024, 1, 19, 16, 45), perms([true, true, false, false, false, false])),
        user(4, "Lisa Chen", "lisa.chen@company.com", Role::Manager, "Finance", Active, at(2024, 1, 20, 11, 22), perms([true, false, false, true, false, false])),
        user(5, "David Smith", "david.smith@company.com", Role::Staff, "Warehouse", Inactive, at(2024, 1, 15, 13, 10), perms([true, false, false, false, false, false])),
    ]
});

pub fn users() -> &'static [User] {
    &USERS
}
