use contracts::shared::filter::{filter_cloned, ALL_SENTINEL};
use contracts::system::users::{user_criteria, users, Role, User, UserSummary};
use leptos::prelude::*;

/// ViewModel for the user roles page
///
/// Besides the search box and role dropdown it tracks the user whose
/// permissions dialog is open.
#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub search: RwSignal<String>,
    pub role: RwSignal<String>,
    pub selected_user: RwSignal<Option<User>>,
    pub show_permissions: RwSignal<bool>,
    pub rows: Memo<Vec<User>>,
}

impl UsersViewModel {
    pub fn new() -> Self {
        let search = RwSignal::new(String::new());
        let role = RwSignal::new(ALL_SENTINEL.to_string());
        let rows = Memo::new(move |_| {
            filter_cloned(users(), &user_criteria(&search.get(), &role.get()))
        });
        Self {
            search,
            role,
            selected_user: RwSignal::new(None),
            show_permissions: RwSignal::new(false),
            rows,
        }
    }

    /// "N users found" line under the table header.
    pub fn found_label(&self) -> String {
        format!("{} users found", self.rows.with(|rows| rows.len()))
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary::new(users())
    }

    /// Role cards: each role with its user count, over all users.
    pub fn role_counts(&self) -> Vec<(Role, usize)> {
        Role::all()
            .into_iter()
            .map(|role| (role, UserSummary::with_role(users(), role)))
            .collect()
    }

    pub fn set_search(&self, value: String) {
        log::debug!("users search: '{}'", value);
        self.search.set(value);
    }

    pub fn set_role(&self, value: String) {
        log::debug!("users role: '{}'", value);
        self.role.set(value);
    }

    pub fn open_permissions(&self, user: User) {
        log::debug!("permissions dialog: user id={}", user.id.0);
        self.selected_user.set(Some(user));
        self.show_permissions.set(true);
    }

    /// Hides the dialog; the last selected user is kept.
    pub fn close_permissions(&self) {
        self.show_permissions.set(false);
    }

    pub fn role_options() -> Vec<(String, String)> {
        let mut options = vec![(ALL_SENTINEL.to_string(), "All Roles".to_string())];
        options.extend(
            Role::all()
                .iter()
                .map(|r| (r.label().to_string(), r.label().to_string())),
        );
        options
    }
}

impl Default for UsersViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_filter() {
        let vm = UsersViewModel::new();
        vm.set_role("Manager".to_string());
        let names: Vec<_> = vm.rows.get_untracked().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Sarah Wilson", "Lisa Chen"]);
        assert_eq!(vm.found_label(), "2 users found");
        // header cards stay global
        assert_eq!(vm.summary().total, 5);
    }

    #[test]
    fn test_permissions_dialog() {
        let vm = UsersViewModel::new();
        let mike = users()[2].clone();
        vm.open_permissions(mike.clone());
        assert!(vm.show_permissions.get_untracked());
        assert_eq!(vm.selected_user.get_untracked(), Some(mike.clone()));

        vm.close_permissions();
        assert!(!vm.show_permissions.get_untracked());
        assert_eq!(vm.selected_user.get_untracked(), Some(mike));
    }

    #[test]
    fn test_role_counts() {
        let vm = UsersViewModel::new();
        assert_eq!(
            vm.role_counts(),
            vec![(Role::Admin, 1), (Role::Manager, 2), (Role::Staff, 2)]
        );
        assert_eq!(UsersViewModel::role_options().len(), 4);
    }
}
