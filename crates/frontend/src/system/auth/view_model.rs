use contracts::system::auth::LoginRequest;
use leptos::prelude::*;

use crate::layout::AppGlobalContext;

/// Login form. Submitting always signs in; the fields are not checked.
#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginRequest>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(LoginRequest::default()),
        }
    }

    pub fn set_email(&self, value: String) {
        self.form.update(|f| f.email = value);
    }

    pub fn set_password(&self, value: String) {
        self.form.update(|f| f.password = value);
    }

    pub fn submit_command(&self, ctx: &AppGlobalContext) {
        let request = self.form.get_untracked();
        ctx.login(&request);
        self.form.set(LoginRequest::default());
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_logs_in_and_clears_form() {
        let ctx = AppGlobalContext::new();
        let vm = LoginViewModel::new();
        vm.set_email("admin@company.com".to_string());
        vm.set_password("secret".to_string());
        vm.submit_command(&ctx);

        assert!(ctx.is_logged_in());
        assert_eq!(
            ctx.session.get_untracked().email.as_deref(),
            Some("admin@company.com")
        );
        assert_eq!(vm.form.get_untracked(), LoginRequest::default());
    }
}
