use serde::{Deserialize, Serialize};

/// Credentials typed on the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Whether the dashboard shell is shown instead of the login screen.
///
/// There is no credential check: any submitted form signs the user in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    /// Email from the last login form, shown in the header.
    pub email: Option<String>,
}

impl Session {
    pub fn login(&mut self, request: &LoginRequest) {
        self.logged_in = true;
        self.email = if request.email.is_empty() {
            None
        } else {
            Some(request.email.clone())
        };
    }

    pub fn logout(&mut self) {
        *self = Session::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_input_logs_in() {
        let mut session = Session::default();
        session.login(&LoginRequest::default());
        assert!(session.logged_in);
        assert_eq!(session.email, None);

        session.login(&LoginRequest {
            email: "admin@company.com".to_string(),
            password: "x".to_string(),
        });
        assert_eq!(session.email.as_deref(), Some("admin@company.com"));

        session.logout();
        assert_eq!(session, Session::default());
    }
}
