//! View switching and the shared-password prompt in front of the admin views.
//!
//! The password is compared in the client and only keeps casual visitors out
//! of the admin screens. It protects nothing.

use thiserror::Error;

/// Shared admin password used when no other one is configured at build time.
pub const DEFAULT_ADMIN_PASSWORD: &str = "alexbella";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("비밀번호가 올바르지 않습니다.")]
    WrongPassword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    UserPortal,
    RequestForm(String),
    AdminPortal,
    FormBuilder(String),
}

impl View {
    pub fn is_admin(&self) -> bool {
        matches!(self, View::AdminPortal | View::FormBuilder(_))
    }
}

/// The admin password prompt while it is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordPrompt {
    pub error: Option<String>,
}

/// Current view plus the optional open password prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    secret: String,
    view: View,
    prompt: Option<PasswordPrompt>,
}

impl Navigation {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            view: View::UserPortal,
            prompt: None,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn prompt(&self) -> Option<&PasswordPrompt> {
        self.prompt.as_ref()
    }

    pub fn show_user_portal(&mut self) {
        self.view = View::UserPortal;
    }

    pub fn open_request_form(&mut self, form_id: impl Into<String>) {
        self.view = View::RequestForm(form_id.into());
    }

    /// Only reachable from admin views, which are already behind the prompt.
    pub fn show_admin_portal(&mut self) {
        self.view = View::AdminPortal;
    }

    pub fn open_builder(&mut self, form_id: impl Into<String>) {
        self.view = View::FormBuilder(form_id.into());
    }

    pub fn open_prompt(&mut self) {
        self.prompt = Some(PasswordPrompt::default());
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
    }

    /// Checks `password` against the shared secret. A match closes the prompt
    /// and shows the admin list; a mismatch leaves the prompt open with an error.
    pub fn submit_password(&mut self, password: &str) -> Result<(), GateError> {
        if password == self.secret {
            self.prompt = None;
            self.view = View::AdminPortal;
            Ok(())
        } else {
            let err = GateError::WrongPassword;
            self.prompt = Some(PasswordPrompt {
                error: Some(err.to_string()),
            });
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_user_portal_without_prompt() {
        let nav = Navigation::new("secret");
        assert_eq!(nav.view(), &View::UserPortal);
        assert!(nav.prompt().is_none());
    }

    #[test]
    fn wrong_password_keeps_prompt_open_with_error() {
        let mut nav = Navigation::new("secret");
        nav.open_prompt();

        assert_eq!(nav.submit_password("guess"), Err(GateError::WrongPassword));
        assert_eq!(nav.view(), &View::UserPortal);
        assert_eq!(
            nav.prompt().and_then(|p| p.error.as_deref()),
            Some("비밀번호가 올바르지 않습니다.")
        );
    }

    #[test]
    fn right_password_opens_admin_and_clears_error() {
        let mut nav = Navigation::new("secret");
        nav.open_prompt();
        let _ = nav.submit_password("guess");

        assert_eq!(nav.submit_password("secret"), Ok(()));
        assert_eq!(nav.view(), &View::AdminPortal);
        assert!(nav.prompt().is_none());
    }

    #[test]
    fn closing_prompt_discards_its_error() {
        let mut nav = Navigation::new("secret");
        nav.open_prompt();
        let _ = nav.submit_password("guess");
        nav.close_prompt();
        nav.open_prompt();
        assert_eq!(nav.prompt(), Some(&PasswordPrompt::default()));
    }

    #[test]
    fn view_transitions_carry_form_ids() {
        let mut nav = Navigation::new("secret");
        nav.open_request_form("form_1");
        assert_eq!(nav.view(), &View::RequestForm("form_1".into()));
        assert!(!nav.view().is_admin());

        nav.open_builder("form_2");
        assert!(nav.view().is_admin());
        nav.show_user_portal();
        assert_eq!(nav.view(), &View::UserPortal);
    }
}
