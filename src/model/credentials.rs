//! Credential entry - the session form's local state
//!
//! Nothing here validates or checks credentials: any pair of strings,
//! including empty ones, is accepted.

use super::notification::Notification;
use crate::navigation::Route;

/// Whether submitting logs in or signs up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }

    /// Heading and submit button label
    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::SignUp => "Sign Up",
        }
    }

    /// Label of the button that switches away from this mode
    pub fn switch_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Switch to Sign Up",
            AuthMode::SignUp => "Switch to Login",
        }
    }

    fn confirmation_title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Logged In!",
            AuthMode::SignUp => "Signed Up!",
        }
    }
}

/// What a submit produces: a notification, and maybe a screen to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notification: Notification,
    pub next: Option<Route>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialEntry {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
}

impl CredentialEntry {
    /// Flip the mode; field values are untouched
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn submit(&self) -> SubmitOutcome {
        let notification = Notification::new(
            self.mode.confirmation_title(),
            format!("Email: {}, Password: {}", self.email, self.password),
        );
        let next = match self.mode {
            AuthMode::Login => Some(Route::Catalog),
            AuthMode::SignUp => None,
        };
        SubmitOutcome { notification, next }
    }
}
