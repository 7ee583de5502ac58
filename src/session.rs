use thiserror::Error;

use crate::profile::ProfileRecord;

const PLACEHOLDER_NAME: &str = "Student";
const PLACEHOLDER_SCHOOL: &str = "Your School";

/// Which screen the auth flow shows while nobody is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
    ForgotPassword,
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub school: String,
    pub password: String,
}

/// Placeholder gate, not a security boundary. Nothing here checks
/// credentials; a real authentication backend plugs in at this type and
/// surfaces `Rejected` without touching session state.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Default)]
pub struct SessionController {
    authenticated: bool,
    screen: AuthScreen,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Only consulted while unauthenticated.
    pub fn auth_screen(&self) -> AuthScreen {
        self.screen
    }

    pub fn show_screen(&mut self, target: AuthScreen) {
        self.screen = target;
    }

    /// Signs in with the given credentials. No backend exists, so this
    /// always succeeds and seeds a profile from the email.
    pub fn login(&mut self, credentials: &Credentials) -> Result<ProfileRecord, AuthError> {
        self.authenticated = true;
        Ok(ProfileRecord::new(
            PLACEHOLDER_NAME,
            credentials.email.clone(),
            PLACEHOLDER_SCHOOL,
        ))
    }

    /// Creates an account from the supplied details. Always succeeds.
    pub fn register(&mut self, registration: &Registration) -> Result<ProfileRecord, AuthError> {
        self.authenticated = true;
        Ok(ProfileRecord::new(
            registration.name.clone(),
            registration.email.clone(),
            registration.school.clone(),
        ))
    }

    /// Idempotent. Resets the auth flow back to the login screen.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.screen = AuthScreen::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated_on_login_screen() {
        let session = SessionController::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.auth_screen(), AuthScreen::Login);
    }

    #[test]
    fn login_seeds_profile_from_email() {
        let mut session = SessionController::new();
        let record = session
            .login(&Credentials {
                email: "priya@x.edu".into(),
                password: "secret".into(),
            })
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(record.email, "priya@x.edu");
        assert_eq!(record.name, PLACEHOLDER_NAME);
        assert_eq!(record.school, PLACEHOLDER_SCHOOL);
    }

    #[test]
    fn register_uses_supplied_details() {
        let mut session = SessionController::new();
        session.show_screen(AuthScreen::Register);
        let record = session
            .register(&Registration {
                name: "Priya".into(),
                email: "priya@x.edu".into(),
                school: "St. Mary's".into(),
                password: "secret".into(),
            })
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(record, ProfileRecord::new("Priya", "priya@x.edu", "St. Mary's"));
    }

    #[test]
    fn logout_is_idempotent_and_resets_screen() {
        let mut session = SessionController::new();
        session.show_screen(AuthScreen::ForgotPassword);
        session
            .login(&Credentials {
                email: "a@x.edu".into(),
                password: String::new(),
            })
            .unwrap();
        session.logout();
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.auth_screen(), AuthScreen::Login);
    }

    #[test]
    fn rejection_variant_reports_reason() {
        let err = AuthError::Rejected("bad password".into());
        assert_eq!(err.to_string(), "authentication rejected: bad password");
    }
}
