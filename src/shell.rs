use crate::profile::{ProfileEditor, ProfileRecord};
use crate::router::{Page, ViewRouter};
use crate::session::{AuthError, AuthScreen, Credentials, Registration, SessionController};

/// Top-level application state: one session controller, one profile editor,
/// one view router. Every user intent funnels through a method here, so no
/// two controllers can ever disagree about whose turn it is to mutate.
///
/// The profile editor exists only while a session is active; logout discards
/// it wholesale, which is also what clears the profile.
#[derive(Debug, Default)]
pub struct AppShell {
    session: SessionController,
    editor: Option<ProfileEditor>,
    router: ViewRouter,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn auth_screen(&self) -> AuthScreen {
        self.session.auth_screen()
    }

    pub fn show_auth_screen(&mut self, target: AuthScreen) {
        self.session.show_screen(target);
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        let record = self.session.login(credentials)?;
        self.start_session(record);
        Ok(())
    }

    pub fn register(&mut self, registration: &Registration) -> Result<(), AuthError> {
        let record = self.session.register(registration)?;
        self.start_session(record);
        Ok(())
    }

    fn start_session(&mut self, record: ProfileRecord) {
        self.editor = Some(ProfileEditor::new(record));
        self.router.reset();
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.editor = None;
        self.router.reset();
    }

    /// The committed profile, shown in the header. `None` while signed out.
    pub fn profile(&self) -> Option<&ProfileRecord> {
        self.editor.as_ref().map(|e| e.profile())
    }

    pub fn editor(&self) -> Option<&ProfileEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ProfileEditor> {
        self.editor.as_mut()
    }

    pub fn current_page(&self) -> Page {
        self.router.current()
    }

    pub fn go(&mut self, page: Page) {
        self.router.select(page);
    }

    pub fn go_id(&mut self, id: &str) {
        self.router.select_id(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileField;

    fn signed_in_shell() -> AppShell {
        let mut shell = AppShell::new();
        shell
            .register(&Registration {
                name: "Arjun".into(),
                email: "a@x.edu".into(),
                school: "DPS".into(),
                password: "pw".into(),
            })
            .unwrap();
        shell
    }

    #[test]
    fn register_scenario_from_auth_flow() {
        let mut shell = AppShell::new();
        assert!(!shell.is_authenticated());
        shell.show_auth_screen(AuthScreen::Register);
        shell
            .register(&Registration {
                name: "Priya".into(),
                email: "priya@x.edu".into(),
                school: "St. Mary's".into(),
                password: "pw".into(),
            })
            .unwrap();
        assert!(shell.is_authenticated());
        assert_eq!(
            shell.profile().unwrap(),
            &ProfileRecord::new("Priya", "priya@x.edu", "St. Mary's")
        );
        assert_eq!(shell.current_page(), Page::Home);
    }

    #[test]
    fn edit_cancel_leaves_profile_unchanged() {
        let mut shell = signed_in_shell();
        let editor = shell.editor_mut().unwrap();
        editor.begin_edit();
        editor.set_field(ProfileField::Email, "new@x.edu");
        editor.cancel();
        assert_eq!(
            shell.profile().unwrap(),
            &ProfileRecord::new("Arjun", "a@x.edu", "DPS")
        );
    }

    #[test]
    fn edit_save_commits_profile() {
        let mut shell = signed_in_shell();
        let editor = shell.editor_mut().unwrap();
        editor.begin_edit();
        editor.set_field(ProfileField::School, "New School");
        editor.save();
        assert_eq!(
            shell.profile().unwrap(),
            &ProfileRecord::new("Arjun", "a@x.edu", "New School")
        );
    }

    #[test]
    fn logout_then_login_resets_page_to_home() {
        let mut shell = signed_in_shell();
        shell.go(Page::Dashboard);
        shell.go(Page::Sos);
        shell.logout();
        assert!(!shell.is_authenticated());
        assert_eq!(shell.auth_screen(), AuthScreen::Login);
        assert!(shell.profile().is_none());
        shell
            .login(&Credentials {
                email: "back@x.edu".into(),
                password: "pw".into(),
            })
            .unwrap();
        assert_eq!(shell.current_page(), Page::Home);
    }

    #[test]
    fn logout_discards_in_progress_edit() {
        let mut shell = signed_in_shell();
        let editor = shell.editor_mut().unwrap();
        editor.begin_edit();
        editor.set_field(ProfileField::Name, "Half Typed");
        shell.logout();
        assert!(shell.editor().is_none());
    }

    #[test]
    fn navigation_by_id_normalizes_unknown_pages() {
        let mut shell = signed_in_shell();
        shell.go_id("dashboard");
        assert_eq!(shell.current_page(), Page::Dashboard);
        shell.go_id("not-a-page");
        assert_eq!(shell.current_page(), Page::Home);
    }
}
