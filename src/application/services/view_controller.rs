//! Session state machine.
//!
//! ```text
//!            go_login            complete_auth
//!   Home ────────────▶ Login ─────────────────▶ Dashboard
//!    │ ▲                 │                         │
//!    │ └──── go_home ────┘                         │
//!    │ start_registration(role)    complete_auth   │
//!    └─────────────────▶ Register ─────────────────┘
//!                                                  │
//!   Home ◀──────────────── logout ─────────────────┘
//! ```
//!
//! `go_home` and `logout` are accepted from every screen.

use tracing::debug;

use crate::application::services::Carousel;
use crate::domain::{NavigationError, Role, Screen, SessionState, Slide};

/// Owns the session state; the only way to change it is through the
/// transition methods below.
#[derive(Debug, Clone)]
pub struct ViewController {
    screen: Screen,
    role: Option<Role>,
    authenticated: bool,
    carousel: Carousel<'static>,
}

impl ViewController {
    /// Creates a controller on the home screen over the built-in story slides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            role: None,
            authenticated: false,
            carousel: Carousel::stories(),
        }
    }

    /// Creates a controller over a custom slide set.
    ///
    /// # Errors
    /// Returns [`NavigationError::EmptyCarousel`] if `slides` is empty.
    pub fn with_slides(slides: &'static [Slide]) -> Result<Self, NavigationError> {
        Ok(Self {
            screen: Screen::Home,
            role: None,
            authenticated: false,
            carousel: Carousel::new(slides)?,
        })
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> SessionState {
        SessionState::new(
            self.screen,
            self.role,
            self.authenticated,
            self.carousel.index(),
        )
    }

    /// Active screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Selected role.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Login status.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Carousel, read-only.
    #[must_use]
    pub const fn carousel(&self) -> &Carousel<'static> {
        &self.carousel
    }

    /// Opens the sign-in form.
    pub fn go_login(&mut self) {
        self.transition(Screen::Login);
    }

    /// Selects `role` and opens the registration form.
    pub fn start_registration(&mut self, role: Role) {
        self.role = Some(role);
        self.transition(Screen::Register);
    }

    /// Marks the visitor as signed in and opens the dashboard.
    ///
    /// Any form input is accepted; nothing is checked against a backend.
    pub fn complete_auth(&mut self) {
        self.authenticated = true;
        self.transition(Screen::Dashboard);
    }

    /// Signs out, clears the role, and returns home.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.role = None;
        self.transition(Screen::Home);
    }

    /// Returns home without touching role or login status.
    pub fn go_home(&mut self) {
        self.transition(Screen::Home);
    }

    /// Shows the next slide.
    pub fn advance(&mut self) {
        self.carousel.advance();
    }

    /// Shows the previous slide.
    pub fn retreat(&mut self) {
        self.carousel.retreat();
    }

    /// Shows slide `index`.
    ///
    /// # Errors
    /// Returns [`NavigationError::SlideOutOfRange`] if `index` is not a valid slide.
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        self.carousel.jump_to(index)
    }

    fn transition(&mut self, to: Screen) {
        debug!(
            from = %self.screen,
            to = %to,
            role = ?self.role,
            authenticated = self.authenticated,
            "Screen transition"
        );
        self.screen = to;
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(session: &SessionState) {
        if session.screen() == Screen::Dashboard {
            assert!(session.is_authenticated());
        }
        if session.screen() == Screen::Register {
            assert!(session.role().is_some());
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = ViewController::new();
        let session = controller.session();
        assert_eq!(session, SessionState::default());
        assert_eq!(controller.carousel().len(), 4);
    }

    #[test]
    fn test_consultant_registration_reaches_dashboard() {
        let mut controller = ViewController::new();
        controller.start_registration(Role::Consultant);
        assert_eq!(controller.screen(), Screen::Register);
        assert_invariants(&controller.session());

        controller.complete_auth();
        let session = controller.session();
        assert_eq!(session.screen(), Screen::Dashboard);
        assert_eq!(session.role(), Some(Role::Consultant));
        assert!(session.is_authenticated());
        assert_invariants(&session);
    }

    #[test]
    fn test_logout_resets_session() {
        let mut controller = ViewController::new();
        controller.start_registration(Role::Student);
        controller.complete_auth();

        controller.logout();
        let session = controller.session();
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.role(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_then_home_keeps_auth() {
        let mut controller = ViewController::new();
        controller.go_login();
        assert_eq!(controller.screen(), Screen::Login);

        controller.go_home();
        assert_eq!(controller.screen(), Screen::Home);
        assert!(!controller.is_authenticated());
    }

    #[test]
    fn test_go_home_keeps_role_and_auth() {
        let mut controller = ViewController::new();
        controller.start_registration(Role::Student);
        controller.complete_auth();

        controller.go_home();
        assert_eq!(controller.role(), Some(Role::Student));
        assert!(controller.is_authenticated());
    }

    #[test]
    fn test_login_without_role_reaches_dashboard() {
        let mut controller = ViewController::new();
        controller.go_login();
        controller.complete_auth();
        assert_eq!(controller.screen(), Screen::Dashboard);
        assert_eq!(controller.role(), None);
        assert_invariants(&controller.session());
    }

    #[test]
    fn test_carousel_survives_screen_changes() {
        let mut controller = ViewController::new();
        controller.advance();
        controller.advance();
        controller.go_login();
        controller.go_home();
        assert_eq!(controller.session().carousel_index(), 2);

        controller.retreat();
        assert_eq!(controller.session().carousel_index(), 1);
        assert!(controller.jump_to(7).is_err());
        assert_eq!(controller.session().carousel_index(), 1);
    }

    #[test]
    fn test_empty_slide_set_rejected() {
        assert!(ViewController::with_slides(&[]).is_err());
    }
}
