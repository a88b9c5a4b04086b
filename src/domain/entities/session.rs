//! In-memory session state.

use super::Role;

/// Top-level screen. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Marketing home page with the story carousel.
    #[default]
    Home,
    /// Sign-in form.
    Login,
    /// Registration form for the selected role.
    Register,
    /// Placeholder dashboard for an authenticated visitor.
    Dashboard,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
            Self::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// Read-only snapshot of the session.
///
/// Holds for every snapshot handed out by the view controller:
/// `screen == Dashboard` implies `authenticated`, and
/// `screen == Register` implies `role.is_some()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    screen: Screen,
    role: Option<Role>,
    authenticated: bool,
    carousel_index: usize,
}

impl SessionState {
    pub(crate) const fn new(
        screen: Screen,
        role: Option<Role>,
        authenticated: bool,
        carousel_index: usize,
    ) -> Self {
        Self {
            screen,
            role,
            authenticated,
            carousel_index,
        }
    }

    /// Active screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Selected role, if any.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Whether the visitor has completed login or registration.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Index of the visible carousel slide.
    #[must_use]
    pub const fn carousel_index(&self) -> usize {
        self.carousel_index
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Screen::Home, None, false, 0)
    }
}
