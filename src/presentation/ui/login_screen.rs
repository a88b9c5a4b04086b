//! Login screen.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::form::{AuthForm, FormAction, FormCard, form_commands};
use crate::application::AuthSubmission;
use crate::domain::keybinding::Keybind;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

const EMAIL: usize = 0;

/// Email and password form. A fresh instance is mounted on every visit.
pub struct LoginScreen {
    form: AuthForm,
    hints: Vec<Keybind>,
    theme: Theme,
}

impl LoginScreen {
    #[must_use]
    pub fn new(registry: &CommandRegistry, theme: Theme) -> Self {
        let form = AuthForm::new(vec![
            TextInput::new("Email").placeholder("Enter your email"),
            TextInput::new("Password")
                .password()
                .placeholder("Enter your password"),
        ]);
        let mut screen = Self {
            form,
            hints: Vec::new(),
            theme,
        };
        screen.hints = screen.get_commands(registry);
        screen
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> FormAction {
        self.form.handle_key(key, registry)
    }

    /// What the user typed, minus the password.
    #[must_use]
    pub fn submission(&self) -> AuthSubmission {
        AuthSubmission::login(self.form.value(EMAIL))
    }

    #[must_use]
    pub fn form(&self) -> &AuthForm {
        &self.form
    }
}

impl HasCommands for LoginScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        form_commands(registry, "Sign In")
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        FormCard {
            heading: "Welcome Back",
            subtitle: "Sign in to your account",
            submit_label: "Sign In",
            form: &self.form,
            hints: &self.hints,
            theme: &self.theme,
        }
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AuthSource;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_submission_carries_email_only() {
        let registry = CommandRegistry::new();
        let mut screen = LoginScreen::new(&registry, Theme::default());

        for c in "amina@example.com".chars() {
            screen.handle_key(key(KeyCode::Char(c)), &registry);
        }
        screen.handle_key(key(KeyCode::Tab), &registry);
        for c in "hunter2".chars() {
            screen.handle_key(key(KeyCode::Char(c)), &registry);
        }

        assert_eq!(screen.handle_key(key(KeyCode::Enter), &registry), FormAction::Submit);
        let submission = screen.submission();
        assert_eq!(submission.source, AuthSource::Login);
        assert_eq!(submission.email, "amina@example.com");
        assert!(!format!("{submission:?}").contains("hunter2"));
    }

    #[test]
    fn test_empty_form_still_submits() {
        let registry = CommandRegistry::new();
        let mut screen = LoginScreen::new(&registry, Theme::default());

        screen.handle_key(key(KeyCode::Enter), &registry);
        assert_eq!(screen.handle_key(key(KeyCode::Enter), &registry), FormAction::Submit);
        assert!(screen.submission().is_blank());
    }

    #[test]
    fn test_render_heading_and_masked_password() {
        let registry = CommandRegistry::new();
        let mut screen = LoginScreen::new(&registry, Theme::default());
        screen.handle_key(key(KeyCode::Tab), &registry);
        screen.handle_key(key(KeyCode::Char('p')), &registry);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Welcome Back"));
        assert!(text.contains("Sign in to your account"));
        assert!(text.contains('•'));
    }
}
