//! Registration screen.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::form::{AuthForm, FormAction, FormCard, form_commands};
use crate::application::AuthSubmission;
use crate::domain::Role;
use crate::domain::keybinding::Keybind;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

const FULL_NAME: usize = 0;
const EMAIL: usize = 1;

/// Account creation form for the chosen role.
pub struct RegisterScreen {
    role: Role,
    subtitle: String,
    form: AuthForm,
    hints: Vec<Keybind>,
    theme: Theme,
}

impl RegisterScreen {
    #[must_use]
    pub fn new(role: Role, registry: &CommandRegistry, theme: Theme) -> Self {
        let form = AuthForm::new(vec![
            TextInput::new("Full Name").placeholder("Enter your full name"),
            TextInput::new("Email").placeholder("Enter your email"),
            TextInput::new("Password")
                .password()
                .placeholder("Create a password"),
            TextInput::new("Confirm Password")
                .password()
                .placeholder("Confirm your password"),
        ]);
        let mut screen = Self {
            role,
            subtitle: format!("Register as {}", role.with_article()),
            form,
            hints: Vec::new(),
            theme,
        };
        screen.hints = screen.get_commands(registry);
        screen
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> FormAction {
        self.form.handle_key(key, registry)
    }

    #[must_use]
    pub fn submission(&self) -> AuthSubmission {
        AuthSubmission::registration(
            self.role,
            self.form.value(FULL_NAME),
            self.form.value(EMAIL),
        )
    }
}

impl HasCommands for RegisterScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        form_commands(registry, "Create Account")
    }
}

impl Widget for &RegisterScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        FormCard {
            heading: "Create Account",
            subtitle: &self.subtitle,
            submit_label: "Create Account",
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
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut RegisterScreen, registry: &CommandRegistry, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), registry);
        }
    }

    #[test_case(Role::Student, "Register as a Student" ; "student")]
    #[test_case(Role::Consultant, "Register as a Consultant" ; "consultant")]
    fn test_subtitle_names_role(role: Role, expected: &str) {
        let registry = CommandRegistry::new();
        let screen = RegisterScreen::new(role, &registry, Theme::default());

        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Create Account"));
        assert!(text.contains(expected));
        assert!(text.contains("Confirm Password"));
    }

    #[test]
    fn test_submit_from_last_field() {
        let registry = CommandRegistry::new();
        let mut screen = RegisterScreen::new(Role::Consultant, &registry, Theme::default());

        type_text(&mut screen, &registry, "Amina Yusuf");
        screen.handle_key(key(KeyCode::Enter), &registry);
        type_text(&mut screen, &registry, "amina@example.com");
        screen.handle_key(key(KeyCode::Enter), &registry);
        type_text(&mut screen, &registry, "pw");
        screen.handle_key(key(KeyCode::Enter), &registry);
        type_text(&mut screen, &registry, "different");

        assert_eq!(screen.handle_key(key(KeyCode::Enter), &registry), FormAction::Submit);

        let submission = screen.submission();
        assert_eq!(submission.source, AuthSource::Registration(Role::Consultant));
        assert_eq!(submission.full_name.as_deref(), Some("Amina Yusuf"));
        assert_eq!(submission.email, "amina@example.com");
    }

    #[test]
    fn test_escape_abandons_form() {
        let registry = CommandRegistry::new();
        let mut screen = RegisterScreen::new(Role::Student, &registry, Theme::default());
        type_text(&mut screen, &registry, "half typed");
        assert_eq!(screen.handle_key(key(KeyCode::Esc), &registry), FormAction::GoHome);
        assert_eq!(screen.role(), Role::Student);
    }
}
