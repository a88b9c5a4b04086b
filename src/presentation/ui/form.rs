//! Field list, focus cycling and card layout shared by the login and
//! registration screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::domain::entities::BRAND;
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, KeyScope};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle, TextInput};

const FIELD_HEIGHT: u16 = 3;
const CARD_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    GoHome,
}

/// Ordered inputs with exactly one focused field.
pub struct AuthForm {
    fields: Vec<TextInput>,
    focus: usize,
}

impl AuthForm {
    #[must_use]
    pub fn new(fields: Vec<TextInput>) -> Self {
        let mut form = Self { fields, focus: 0 };
        form.apply_focus();
        form
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", TextInput::value)
    }

    #[must_use]
    pub fn fields(&self) -> &[TextInput] {
        &self.fields
    }

    fn is_last_field(&self) -> bool {
        self.focus + 1 >= self.fields.len()
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
            self.apply_focus();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            self.apply_focus();
        }
    }

    fn apply_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == self.focus);
        }
    }

    /// Enter moves down the form and submits from the last field.
    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> FormAction {
        match registry.find_action(KeyScope::Form, key) {
            Some(Action::Submit) if self.is_last_field() => return FormAction::Submit,
            Some(Action::Submit | Action::FocusNext) => {
                self.focus_next();
                return FormAction::None;
            }
            Some(Action::FocusPrevious) => {
                self.focus_previous();
                return FormAction::None;
            }
            Some(Action::GoHome) => return FormAction::GoHome,
            _ => {}
        }

        let Some(field) = self.fields.get_mut(self.focus) else {
            return FormAction::None;
        };

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                field.input_char(c);
            }
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            KeyCode::Home => field.move_start(),
            KeyCode::End => field.move_end(),
            _ => {}
        }

        FormAction::None
    }
}

pub(super) fn form_commands(registry: &CommandRegistry, submit_label: &'static str) -> Vec<Keybind> {
    [
        (Action::FocusNext, "Next Field"),
        (Action::FocusPrevious, "Prev Field"),
        (Action::Submit, submit_label),
        (Action::GoHome, "Back to Home"),
    ]
    .into_iter()
    .filter_map(|(action, label)| registry.keybind(KeyScope::Form, action, label))
    .collect()
}

/// Centered card with heading, fields, a submit button and the key bar.
pub(super) struct FormCard<'a> {
    pub heading: &'a str,
    pub subtitle: &'a str,
    pub submit_label: &'a str,
    pub form: &'a AuthForm,
    pub hints: &'a [Keybind],
    pub theme: &'a Theme,
}

impl Widget for FormCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let field_count = u16::try_from(self.form.fields().len()).unwrap_or(u16::MAX);
        // heading, subtitle, gap, fields, gap, button, borders
        let card_height = field_count
            .saturating_mul(FIELD_HEIGHT)
            .saturating_add(7);

        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(card_height),
            Constraint::Fill(1),
        ])
        .areas(body);
        let [_, card, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(CARD_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(center);

        Clear.render(card, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Line::from(format!(" 🎓 {BRAND} ")).alignment(Alignment::Center));
        let inner = block.inner(card);
        block.render(card, buf);

        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ];
        constraints.extend(self.form.fields().iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(inner);

        Paragraph::new(Line::styled(self.heading, self.theme.title_style))
            .alignment(Alignment::Center)
            .render(rows[0], buf);
        Paragraph::new(Line::styled(self.subtitle, self.theme.dimmed_style))
            .alignment(Alignment::Center)
            .render(rows[1], buf);

        for (field, row) in self.form.fields().iter().zip(rows.iter().skip(3)) {
            field.render(*row, buf);
        }

        let on_last = self.form.focus() + 1 == self.form.fields().len();
        let button_style = if on_last {
            self.theme.selection_style
        } else {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        };
        if let Some(button_row) = rows.last() {
            Paragraph::new(Line::from(Span::styled(
                format!("[ {} ]", self.submit_label),
                button_style,
            )))
            .alignment(Alignment::Center)
            .render(*button_row, buf);
        }

        FooterBar::new(self.hints)
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer, buf);
    }
}
