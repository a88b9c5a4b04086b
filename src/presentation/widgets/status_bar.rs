//! Status line widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Single-line, centered status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    message: String,
}

impl StatusBar {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Line::styled(self.message.as_str(), style))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_centered() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new("soon").render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert_eq!(text, "        soon        ");
    }
}
