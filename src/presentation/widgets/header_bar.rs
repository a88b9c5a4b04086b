use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const LOGO: &str = "🎓";

pub struct HeaderBarStyle {
    pub background: Style,
    pub brand: Style,
    pub tagline: Style,
    pub item: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let tagline_bg = ColorConverter::shade(theme.accent, 0.5, 0.08);

        Self {
            brand: Style::default()
                .bg(theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            tagline: Style::default().bg(tagline_bg).fg(Color::White),
            item: Style::default().bg(tagline_bg).fg(Color::White),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            brand: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(Color::DarkGray),
            item: Style::default().fg(Color::White),
        }
    }
}

/// One-line top bar: logo and brand on the left, screen items on the right.
pub struct HeaderBar<'a> {
    brand: &'a str,
    tagline: Option<&'a str>,
    items: Vec<&'a str>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(brand: &'a str) -> Self {
        Self {
            brand,
            tagline: None,
            items: Vec::new(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn tagline(mut self, tagline: &'a str) -> Self {
        self.tagline = Some(tagline);
        self
    }

    /// Appends a right-aligned item, e.g. a notification bell or avatar.
    #[must_use]
    pub fn item(mut self, item: &'a str) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn left_line(&self) -> Line<'_> {
        let mut spans = vec![Span::styled(
            format!(" {LOGO} {} ", self.brand),
            self.style.brand,
        )];
        if let Some(tagline) = self.tagline {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {tagline} "), self.style.tagline));
        }
        Line::from(spans)
    }

    fn right_line(&self) -> Line<'_> {
        let mut spans = Vec::with_capacity(self.items.len() * 2);
        for item in &self.items {
            spans.push(Span::styled(format!(" {item} "), self.style.item));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = self.left_line();
        let left_width = u16::try_from(left_line.width()).unwrap_or(u16::MAX);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let right_line = self.right_line();
        let right_width = u16::try_from(right_line.width()).unwrap_or(u16::MAX);

        if right_width > 0 && right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(right_line).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_header_renders_brand_and_items() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("Agaaw")
            .tagline("Fly to your Future")
            .item("Logout")
            .render(area, &mut buf);

        let row = row_text(&buf, 0);
        assert!(row.contains("Agaaw"));
        assert!(row.contains("Fly to your Future"));
        assert!(row.contains("Logout"));
    }

    #[test]
    fn test_items_dropped_when_too_narrow() {
        let area = Rect::new(0, 0, 16, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("Agaaw").item("Logout").render(area, &mut buf);

        assert!(!row_text(&buf, 0).contains("Logout"));
    }
}
