//! Story carousel widget.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::domain::Slide;
use crate::presentation::theme::Theme;

const TRANSITION_MS: u32 = 800;

/// Slide change animation state, kept across frames.
pub struct CarouselTransition {
    effect: Option<Effect>,
    pending_duration: Duration,
    enabled: bool,
}

impl CarouselTransition {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            effect: None,
            pending_duration: Duration::ZERO,
            enabled,
        }
    }

    /// Starts the transition for a newly visible slide.
    pub fn restart(&mut self) {
        if self.enabled {
            self.effect = Some(fx::coalesce((TRANSITION_MS, Interpolation::CircOut)));
            self.pending_duration = Duration::ZERO;
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        if self.effect.is_some() {
            self.pending_duration = self.pending_duration.saturating_add(duration);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.effect.is_some()
    }

    fn process(&mut self, buf: &mut Buffer, area: Rect) {
        let duration = std::mem::take(&mut self.pending_duration);
        if let Some(effect) = &mut self.effect {
            let overflow = effect.process(duration.into(), buf, area);
            if overflow.is_some() {
                self.effect = None;
            }
        }
    }
}

/// Bordered panel showing the visible slide, arrows and indicator dots.
pub struct CarouselView<'a> {
    slides: &'a [Slide],
    index: usize,
    theme: &'a Theme,
}

impl<'a> CarouselView<'a> {
    #[must_use]
    pub fn new(slides: &'a [Slide], index: usize, theme: &'a Theme) -> Self {
        Self {
            slides,
            index,
            theme,
        }
    }

    fn indicators(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = (0..self.slides.len())
            .flat_map(|i| {
                let (dot, style) = if i == self.index {
                    ("●", Style::default().fg(self.theme.accent))
                } else {
                    ("○", self.theme.dimmed_style)
                };
                [Span::styled(dot, style), Span::raw(" ")]
            })
            .collect();
        Line::from(spans).centered()
    }
}

impl StatefulWidget for CarouselView<'_> {
    type State = CarouselTransition;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let Some(slide) = self.slides.get(self.index) else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Line::from(format!(" Stories {}/{} ", self.index + 1, self.slides.len())));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 6 || inner.height == 0 {
            return;
        }

        let [left_arrow, content, right_arrow] = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        let [_, body, _, dots] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(content);

        let text = vec![
            Line::styled(
                slide.title,
                self.theme.title_style.add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw(slide.description),
            Line::raw(""),
            Line::styled(format!("🖼  {}", slide.image_host()), self.theme.dimmed_style),
        ];
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let arrow_row = |r: Rect| Rect::new(r.x, r.y + r.height / 2, r.width, 1);
        Paragraph::new("‹")
            .alignment(Alignment::Center)
            .style(self.theme.dimmed_style)
            .render(arrow_row(left_arrow), buf);
        Paragraph::new("›")
            .alignment(Alignment::Center)
            .style(self.theme.dimmed_style)
            .render(arrow_row(right_arrow), buf);

        Paragraph::new(self.indicators()).render(dots, buf);

        state.process(buf, body);
    }
}
