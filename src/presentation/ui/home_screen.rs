//! Home screen: hero, role cards, story carousel and marketing copy.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::domain::entities::{
    BRAND, COPYRIGHT, FEATURES, FOR_MENTORS, FOR_STUDENTS, HERO_BLURB, TAGLINE,
};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{Role, Slide};
use crate::presentation::commands::{CommandRegistry, HasCommands, KeyScope};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    CarouselTransition, CarouselView, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle,
};

/// Intent produced by a key press on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    None,
    Login,
    Register(Role),
    PreviousSlide,
    NextSlide,
    JumpTo(usize),
    Quit,
}

/// Home screen state that outlives a single frame.
pub struct HomeScreenState {
    transition: CarouselTransition,
    menu_open: bool,
    compact_width: u16,
    slide_count: usize,
    hints: Vec<Keybind>,
}

impl HomeScreenState {
    #[must_use]
    pub fn new(
        registry: &CommandRegistry,
        slide_count: usize,
        compact_width: u16,
        enable_animations: bool,
    ) -> Self {
        let mut state = Self {
            transition: CarouselTransition::new(enable_animations),
            menu_open: false,
            compact_width,
            slide_count,
            hints: Vec::new(),
        };
        state.hints = state.get_commands(registry);
        state
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// Called whenever the visible slide changes.
    pub fn slide_changed(&mut self) {
        self.transition.restart();
    }

    pub fn tick(&mut self, duration: Duration) {
        self.transition.tick(duration);
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> HomeAction {
        let Some(action) = registry.find_action(KeyScope::Home, key) else {
            return self
                .slide_for_digit(key)
                .map_or(HomeAction::None, HomeAction::JumpTo);
        };

        match action {
            Action::ToggleMenu => {
                self.menu_open = !self.menu_open;
                HomeAction::None
            }
            Action::Quit if self.menu_open => {
                self.menu_open = false;
                HomeAction::None
            }
            Action::Quit => HomeAction::Quit,
            Action::Login => {
                self.menu_open = false;
                HomeAction::Login
            }
            Action::GetStarted | Action::RegisterStudent => {
                self.menu_open = false;
                HomeAction::Register(Role::Student)
            }
            Action::RegisterConsultant => {
                self.menu_open = false;
                HomeAction::Register(Role::Consultant)
            }
            Action::PreviousSlide => HomeAction::PreviousSlide,
            Action::NextSlide => HomeAction::NextSlide,
            _ => HomeAction::None,
        }
    }

    /// Indicator keys `1..=n`; only indices of existing slides are produced.
    fn slide_for_digit(&self, key: KeyEvent) -> Option<usize> {
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return None;
        }
        let KeyCode::Char(c) = key.code else {
            return None;
        };
        let n = usize::try_from(c.to_digit(10)?).ok()?;
        (1..=self.slide_count).contains(&n).then(|| n - 1)
    }
}

impl HasCommands for HomeScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut hints: Vec<Keybind> = [
            (Action::Login, "Login"),
            (Action::GetStarted, "Get Started"),
            (Action::RegisterConsultant, "Consultant"),
            (Action::PreviousSlide, "Prev"),
            (Action::NextSlide, "Next"),
        ]
        .into_iter()
        .filter_map(|(action, label)| registry.keybind(KeyScope::Home, action, label))
        .collect();

        if self.slide_count > 0 {
            hints.push(
                Keybind::new(
                    KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE),
                    Action::JumpToSlide,
                    "Slide",
                )
                .with_key_display(format!("1-{}", self.slide_count)),
            );
        }

        hints.extend(
            [(Action::ToggleMenu, "Menu"), (Action::Quit, "Quit")]
                .into_iter()
                .filter_map(|(action, label)| registry.keybind(KeyScope::Home, action, label)),
        );
        hints
    }
}

/// Renders the home screen for the current carousel position.
pub struct HomeScreen<'a> {
    slides: &'a [Slide],
    index: usize,
    theme: &'a Theme,
}

impl<'a> HomeScreen<'a> {
    #[must_use]
    pub fn new(slides: &'a [Slide], index: usize, theme: &'a Theme) -> Self {
        Self {
            slides,
            index,
            theme,
        }
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let [text_area, cards_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Length(4)]).areas(area);

        let text = vec![
            Line::styled(BRAND, self.theme.title_style),
            Line::styled(TAGLINE, Style::default().add_modifier(Modifier::ITALIC)),
            Line::styled(HERO_BLURB, self.theme.dimmed_style),
        ];
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        let [_, student, consultant, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(38),
            Constraint::Max(38),
            Constraint::Fill(1),
        ])
        .spacing(2)
        .areas(cards_area);

        self.render_role_card(
            student,
            buf,
            "📖 Register as Student",
            "Find your dream university",
        );
        self.render_role_card(
            consultant,
            buf,
            "👥 Register as Consultant",
            "Help others achieve their dreams",
        );
    }

    fn render_role_card(&self, area: Rect, buf: &mut Buffer, title: &str, subtitle: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(subtitle, self.theme.dimmed_style),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);
    }

    fn render_features(&self, area: Rect, buf: &mut Buffer) {
        let [heading, columns] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        Paragraph::new(Line::styled(
            format!("Why Choose {BRAND}?"),
            self.theme.title_style,
        ))
        .alignment(Alignment::Center)
        .render(heading, buf);

        let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(columns);
        for (feature, column) in FEATURES.iter().zip(areas.iter()) {
            Paragraph::new(vec![
                Line::styled(
                    format!("{} {}", feature.icon, feature.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::styled(feature.description, self.theme.dimmed_style),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(*column, buf);
        }
    }

    fn render_about(&self, area: Rect, buf: &mut Buffer) {
        let [columns, copyright] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let [students, mentors] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(2)
                .areas(columns);

        for (rect, title, body) in [
            (students, "📖 For Students", FOR_STUDENTS),
            (mentors, "👥 For Mentors", FOR_MENTORS),
        ] {
            let block = Block::default()
                .borders(Borders::TOP)
                .border_style(self.theme.dimmed_style)
                .title(Line::styled(format!(" {title} "), self.theme.title_style));
            Paragraph::new(body)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(rect, buf);
        }

        Paragraph::new(Line::styled(COPYRIGHT, self.theme.dimmed_style))
            .alignment(Alignment::Center)
            .render(copyright, buf);
    }

    fn render_menu(area: Rect, buf: &mut Buffer, theme: &Theme, hints: &[Keybind]) {
        let lines: Vec<Line> = hints
            .iter()
            .filter(|k| matches!(k.action, Action::Login | Action::GetStarted))
            .map(|k| {
                Line::from(format!(
                    "{:<12}{}",
                    k.label,
                    FooterBar::format_key(&k.key)
                ))
            })
            .collect();

        let height = u16::try_from(lines.len()).unwrap_or(0) + 2;
        let width = 24.min(area.width);
        let popup = Rect::new(
            area.right().saturating_sub(width),
            area.y,
            width,
            height.min(area.height),
        );

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Menu "),
            )
            .render(popup, buf);
    }
}

impl StatefulWidget for HomeScreen<'_> {
    type State = HomeScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let compact = area.width < state.compact_width;
        let header_bar = HeaderBar::new(BRAND).style(HeaderBarStyle::from_theme(self.theme));
        let header_bar = if compact {
            header_bar.item("☰ Menu (m)")
        } else {
            header_bar
                .tagline(TAGLINE)
                .item("Login (i)")
                .item("Get Started (Enter)")
        };
        header_bar.render(header, buf);

        let [_, hero, carousel, features, about] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Min(9),
            Constraint::Length(4),
            Constraint::Length(8),
        ])
        .areas(body);

        self.render_hero(hero, buf);

        let [_, carousel_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(90),
            Constraint::Fill(1),
        ])
        .areas(carousel);
        CarouselView::new(self.slides, self.index, self.theme).render(
            carousel_area,
            buf,
            &mut state.transition,
        );

        self.render_features(features, buf);
        self.render_about(about, buf);

        FooterBar::new(&state.hints)
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer, buf);

        if state.menu_open {
            Self::render_menu(body, buf, self.theme, &state.hints);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::STORY_SLIDES;
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> HomeScreenState {
        HomeScreenState::new(&CommandRegistry::new(), STORY_SLIDES.len(), 80, false)
    }

    #[test_case(KeyCode::Char('i'), HomeAction::Login ; "login")]
    #[test_case(KeyCode::Enter, HomeAction::Register(Role::Student) ; "get_started")]
    #[test_case(KeyCode::Char('s'), HomeAction::Register(Role::Student) ; "student")]
    #[test_case(KeyCode::Char('c'), HomeAction::Register(Role::Consultant) ; "consultant")]
    #[test_case(KeyCode::Left, HomeAction::PreviousSlide ; "previous")]
    #[test_case(KeyCode::Char('l'), HomeAction::NextSlide ; "next")]
    #[test_case(KeyCode::Char('1'), HomeAction::JumpTo(0) ; "jump_first")]
    #[test_case(KeyCode::Char('4'), HomeAction::JumpTo(3) ; "jump_last")]
    #[test_case(KeyCode::Char('5'), HomeAction::None ; "no_fifth_indicator")]
    #[test_case(KeyCode::Char('0'), HomeAction::None ; "no_zeroth_indicator")]
    #[test_case(KeyCode::Char('q'), HomeAction::Quit ; "quit")]
    #[test_case(KeyCode::Char('z'), HomeAction::None ; "unbound")]
    fn test_handle_key(code: KeyCode, expected: HomeAction) {
        let mut state = state();
        assert_eq!(state.handle_key(key(code), &CommandRegistry::new()), expected);
    }

    #[test]
    fn test_configured_digit_wins_over_indicator() {
        let mut overrides = std::collections::HashMap::new();
        overrides.insert("2".to_string(), Action::NextSlide);
        let registry = CommandRegistry::with_overrides(&overrides);
        let mut state = state();

        assert_eq!(state.handle_key(key(KeyCode::Char('2')), &registry), HomeAction::NextSlide);
        assert_eq!(state.handle_key(key(KeyCode::Char('3')), &registry), HomeAction::JumpTo(2));
    }

    #[test]
    fn test_menu_toggle_and_escape() {
        let registry = CommandRegistry::new();
        let mut state = state();

        assert_eq!(state.handle_key(key(KeyCode::Char('m')), &registry), HomeAction::None);
        assert!(state.is_menu_open());

        assert_eq!(state.handle_key(key(KeyCode::Esc), &registry), HomeAction::None);
        assert!(!state.is_menu_open());

        state.handle_key(key(KeyCode::Char('m')), &registry);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('i')), &registry),
            HomeAction::Login
        );
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_hints_cover_indicator_range() {
        let state = state();
        let jump = state
            .hints
            .iter()
            .find(|k| k.action == Action::JumpToSlide)
            .unwrap();
        assert_eq!(jump.key_display.as_deref(), Some("1-4"));
    }

    #[test]
    fn test_render_shows_current_slide() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        let mut state = state();

        HomeScreen::new(&STORY_SLIDES, 1, &theme).render(area, &mut buf, &mut state);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Achieve Your Dreams"));
        assert!(text.contains("Register as Consultant"));
        assert!(text.contains("Get Started"));
    }

    #[test]
    fn test_compact_header_offers_menu() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 40);
        let mut buf = Buffer::empty(area);
        let mut state = state();

        HomeScreen::new(&STORY_SLIDES, 0, &theme).render(area, &mut buf, &mut state);

        let header: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(header.contains("Menu (m)"));
        assert!(!header.contains("Login (i)"));
    }
}
