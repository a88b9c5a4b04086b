//! Role dashboard: action grid, side panel and logout.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tracing::info;

use crate::domain::entities::{
    BRAND, CompletionStatus, DashboardContent, QuickAction, SidePanel,
};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::Role;
use crate::presentation::commands::{CommandRegistry, HasCommands, KeyScope};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, StatusBar,
};

const GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Logout,
    Quit,
}

/// Dashboard for an authenticated session.
pub struct DashboardScreen {
    role: Option<Role>,
    content: DashboardContent,
    selected: usize,
    status: Option<StatusBar>,
    hints: Vec<Keybind>,
    theme: Theme,
}

impl DashboardScreen {
    /// A session signed in without choosing a role gets the consultant layout.
    #[must_use]
    pub fn new(role: Option<Role>, registry: &CommandRegistry, theme: Theme) -> Self {
        let shown = role.unwrap_or(Role::Consultant);
        let mut screen = Self {
            role,
            content: DashboardContent::for_role(shown),
            selected: 0,
            status: None,
            hints: Vec::new(),
            theme,
        };
        screen.hints = screen.get_commands(registry);
        screen
    }

    fn shown_role(&self) -> Role {
        self.role.unwrap_or(Role::Consultant)
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_action(&self) -> QuickAction {
        self.content.actions[self.selected]
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusBar> {
        self.status.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> DashboardAction {
        let count = self.content.actions.len();
        let (row, col) = (self.selected / GRID_COLUMNS, self.selected % GRID_COLUMNS);

        match registry.find_action(KeyScope::Dashboard, key) {
            Some(Action::NavigateUp) => self.select(row.saturating_sub(1), col, count),
            Some(Action::NavigateDown) => self.select(row + 1, col, count),
            Some(Action::NavigateLeft) => self.select(row, col.saturating_sub(1), count),
            Some(Action::NavigateRight) => {
                self.select(row, (col + 1).min(GRID_COLUMNS - 1), count);
            }
            Some(Action::Select) => {
                let action = self.selected_action();
                info!(action = action.label, "Placeholder dashboard action selected");
                self.status = Some(StatusBar::new(format!(
                    "{} is coming soon",
                    action.label
                )));
            }
            Some(Action::Logout) => return DashboardAction::Logout,
            Some(Action::Quit) => return DashboardAction::Quit,
            _ => {}
        }

        DashboardAction::None
    }

    fn select(&mut self, row: usize, col: usize, count: usize) {
        let index = row * GRID_COLUMNS + col;
        if index < count {
            self.selected = index;
            self.status = None;
        }
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Line::styled(
                format!(" {} ", self.content.actions_title),
                self.theme.title_style,
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(1)
            .split(inner);
        for (i, action) in self.content.actions.iter().enumerate() {
            let Some(row) = rows.get(i / GRID_COLUMNS) else {
                continue;
            };
            let cols = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(2)
                .split(*row);
            self.render_tile(cols[i % GRID_COLUMNS], buf, action, i == self.selected);
        }
    }

    fn render_tile(&self, area: Rect, buf: &mut Buffer, action: &QuickAction, selected: bool) {
        let (border, text) = if selected {
            (
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
                self.theme.selection_style,
            )
        } else {
            (self.theme.dimmed_style, self.theme.base_style)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::raw(action.icon),
            Line::styled(action.label, text),
        ])
        .alignment(Alignment::Center)
        .render(content, buf);
    }

    fn render_side_panel(&self, area: Rect, buf: &mut Buffer) {
        let panel = self.content.side_panel;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.dimmed_style)
            .title(Line::styled(format!(" {} ", panel.title()), self.theme.title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        match panel {
            SidePanel::News(items) => {
                let mut lines = Vec::with_capacity(items.len() * 3);
                for item in items {
                    lines.push(Line::styled(
                        item.headline,
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                    lines.push(Line::styled(item.body, self.theme.dimmed_style));
                    lines.push(Line::raw(""));
                }
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            SidePanel::ProfileCompletion(items) => {
                let rows = Layout::vertical(vec![Constraint::Length(1); items.len()])
                    .spacing(1)
                    .split(inner);
                for (item, row) in items.iter().zip(rows.iter()) {
                    let badge = item.status.label();
                    let badge_style = match item.status {
                        CompletionStatus::Complete => self.theme.complete_badge,
                        CompletionStatus::Pending => self.theme.pending_badge,
                    };
                    let badge_width = u16::try_from(badge.len() + 2).unwrap_or(u16::MAX);
                    let [label_area, badge_area] = Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Length(badge_width),
                    ])
                    .areas(*row);

                    Paragraph::new(item.label).render(label_area, buf);
                    Paragraph::new(Span::styled(format!(" {badge} "), badge_style))
                        .render(badge_area, buf);
                }
            }
        }
    }
}

impl HasCommands for DashboardScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut hints: Vec<Keybind> = registry
            .keybind(KeyScope::Dashboard, Action::NavigateUp, "Move")
            .map(|k| k.with_key_display("←↑↓→"))
            .into_iter()
            .collect();

        hints.extend(
            [
                (Action::Select, "Open"),
                (Action::Logout, "Logout"),
                (Action::Quit, "Quit"),
            ]
            .into_iter()
            .filter_map(|(action, label)| registry.keybind(KeyScope::Dashboard, action, label)),
        );
        hints
    }
}

impl Widget for &DashboardScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, _, heading, _, body, status, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let role = self.shown_role();
        let avatar = format!("( {} )", role.initial());
        let logout = self
            .hints
            .iter()
            .find(|k| k.action == Action::Logout)
            .map(|k| format!("Logout ({})", FooterBar::format_key(&k.key)))
            .unwrap_or_else(|| "Logout".to_string());

        HeaderBar::new(BRAND)
            .style(HeaderBarStyle::from_theme(&self.theme))
            .item("🔔")
            .item(&avatar)
            .item(&logout)
            .render(header, buf);

        Paragraph::new(vec![
            Line::styled(
                format!("Welcome to your {} Dashboard", role.title()),
                self.theme.title_style,
            ),
            Line::styled(role.dashboard_tagline(), self.theme.dimmed_style),
        ])
        .alignment(Alignment::Center)
        .render(heading, buf);

        let [_, actions, side, _] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Percentage(64),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .spacing(1)
        .areas(body);
        self.render_actions(actions, buf);
        self.render_side_panel(side, buf);

        if let Some(status_bar) = &self.status {
            status_bar.render(status, buf);
        }

        FooterBar::new(&self.hints)
            .right_info(Some(role.title()))
            .style(FooterBarStyle::from_theme(&self.theme))
            .render(footer, buf);
    }
}
