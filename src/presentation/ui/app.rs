//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::application::{AuthSubmission, Autoplay, AutoplayTick, ViewController};
use crate::domain::Screen;
use crate::infrastructure::AppConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    DashboardAction, DashboardScreen, FormAction, HomeAction, HomeScreen, HomeScreenState,
    LoginScreen, RegisterScreen,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AutoplayTick(AutoplayTick),
}

impl From<AutoplayTick> for Action {
    fn from(tick: AutoplayTick) -> Self {
        Self::AutoplayTick(tick)
    }
}

enum CurrentScreen {
    Home(Box<HomeScreenState>),
    Login(Box<LoginScreen>),
    Register(Box<RegisterScreen>),
    Dashboard(Box<DashboardScreen>),
}

pub struct App {
    controller: ViewController,
    screen: CurrentScreen,
    mounted: Screen,
    commands: CommandRegistry,
    theme: Theme,
    autoplay: Option<Autoplay>,
    autoplay_enabled: bool,
    autoplay_period: Duration,
    generation: u64,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    enable_animations: bool,
    compact_width: u16,
    exiting: bool,
}

impl App {
    /// Builds the app on the home screen. Must be called inside a tokio
    /// runtime because mounting home starts the autoplay task.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let commands = CommandRegistry::with_overrides(&config.keybindings);
        let controller = ViewController::new();
        let home = HomeScreenState::new(
            &commands,
            controller.carousel().len(),
            config.ui.compact_width,
            config.ui.enable_animations,
        );

        let mut app = Self {
            controller,
            screen: CurrentScreen::Home(Box::new(home)),
            mounted: Screen::Home,
            commands,
            theme: Theme::new(&config.theme.accent_color),
            autoplay: None,
            autoplay_enabled: config.ui.autoplay,
            autoplay_period: config.ui.autoplay_interval(),
            generation: 0,
            action_tx,
            action_rx,
            enable_animations: config.ui.enable_animations,
            compact_width: config.ui.compact_width,
            exiting: false,
        };
        app.start_autoplay();
        app
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);
        animation_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let animating = self.is_animating();

            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick(), if animating => {
                    self.tick_animation(ANIMATION_TICK_RATE);
                    terminal.draw(|frame| self.render(frame))?;
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.exiting = true;
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.exiting = true,
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.autoplay = None;
        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            CurrentScreen::Home(state) => {
                let carousel = self.controller.carousel();
                frame.render_stateful_widget(
                    HomeScreen::new(carousel.slides(), carousel.index(), &self.theme),
                    area,
                    state.as_mut(),
                );
            }
            CurrentScreen::Login(screen) => frame.render_widget(&**screen, area),
            CurrentScreen::Register(screen) => frame.render_widget(&**screen, area),
            CurrentScreen::Dashboard(screen) => frame.render_widget(&**screen, area),
        }
    }

    fn is_animating(&self) -> bool {
        matches!(&self.screen, CurrentScreen::Home(state) if state.is_animating())
    }

    fn tick_animation(&mut self, duration: Duration) {
        if let CurrentScreen::Home(state) = &mut self.screen {
            state.tick(duration);
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::AutoplayTick(tick) => {
                let current = self
                    .autoplay
                    .as_ref()
                    .is_some_and(|autoplay| autoplay.generation() == tick.generation);
                if !current || self.mounted != Screen::Home {
                    debug!(generation = tick.generation, "Discarding stale autoplay tick");
                    return;
                }
                self.controller.advance();
                self.slide_changed();
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_force_quit(&key) {
            return EventResult::Exit;
        }

        let result = match &mut self.screen {
            CurrentScreen::Home(state) => {
                let action = state.handle_key(key, &self.commands);
                self.apply_home_action(action)
            }
            CurrentScreen::Login(screen) => match screen.handle_key(key, &self.commands) {
                FormAction::Submit => {
                    let submission = screen.submission();
                    self.submit(&submission);
                    EventResult::Consumed
                }
                FormAction::GoHome => {
                    self.controller.go_home();
                    EventResult::Consumed
                }
                FormAction::None => EventResult::Continue,
            },
            CurrentScreen::Register(screen) => match screen.handle_key(key, &self.commands) {
                FormAction::Submit => {
                    let submission = screen.submission();
                    self.submit(&submission);
                    EventResult::Consumed
                }
                FormAction::GoHome => {
                    self.controller.go_home();
                    EventResult::Consumed
                }
                FormAction::None => EventResult::Continue,
            },
            CurrentScreen::Dashboard(screen) => match screen.handle_key(key, &self.commands) {
                DashboardAction::Logout => {
                    self.controller.logout();
                    EventResult::Consumed
                }
                DashboardAction::Quit => EventResult::Exit,
                DashboardAction::None => EventResult::Continue,
            },
        };

        self.sync_screen();
        result
    }

    fn apply_home_action(&mut self, action: HomeAction) -> EventResult {
        match action {
            HomeAction::None => return EventResult::Continue,
            HomeAction::Quit => return EventResult::Exit,
            HomeAction::Login => self.controller.go_login(),
            HomeAction::Register(role) => self.controller.start_registration(role),
            HomeAction::PreviousSlide => {
                self.controller.retreat();
                self.slide_changed();
            }
            HomeAction::NextSlide => {
                self.controller.advance();
                self.slide_changed();
            }
            HomeAction::JumpTo(index) => match self.controller.jump_to(index) {
                Ok(()) => self.slide_changed(),
                Err(e) => warn!(error = %e, "Ignoring slide jump"),
            },
        }
        EventResult::Consumed
    }

    /// Any submission signs the visitor in; credentials are not checked.
    fn submit(&mut self, submission: &AuthSubmission) {
        info!(
            source = %submission.source,
            blank = submission.is_blank(),
            "Auth form submitted"
        );
        self.controller.complete_auth();
    }

    fn slide_changed(&mut self) {
        if let CurrentScreen::Home(state) = &mut self.screen {
            state.slide_changed();
        }
    }

    /// What the session currently shows. A dashboard without a signed-in
    /// session, or a registration without a role, falls back to home.
    fn visible_screen(&self) -> Screen {
        match self.controller.screen() {
            Screen::Dashboard if !self.controller.is_authenticated() => Screen::Home,
            Screen::Register if self.controller.role().is_none() => Screen::Home,
            screen => screen,
        }
    }

    fn sync_screen(&mut self) {
        let target = self.visible_screen();
        if target != self.mounted {
            self.mount(target);
        }
    }

    fn mount(&mut self, target: Screen) {
        // Dropping the handle aborts the old timer.
        self.autoplay = None;

        self.screen = match (target, self.controller.role()) {
            (Screen::Login, _) => {
                CurrentScreen::Login(Box::new(LoginScreen::new(&self.commands, self.theme)))
            }
            (Screen::Register, Some(role)) => CurrentScreen::Register(Box::new(
                RegisterScreen::new(role, &self.commands, self.theme),
            )),
            (Screen::Dashboard, role) => CurrentScreen::Dashboard(Box::new(DashboardScreen::new(
                role,
                &self.commands,
                self.theme,
            ))),
            _ => CurrentScreen::Home(Box::new(self.home_state())),
        };
        self.mounted = target;

        if target == Screen::Home {
            self.start_autoplay();
        }
        debug!(screen = %target, role = ?self.controller.role(), "Mounted screen");
    }

    fn home_state(&self) -> HomeScreenState {
        HomeScreenState::new(
            &self.commands,
            self.controller.carousel().len(),
            self.compact_width,
            self.enable_animations,
        )
    }

    fn start_autoplay(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.autoplay_enabled {
            self.autoplay = Some(Autoplay::start(
                self.autoplay_period,
                self.generation,
                self.action_tx.clone(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, SessionState};
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    fn registration_role(app: &App) -> Option<Role> {
        match &app.screen {
            CurrentScreen::Register(screen) => Some(screen.role()),
            _ => None,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[tokio::test]
    async fn test_starts_on_home_with_autoplay() {
        let app = app();
        assert_eq!(app.mounted, Screen::Home);
        assert!(matches!(app.screen, CurrentScreen::Home(_)));
        assert_eq!(app.autoplay.as_ref().map(Autoplay::generation), Some(1));
        assert_eq!(app.controller.session(), SessionState::default());
    }

    #[tokio::test]
    async fn test_student_registration_to_dashboard_and_logout() {
        let mut app = app();

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.mounted, Screen::Register);
        assert_eq!(registration_role(&app), Some(Role::Student));
        assert!(app.autoplay.is_none());

        type_text(&mut app, "Amina");
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Enter));
        }
        assert_eq!(app.mounted, Screen::Dashboard);
        assert!(app.controller.is_authenticated());
        assert_eq!(app.controller.role(), Some(Role::Student));

        app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(app.mounted, Screen::Home);
        assert!(!app.controller.is_authenticated());
        assert_eq!(app.controller.role(), None);
        assert_eq!(app.autoplay.as_ref().map(Autoplay::generation), Some(2));
    }

    #[tokio::test]
    async fn test_login_without_role() {
        let mut app = app();

        app.handle_key(key(KeyCode::Char('i')));
        assert_eq!(app.mounted, Screen::Login);

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mounted, Screen::Dashboard);
        assert!(app.controller.is_authenticated());
        assert_eq!(app.controller.role(), None);
    }

    #[tokio::test]
    async fn test_escape_from_form_keeps_role() {
        let mut app = app();

        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mounted, Screen::Home);
        assert_eq!(app.controller.role(), Some(Role::Consultant));
        assert!(!app.controller.is_authenticated());
    }

    #[tokio::test]
    async fn test_form_is_fresh_on_reentry() {
        let mut app = app();

        app.handle_key(key(KeyCode::Char('i')));
        type_text(&mut app, "typed");
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('i')));

        let CurrentScreen::Login(screen) = &app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(screen.form().value(0), "");
    }

    #[tokio::test]
    async fn test_carousel_keys() {
        let mut app = app();

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.controller.carousel().index(), 3);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.controller.carousel().index(), 0);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.controller.carousel().index(), 2);
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.controller.carousel().index(), 2);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);

        app.handle_key(key(KeyCode::Char('i')));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Continue);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
    }

    #[tokio::test]
    async fn test_key_release_ignored() {
        let mut app = app();
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('i'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(app.handle_key(release), EventResult::Continue);
        assert_eq!(app.mounted, Screen::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_advances_home_carousel() {
        let mut app = app();

        for expected in 1..=3 {
            let action = app.action_rx.recv().await.unwrap();
            app.handle_action(action);
            assert_eq!(app.controller.carousel().index(), expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_keeps_autoplay_cadence() {
        let start = tokio::time::Instant::now();
        let mut app = app();

        tokio::time::sleep(Duration::from_millis(3900)).await;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.controller.carousel().index(), 1);

        let action = app.action_rx.recv().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(4000));
        app.handle_action(action);
        assert_eq!(app.controller.carousel().index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_ticks_then_retreat() {
        let start = tokio::time::Instant::now();
        let mut app = app();

        for _ in 0..3 {
            let action = app.action_rx.recv().await.unwrap();
            app.handle_action(action);
        }
        assert_eq!(start.elapsed(), Duration::from_secs(12));
        assert_eq!(app.controller.carousel().index(), 3);

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.controller.carousel().index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_tick_after_unmount_is_ignored() {
        let mut app = app();
        tokio::time::sleep(Duration::from_millis(4100)).await;

        app.handle_key(key(KeyCode::Char('i')));
        let queued = app.action_rx.try_recv().unwrap();
        app.handle_action(queued);
        assert_eq!(app.controller.carousel().index(), 0);

        app.handle_key(key(KeyCode::Esc));
        app.handle_action(queued);
        assert_eq!(app.controller.carousel().index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_disabled() {
        let mut config = AppConfig::default();
        config.ui.autoplay = false;
        let mut app = App::new(&config);

        assert!(app.autoplay.is_none());
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_renders_every_screen() {
        let mut app = app();
        let backend = ratatui::backend::TestBackend::new(100, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();

        terminal.draw(|f| app.render(f)).unwrap();
        app.handle_key(key(KeyCode::Char('c')));
        terminal.draw(|f| app.render(f)).unwrap();
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Enter));
        }
        terminal.draw(|f| app.render(f)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Consultant Dashboard"));
    }
}
