use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Screen family a binding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    Home,
    Form,
    Dashboard,
}

impl KeyScope {
    const ALL: [Self; 3] = [Self::Home, Self::Form, Self::Dashboard];
}

pub struct CommandRegistry {
    display_bindings: HashMap<(KeyScope, Action), KeyEvent>,
    input_bindings: Vec<(KeyScope, KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |scope: KeyScope, action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert((scope, action), key);
            }
            input_bindings.push((scope, key, action));
        };

        let plain = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let code = |c: KeyCode| KeyEvent::new(c, KeyModifiers::NONE);

        // Home
        register(KeyScope::Home, Action::Login, plain('i'), true);
        register(KeyScope::Home, Action::GetStarted, code(KeyCode::Enter), true);
        register(KeyScope::Home, Action::RegisterStudent, plain('s'), true);
        register(KeyScope::Home, Action::RegisterConsultant, plain('c'), true);
        register(KeyScope::Home, Action::PreviousSlide, code(KeyCode::Left), true);
        register(KeyScope::Home, Action::PreviousSlide, plain('h'), false);
        register(KeyScope::Home, Action::NextSlide, code(KeyCode::Right), true);
        register(KeyScope::Home, Action::NextSlide, plain('l'), false);
        register(KeyScope::Home, Action::ToggleMenu, plain('m'), true);
        register(KeyScope::Home, Action::Quit, plain('q'), true);
        register(KeyScope::Home, Action::Quit, code(KeyCode::Esc), false);

        // Forms
        register(KeyScope::Form, Action::Submit, code(KeyCode::Enter), true);
        register(KeyScope::Form, Action::FocusNext, code(KeyCode::Tab), true);
        register(KeyScope::Form, Action::FocusNext, code(KeyCode::Down), false);
        register(
            KeyScope::Form,
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(KeyScope::Form, Action::FocusPrevious, code(KeyCode::Up), false);
        register(KeyScope::Form, Action::GoHome, code(KeyCode::Esc), true);

        // Dashboard
        register(KeyScope::Dashboard, Action::NavigateUp, code(KeyCode::Up), true);
        register(KeyScope::Dashboard, Action::NavigateUp, plain('k'), false);
        register(KeyScope::Dashboard, Action::NavigateDown, code(KeyCode::Down), true);
        register(KeyScope::Dashboard, Action::NavigateDown, plain('j'), false);
        register(KeyScope::Dashboard, Action::NavigateLeft, code(KeyCode::Left), true);
        register(KeyScope::Dashboard, Action::NavigateLeft, plain('h'), false);
        register(KeyScope::Dashboard, Action::NavigateRight, code(KeyCode::Right), true);
        register(KeyScope::Dashboard, Action::NavigateRight, plain('l'), false);
        register(KeyScope::Dashboard, Action::Select, code(KeyCode::Enter), true);
        register(KeyScope::Dashboard, Action::Select, plain(' '), false);
        register(
            KeyScope::Dashboard,
            Action::Logout,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            true,
        );
        register(KeyScope::Dashboard, Action::Logout, plain('o'), false);
        register(KeyScope::Dashboard, Action::Quit, plain('q'), true);

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default registry with user overrides from the config file.
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();
        for (key_str, action) in overrides {
            match parse_key(key_str) {
                Some(key) => {
                    registry.bind(key, *action);
                }
                None => warn!(key = %key_str, "Ignoring unparseable keybinding"),
            }
        }
        registry
    }

    /// Binds `key` to `action` in every scope that already knows `action`.
    /// The new binding wins over defaults and becomes the displayed one.
    /// Returns false when no scope took the binding.
    pub fn bind(&mut self, key: KeyEvent, action: Action) -> bool {
        let mut bound = false;
        for scope in KeyScope::ALL {
            let known = self
                .input_bindings
                .iter()
                .any(|(s, _, a)| *s == scope && *a == action);
            if !known {
                continue;
            }
            if scope == KeyScope::Form && is_text_key(&key) {
                debug!(?key, ?action, "Skipping text key override in form scope");
                continue;
            }
            self.input_bindings.insert(0, (scope, key, action));
            self.display_bindings.insert((scope, action), key);
            bound = true;
        }
        if !bound {
            warn!(?key, ?action, "Keybinding override applies to no screen, ignoring");
        }
        bound
    }

    pub fn get(&self, scope: KeyScope, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&(scope, action)).copied()
    }

    pub fn find_action(&self, scope: KeyScope, key: KeyEvent) -> Option<Action> {
        let wanted = normalize(key);
        self.input_bindings
            .iter()
            .find(|(s, k, _)| *s == scope && normalize(*k) == wanted)
            .map(|(_, _, a)| *a)
    }

    /// Footer hint for `action`, if it has a displayed binding in `scope`.
    pub fn keybind(
        &self,
        scope: KeyScope,
        action: Action,
        label: &'static str,
    ) -> Option<Keybind> {
        self.get(scope, action)
            .map(|key| Keybind::new(key, action, label))
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

/// Shift is implied by the character itself and `BackTab` always carries it.
fn normalize(key: KeyEvent) -> (KeyCode, KeyModifiers) {
    let mut modifiers = key.modifiers;
    if matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    (key.code, modifiers)
}

fn is_text_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// Parses strings like `Ctrl+q`, `Alt+Enter`, `Shift+Tab`, `F5` or `n`.
#[must_use]
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (mods_part, key_part) = match s.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods_part.split('+').filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" | "a" => modifiers |= KeyModifiers::ALT,
            "shift" | "s" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let mut chars = key_part.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match key_part.to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "space" => KeyCode::Char(' '),
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            other => {
                let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                KeyCode::F(n)
            }
        },
    };

    Some(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Ctrl+q", KeyCode::Char('q'), KeyModifiers::CONTROL ; "ctrl_char")]
    #[test_case("alt+Enter", KeyCode::Enter, KeyModifiers::ALT ; "alt_enter")]
    #[test_case("Shift+Tab", KeyCode::BackTab, KeyModifiers::SHIFT ; "shift_tab")]
    #[test_case("F5", KeyCode::F(5), KeyModifiers::NONE ; "function_key")]
    #[test_case("n", KeyCode::Char('n'), KeyModifiers::NONE ; "plain_char")]
    #[test_case("Ctrl++", KeyCode::Char('+'), KeyModifiers::CONTROL ; "plus_key")]
    #[test_case("Space", KeyCode::Char(' '), KeyModifiers::NONE ; "space")]
    fn test_parse_key(input: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key(input), Some(KeyEvent::new(code, modifiers)));
    }

    #[test_case("" ; "empty")]
    #[test_case("Hyper+x" ; "unknown_modifier")]
    #[test_case("F13" ; "function_out_of_range")]
    #[test_case("Banana" ; "unknown_name")]
    fn test_parse_key_rejects(input: &str) {
        assert_eq!(parse_key(input), None);
    }

    #[test]
    fn test_scoped_lookup() {
        let registry = CommandRegistry::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(
            registry.find_action(KeyScope::Home, enter),
            Some(Action::GetStarted)
        );
        assert_eq!(
            registry.find_action(KeyScope::Form, enter),
            Some(Action::Submit)
        );
        assert_eq!(
            registry.find_action(KeyScope::Dashboard, enter),
            Some(Action::Select)
        );
    }

    #[test]
    fn test_backtab_matches_without_shift() {
        let registry = CommandRegistry::new();
        let backtab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(
            registry.find_action(KeyScope::Form, backtab),
            Some(Action::FocusPrevious)
        );
    }

    #[test]
    fn test_override_takes_priority() {
        let mut overrides = HashMap::new();
        overrides.insert("n".to_string(), Action::NextSlide);
        overrides.insert("Ctrl+q".to_string(), Action::Quit);
        overrides.insert("Nope+x".to_string(), Action::Quit);

        let registry = CommandRegistry::with_overrides(&overrides);

        let n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(
            registry.find_action(KeyScope::Home, n),
            Some(Action::NextSlide)
        );
        assert_eq!(registry.get(KeyScope::Home, Action::NextSlide), Some(n));
        assert_eq!(
            registry.find_action(KeyScope::Dashboard, ctrl_q),
            Some(Action::Quit)
        );
        assert_eq!(registry.find_action(KeyScope::Form, ctrl_q), None);
        // Defaults stay reachable.
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            registry.find_action(KeyScope::Home, right),
            Some(Action::NextSlide)
        );
    }

    #[test]
    fn test_text_override_skipped_in_forms() {
        let mut registry = CommandRegistry::new();
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(!registry.bind(x, Action::GoHome));
        assert_eq!(registry.find_action(KeyScope::Form, x), None);
    }

    #[test]
    fn test_unscoped_action_binds_nothing() {
        let mut registry = CommandRegistry::new();
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert!(!registry.bind(x, Action::JumpToSlide));
        for scope in KeyScope::ALL {
            assert_eq!(registry.find_action(scope, x), None);
        }
        assert!(registry.bind(x, Action::Logout));
    }
}
