//! Key bindings
//!
//! Maps terminal key events to application actions. Bindings are written as
//! short strings (`n`, `N`, `ctrl+d`, `pagedown`) so they can live in the
//! config file.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{ConfigError, KeysConfig};
use crate::navigator::NavAction;

/// Everything a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NextDiff,
    PrevDiff,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    Top,
    Bottom,
    NextPage,
    PrevPage,
    ToggleWrap,
    Help,
    Quit,
}

impl Action {
    /// All actions, in help-screen order
    pub const ALL: [Action; 13] = [
        Action::NextDiff,
        Action::PrevDiff,
        Action::ScrollDown,
        Action::ScrollUp,
        Action::HalfPageDown,
        Action::HalfPageUp,
        Action::Top,
        Action::Bottom,
        Action::NextPage,
        Action::PrevPage,
        Action::ToggleWrap,
        Action::Help,
        Action::Quit,
    ];

    /// The navigator direction for diff keys
    pub fn nav(self) -> Option<NavAction> {
        match self {
            Action::NextDiff => Some(NavAction::Next),
            Action::PrevDiff => Some(NavAction::Previous),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::NextDiff => "Next diff",
            Action::PrevDiff => "Previous diff",
            Action::ScrollDown => "Scroll down",
            Action::ScrollUp => "Scroll up",
            Action::HalfPageDown => "Half page down",
            Action::HalfPageUp => "Half page up",
            Action::Top => "Go to top",
            Action::Bottom => "Go to bottom",
            Action::NextPage => "Next page",
            Action::PrevPage => "Previous page",
            Action::ToggleWrap => "Toggle line wrap",
            Action::Help => "Toggle this help",
            Action::Quit => "Quit",
        }
    }
}

/// A single key, optionally with modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    /// Whether a key event triggers this binding.
    ///
    /// Shift is ignored for character keys: terminals report `N` as
    /// `Char('N')` with or without the shift flag.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }

        let mut modifiers = key.modifiers;
        if matches!(key.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        modifiers == self.modifiers
    }
}

impl FromStr for KeyBinding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidKey(s.to_string());

        // A lone "+" is the plus key, not a separator
        let (prefix, key) = match s.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None if s == "+" => ("", "+"),
            None => match s.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", s),
            },
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.split('+').filter(|p| !p.is_empty()) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "c" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "meta" | "m" => modifiers |= KeyModifiers::ALT,
                "shift" | "s" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            }
        }

        let mut chars = key.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            (None, _) => return Err(invalid()),
            _ => match key.to_ascii_lowercase().as_str() {
                "space" => KeyCode::Char(' '),
                "esc" | "escape" => KeyCode::Esc,
                "enter" | "return" => KeyCode::Enter,
                "tab" => KeyCode::Tab,
                "backtab" => KeyCode::BackTab,
                "backspace" => KeyCode::Backspace,
                "up" => KeyCode::Up,
                "down" => KeyCode::Down,
                "left" => KeyCode::Left,
                "right" => KeyCode::Right,
                "pageup" => KeyCode::PageUp,
                "pagedown" => KeyCode::PageDown,
                "home" => KeyCode::Home,
                "end" => KeyCode::End,
                other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    Some(n) if (1..=12).contains(&n) => KeyCode::F(n),
                    _ => return Err(invalid()),
                },
            },
        };

        // shift+n is spelled N on the wire
        let code = match code {
            KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => {
                modifiers.remove(KeyModifiers::SHIFT);
                KeyCode::Char(c.to_ascii_uppercase())
            }
            other => other,
        };

        Ok(Self::new(code, modifiers))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "Shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Esc => write!(f, "Esc"),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::BackTab => write!(f, "BackTab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::PageUp => write!(f, "PgUp"),
            KeyCode::PageDown => write!(f, "PgDn"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::F(n) => write!(f, "F{}", n),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Ordered list of bindings; the first match wins
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, Action)>,
}

impl Default for Keymap {
    fn default() -> Self {
        // Defaults cannot fail to parse
        Self::from_config(&KeysConfig::default()).unwrap_or_else(|_| Self {
            bindings: vec![
                (KeyBinding::char('n'), Action::NextDiff),
                (KeyBinding::char('N'), Action::PrevDiff),
                (KeyBinding::char('q'), Action::Quit),
            ],
        })
    }
}

impl Keymap {
    /// Build a keymap from the `keys` config section
    pub fn from_config(keys: &KeysConfig) -> Result<Self, ConfigError> {
        let mut bindings = Vec::new();
        for action in Action::ALL {
            for spec in keys.bindings_for(action) {
                bindings.push((spec.parse::<KeyBinding>()?, action));
            }
        }
        Ok(Self { bindings })
    }

    /// Classify a key event. Unbound keys yield `None`.
    pub fn action(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| *action)
    }

    /// All keys bound to an action
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = &KeyBinding> {
        self.bindings
            .iter()
            .filter(move |(_, a)| *a == action)
            .map(|(binding, _)| binding)
    }

    /// Short label such as `j/↓` for footers and help
    pub fn label(&self, action: Action) -> String {
        let keys: Vec<String> = self.keys_for(action).map(|k| k.to_string()).collect();
        if keys.is_empty() {
            "-".to_string()
        } else {
            keys.join("/")
        }
    }
}
