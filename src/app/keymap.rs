use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    // Action name -> key, e.g. `next = "ctrl-j"`. Applies while editing.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Keys not listed here are typed into the name field
    pub editing: HashMap<KeyEvent, Action>,
    pub released: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut editing = HashMap::new();
        let mut released = HashMap::new();

        // --- Editing ---
        editing.insert(key(KeyCode::Down), Action::HighlightNext);
        editing.insert(key(KeyCode::Up), Action::HighlightPrev);
        editing.insert(key(KeyCode::Enter), Action::Submit);
        editing.insert(key(KeyCode::Esc), Action::CloseCandidates);
        editing.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        editing.insert(ctrl('c'), Action::Quit);

        match config.profile.as_str() {
            "emacs" => {
                editing.insert(ctrl('n'), Action::HighlightNext);
                editing.insert(ctrl('p'), Action::HighlightPrev);
                editing.insert(ctrl('g'), Action::CloseCandidates);
            }
            "default" => {}
            other => tracing::warn!(profile = other, "unknown key profile, using default"),
        }

        if let Some(custom) = &config.custom {
            for (name, spec) in custom {
                match (action_by_name(name), parse_key(spec)) {
                    (Some(action), Some(event)) => {
                        editing.insert(event, action);
                    }
                    _ => tracing::warn!(action = %name, key = %spec, "ignoring key binding"),
                }
            }
        }

        // --- Released (focus elsewhere) ---
        released.insert(key(KeyCode::Char('q')), Action::Quit);
        released.insert(ctrl('c'), Action::Quit);
        released.insert(key(KeyCode::Enter), Action::FocusInput);
        released.insert(key(KeyCode::Tab), Action::FocusInput);
        released.insert(key(KeyCode::Char('i')), Action::FocusInput);
        released.insert(key(KeyCode::Char('/')), Action::FocusInput);
        released.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        released.insert(key(KeyCode::F(1)), Action::ToggleHelp);

        Self { editing, released }
    }

    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let event = KeyEvent::new(event.code, normalize_modifiers(event));
        match mode {
            AppMode::Editing => self.editing.get(&event).cloned(),
            AppMode::Released => self.released.get(&event).cloned(),
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// Terminals report '?' as Shift+'?'; bindings are stored without Shift for printable chars.
fn normalize_modifiers(event: KeyEvent) -> KeyModifiers {
    match event.code {
        KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
        _ => event.modifiers,
    }
}

fn action_by_name(name: &str) -> Option<Action> {
    match name {
        "next" => Some(Action::HighlightNext),
        "prev" => Some(Action::HighlightPrev),
        "submit" => Some(Action::Submit),
        "close" => Some(Action::CloseCandidates),
        "help" => Some(Action::ToggleHelp),
        "quit" => Some(Action::Quit),
        _ => None,
    }
}

/// Parse `"ctrl-n"`, `"alt-x"`, `"down"`, `"f2"`, `"x"` into a key event.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim().to_lowercase();
    let mut modifiers = KeyModifiers::empty();
    let mut rest = spec.as_str();
    loop {
        if let Some(r) = rest.strip_prefix("ctrl-") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt-") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return None,
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}
