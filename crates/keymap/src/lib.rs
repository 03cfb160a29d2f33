//! Key bindings for sibling cycling.
//!
//! This crate provides:
//! - `KeyBinding` with parsing from `"alt+]"`-style strings
//! - `CycleAction` for the two navigation commands
//! - `CycleKeymap` mapping key events to actions
//!
//! ```text
//! KeyEvent → CycleKeymap → Option<CycleAction> → advance / retreat
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use namesake_config::KeySettings;

// ============================================================================
// Key Binding Types
// ============================================================================

/// A key binding specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// The key code (e.g., Char(']'), Right, F5)
    pub code: KeyCode,
    /// Required modifiers (e.g., ALT, CONTROL)
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create an Alt+key binding.
    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl FromStr for KeyBinding {
    type Err = anyhow::Error;

    /// Parse `"ctrl+alt+right"`, `"alt+]"`, `"alt++"`, `"f5"`.
    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim();
        if spec.is_empty() {
            bail!("Empty key binding");
        }

        let (modifier_part, key_part) = if let Some(rest) = spec.strip_suffix("++") {
            (rest, "+")
        } else {
            spec.rsplit_once('+').unwrap_or(("", spec))
        };

        let mut modifiers = KeyModifiers::NONE;
        for name in modifier_part.split('+').filter(|m| !m.is_empty()) {
            modifiers |= parse_modifier(name)
                .with_context(|| format!("Invalid key binding: {}", s))?;
        }

        let code = parse_key_code(key_part).with_context(|| format!("Invalid key binding: {}", s))?;
        Ok(Self::new(code, modifiers))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "f{}", n),
            KeyCode::Left => f.write_str("left"),
            KeyCode::Right => f.write_str("right"),
            KeyCode::Up => f.write_str("up"),
            KeyCode::Down => f.write_str("down"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::BackTab => f.write_str("backtab"),
            KeyCode::PageUp => f.write_str("pageup"),
            KeyCode::PageDown => f.write_str("pagedown"),
            KeyCode::Home => f.write_str("home"),
            KeyCode::End => f.write_str("end"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Esc => f.write_str("esc"),
            other => write!(f, "{:?}", other),
        }
    }
}

fn parse_modifier(name: &str) -> Result<KeyModifiers> {
    match name.to_lowercase().as_str() {
        "ctrl" | "control" => Ok(KeyModifiers::CONTROL),
        "alt" | "meta" => Ok(KeyModifiers::ALT),
        "shift" => Ok(KeyModifiers::SHIFT),
        other => Err(anyhow!("Unknown modifier: {}", other)),
    }
}

fn parse_key_code(name: &str) -> Result<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = name.to_lowercase();
    let code = match lower.as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n) if (1..=12).contains(&n) => KeyCode::F(n),
            _ => bail!("Unknown key: {}", name),
        },
    };
    Ok(code)
}

// ============================================================================
// Cycle Actions
// ============================================================================

/// Navigation commands that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleAction {
    /// Move to the next sibling document
    Advance,
    /// Move to the previous sibling document
    Retreat,
}

// ============================================================================
// Keymap
// ============================================================================

/// Key bindings for the cycle actions.
#[derive(Debug, Clone)]
pub struct CycleKeymap {
    bindings: HashMap<KeyBinding, CycleAction>,
}

impl Default for CycleKeymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyBinding::alt(KeyCode::Char(']')), CycleAction::Advance);
        keymap.bind(KeyBinding::alt(KeyCode::Char('[')), CycleAction::Retreat);
        keymap
    }
}

impl CycleKeymap {
    /// Keymap without any bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Build a keymap from configured key strings.
    pub fn from_settings(settings: &KeySettings) -> Result<Self> {
        let mut keymap = Self::empty();
        for key in &settings.advance {
            keymap.bind(key.parse()?, CycleAction::Advance);
        }
        for key in &settings.retreat {
            keymap.bind(key.parse()?, CycleAction::Retreat);
        }
        Ok(keymap)
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, key: KeyBinding, action: CycleAction) {
        self.bindings.insert(key, action);
    }

    /// Remove a binding.
    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    /// All current bindings.
    pub fn bindings(&self) -> &HashMap<KeyBinding, CycleAction> {
        &self.bindings
    }

    /// Action bound to a key event, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<CycleAction> {
        self.bindings.get(&KeyBinding::from(*key)).copied()
    }

    /// Keys bound to `action`, sorted by their display form.
    pub fn keys_for(&self, action: CycleAction) -> Vec<KeyBinding> {
        let mut keys: Vec<KeyBinding> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|key| key.to_string());
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_simple_bindings() {
        let binding: KeyBinding = "alt+]".parse().unwrap();
        assert_eq!(binding, KeyBinding::alt(KeyCode::Char(']')));

        let binding: KeyBinding = "ctrl+alt+right".parse().unwrap();
        assert_eq!(binding.code, KeyCode::Right);
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);

        let binding: KeyBinding = "F5".parse().unwrap();
        assert_eq!(binding, KeyBinding::new(KeyCode::F(5), KeyModifiers::NONE));
    }

    #[test]
    fn test_parse_plus_key() {
        let binding: KeyBinding = "alt++".parse().unwrap();
        assert_eq!(binding, KeyBinding::alt(KeyCode::Char('+')));
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<KeyBinding>().is_err());
        assert!("hyper+x".parse::<KeyBinding>().is_err());
        assert!("alt+nope".parse::<KeyBinding>().is_err());
        assert!("f13".parse::<KeyBinding>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for spec in ["alt+]", "ctrl+shift+pageup", "f12", "alt+space"] {
            let binding: KeyBinding = spec.parse().unwrap();
            assert_eq!(binding.to_string(), spec);
        }
    }

    #[test]
    fn test_lookup_requires_exact_modifiers() {
        let keymap = CycleKeymap::default();
        assert_eq!(
            keymap.action_for(&key_event(
                KeyCode::Char(']'),
                KeyModifiers::ALT | KeyModifiers::CONTROL
            )),
            None
        );
    }

    #[test]
    fn test_default_keymap() {
        let keymap = CycleKeymap::default();
        assert_eq!(
            keymap.action_for(&key_event(KeyCode::Char(']'), KeyModifiers::ALT)),
            Some(CycleAction::Advance)
        );
        assert_eq!(
            keymap.action_for(&key_event(KeyCode::Char('['), KeyModifiers::ALT)),
            Some(CycleAction::Retreat)
        );
        assert_eq!(
            keymap.action_for(&key_event(KeyCode::Char(']'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_default_keymap_matches_default_settings() {
        let from_settings = CycleKeymap::from_settings(&KeySettings::default()).unwrap();
        assert_eq!(from_settings.bindings(), CycleKeymap::default().bindings());
    }

    #[test]
    fn test_from_settings() {
        let settings = KeySettings {
            advance: vec!["ctrl+alt+right".to_string(), "f6".to_string()],
            retreat: vec!["ctrl+alt+left".to_string()],
        };
        let keymap = CycleKeymap::from_settings(&settings).unwrap();
        assert_eq!(keymap.bindings().len(), 3);
        assert_eq!(
            keymap.action_for(&key_event(KeyCode::F(6), KeyModifiers::NONE)),
            Some(CycleAction::Advance)
        );
        assert_eq!(
            keymap.keys_for(CycleAction::Retreat),
            vec!["ctrl+alt+left".parse::<KeyBinding>().unwrap()]
        );
    }

    #[test]
    fn test_from_settings_rejects_bad_key() {
        let settings = KeySettings {
            advance: vec!["alt+]".to_string()],
            retreat: vec!["super+[".to_string()],
        };
        assert!(CycleKeymap::from_settings(&settings).is_err());
    }

    #[test]
    fn test_bind_and_unbind() {
        let mut keymap = CycleKeymap::empty();
        let key = KeyBinding::alt(KeyCode::Down);
        keymap.bind(key, CycleAction::Advance);
        assert_eq!(
            keymap.action_for(&key_event(KeyCode::Down, KeyModifiers::ALT)),
            Some(CycleAction::Advance)
        );
        keymap.unbind(&key);
        assert!(keymap.bindings().is_empty());
    }
}
