//! Keyboard Input Module
//!
//! Generic key codes and modifier state, decoupled from any windowing system.
//! Mouse buttons and wheel notches are folded in as pseudo-keys so a single
//! binding table can cover every discrete input the brush reacts to.

use std::fmt;
use std::str::FromStr;

/// Generic key codes, independent of the host's event system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Q,
    E,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,

    // Number keys
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,

    // Numpad
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,

    // Tool keys
    C,
    I,
    R,
    T,
    V,
    X,
    Z,

    // Control keys
    Space,
    Tab,
    Enter,
    Escape,

    // Pointer buttons and wheel notches
    MouseLeft,
    MouseRight,
    WheelUp,
    WheelDown,
}

impl KeyCode {
    /// Every key the parser understands.
    pub const ALL: [KeyCode; 39] = [
        KeyCode::W,
        KeyCode::A,
        KeyCode::S,
        KeyCode::D,
        KeyCode::Q,
        KeyCode::E,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::PageUp,
        KeyCode::PageDown,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Numpad1,
        KeyCode::Numpad2,
        KeyCode::Numpad3,
        KeyCode::Numpad4,
        KeyCode::Numpad5,
        KeyCode::Numpad6,
        KeyCode::C,
        KeyCode::I,
        KeyCode::R,
        KeyCode::T,
        KeyCode::V,
        KeyCode::X,
        KeyCode::Z,
        KeyCode::Space,
        KeyCode::Tab,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::MouseLeft,
        KeyCode::MouseRight,
        KeyCode::WheelUp,
        KeyCode::WheelDown,
    ];

    /// Canonical name used by the text form (`"W"`, `"Tab"`, `"Numpad3"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            KeyCode::W => "W",
            KeyCode::A => "A",
            KeyCode::S => "S",
            KeyCode::D => "D",
            KeyCode::Q => "Q",
            KeyCode::E => "E",
            KeyCode::ArrowUp => "Up",
            KeyCode::ArrowDown => "Down",
            KeyCode::ArrowLeft => "Left",
            KeyCode::ArrowRight => "Right",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Digit1 => "1",
            KeyCode::Digit2 => "2",
            KeyCode::Digit3 => "3",
            KeyCode::Digit4 => "4",
            KeyCode::Digit5 => "5",
            KeyCode::Digit6 => "6",
            KeyCode::Numpad1 => "Numpad1",
            KeyCode::Numpad2 => "Numpad2",
            KeyCode::Numpad3 => "Numpad3",
            KeyCode::Numpad4 => "Numpad4",
            KeyCode::Numpad5 => "Numpad5",
            KeyCode::Numpad6 => "Numpad6",
            KeyCode::C => "C",
            KeyCode::I => "I",
            KeyCode::R => "R",
            KeyCode::T => "T",
            KeyCode::V => "V",
            KeyCode::X => "X",
            KeyCode::Z => "Z",
            KeyCode::Space => "Space",
            KeyCode::Tab => "Tab",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Esc",
            KeyCode::MouseLeft => "MouseLeft",
            KeyCode::MouseRight => "MouseRight",
            KeyCode::WheelUp => "WheelUp",
            KeyCode::WheelDown => "WheelDown",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Held modifier keys at the time of a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierState {
    /// Shift held - precision movement
    pub shift: bool,
    /// Ctrl held - alternate bindings (undo, reverse spin, wheel sizing)
    pub ctrl: bool,
}

/// A key press together with its modifiers, parsed from text like `"ctrl+Z"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: KeyCode,
    pub modifiers: ModifierState,
}

/// Error returned when a key press string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key '{0}'")]
pub struct ParseKeyError(pub String);

impl FromStr for KeyCode {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        KeyCode::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(trimmed))
            .or(match trimmed.to_ascii_lowercase().as_str() {
                "escape" => Some(KeyCode::Escape),
                "arrowup" => Some(KeyCode::ArrowUp),
                "arrowdown" => Some(KeyCode::ArrowDown),
                "arrowleft" => Some(KeyCode::ArrowLeft),
                "arrowright" => Some(KeyCode::ArrowRight),
                "return" => Some(KeyCode::Enter),
                _ => None,
            })
            .ok_or_else(|| ParseKeyError(trimmed.to_string()))
    }
}

impl FromStr for KeyPress {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = ModifierState::default();
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let Some(key_part) = parts.pop() else {
            return Err(ParseKeyError(s.to_string()));
        };
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "shift" => modifiers.shift = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                _ => return Err(ParseKeyError(part.to_string())),
            }
        }
        Ok(KeyPress {
            key: key_part.parse()?,
            modifiers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_key() {
        let press: KeyPress = "W".parse().unwrap();
        assert_eq!(press.key, KeyCode::W);
        assert_eq!(press.modifiers, ModifierState::default());
    }

    #[test]
    fn test_parse_modifiers_case_insensitive() {
        let press: KeyPress = "Ctrl+shift+z".parse().unwrap();
        assert_eq!(press.key, KeyCode::Z);
        assert!(press.modifiers.ctrl);
        assert!(press.modifiers.shift);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("escape".parse::<KeyCode>().unwrap(), KeyCode::Escape);
        assert_eq!("Up".parse::<KeyCode>().unwrap(), KeyCode::ArrowUp);
        assert_eq!("numpad4".parse::<KeyCode>().unwrap(), KeyCode::Numpad4);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("F13".parse::<KeyCode>().is_err());
        assert!("alt+W".parse::<KeyPress>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for key in KeyCode::ALL {
            assert_eq!(key.name().parse::<KeyCode>().unwrap(), key);
        }
    }
}
