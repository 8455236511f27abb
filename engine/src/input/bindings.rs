//! Input Bindings Module
//!
//! Maps key chords to logical brush actions, allowing the default layout to be
//! remapped without touching session code.

use std::collections::HashMap;

use super::actions::{BrushIntent, MoveDirection, RotateIntent};
use super::keyboard::{KeyCode, KeyPress};
use crate::brush::orientation::{FacePreset, SpinDirection};

/// Logical actions that can be bound to key chords.
///
/// Precision (Shift) is not an action: it is read from the modifiers of the
/// press that triggers a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushAction {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    CycleFace,
    SelectFace(FacePreset),
    SpinClockwise,
    SpinCounterClockwise,
    GrowSize,
    ShrinkSize,
    ToggleInvert,
    ToggleSpeed,
    ToggleAuto,
    Place,
    Delete,
    Undo,
    Cancel,
    Finish,
}

impl BrushAction {
    /// Translate into a session intent. `precision` only affects moves.
    pub fn to_intent(self, precision: bool) -> BrushIntent {
        let movement = |direction| BrushIntent::Move {
            direction,
            precision,
        };
        match self {
            BrushAction::MoveForward => movement(MoveDirection::Forward),
            BrushAction::MoveBack => movement(MoveDirection::Backward),
            BrushAction::MoveLeft => movement(MoveDirection::Left),
            BrushAction::MoveRight => movement(MoveDirection::Right),
            BrushAction::MoveUp => movement(MoveDirection::Up),
            BrushAction::MoveDown => movement(MoveDirection::Down),
            BrushAction::CycleFace => BrushIntent::Rotate(RotateIntent::Cycle),
            BrushAction::SelectFace(face) => BrushIntent::Rotate(RotateIntent::SelectFace(face)),
            BrushAction::SpinClockwise => {
                BrushIntent::Rotate(RotateIntent::Spin(SpinDirection::Clockwise))
            }
            BrushAction::SpinCounterClockwise => {
                BrushIntent::Rotate(RotateIntent::Spin(SpinDirection::CounterClockwise))
            }
            BrushAction::GrowSize => BrushIntent::ChangeSize(1),
            BrushAction::ShrinkSize => BrushIntent::ChangeSize(-1),
            BrushAction::ToggleInvert => BrushIntent::ToggleInvert,
            BrushAction::ToggleSpeed => BrushIntent::ToggleSpeed,
            BrushAction::ToggleAuto => BrushIntent::ToggleAuto,
            BrushAction::Place => BrushIntent::Commit,
            BrushAction::Delete => BrushIntent::Delete,
            BrushAction::Undo => BrushIntent::Undo,
            BrushAction::Cancel => BrushIntent::Cancel,
            BrushAction::Finish => BrushIntent::Finish,
        }
    }
}

/// A key plus whether Ctrl must be held. Shift is never part of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
}

impl KeyChord {
    pub const fn plain(key: KeyCode) -> Self {
        Self { key, ctrl: false }
    }

    pub const fn ctrl(key: KeyCode) -> Self {
        Self { key, ctrl: true }
    }
}

/// Maps key chords to brush actions.
///
/// Several chords may trigger the same action (W and the up arrow both move
/// forward), so unlike a one-to-one binding table only the chord side is unique.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    chord_to_action: HashMap<KeyChord, BrushAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default layout.
    ///
    /// Default bindings:
    /// - W/Up, S/Down, A/Left, D/Right = horizontal moves (Shift = precision)
    /// - Q/PageUp, E/PageDown = vertical moves
    /// - Tab = next face, 1-6 and Numpad 1-6 = select face
    /// - R = spin +45 degrees, Ctrl+R = spin -45 degrees
    /// - T, Ctrl+WheelUp = grow size; Ctrl+WheelDown = shrink size
    /// - I = inverted tiles, V = speed, X = auto-mode
    /// - Space/MouseLeft = place, C = delete, Ctrl+Z = undo
    /// - Esc/MouseRight = cancel, Enter = finish
    pub fn new() -> Self {
        let mut bindings = Self {
            chord_to_action: HashMap::new(),
        };

        let plain = [
            (KeyCode::W, BrushAction::MoveForward),
            (KeyCode::ArrowUp, BrushAction::MoveForward),
            (KeyCode::S, BrushAction::MoveBack),
            (KeyCode::ArrowDown, BrushAction::MoveBack),
            (KeyCode::A, BrushAction::MoveLeft),
            (KeyCode::ArrowLeft, BrushAction::MoveLeft),
            (KeyCode::D, BrushAction::MoveRight),
            (KeyCode::ArrowRight, BrushAction::MoveRight),
            (KeyCode::Q, BrushAction::MoveUp),
            (KeyCode::PageUp, BrushAction::MoveUp),
            (KeyCode::E, BrushAction::MoveDown),
            (KeyCode::PageDown, BrushAction::MoveDown),
            (KeyCode::Tab, BrushAction::CycleFace),
            (KeyCode::R, BrushAction::SpinClockwise),
            (KeyCode::T, BrushAction::GrowSize),
            (KeyCode::I, BrushAction::ToggleInvert),
            (KeyCode::V, BrushAction::ToggleSpeed),
            (KeyCode::X, BrushAction::ToggleAuto),
            (KeyCode::Space, BrushAction::Place),
            (KeyCode::MouseLeft, BrushAction::Place),
            (KeyCode::C, BrushAction::Delete),
            (KeyCode::Escape, BrushAction::Cancel),
            (KeyCode::MouseRight, BrushAction::Cancel),
            (KeyCode::Enter, BrushAction::Finish),
        ];
        for (key, action) in plain {
            bindings.bind(KeyChord::plain(key), action);
        }

        let digits = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
            KeyCode::Digit6,
        ];
        let numpad = [
            KeyCode::Numpad1,
            KeyCode::Numpad2,
            KeyCode::Numpad3,
            KeyCode::Numpad4,
            KeyCode::Numpad5,
            KeyCode::Numpad6,
        ];
        for (face, (digit, pad)) in FacePreset::ALL.into_iter().zip(digits.into_iter().zip(numpad)) {
            bindings.bind(KeyChord::plain(digit), BrushAction::SelectFace(face));
            bindings.bind(KeyChord::plain(pad), BrushAction::SelectFace(face));
        }

        bindings.bind(KeyChord::ctrl(KeyCode::R), BrushAction::SpinCounterClockwise);
        bindings.bind(KeyChord::ctrl(KeyCode::Z), BrushAction::Undo);
        bindings.bind(KeyChord::ctrl(KeyCode::WheelUp), BrushAction::GrowSize);
        bindings.bind(KeyChord::ctrl(KeyCode::WheelDown), BrushAction::ShrinkSize);

        bindings
    }

    /// Bind a chord to an action, replacing whatever the chord did before.
    pub fn bind(&mut self, chord: KeyChord, action: BrushAction) {
        self.chord_to_action.insert(chord, action);
    }

    /// Remove the binding for a chord.
    pub fn unbind(&mut self, chord: KeyChord) {
        self.chord_to_action.remove(&chord);
    }

    /// Get the action bound to a chord, if any.
    pub fn get_action(&self, chord: KeyChord) -> Option<BrushAction> {
        self.chord_to_action.get(&chord).copied()
    }

    /// All chords that trigger `action`.
    pub fn chords_for(&self, action: BrushAction) -> Vec<KeyChord> {
        self.chord_to_action
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(chord, _)| *chord)
            .collect()
    }

    /// Resolve a key press into a session intent.
    ///
    /// Unbound presses return `None` and should be passed through to the host.
    pub fn resolve(&self, press: KeyPress) -> Option<BrushIntent> {
        let chord = KeyChord {
            key: press.key,
            ctrl: press.modifiers.ctrl,
        };
        self.get_action(chord)
            .map(|action| action.to_intent(press.modifiers.shift))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ModifierState;

    fn press(key: KeyCode, shift: bool, ctrl: bool) -> KeyPress {
        KeyPress {
            key,
            modifiers: ModifierState { shift, ctrl },
        }
    }

    #[test]
    fn test_default_moves() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.resolve(press(KeyCode::W, false, false)),
            Some(BrushIntent::Move {
                direction: MoveDirection::Forward,
                precision: false
            })
        );
        assert_eq!(
            bindings.resolve(press(KeyCode::ArrowLeft, true, false)),
            Some(BrushIntent::Move {
                direction: MoveDirection::Left,
                precision: true
            })
        );
    }

    #[test]
    fn test_ctrl_changes_meaning() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.resolve(press(KeyCode::R, false, false)),
            Some(BrushIntent::Rotate(RotateIntent::Spin(SpinDirection::Clockwise)))
        );
        assert_eq!(
            bindings.resolve(press(KeyCode::R, false, true)),
            Some(BrushIntent::Rotate(RotateIntent::Spin(SpinDirection::CounterClockwise)))
        );
        assert_eq!(bindings.resolve(press(KeyCode::Z, false, false)), None);
        assert_eq!(
            bindings.resolve(press(KeyCode::Z, false, true)),
            Some(BrushIntent::Undo)
        );
        // Wheel without Ctrl belongs to the host's view navigation
        assert_eq!(bindings.resolve(press(KeyCode::WheelUp, false, false)), None);
    }

    #[test]
    fn test_face_keys() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.resolve(press(KeyCode::Digit3, false, false)),
            Some(BrushIntent::Rotate(RotateIntent::SelectFace(FacePreset::Front)))
        );
        assert_eq!(
            bindings.resolve(press(KeyCode::Numpad6, false, false)),
            Some(BrushIntent::Rotate(RotateIntent::SelectFace(FacePreset::Left)))
        );
    }

    #[test]
    fn test_rebind_and_unbind() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyChord::plain(KeyCode::Space), BrushAction::Delete);
        assert_eq!(
            bindings.get_action(KeyChord::plain(KeyCode::Space)),
            Some(BrushAction::Delete)
        );
        assert_eq!(bindings.chords_for(BrushAction::Place), vec![KeyChord::plain(KeyCode::MouseLeft)]);

        bindings.unbind(KeyChord::plain(KeyCode::C));
        assert_eq!(bindings.get_action(KeyChord::plain(KeyCode::C)), None);
    }
}
