//! Input Module
//!
//! Platform-agnostic input handling for the brush. Raw device input becomes a
//! [`KeyPress`], the [`KeyBindings`] table turns it into a [`BrushIntent`],
//! and only intents ever reach the session.
//!
//! # Example
//!
//! ```rust,ignore
//! use tile_brush_engine::input::{KeyBindings, KeyPress};
//!
//! let bindings = KeyBindings::new();
//! let press: KeyPress = "shift+W".parse()?;
//! if let Some(intent) = bindings.resolve(press) {
//!     session.apply(intent)?;
//! }
//! ```

pub mod actions;
pub mod bindings;
pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use actions::{BrushIntent, MoveDirection, RotateIntent};
pub use bindings::{BrushAction, KeyBindings, KeyChord};
pub use keyboard::{KeyCode, KeyPress, ModifierState, ParseKeyError};
pub use mouse::{DEFAULT_NUDGE_THRESHOLD, PointerTracker};
