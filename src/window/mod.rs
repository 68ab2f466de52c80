//! Window management module for frameshell
//!
//! This module defines the domain input model the frame loop consumes and
//! hosts the winit-backed window shell. Platform events are translated into
//! `InputEvent` values once per pump, so the loop only ever sees the domain
//! types below and tests can feed it synthetic sequences.

pub mod events;
pub mod shell;

pub use events::EventTranslator;
pub use shell::WindowShell;

/// Input events delivered to the frame loop
///
/// The mouse and key-up kinds are recognized as distinct events but are
/// deliberately inert in this build: the loop dispatches them to explicit
/// no-op arms that a consumer can fill in.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The platform requested shutdown (window close, session end)
    Quit,

    /// Key pressed
    KeyDown { key: Key },

    /// Key released
    KeyUp { key: Key },

    /// Mouse button pressed at the tracked cursor position
    MouseButtonDown { button: MouseButton, x: f64, y: f64 },

    /// Mouse button released at the tracked cursor position
    MouseButtonUp { button: MouseButton, x: f64, y: f64 },

    /// Cursor moved to position
    MouseMotion { x: f64, y: f64 },
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard key types
///
/// Only the keys the shell reacts to (and a few obvious neighbors) are
/// named; everything else is carried as `Other` so a consumer can still
/// bind them later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Q,
    Escape,
    Space,
    Enter,

    Left,
    Right,
    Up,
    Down,

    Other(String),
}

/// The key bound to "quit" in this build
pub const QUIT_KEY: Key = Key::Q;
