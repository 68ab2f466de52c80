//! Event translation for the winit window
//!
//! This module converts winit window events into frameshell `InputEvent`
//! values. Button events carry the cursor position, so the translator
//! tracks the last reported cursor location the way the underlying
//! platform event stream does not.

use crate::window::{InputEvent, Key, MouseButton};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Converts winit events into domain input events
pub struct EventTranslator {
    /// Last known cursor position
    cursor_position: (f64, f64),
}

impl EventTranslator {
    pub fn new() -> Self {
        Self {
            cursor_position: (0.0, 0.0),
        }
    }

    /// Translate a winit window event into a domain input event
    ///
    /// Events with no input meaning (resizes, focus changes, redraw
    /// requests) return `None`; the loop re-reads window dimensions every
    /// frame instead of reacting to resize events.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let key = map_key_code(code);
                match event.state {
                    ElementState::Pressed => Some(InputEvent::KeyDown { key }),
                    ElementState::Released => Some(InputEvent::KeyUp { key }),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = (position.x, position.y);
                Some(InputEvent::MouseMotion {
                    x: position.x,
                    y: position.y,
                })
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_mouse_button(*button)?;
                let (x, y) = self.cursor_position;
                match state {
                    ElementState::Pressed => Some(InputEvent::MouseButtonDown { button, x, y }),
                    ElementState::Released => Some(InputEvent::MouseButtonUp { button, x, y }),
                }
            }

            _ => None,
        }
    }
}

impl Default for EventTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a winit key code to a domain key
pub fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyQ => Key::Q,
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Space,
        KeyCode::Enter => Key::Enter,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        other => Key::Other(format!("{:?}", other)),
    }
}

/// Map a winit mouse button to a domain button
pub fn map_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}
