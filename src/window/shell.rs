//! Winit window shell for frameshell
//!
//! The shell owns the window handle and the queue of translated input
//! events. Window creation happens when the event loop delivers the resume
//! transition, so the shell is an `ApplicationHandler` that the runtime
//! pumps; the first pump creates the window, later pumps fill the queue.

use crate::utils::config::WindowConfig;
use crate::utils::error::{IntoShellError, Result, ShellError};
use crate::window::{EventTranslator, InputEvent};
use std::collections::VecDeque;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowId};

/// Winit-backed window shell
pub struct WindowShell {
    /// Window configuration, applied on resume
    config: WindowConfig,

    /// Translates winit events into domain input events
    translator: EventTranslator,

    /// The window handle, once created
    window: Option<Arc<Window>>,

    /// Input events awaiting the frame loop
    pending: VecDeque<InputEvent>,

    /// Deferred creation failure, surfaced by the runtime after the pump
    creation_error: Option<ShellError>,
}

impl WindowShell {
    /// Prepare a shell for the given configuration
    ///
    /// Dimensions must be positive; the window itself is created when the
    /// event loop resumes.
    pub fn new(config: WindowConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(ShellError::WindowCreation(format!(
                "window dimensions must be positive, got {}x{}",
                config.width, config.height
            )));
        }

        Ok(Self {
            config,
            translator: EventTranslator::new(),
            window: None,
            pending: VecDeque::new(),
            creation_error: None,
        })
    }

    /// The window handle, if the resume transition has created it
    pub fn window(&self) -> Option<Arc<Window>> {
        self.window.clone()
    }

    /// Take a deferred window-creation failure
    pub fn take_creation_error(&mut self) -> Option<ShellError> {
        self.creation_error.take()
    }

    /// Pop the next pending input event
    pub fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn enqueue(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Window> {
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_position(PhysicalPosition::new(self.config.x, self.config.y))
            .with_decorations(!self.config.borderless)
            .with_resizable(self.config.resizable);

        if self.config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        event_loop
            .create_window(attrs)
            .window_err("failed to create window")
    }
}

impl ApplicationHandler for WindowShell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.creation_error.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(window) => {
                log::debug!(
                    "created window \"{}\" ({}x{})",
                    self.config.title,
                    self.config.width,
                    self.config.height
                );
                self.window = Some(Arc::new(window));
            }
            Err(err) => {
                self.creation_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = self.translator.translate(&event) {
            self.enqueue(input);
        }
    }
}

impl Drop for WindowShell {
    fn drop(&mut self) {
        if self.window.take().is_some() {
            log::debug!("destroying window");
        }
    }
}
