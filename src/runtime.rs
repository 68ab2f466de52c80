//! Runtime assembly for frameshell
//!
//! Acquires the video subsystem, the window, and the rendering context in
//! that order, drives the frame loop, and releases everything in strict
//! reverse order on every exit path. The ordering is carried by local
//! declaration order in [`run`]: Rust drops locals in reverse, on normal
//! return and on every early `?` return alike, and a resource that failed
//! to create never existed, so only the acquired prefix is released.

use crate::driver::{EventSource, FrameLoop, FramePacer};
use crate::renderer::WgpuRenderer;
use crate::utils::config::Config;
use crate::utils::error::{IntoShellError, Result, ShellError};
use crate::window::{InputEvent, WindowShell};
use std::time::Duration;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

/// Pumps tolerated before concluding the backend will never resume us
const STARTUP_PUMP_LIMIT: u32 = 64;

/// Process-wide handle to the windowing/input backend
///
/// Created once at startup, destroyed once at process end. No window or
/// surface operation is valid outside its lifetime.
pub struct VideoSubsystem {
    event_loop: EventLoop<()>,
}

impl VideoSubsystem {
    pub fn initialize() -> Result<Self> {
        let event_loop = EventLoop::new().platform_err("failed to start windowing backend")?;
        log::debug!("video subsystem initialized");
        Ok(Self { event_loop })
    }

    /// Deliver pending platform events to the shell without blocking
    pub fn pump(&mut self, shell: &mut WindowShell) -> PumpStatus {
        self.event_loop
            .pump_app_events(Some(Duration::ZERO), shell)
    }
}

impl Drop for VideoSubsystem {
    fn drop(&mut self) {
        log::debug!("shutting down video subsystem");
    }
}

/// Event source backed by the OS event loop
struct PlatformEvents<'a> {
    subsystem: &'a mut VideoSubsystem,
    shell: &'a mut WindowShell,
    exit_pending: bool,
}

impl EventSource for PlatformEvents<'_> {
    fn pump(&mut self) {
        if let PumpStatus::Exit(code) = self.subsystem.pump(self.shell) {
            log::debug!("event loop requested exit with status {}", code);
            self.exit_pending = true;
        }
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        if let Some(event) = self.shell.poll_event() {
            return Some(event);
        }
        if std::mem::take(&mut self.exit_pending) {
            return Some(InputEvent::Quit);
        }
        None
    }
}

/// Bring the shell up, run the frame loop, and tear everything down
pub fn run(config: &Config) -> Result<()> {
    let mut subsystem = VideoSubsystem::initialize()?;
    let mut shell = WindowShell::new(config.window.clone())?;

    // The first pump delivers the resume transition that creates the window.
    let mut startup_pumps = 0;
    let window = loop {
        let status = subsystem.pump(&mut shell);
        if let Some(err) = shell.take_creation_error() {
            return Err(err);
        }
        if let Some(window) = shell.window() {
            break window;
        }
        if let PumpStatus::Exit(code) = status {
            return Err(ShellError::WindowCreation(format!(
                "event loop exited during startup with status {}",
                code
            )));
        }
        startup_pumps += 1;
        if startup_pumps > STARTUP_PUMP_LIMIT {
            return Err(ShellError::WindowCreation(
                "windowing backend never delivered the resume transition".to_string(),
            ));
        }
    };

    let mut renderer = WgpuRenderer::new(window, &config.graphics)?;

    let events = PlatformEvents {
        subsystem: &mut subsystem,
        shell: &mut shell,
        exit_pending: false,
    };
    let mut frame_loop = FrameLoop::new(events, &mut renderer, FramePacer::from(&config.pacing));
    let summary = frame_loop.run();

    log::info!(
        "frame loop stopped after {} iterations, {} frames presented",
        summary.iterations,
        summary.frames_presented
    );

    Ok(())
}
