//! The frame loop
//!
//! Per iteration: pump and drain input, dispatch to the state machine,
//! clear+present at the current surface size, then pace to the frame
//! budget. Presentation faults are logged and skipped, never fatal:
//! nothing inside the loop is allowed to stop it except a quit.

use crate::driver::{
    Clock, EventSource, FramePacer, LoopState, Sleeper, SystemClock, ThreadSleeper,
};
use crate::renderer::Renderer;
use crate::window::{InputEvent, Key, QUIT_KEY};

/// Counters reported when the loop stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Iterations entered, including the one that observed the stop
    pub iterations: u64,

    /// Frames actually cleared and presented
    pub frames_presented: u64,
}

/// The frame loop driver
pub struct FrameLoop<E, R, C, S> {
    events: E,
    renderer: R,
    clock: C,
    sleeper: S,
    pacer: FramePacer,
    quit_key: Key,
    state: LoopState,
}

impl<E, R> FrameLoop<E, R, SystemClock, ThreadSleeper>
where
    E: EventSource,
    R: Renderer,
{
    /// A loop over the given source and renderer, using the real clock
    /// and blocking thread sleep
    pub fn new(events: E, renderer: R, pacer: FramePacer) -> Self {
        Self {
            events,
            renderer,
            clock: SystemClock,
            sleeper: ThreadSleeper,
            pacer,
            quit_key: QUIT_KEY,
            state: LoopState::Running,
        }
    }
}

impl<E, R, C, S> FrameLoop<E, R, C, S>
where
    E: EventSource,
    R: Renderer,
    C: Clock,
    S: Sleeper,
{
    /// Replace the clock seam (used by tests)
    pub fn with_clock<C2: Clock>(self, clock: C2) -> FrameLoop<E, R, C2, S> {
        FrameLoop {
            events: self.events,
            renderer: self.renderer,
            clock,
            sleeper: self.sleeper,
            pacer: self.pacer,
            quit_key: self.quit_key,
            state: self.state,
        }
    }

    /// Replace the sleeper seam (used by tests)
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> FrameLoop<E, R, C, S2> {
        FrameLoop {
            events: self.events,
            renderer: self.renderer,
            clock: self.clock,
            sleeper,
            pacer: self.pacer,
            quit_key: self.quit_key,
            state: self.state,
        }
    }

    /// Rebind the designated quit key
    pub fn with_quit_key(mut self, key: Key) -> Self {
        self.quit_key = key;
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The renderer seam, inspectable after a run
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The sleeper seam, inspectable after a run
    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Run until the state machine reaches Stopped
    pub fn run(&mut self) -> LoopSummary {
        let mut summary = LoopSummary::default();

        while self.state == LoopState::Running {
            let frame_start = self.clock.now();
            summary.iterations += 1;

            self.events.pump();
            while let Some(event) = self.events.poll_event() {
                self.dispatch(event);
            }

            if self.state == LoopState::Stopped {
                break;
            }

            let (width, height) = self.renderer.surface_size();
            if width != 0 && height != 0 {
                match self.renderer.present_clear(width, height) {
                    Ok(()) => summary.frames_presented += 1,
                    Err(err) => log::warn!("frame presentation failed: {}", err),
                }
            }

            let elapsed = self.clock.now().saturating_duration_since(frame_start);
            self.sleeper.sleep(self.pacer.pause_after(elapsed));
        }

        summary
    }

    fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.state = LoopState::Stopped,
            InputEvent::KeyDown { key } if key == self.quit_key => {
                self.state = LoopState::Stopped;
            }
            // Remaining kinds are extension points and must stay inert.
            InputEvent::KeyDown { .. } => {}
            InputEvent::KeyUp { .. } => {}
            InputEvent::MouseButtonDown { .. } => {}
            InputEvent::MouseButtonUp { .. } => {}
            InputEvent::MouseMotion { .. } => {}
        }
    }
}
