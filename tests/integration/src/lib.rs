//! Test utilities for frameshell integration tests
//!
//! Synthetic doubles for the frame-loop seams. Everything here runs
//! headless: the loop is exercised through its event/renderer/clock/
//! sleeper seams instead of a real display server, so the suite passes
//! in CI.

pub mod synthetic {
    use frameshell::{Clock, EventSource, InputEvent, Renderer, Result, ShellError, Sleeper};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::time::{Duration, Instant};

    /// Event source that releases one scripted batch per pump
    pub struct ScriptedEvents {
        batches: VecDeque<Vec<InputEvent>>,
        queue: VecDeque<InputEvent>,
    }

    impl ScriptedEvents {
        /// One inner vec per loop iteration; an empty vec is a quiet pump
        pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self {
                batches: batches.into(),
                queue: VecDeque::new(),
            }
        }

        /// `quiet` empty pumps followed by a single quit event
        pub fn quit_after(quiet: usize) -> Self {
            let mut batches = vec![Vec::new(); quiet];
            batches.push(vec![InputEvent::Quit]);
            Self::new(batches)
        }
    }

    impl EventSource for ScriptedEvents {
        fn pump(&mut self) {
            if let Some(batch) = self.batches.pop_front() {
                self.queue.extend(batch);
            }
        }

        fn poll_event(&mut self) -> Option<InputEvent> {
            self.queue.pop_front()
        }
    }

    /// Renderer double that records every presented frame
    pub struct RecordingRenderer {
        sizes: RefCell<VecDeque<(u32, u32)>>,
        fallback: (u32, u32),
        /// Sizes passed to successful presents, in order
        pub presents: Vec<(u32, u32)>,
        /// 1-based present call that should fail, if any
        pub fail_on_call: Option<usize>,
        calls: usize,
    }

    impl RecordingRenderer {
        /// Always reports the same surface size
        pub fn fixed(size: (u32, u32)) -> Self {
            Self {
                sizes: RefCell::new(VecDeque::new()),
                fallback: size,
                presents: Vec::new(),
                fail_on_call: None,
                calls: 0,
            }
        }

        /// Reports one scripted size per iteration, then (0, 0)
        pub fn scripted(sizes: Vec<(u32, u32)>) -> Self {
            Self {
                sizes: RefCell::new(sizes.into()),
                fallback: (0, 0),
                presents: Vec::new(),
                fail_on_call: None,
                calls: 0,
            }
        }
    }

    impl Renderer for RecordingRenderer {
        fn surface_size(&self) -> (u32, u32) {
            self.sizes.borrow_mut().pop_front().unwrap_or(self.fallback)
        }

        fn present_clear(&mut self, width: u32, height: u32) -> Result<()> {
            self.calls += 1;
            if self.fail_on_call == Some(self.calls) {
                return Err(ShellError::Graphics("synthetic fault".to_string()));
            }
            self.presents.push((width, height));
            Ok(())
        }
    }

    /// Clock double advancing by scripted deltas, one per `now` call
    pub struct ManualClock {
        now: Instant,
        deltas: VecDeque<Duration>,
    }

    impl ManualClock {
        pub fn new(deltas: Vec<Duration>) -> Self {
            Self {
                now: Instant::now(),
                deltas: deltas.into(),
            }
        }

        /// A clock that never advances
        pub fn frozen() -> Self {
            Self::new(Vec::new())
        }
    }

    impl Clock for ManualClock {
        fn now(&mut self) -> Instant {
            let current = self.now;
            if let Some(delta) = self.deltas.pop_front() {
                self.now += delta;
            }
            current
        }
    }

    /// Sleeper double that records requested pauses instead of blocking
    #[derive(Default)]
    pub struct RecordingSleeper {
        pub naps: Vec<Duration>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&mut self, duration: Duration) {
            self.naps.push(duration);
        }
    }
}
