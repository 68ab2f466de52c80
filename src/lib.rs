//! frameshell - a minimal windowed frame-loop shell
//!
//! The shell initializes the platform windowing subsystem, opens a single
//! borderless graphics-capable window, binds a GPU surface to it, and runs
//! an event-polling loop that clears and presents one frame per iteration,
//! paced to a fixed frame budget. Resources are released in strict reverse
//! acquisition order on every exit path.
//!
//! The library half exposes the frame-loop driver behind event/renderer/
//! clock/sleeper seams so its behavior is testable without a display
//! server; the binary half assembles the OS-backed implementations.

pub mod driver;
pub mod renderer;
pub mod runtime;
pub mod utils;
pub mod window;

// Re-export the types most consumers touch
pub use driver::{
    Clock, EventSource, FrameLoop, FramePacer, LoopState, LoopSummary, Sleeper, SystemClock,
    ThreadSleeper,
};
pub use renderer::Renderer;
pub use utils::config::Config;
pub use utils::error::{Result, ShellError};
pub use window::{InputEvent, Key, MouseButton, QUIT_KEY};
