//! Error types for frameshell
//!
//! This module defines the error taxonomy used throughout the shell.
//! We use thiserror for the library-level error type and anyhow at the
//! binary boundary.
//!
//! Every startup-time kind (subsystem, window, context, binding) is fatal:
//! there is no retry policy because a missing display server or GPU is not
//! a transient fault. Inside the frame loop only `Graphics` is produced,
//! and the loop treats it as best-effort.

use thiserror::Error;

/// Main error type for frameshell
#[derive(Error, Debug)]
pub enum ShellError {
    /// The windowing/input backend could not be started
    #[error("platform init error: {0}")]
    PlatformInit(String),

    /// Window creation failed
    #[error("window creation error: {0}")]
    WindowCreation(String),

    /// Rendering context (surface/device) creation failed
    #[error("context creation error: {0}")]
    ContextCreation(String),

    /// The context could not be bound to the window
    #[error("context bind error: {0}")]
    ContextBind(String),

    /// Graphics API entry points could not be resolved (no usable adapter)
    #[error("graphics binding error: {0}")]
    GraphicsBindingInit(String),

    /// Runtime presentation fault, tolerated inside the frame loop
    #[error("graphics error: {0}")]
    Graphics(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in frameshell
pub type Result<T> = std::result::Result<T, ShellError>;

/// Extension trait for converting foreign errors into ShellError
pub trait IntoShellError<T> {
    /// Convert into a PlatformInit error with the given context
    fn platform_err(self, context: &str) -> Result<T>;
    fn window_err(self, context: &str) -> Result<T>;
    fn context_err(self, context: &str) -> Result<T>;
    fn bind_err(self, context: &str) -> Result<T>;
    fn binding_init_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoShellError<T> for std::result::Result<T, E> {
    fn platform_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ShellError::PlatformInit(format!("{}: {}", context, e)))
    }

    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ShellError::WindowCreation(format!("{}: {}", context, e)))
    }

    fn context_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ShellError::ContextCreation(format!("{}: {}", context, e)))
    }

    fn bind_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ShellError::ContextBind(format!("{}: {}", context, e)))
    }

    fn binding_init_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ShellError::GraphicsBindingInit(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ShellError::Config(format!("{}: {}", context, e)))
    }
}
