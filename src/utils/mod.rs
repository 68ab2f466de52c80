//! Utility module for frameshell
//!
//! This module provides common utilities used throughout the shell:
//! - Error handling with the shell error taxonomy
//! - Configuration management

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{ClearColor, Config, GraphicsConfig, PacingConfig, PowerPreference, WindowConfig};
pub use error::{Result, ShellError};
