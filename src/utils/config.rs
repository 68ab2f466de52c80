//! Configuration management for frameshell
//!
//! This module handles loading and managing the shell configuration
//! from config files and environment variables. The shipped defaults
//! reproduce the fixed build: a borderless 1280x720 window titled "Main"
//! at the origin, cleared to a dark blue at a 16 ms frame budget.

use crate::utils::error::{IntoShellError, Result, ShellError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window configuration
    pub window: WindowConfig,

    /// Graphics configuration
    pub graphics: GraphicsConfig,

    /// Frame pacing configuration
    pub pacing: PacingConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width
    pub width: u32,

    /// Initial window height
    pub height: u32,

    /// Initial window position, x
    pub x: i32,

    /// Initial window position, y
    pub y: i32,

    /// Window title
    pub title: String,

    /// Create the window without decorations
    pub borderless: bool,

    /// Allow the window manager to resize the window
    pub resizable: bool,

    /// Start in fullscreen mode
    pub fullscreen: bool,
}

/// Graphics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    /// Per-frame clear color
    pub clear_color: ClearColor,

    /// Synchronize presentation with the display (FIFO presentation)
    pub vsync: bool,

    /// Adapter power preference
    pub power_preference: PowerPreference,

    /// Desired maximum frames in flight
    pub frame_latency: u32,
}

/// RGBA clear color, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Adapter power preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerPreference {
    Low,
    High,
}

/// Frame pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Target frame budget in whole milliseconds
    pub frame_budget_ms: u64,

    /// Fixed yield when a frame overruns the budget, in milliseconds
    pub overrun_pause_ms: u64,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            x: 0,
            y: 0,
            title: "Main".to_string(),
            borderless: true,
            resizable: false,
            fullscreen: false,
        }
    }
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            clear_color: ClearColor {
                r: 0.1,
                g: 0.1,
                b: 0.2,
                a: 1.0,
            },
            vsync: true,
            power_preference: PowerPreference::Low,
            frame_latency: 2,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            frame_budget_ms: 16,
            overrun_pause_ms: 2,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the layered sources
    ///
    /// Configuration is loaded in the following order (later sources
    /// override earlier):
    /// 1. Default values
    /// 2. System config file (/etc/frameshell/config.toml on Linux)
    /// 3. User config file (~/.config/frameshell/config.toml on Linux)
    /// 4. Environment variables (FRAMESHELL_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(system_path) = Self::system_config_path() {
            if system_path.exists() {
                config.merge_from_file(&system_path)?;
            }
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file, then apply env overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge_from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()
            .ok_or_else(|| ShellError::Config("cannot determine user config path".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ShellError::Config(format!("failed to create config directory: {}", e)))?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| ShellError::Config(format!("failed to serialize config: {}", e)))?;

        std::fs::write(&path, toml)
            .map_err(|e| ShellError::Config(format!("failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Merge configuration from a TOML file
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents =
            std::fs::read_to_string(path).config_err("failed to read config file")?;

        let file_config: Config =
            toml::from_str(&contents).config_err("failed to parse config file")?;

        *self = file_config;

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(width) = std::env::var("FRAMESHELL_WINDOW_WIDTH") {
            self.window.width = width
                .parse()
                .map_err(|_| ShellError::Config("invalid FRAMESHELL_WINDOW_WIDTH".to_string()))?;
        }

        if let Ok(height) = std::env::var("FRAMESHELL_WINDOW_HEIGHT") {
            self.window.height = height
                .parse()
                .map_err(|_| ShellError::Config("invalid FRAMESHELL_WINDOW_HEIGHT".to_string()))?;
        }

        if let Ok(log_level) = std::env::var("FRAMESHELL_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ShellError::Config(
                "window dimensions must be positive".to_string(),
            ));
        }

        if self.pacing.frame_budget_ms == 0 {
            return Err(ShellError::Config(
                "frame budget must be at least 1 ms".to_string(),
            ));
        }

        let c = &self.graphics.clear_color;
        for component in [c.r, c.g, c.b, c.a] {
            if !(0.0..=1.0).contains(&component) {
                return Err(ShellError::Config(
                    "clear color components must be between 0.0 and 1.0".to_string(),
                ));
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(ShellError::Config(format!(
                "invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get system config file path
    fn system_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return Some(PathBuf::from("/etc/frameshell/config.toml"));

        #[cfg(target_os = "windows")]
        return std::env::var("PROGRAMDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("frameshell").join("config.toml"));

        #[cfg(target_os = "macos")]
        return Some(PathBuf::from(
            "/Library/Application Support/frameshell/config.toml",
        ));

        #[allow(unreachable_code)]
        None
    }

    /// Get user config file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("frameshell").join("config.toml"))
    }
}
