//! Integration tests for configuration loading

use anyhow::Result;
use frameshell::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_from_file_overrides_defaults() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
        [window]
        width = 1920
        height = 1080
        title = "Shell"
        borderless = false

        [pacing]
        frame_budget_ms = 8
        "#
    )?;

    let config = Config::load_from(file.path())?;

    assert_eq!(config.window.width, 1920);
    assert_eq!(config.window.height, 1080);
    assert_eq!(config.window.title, "Shell");
    assert!(!config.window.borderless);
    assert_eq!(config.pacing.frame_budget_ms, 8);
    // Sections the file does not mention keep their defaults.
    assert_eq!(config.pacing.overrun_pause_ms, 2);
    assert_eq!(config.general.log_level, "info");

    Ok(())
}

#[test]
fn load_from_rejects_invalid_geometry() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
        [window]
        width = 0
        "#
    )?;

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("dimensions"));

    Ok(())
}

#[test]
fn load_from_rejects_malformed_toml() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "window = not toml")?;

    assert!(Config::load_from(file.path()).is_err());

    Ok(())
}
