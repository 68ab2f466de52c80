use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;

use frameshell::utils::config::Config;

/// frameshell - a minimal windowed frame-loop shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (bypasses the layered lookup)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Start in fullscreen mode
    #[arg(short, long)]
    fullscreen: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(title) = args.title {
        config.window.title = title;
    }
    if args.fullscreen {
        config.window.fullscreen = true;
    }

    let log_level = if args.debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    // CLI overrides can reintroduce invalid geometry.
    config.validate()?;

    info!("starting frameshell v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = frameshell::runtime::run(&config) {
        error!("startup failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
