//! # Vitals - System Vitals Overlay
//!
//! A small always-on-top overlay card that polls host metrics (battery,
//! CPU load, memory, boot time, CPU temperature) and renders them as text.
//! Drag it with the mouse, toggle categories from the checkbox panel, and
//! scale the card with the font-size slider.

mod app;
mod config;
pub mod constants;
mod models;
mod monitor;
mod sampler;
mod ui;

use anyhow::Result;
use clap::Parser;

use config::Config;
use constants::{FONT_SIZE_MAX, FONT_SIZE_MIN, MIN_REFRESH_MS};

/// Vitals - draggable system vitals overlay for the terminal
#[derive(Parser, Debug)]
#[command(name = "vitals", version, about = "A draggable always-on-top system vitals overlay")]
struct Cli {
    /// Refresh rate in milliseconds
    #[arg(long, short = 'r')]
    refresh_rate: Option<u64>,

    /// Startup font size (8-24)
    #[arg(long)]
    font_size: Option<u16>,

    /// Color theme (default, gruvbox, nord, or a custom theme name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Print a single sample to stdout and exit
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(rate) = cli.refresh_rate {
        config.refresh_interval_ms = rate.max(MIN_REFRESH_MS);
    }
    if let Some(size) = cli.font_size {
        config.font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    }
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }

    // One-shot mode: sample once, print, exit.
    if cli.once {
        let mut sampler = sampler::Sampler::new(monitor::SystemProvider::new());
        println!("{}", sampler.sample(&models::CategoryToggles::default()));
        return Ok(());
    }

    let mut app = app::App::new(&config);
    app.run()
}
