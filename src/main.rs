#![allow(non_snake_case)]

mod adapter;
mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::PageConfig;

/// Global page configuration, set from command line and config file
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page configuration (set at startup or default)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Default config file location
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
}

/// Folio - Personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - A single-page personal portfolio")]
struct Args {
    /// JSON config file (defaults to <config dir>/folio/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pixels added to the scroll offset before matching a section
    #[arg(long)]
    scroll_bias: Option<f64>,

    /// Number of steps a counter takes to reach its target
    #[arg(long)]
    counter_steps: Option<u64>,

    /// Number of floating particles in the hero
    #[arg(long)]
    particles: Option<usize>,

    /// Type the hero subtitle in character by character
    #[arg(long)]
    typing: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_filter: String,
}

impl Args {
    fn resolve_config(&self) -> anyhow::Result<PageConfig> {
        let mut config = match &self.config {
            Some(path) => PageConfig::load(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?,
            None => match default_config_path().filter(|path| path.exists()) {
                Some(path) => PageConfig::load(&path)
                    .with_context(|| format!("Failed to load config from {:?}", path))?,
                None => PageConfig::default(),
            },
        };

        if let Some(bias) = self.scroll_bias {
            config.tracker.scroll_bias = bias;
        }
        if let Some(steps) = self.counter_steps {
            config.tracker.counter_steps = steps;
        }
        if let Some(count) = self.particles {
            config.effects.particle_count = count;
        }
        if self.typing {
            config.effects.typing_enabled = true;
        }

        config.validate().context("Invalid page configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    folio_core::logging::init(&args.log_filter);

    let config = args.resolve_config()?;
    tracing::info!(?config, "Starting Folio");

    // Store page configuration globally
    let _ = PAGE_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
