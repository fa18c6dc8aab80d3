#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::context::SiteConfig;

/// Global site configuration, set from command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (set from command line or default)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio Showcase
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio Showcase - biography, project gallery and contact form")]
struct Args {
    /// Directory holding aboutMeData.json and projects_data.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Window title
    #[arg(short, long, default_value = "Portfolio")]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = SiteConfig {
        data_dir: args.data_dir,
    };
    tracing::info!("Starting '{}' with data dir: {:?}", args.title, config.data_dir);

    // Store configuration globally
    let _ = SITE_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
