mod app;
mod convert;
mod messages;
mod panels;
mod progress;
mod render;
mod states;
mod workers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orthoview_core::config::ViewerConfig;

#[derive(Parser)]
#[command(name = "orthoview-gui", about = "Orthographic NIfTI volume viewer")]
#[command(version)]
struct Args {
    /// Volume URL or path to open at startup (overrides the config)
    source: Option<String>,

    /// Viewer config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let mut config = match args.config {
        Some(ref path) => ViewerConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(source) = args.source {
        config.source = source;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Orthoview"),
        ..Default::default()
    };

    eframe::run_native(
        "Orthoview",
        options,
        Box::new(|cc| Ok(Box::new(app::OrthoviewApp::new(&cc.egui_ctx, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
