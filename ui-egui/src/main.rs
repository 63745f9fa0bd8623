// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use anyhow::Result;
use boardgames_core::menu::{MENU_HEIGHT, MENU_TITLE, MENU_WIDTH};
use boardgames_ui_egui::{logging, App, AppConfig};
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "boardgames", version)]
#[command(about = "Nine Men's Morris and Go boards with a menu and pause overlay")]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let config = AppConfig::from_env();
    let (config, config_error) = match config {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        warn!("Falling back to default config: {:#}", e);
    }
    info!(start = ?config.start, "Starting board games");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(MENU_TITLE)
            .with_inner_size([MENU_WIDTH as f32, MENU_HEIGHT as f32])
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        MENU_TITLE,
        options,
        Box::new(move |cc| Box::new(App::new(cc, &config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))
}
