// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playlist Manager
//!
//! A desktop application for organizing video metadata into named
//! playlists under a single channel, saved to and loaded from disk.

mod app;
mod config;
mod context;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::PlaylistManagerApp;
use config::AppConfig;
use env_logger::Builder;
use log::LevelFilter;

fn main() -> Result<()> {
    // Initialize logging at `info`; RUST_LOG directives take precedence
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = AppConfig::from_env();
    log::info!("Starting with channel '{}'", config.default_channel_name);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlaylistManagerApp::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
