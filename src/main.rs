#![cfg_attr(windows, windows_subsystem = "windows")]

use anyhow::anyhow;
use anyhow::Result;
use eframe::egui;

mod app;
mod catalog;
mod models;

use app::ResolutionSelectorApp;

fn main() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resolution Selector",
        options,
        Box::new(|_| Box::new(ResolutionSelectorApp::new())),
    )
    .map_err(|e| anyhow!("Application error: {}", e))
}
