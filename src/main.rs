mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::FleetViewApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fleetview.json"));
    let config = config::Config::load(&config_path)?;

    // One-time load; the dataset lives in AppState for the whole session.
    // Any LoadError here is fatal, there is no fallback data.
    let dataset = data::loader::load_workbook(&config.workbook, &config.sheet)
        .with_context(|| format!("loading {}", config.workbook.display()))?;
    log::info!(
        "loaded {} vehicle records from {} ({} passthrough columns)",
        dataset.len(),
        config.workbook.display(),
        dataset.extra_columns.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let app = FleetViewApp::new(state::AppState::new(dataset, &config));
    eframe::run_native(
        "Vehicle Deployment Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
