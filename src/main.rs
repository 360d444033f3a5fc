mod app;
mod color;
mod data;
mod state;
mod ui;
mod views;

use std::path::PathBuf;

use anyhow::Context;
use app::DashboardApp;
use eframe::egui;
use state::AppState;

const DEFAULT_DATASET: &str = "master.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // One optional positional argument: the dataset path.
    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // The dataset is loaded exactly once, before the window opens. Any
    // failure here aborts the process; there is no partial dashboard.
    let dataset = data::loader::load_dataset(&path)
        .with_context(|| format!("loading dataset from {}", path.display()))?;
    log::info!(
        "loaded {} rows: {} years, {} countries",
        dataset.len(),
        dataset.years.len(),
        dataset.countries.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Suicide Data Insights",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(AppState::new(dataset))))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
