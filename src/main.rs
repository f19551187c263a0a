mod app;
mod color;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

use app::EmissionViewerApp;
use emission_viewer::config::{Args, Settings, StoreLocation};
use emission_viewer::EmissionStore;
use state::AppState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from(Args::parse());
    log::debug!("Starting with {settings:?}");

    let store = match &settings.store {
        StoreLocation::File(path) => EmissionStore::open(path)
            .with_context(|| format!("opening store {}", path.display()))?,
        StoreLocation::InMemory => {
            EmissionStore::open_in_memory().context("opening in-memory store")?
        }
    };

    let mut state = AppState::new(store);
    if let Some(csv) = &settings.startup_csv {
        if csv.exists() {
            state.import(csv);
        } else {
            log::warn!("Startup CSV {} not found, skipping import", csv.display());
            if state.entities.is_empty() {
                state.status_message = Some(format!("{} not found", csv.display()));
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Emission Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(EmissionViewerApp::new(state)))),
    )
    .map_err(|e| anyhow!("running the viewer: {e}"))
}
