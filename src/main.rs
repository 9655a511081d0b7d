//! Timeviz - Benchmark Timing Viewer
//!
//! Renders the embedded benchmark timing table as interactive scatter and
//! line charts plus a static pie-chart breakdown page.

mod charts;
mod data;
mod gui;
mod stats;

use anyhow::anyhow;
use data::TimingTable;
use eframe::egui;
use gui::TimevizApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = TimingTable::sample()?;
    log::info!("loaded {} timing records", table.records().len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Timeviz"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeviz",
        options,
        Box::new(move |cc| Ok(Box::new(TimevizApp::new(cc, table)))),
    )
    .map_err(|e| anyhow!("failed to start ui: {e}"))
}
