mod app;
mod config;
mod data;
mod state;
mod ui;

use app::CsvBrowserApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env();
    log::info!("Browsing {}", config.csv_dir().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Browser",
        options,
        Box::new(|_cc| Ok(Box::new(CsvBrowserApp::new(config)))),
    )
}
