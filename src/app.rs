use eframe::egui;

use crate::config::Config;
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CsvBrowserApp {
    pub state: AppState,
}

impl CsvBrowserApp {
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for CsvBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Second panel: file selector ----
        egui::TopBottomPanel::top("selector").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::file_selector(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // ---- Central panel: table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::data_table(ui, &self.state);
        });
    }
}
