use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

/// Prompt shown next to the file dropdown.
pub const SELECTOR_LABEL: &str = "Choose a CSV file";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Choose folder…").clicked() {
                choose_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Refresh").clicked() {
                state.refresh_listing();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();
        ui.label(state.csv_dir.display().to_string());

        if let Some(table) = state.visible_table() {
            ui.separator();
            ui.label(format!(
                "{} rows × {} columns",
                table.len(),
                table.n_columns()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File selector
// ---------------------------------------------------------------------------

/// Dropdown over the listed files.
///
/// Fires [`AppState::on_selection_changed`] only when the choice differs
/// from the current one.
pub fn file_selector(ui: &mut Ui, state: &mut AppState) {
    let mut choice = state.selected.clone();

    ui.horizontal(|ui: &mut Ui| {
        ui.label(SELECTOR_LABEL);
        ui.add_enabled_ui(!state.files.is_empty(), |ui: &mut Ui| {
            egui::ComboBox::from_id_salt("csv_file")
                .width(ui.available_width().min(320.0))
                .selected_text(choice.as_deref().unwrap_or("—"))
                .show_ui(ui, |ui: &mut Ui| {
                    for name in &state.files {
                        ui.selectable_value(&mut choice, Some(name.clone()), name);
                    }
                });
        });
        if state.files.is_empty() {
            ui.label(RichText::new("no .csv files found").weak());
        }
    });

    if choice != state.selected {
        state.on_selection_changed(choice);
    }
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn choose_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Choose a folder of CSV files")
        .set_directory(&state.csv_dir)
        .pick_folder();

    if let Some(dir) = folder {
        state.change_dir(dir);
    }
}
