use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Table;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data table (central panel)
// ---------------------------------------------------------------------------

/// Render the selected file's table, or a hint when there is none.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(table) = state.visible_table() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.files.is_empty() {
                ui.heading("No CSV files in this folder  (File → Choose folder…)");
            } else {
                ui.heading("Choose a CSV file to view it");
            }
        });
        return;
    };

    if table.is_empty() {
        ui.label(RichText::new("Header only, no data rows").weak());
    }

    ScrollArea::horizontal()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| table_grid(ui, table));
}

/// Every row is laid out virtually, so only the visible slice is painted.
fn table_grid(ui: &mut Ui, table: &Table) {
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 4.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(40.0))
        .columns(Column::auto().at_least(60.0).clip(true), table.n_columns())
        .header(row_height + 4.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.label(RichText::new("#").weak());
            });
            for column in &table.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(&column.name);
                    ui.label(RichText::new(column.dtype.to_string()).weak().small());
                });
            }
        })
        .body(|body| {
            body.rows(row_height, table.len(), |mut row| {
                let index = row.index();
                row.col(|ui: &mut Ui| {
                    ui.label(RichText::new(index.to_string()).weak());
                });
                for (cell, column) in table.rows[index].iter().zip(&table.columns) {
                    row.col(|ui: &mut Ui| {
                        if column.dtype.is_numeric() {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                                ui.label(cell.to_string());
                            });
                        } else {
                            ui.label(cell.to_string());
                        }
                    });
                }
            });
        });
}
