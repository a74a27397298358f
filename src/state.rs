use std::path::PathBuf;

use crate::config::Config;
use crate::data::error::BrowserError;
use crate::data::listing::list_csv_files;
use crate::data::loader::load_table;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Directory currently being browsed.
    pub csv_dir: PathBuf,

    /// `.csv` file names found in `csv_dir` at the last listing.
    pub files: Vec<String>,

    /// File chosen in the selector (None until the user picks one).
    pub selected: Option<String>,

    /// Table for `selected`; None when nothing is chosen or loading failed.
    pub table: Option<Table>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state for `config` and perform the initial listing.
    pub fn new(config: Config) -> Self {
        let mut state = Self {
            csv_dir: config.csv_dir,
            files: Vec::new(),
            selected: None,
            table: None,
            status_message: None,
        };
        state.refresh_listing();
        state
    }

    /// Re-read the directory and reload the selected file from disk.
    ///
    /// A selection that no longer exists is dropped together with its table.
    pub fn refresh_listing(&mut self) {
        match list_csv_files(&self.csv_dir) {
            Ok(files) => {
                self.files = files;
                self.status_message = None;
            }
            Err(e) => {
                self.files.clear();
                self.report(&e);
            }
        }

        let stale = self
            .selected
            .as_ref()
            .is_some_and(|name| !self.files.contains(name));
        if stale {
            self.selected = None;
            self.table = None;
        } else if self.selected.is_some() {
            self.on_selection_changed(self.selected.clone());
        }
    }

    /// Switch to another directory and list it from scratch.
    pub fn change_dir(&mut self, dir: PathBuf) {
        log::info!("Browsing {}", dir.display());
        self.csv_dir = dir;
        self.selected = None;
        self.table = None;
        self.refresh_listing();
    }

    /// Handler bound to the file selector; called once per change.
    pub fn on_selection_changed(&mut self, choice: Option<String>) {
        log::debug!("Selection changed to {choice:?}");
        self.table = None;
        self.status_message = None;
        self.selected = choice;

        let Some(name) = &self.selected else {
            return;
        };
        match load_table(&self.csv_dir, name) {
            Ok(table) => self.table = Some(table),
            Err(e) => self.report(&e),
        }
    }

    /// The table to render, if any.
    pub fn visible_table(&self) -> Option<&Table> {
        self.selected.as_ref().and(self.table.as_ref())
    }

    fn report(&mut self, e: &BrowserError) {
        log::error!("{:?} error: {e}", e.kind());
        self.status_message = Some(format!("Error: {e}"));
    }
}
