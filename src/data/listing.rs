use std::path::Path;

use super::error::BrowserError;

/// Suffix a directory entry must end with to be offered in the selector.
pub const CSV_SUFFIX: &str = ".csv";

/// List the `.csv` files in `dir`, sorted by name.
///
/// The suffix match is literal and case-sensitive. Sub-directories are
/// skipped even if their name matches, as are names that are not UTF-8.
pub fn list_csv_files(dir: &Path) -> Result<Vec<String>, BrowserError> {
    let list_err = |source| BrowserError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::warn!("Skipping non UTF-8 entry {raw:?} in {}", dir.display());
                continue;
            }
        };
        if !name.ends_with(CSV_SUFFIX) {
            continue;
        }
        // Follows symlinks, so a link to a directory is skipped too.
        if entry.path().is_dir() {
            log::warn!("Skipping directory {name} in {}", dir.display());
            continue;
        }
        names.push(name);
    }

    names.sort();
    log::info!("Found {} CSV files in {}", names.len(), dir.display());
    Ok(names)
}
