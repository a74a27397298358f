use std::path::{Path, PathBuf};

/// Environment variable naming the directory to browse.
pub const CSV_DIR_VAR: &str = "CSV_DIR";

/// Directory browsed when `CSV_DIR` is not set.
pub const DEFAULT_CSV_DIR: &str = "/app/csv_out";

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// Resolved once in `main` and handed to the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose `.csv` files are offered in the selector.
    pub csv_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CSV_DIR)
    }
}

impl Config {
    pub fn new(csv_dir: impl Into<PathBuf>) -> Self {
        Self {
            csv_dir: csv_dir.into(),
        }
    }

    /// Read `CSV_DIR` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// An unset or empty `CSV_DIR` falls back to [`DEFAULT_CSV_DIR`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        match lookup(CSV_DIR_VAR) {
            Some(dir) if !dir.as_os_str().is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    pub fn csv_dir(&self) -> &Path {
        &self.csv_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_uses_default_dir() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.csv_dir(), Path::new(DEFAULT_CSV_DIR));
    }

    #[test]
    fn empty_variable_uses_default_dir() {
        let config = Config::from_lookup(|_| Some(PathBuf::new()));
        assert_eq!(config.csv_dir(), Path::new("/app/csv_out"));
    }

    #[test]
    fn variable_overrides_default_dir() {
        let config = Config::from_lookup(|key| {
            assert_eq!(key, "CSV_DIR");
            Some(PathBuf::from("/data/exports"))
        });
        assert_eq!(config.csv_dir(), Path::new("/data/exports"));
    }
}
