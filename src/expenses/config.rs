use std::path::{Path, PathBuf};

pub const DEFAULT_SNAPSHOT_FILE: &str = "expenses.db";
pub const DEFAULT_IMPORT_FILE: &str = "expenses.csv";
pub const DEFAULT_EXPORT_FILE: &str = "expenses1.csv";

/// File locations used by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub import_path: PathBuf,
    pub export_path: PathBuf,
}

impl Default for Config {
    /// Default file names, relative to the working directory
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            import_path: PathBuf::from(DEFAULT_IMPORT_FILE),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl Config {
    /// Default file names placed under `base_dir` (useful for testing)
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            snapshot_path: base_dir.join(DEFAULT_SNAPSHOT_FILE),
            import_path: base_dir.join(DEFAULT_IMPORT_FILE),
            export_path: base_dir.join(DEFAULT_EXPORT_FILE),
        }
    }
}
