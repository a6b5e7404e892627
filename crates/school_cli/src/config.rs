//! Fixed file locations used by the shell.
//!
//! The program takes no flags or environment variables; every path is
//! resolved against the working directory at startup.

use school_core::{DEFAULT_DB_FILE_NAME, DEFAULT_EXPORT_FILE_NAME, DEFAULT_LOG_DIR_NAME};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub db_path: PathBuf,
    pub export_path: PathBuf,
    /// Absolute; required by the logging bootstrap.
    pub log_dir: PathBuf,
}

impl ShellConfig {
    pub fn in_dir(base: &Path) -> Self {
        Self {
            db_path: base.join(DEFAULT_DB_FILE_NAME),
            export_path: base.join(DEFAULT_EXPORT_FILE_NAME),
            log_dir: base.join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ShellConfig;
    use std::path::Path;

    #[test]
    fn in_dir_places_files_under_base() {
        let config = ShellConfig::in_dir(Path::new("/srv/school"));
        assert_eq!(config.db_path, Path::new("/srv/school/school.db"));
        assert_eq!(config.export_path, Path::new("/srv/school/students.csv"));
        assert_eq!(config.log_dir, Path::new("/srv/school/logs"));
    }
}
