//! AppPaths - application data directory layout
//!
//! All durable state lives under one base directory chosen by the shell:
//!
//! ```text
//! {base}/
//! ├── config.json    # persisted AppConfig payload (single fixed key)
//! └── logs/          # daily-rolling log files
//! ```

use std::path::{Path, PathBuf};

/// Application data paths
#[derive(Debug, Clone)]
pub struct AppPaths {
    base: PathBuf,
}

impl AppPaths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Persisted configuration payload: {base}/config.json
    pub fn config_file(&self) -> PathBuf {
        self.base.join("config.json")
    }

    /// Log directory: {base}/logs/
    pub fn logs_dir(&self) -> PathBuf {
        self.base.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let paths = AppPaths::new("/data/adestra");

        assert_eq!(paths.base(), Path::new("/data/adestra"));
        assert_eq!(paths.config_file(), PathBuf::from("/data/adestra/config.json"));
        assert_eq!(paths.logs_dir(), PathBuf::from("/data/adestra/logs"));
    }
}
