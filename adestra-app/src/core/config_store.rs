//! ConfigStore - persisted application configuration
//!
//! Owns the single [`AppConfig`] record. Loaded once at startup from
//! `config.json`, merged over defaults so payloads written by older releases
//! backfill newly introduced fields. Every mutation is write-through: the
//! full payload is serialized and overwritten before the call returns.
//!
//! Not safe against concurrent writers in other processes; the last write to
//! the file wins.

use std::path::PathBuf;

use serde_json::Value;
use shared::{AppConfig, AppConfigUpdate};

use super::error::AppResult;
use super::paths::AppPaths;

/// Persistent configuration store (single writer within the process)
#[derive(Debug)]
pub struct ConfigStore {
    file_path: PathBuf,
    config: AppConfig,
}

impl ConfigStore {
    /// Load the store from `{base}/config.json`.
    ///
    /// An absent or unparsable payload yields the default configuration;
    /// a present payload is shallow-merged over the defaults at the top
    /// level (present fields win, absent fields keep their default).
    pub fn load(paths: &AppPaths) -> Self {
        let file_path = paths.config_file();

        let config = match std::fs::read_to_string(&file_path) {
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(stored) => merge_over_defaults(stored),
                Err(e) => {
                    tracing::warn!(path = %file_path.display(), error = %e, "Stored config unparsable, using defaults");
                    AppConfig::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(e) => {
                tracing::warn!(path = %file_path.display(), error = %e, "Failed to read stored config, using defaults");
                AppConfig::default()
            }
        };

        Self { file_path, config }
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> AppConfig {
        self.config.clone()
    }

    /// Borrow the current configuration without cloning
    pub fn config_ref(&self) -> &AppConfig {
        &self.config
    }

    /// Merge a partial update and persist the full payload (write-through)
    pub fn update(&mut self, update: AppConfigUpdate) -> AppResult<()> {
        update.apply_to(&mut self.config);
        self.save()?;
        tracing::debug!("Configuration updated");
        Ok(())
    }

    /// Replace everything with the hardcoded defaults and persist.
    ///
    /// Discards all customization, including the services catalog, and
    /// forces the onboarding gate back to unconfigured.
    pub fn reset(&mut self) -> AppResult<()> {
        self.config = AppConfig::default();
        self.save()?;
        tracing::info!("Configuration reset to defaults");
        Ok(())
    }

    fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.config)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }
}

/// Shallow-merge a stored JSON object over the default configuration.
///
/// Top-level merge only: nested objects and the services array are taken
/// wholesale from the stored payload. A payload whose shape no longer
/// deserializes falls back to full defaults.
fn merge_over_defaults(stored: Value) -> AppConfig {
    let mut base = match serde_json::to_value(AppConfig::default()) {
        Ok(v) => v,
        Err(_) => return AppConfig::default(),
    };

    if let (Value::Object(base_map), Value::Object(stored_map)) = (&mut base, stored) {
        for (key, value) in stored_map {
            base_map.insert(key, value);
        }
    }

    serde_json::from_value(base).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Merged config payload invalid, using defaults");
        AppConfig::default()
    })
}
