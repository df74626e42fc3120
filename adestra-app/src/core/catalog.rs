//! Service catalog operations on the config store
//!
//! The catalog is the `services` field of the configuration; order is
//! display order. All mutations persist write-through via the store.

use shared::{AppConfigUpdate, ServiceDetail};

use super::config_store::ConfigStore;
use super::error::AppResult;

impl ConfigStore {
    /// Look up a service by id
    pub fn service(&self, id: &str) -> Option<&ServiceDetail> {
        self.config_ref().services.iter().find(|s| s.id == id)
    }

    /// Replace the service with the same id, or append it if no such id
    /// exists. Appending on a missing id keeps an editor that raced a
    /// delete (or another tab) from silently discarding its work.
    pub fn upsert_service(&mut self, service: ServiceDetail) -> AppResult<()> {
        let mut services = self.config_ref().services.clone();
        match services.iter_mut().find(|s| s.id == service.id) {
            Some(slot) => *slot = service,
            None => services.push(service),
        }
        self.update(AppConfigUpdate {
            services: Some(services),
            ..Default::default()
        })
    }

    /// Remove the service with the given id, preserving the order of the
    /// rest. Returns whether a record was actually removed.
    ///
    /// Irreversible; callers own the interactive confirmation (see the
    /// editor flow's two-phase delete).
    pub fn delete_service(&mut self, id: &str) -> AppResult<bool> {
        let mut services = self.config_ref().services.clone();
        let before = services.len();
        services.retain(|s| s.id != id);
        let removed = services.len() < before;
        if removed {
            self.update(AppConfigUpdate {
                services: Some(services),
                ..Default::default()
            })?;
            tracing::info!(id = %id, "Service deleted");
        }
        Ok(removed)
    }
}
