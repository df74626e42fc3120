//! Onboarding gate
//!
//! First-run setup: the app is unusable in its configured form until a
//! display name and a WhatsApp phone have been collected. The commit plays
//! a fixed sequence of status messages on a fixed interval (perceived
//! progress only, the work is a single store update) and then flips
//! `is_onboarded`. `reset()` on the store is the only way back.

use std::time::Duration;

use shared::{AppConfig, AppConfigUpdate};

use crate::core::config_store::ConfigStore;
use crate::core::error::{AppError, AppResult};
use crate::utils::phone::digits_only;

/// Interval between setup status messages
pub const DEFAULT_TICK: Duration = Duration::from_millis(800);

/// Gate state derived from the stored configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingState {
    Unconfigured,
    Configured,
}

impl OnboardingState {
    pub fn of(config: &AppConfig) -> Self {
        if config.is_onboarded {
            OnboardingState::Configured
        } else {
            OnboardingState::Unconfigured
        }
    }
}

/// First-run setup flow
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    name: String,
    phone: String,
    tick: Duration,
}

impl OnboardingFlow {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            tick: DEFAULT_TICK,
        }
    }

    /// Override the message interval (tests collapse it to zero)
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Both fields must be non-empty before the transition may run
    pub fn validate(&self) -> AppResult<()> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if digits_only(&self.phone).is_empty() {
            missing.push("phone");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::missing_fields(&missing))
        }
    }

    /// The ordered status messages shown during setup
    pub fn status_messages(&self) -> Vec<String> {
        vec![
            "Conectando ao servidor...".to_string(),
            "Criando perfil profissional...".to_string(),
            format!("Configurando conta de {}...", self.name),
            "Vinculando WhatsApp...".to_string(),
            "Gerando painel administrativo...".to_string(),
            "Aplicando tema visual...".to_string(),
            "Finalizando configuração...".to_string(),
        ]
    }

    /// Run the message sequence, then commit the transition.
    ///
    /// `on_status` is invoked once per message, one tick apart. Dropping
    /// the future between ticks cancels cleanly without touching the
    /// store; the update happens only after the last message.
    pub async fn commit<F>(self, store: &mut ConfigStore, mut on_status: F) -> AppResult<()>
    where
        F: FnMut(&str),
    {
        self.validate()?;

        for message in self.status_messages() {
            on_status(&message);
            if !self.tick.is_zero() {
                tokio::time::sleep(self.tick).await;
            }
        }

        store.update(AppConfigUpdate {
            professional_name: Some(self.name.trim().to_string()),
            phone: Some(digits_only(&self.phone)),
            is_onboarded: Some(true),
            ..Default::default()
        })?;
        tracing::info!("Onboarding completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::AppPaths;

    fn store() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::load(&AppPaths::new(dir.path()));
        (dir, store)
    }

    #[tokio::test]
    async fn commit_flips_the_gate_and_canonicalizes_the_phone() {
        let (_dir, mut store) = store();
        assert_eq!(OnboardingState::of(store.config_ref()), OnboardingState::Unconfigured);

        let mut seen = Vec::new();
        OnboardingFlow::new("Carlos", "(11) 99999-9999")
            .with_tick(Duration::ZERO)
            .commit(&mut store, |msg| seen.push(msg.to_string()))
            .await
            .unwrap();

        let config = store.config();
        assert!(config.is_onboarded);
        assert_eq!(config.professional_name, "Carlos");
        assert_eq!(config.phone, "11999999999");
        assert_eq!(OnboardingState::of(&config), OnboardingState::Configured);

        assert_eq!(seen.len(), 7);
        assert_eq!(seen[0], "Conectando ao servidor...");
        assert_eq!(seen[2], "Configurando conta de Carlos...");
        assert_eq!(seen.last().unwrap(), "Finalizando configuração...");
    }

    #[tokio::test]
    async fn commit_rejects_missing_fields_without_touching_the_store() {
        let (_dir, mut store) = store();
        let err = OnboardingFlow::new("", "")
            .with_tick(Duration::ZERO)
            .commit(&mut store, |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(!store.config().is_onboarded);
    }

    #[tokio::test]
    async fn reset_reopens_the_gate() {
        let (_dir, mut store) = store();
        OnboardingFlow::new("Carlos", "11999999999")
            .with_tick(Duration::ZERO)
            .commit(&mut store, |_| {})
            .await
            .unwrap();

        store.reset().unwrap();
        assert_eq!(OnboardingState::of(store.config_ref()), OnboardingState::Unconfigured);
    }
}
