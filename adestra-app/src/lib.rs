//! Adestra - application core for a dog-training business app
//!
//! Backend core embedded by the mobile-styled shell. Owns:
//!
//! - **Config store** (`core`): the persisted [`shared::AppConfig`] singleton
//!   with write-through JSON persistence and the service catalog CRUD
//! - **Flows** (`flows`): onboarding gate, service editor wizard and the
//!   booking wizard that ends in a WhatsApp handoff
//! - **Collaborators** (`services`): ViaCEP postal lookup, bundled breed
//!   dataset and image galleries
//! - **Utilities** (`utils`): phone canonicalization, WhatsApp deep links,
//!   image import pipeline

pub mod core;
pub mod flows;
pub mod logger;
pub mod services;
pub mod utils;

// Re-export common types
pub use crate::core::{AppError, AppPaths, AppResult, ConfigStore};
pub use shared;
