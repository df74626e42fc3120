//! Shared domain types for the Adestra app
//!
//! Models for the persisted configuration, the service catalog, theme
//! derivation, booking forms and the breed reference dataset. This crate is
//! pure data + pure logic; persistence and flows live in `adestra-app`.

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AppConfig, AppConfigUpdate, BookingForm, BreedRecord, DogSize, ServiceDetail, TagColor,
    ThemeClasses, ThemeColor,
};
