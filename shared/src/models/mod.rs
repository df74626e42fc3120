//! Domain models

pub mod app_config;
pub mod booking;
pub mod breed;
pub mod service;
pub mod theme;

pub use app_config::{AppConfig, AppConfigUpdate};
pub use booking::{BookingForm, DogSize};
pub use breed::BreedRecord;
pub use service::{ServiceDetail, TagColor};
pub use theme::{ThemeClasses, ThemeColor};
