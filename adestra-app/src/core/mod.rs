//! Core application state: paths, errors, the persisted config store and
//! the service catalog operations on top of it.

pub mod catalog;
pub mod config_store;
pub mod error;
pub mod paths;

pub use config_store::ConfigStore;
pub use error::{AppError, AppResult};
pub use paths::AppPaths;
