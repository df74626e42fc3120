//! External collaborators and bundled datasets

pub mod breeds;
pub mod gallery;
pub mod postal;

pub use postal::{PostalAddress, PostalClient, PostalError};
