//! Utility helpers

pub mod image_import;
pub mod phone;
pub mod whatsapp;
