//! Booking Request Model
//!
//! Ephemeral working state of the scheduling wizard. Never persisted; its
//! only externally visible effect is the outbound WhatsApp message.

use serde::{Deserialize, Serialize};

/// Dog size bracket used by the service inquiry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogSize {
    Small,
    Medium,
    Large,
}

impl DogSize {
    /// User-facing label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            DogSize::Small => "Pequeno",
            DogSize::Medium => "Médio",
            DogSize::Large => "Grande",
        }
    }
}

/// Booking wizard form state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    /// Tutor name
    pub name: String,
    pub dog_name: String,
    /// Free text, optionally picked from the breed autocomplete
    pub breed: String,
    pub phone: String,
    /// Digits only, at most 8
    pub cep: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub date: String,
    /// Optional; empty renders as "A combinar"
    pub time: String,
}
