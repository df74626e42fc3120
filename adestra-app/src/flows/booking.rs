//! Booking wizard
//!
//! Linear 3-step flow over an ephemeral [`BookingForm`]; nothing is ever
//! written to the config store. Step 2 auto-fills the address from the
//! ViaCEP collaborator once the CEP reaches 8 digits; a request generation
//! guard drops responses that arrive after the CEP changed again. The
//! terminal action is the WhatsApp deep link.

use shared::{AppConfig, BookingForm};

use crate::core::error::{AppError, AppResult};
use crate::services::breeds;
use crate::services::postal::{PostalAddress, PostalError};
use crate::utils::whatsapp;

/// Result of backward navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingNav {
    /// Moved to this step
    Step(u8),
    /// Was at the first step; the caller leaves the flow
    Exit,
}

/// What happened to a postal lookup response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostalOutcome {
    /// Address fields were filled; move focus to the house number
    Applied,
    /// Unknown CEP; user-facing alert, fields left blank for manual entry
    NotFound,
    /// Transport/parse failure; logged and swallowed, form stays editable
    Failed,
    /// Response outlived its CEP; dropped
    Stale,
}

/// A lookup the caller should issue for the current CEP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CepRequest {
    pub cep: String,
    pub generation: u64,
}

/// Booking wizard state
#[derive(Debug)]
pub struct BookingFlow {
    form: BookingForm,
    step: u8,
    auto_filled: bool,
    cep_generation: u64,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            form: BookingForm::default(),
            step: 1,
            auto_filled: false,
            cep_generation: 0,
        }
    }

    /// Current step, 1 through 3
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    /// Free-text field edits; the CEP goes through [`BookingFlow::set_cep`]
    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    /// Whether street/neighborhood/city/state came from a lookup (the UI
    /// renders them read-only once auto-filled)
    pub fn address_auto_filled(&self) -> bool {
        self.auto_filled
    }

    // ============ Breed autocomplete ============

    /// Suggestions for the current breed text (capped, case-insensitive)
    pub fn breed_suggestions(&self) -> Vec<&'static shared::BreedRecord> {
        breeds::search(&self.form.breed)
    }

    pub fn select_breed(&mut self, name: impl Into<String>) {
        self.form.breed = name.into();
    }

    // ============ CEP auto-fill ============

    /// Apply the CEP input mask (digits only, at most 8) and return the
    /// lookup the caller should issue once the code is complete. Every
    /// change invalidates in-flight lookups and discards an earlier
    /// auto-fill, since that address belongs to the previous CEP.
    pub fn set_cep(&mut self, raw: &str) -> Option<CepRequest> {
        let clean: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
        if clean != self.form.cep {
            self.form.cep = clean;
            self.cep_generation += 1;
            if self.auto_filled {
                self.form.street.clear();
                self.form.neighborhood.clear();
                self.form.city.clear();
                self.form.state.clear();
                self.auto_filled = false;
            }
        }
        if self.form.cep.len() == 8 {
            Some(CepRequest {
                cep: self.form.cep.clone(),
                generation: self.cep_generation,
            })
        } else {
            None
        }
    }

    /// Feed a lookup response back into the form. Responses whose
    /// generation no longer matches the current CEP are dropped.
    pub fn apply_postal(
        &mut self,
        generation: u64,
        result: Result<PostalAddress, PostalError>,
    ) -> PostalOutcome {
        if generation != self.cep_generation {
            tracing::debug!(generation, current = self.cep_generation, "Dropping stale CEP response");
            return PostalOutcome::Stale;
        }
        match result {
            Ok(address) => {
                self.form.street = address.street;
                self.form.neighborhood = address.neighborhood;
                self.form.city = address.city;
                self.form.state = address.state;
                self.auto_filled = true;
                PostalOutcome::Applied
            }
            Err(PostalError::NotFound(cep)) => {
                tracing::info!(cep = %cep, "CEP not found, manual entry");
                self.form.street.clear();
                self.form.neighborhood.clear();
                self.form.city.clear();
                self.form.state.clear();
                self.auto_filled = false;
                PostalOutcome::NotFound
            }
            Err(e) => {
                tracing::warn!(error = %e, "CEP lookup failed");
                PostalOutcome::Failed
            }
        }
    }

    // ============ Navigation ============

    /// Required fields of `step` that are currently empty
    pub fn missing_fields(&self, step: u8) -> Vec<&'static str> {
        let f = &self.form;
        let required: Vec<(&'static str, &str)> = match step {
            1 => vec![
                ("name", f.name.as_str()),
                ("phone", f.phone.as_str()),
                ("dogName", f.dog_name.as_str()),
            ],
            2 => vec![("street", f.street.as_str()), ("number", f.number.as_str())],
            3 => vec![("date", f.date.as_str())],
            _ => Vec::new(),
        };
        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Advance to the next step; the current step's required fields gate
    /// the transition
    pub fn next(&mut self) -> AppResult<()> {
        let missing = self.missing_fields(self.step);
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }
        if self.step < 3 {
            self.step += 1;
        }
        Ok(())
    }

    /// Step back; at the first step the whole flow exits
    pub fn back(&mut self) -> BookingNav {
        if self.step <= 1 {
            BookingNav::Exit
        } else {
            self.step -= 1;
            BookingNav::Step(self.step)
        }
    }

    // ============ Terminal action ============

    /// Compose the booking message and the `wa.me` deep link against the
    /// configured business phone. Requires a date; time is optional and
    /// renders as "A combinar". Irreversible once the caller opens the
    /// link; no local record is kept.
    pub fn submit(&self, config: &AppConfig) -> AppResult<reqwest::Url> {
        let missing = self.missing_fields(3);
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }
        let message = whatsapp::booking_message(&config.professional_name, &self.form);
        let url = whatsapp::wa_link(&config.phone, &message)?;
        tracing::info!(step = self.step, "Booking handed off to WhatsApp");
        Ok(url)
    }
}
