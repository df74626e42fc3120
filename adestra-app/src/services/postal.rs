//! Postal code lookup (ViaCEP collaborator)
//!
//! `GET https://viacep.com.br/ws/{cep}/json/` with an 8-digit CEP. The
//! service answers 200 with `{"erro": true}` for unknown codes, so "not
//! found" is detected from the payload, not the status. No retry and no
//! timeout beyond the client defaults.

use serde::Deserialize;
use thiserror::Error;

const VIACEP_BASE: &str = "https://viacep.com.br/ws";

#[derive(Debug, Error)]
pub enum PostalError {
    #[error("CEP must be exactly 8 digits: {0:?}")]
    InvalidCep(String),

    #[error("CEP not found: {0}")]
    NotFound(String),

    #[error("Lookup failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Resolved address fields filled into the booking form
#[derive(Debug, Clone, PartialEq)]
pub struct PostalAddress {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Raw ViaCEP response payload
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    /// Present (true or "true" depending on the API era) only for unknown CEPs
    #[serde(default)]
    erro: serde_json::Value,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl ViaCepPayload {
    fn is_not_found(&self) -> bool {
        match &self.erro {
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::String(s) => s == "true",
            _ => false,
        }
    }

    fn into_address(self) -> PostalAddress {
        PostalAddress {
            street: self.logradouro,
            neighborhood: self.bairro,
            city: self.localidade,
            state: self.uf,
        }
    }
}

/// ViaCEP HTTP client
#[derive(Debug, Clone, Default)]
pub struct PostalClient {
    http: reqwest::Client,
}

impl PostalClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing client (connection pool) with the rest of the app
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Look up an address by CEP. `cep` must be exactly 8 digits.
    pub async fn lookup(&self, cep: &str) -> Result<PostalAddress, PostalError> {
        if cep.len() != 8 || !cep.chars().all(|c| c.is_ascii_digit()) {
            return Err(PostalError::InvalidCep(cep.to_string()));
        }

        let url = format!("{VIACEP_BASE}/{cep}/json/");
        let payload: ViaCepPayload = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if payload.is_not_found() {
            tracing::info!(cep = %cep, "CEP not found");
            return Err(PostalError::NotFound(cep.to_string()));
        }

        tracing::debug!(cep = %cep, city = %payload.localidade, "CEP resolved");
        Ok(payload.into_address())
    }
}
