//! App Configuration Model
//!
//! The single persisted record describing business identity, theme,
//! onboarding state and the service catalog. Every field carries a serde
//! default so a payload written by an older release backfills instead of
//! failing to deserialize.

use serde::{Deserialize, Serialize};

use super::service::ServiceDetail;
use super::theme::ThemeColor;

/// Application configuration (singleton, owned by the config store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_professional_name")]
    pub professional_name: String,
    #[serde(default = "default_slogan")]
    pub slogan: String,
    /// Digits-only canonical form, e.g. "5511999999999"
    #[serde(default = "default_phone")]
    pub phone: String,
    /// URL or embedded `data:` payload
    #[serde(default = "default_profile_image")]
    pub profile_image: String,
    #[serde(default = "default_hero_image")]
    pub hero_image: String,
    #[serde(default)]
    pub theme_color: ThemeColor,
    #[serde(default = "default_instagram_url")]
    pub instagram_url: String,
    #[serde(default = "default_location_text")]
    pub location_text: String,
    /// Display order is insertion order
    #[serde(default = "ServiceDetail::seed_catalog")]
    pub services: Vec<ServiceDetail>,
    /// False until first-run setup completes
    #[serde(default)]
    pub is_onboarded: bool,
}

fn default_app_name() -> String {
    "Adestramento Pro".to_string()
}

fn default_professional_name() -> String {
    "Carlos Eduardo".to_string()
}

fn default_slogan() -> String {
    "Adestrador Comportamentalista".to_string()
}

fn default_phone() -> String {
    "5511999999999".to_string()
}

fn default_profile_image() -> String {
    "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img14.png".to_string()
}

fn default_hero_image() -> String {
    "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img0.png".to_string()
}

fn default_instagram_url() -> String {
    "https://instagram.com".to_string()
}

fn default_location_text() -> String {
    "São Paulo - SP".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            professional_name: default_professional_name(),
            slogan: default_slogan(),
            phone: default_phone(),
            profile_image: default_profile_image(),
            hero_image: default_hero_image(),
            theme_color: ThemeColor::Orange,
            instagram_url: default_instagram_url(),
            location_text: default_location_text(),
            services: ServiceDetail::seed_catalog(),
            is_onboarded: false,
        }
    }
}

/// Partial update payload for [`AppConfig`]
///
/// Shallow merge at the top level: `Some` fields override, `None` fields are
/// untouched. `services` replaces the whole catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigUpdate {
    pub app_name: Option<String>,
    pub professional_name: Option<String>,
    pub slogan: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub hero_image: Option<String>,
    pub theme_color: Option<ThemeColor>,
    pub instagram_url: Option<String>,
    pub location_text: Option<String>,
    pub services: Option<Vec<ServiceDetail>>,
    pub is_onboarded: Option<bool>,
}

impl AppConfigUpdate {
    /// Merge this partial update into `config`
    pub fn apply_to(self, config: &mut AppConfig) {
        if let Some(v) = self.app_name {
            config.app_name = v;
        }
        if let Some(v) = self.professional_name {
            config.professional_name = v;
        }
        if let Some(v) = self.slogan {
            config.slogan = v;
        }
        if let Some(v) = self.phone {
            config.phone = v;
        }
        if let Some(v) = self.profile_image {
            config.profile_image = v;
        }
        if let Some(v) = self.hero_image {
            config.hero_image = v;
        }
        if let Some(v) = self.theme_color {
            config.theme_color = v;
        }
        if let Some(v) = self.instagram_url {
            config.instagram_url = v;
        }
        if let Some(v) = self.location_text {
            config.location_text = v;
        }
        if let Some(v) = self.services {
            config.services = v;
        }
        if let Some(v) = self.is_onboarded {
            config.is_onboarded = v;
        }
    }
}
