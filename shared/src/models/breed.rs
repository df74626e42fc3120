//! Breed Reference Model
//!
//! Read-only records from the bundled breed dataset, used for autocomplete
//! and the reference views. Never mutated by the app.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedIdentification {
    pub id: String,
    pub name: String,
    pub slogan: String,
    pub origin: String,
    /// Emoji flag of the breed's country of origin
    pub flag: String,
    pub main_recommendation: String,
    pub fun_fact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedPhysical {
    pub height: String,
    pub weight: String,
    pub life_expectancy: String,
    /// 1-5
    pub shedding: u8,
}

/// Behavioral scores, each 1-5
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedStatistics {
    pub energy: u8,
    pub intelligence: u8,
    pub affection: u8,
    pub guarding: u8,
    pub trainability: u8,
    pub barking: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedHealth {
    pub daily_intake: String,
    pub health_issues: String,
    pub maintenance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedCompatibility {
    pub sociability: String,
    pub adaptation: String,
    pub apartment: String,
    pub experience_level: String,
    pub behavior_issues: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedImages {
    pub category: String,
    pub img1: String,
    pub img2: String,
}

/// One breed reference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedRecord {
    pub identification: BreedIdentification,
    pub physical: BreedPhysical,
    pub statistics: BreedStatistics,
    pub health: BreedHealth,
    pub compatibility: BreedCompatibility,
    /// Historical timeline entries, oldest first
    #[serde(default)]
    pub timeline: Vec<String>,
    pub images: BreedImages,
}

impl BreedRecord {
    /// Case-insensitive substring match on the breed name
    pub fn name_matches(&self, query: &str) -> bool {
        self.identification
            .name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}
