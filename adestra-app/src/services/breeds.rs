//! Bundled breed reference dataset
//!
//! Static read-only catalog embedded at compile time, parsed once on first
//! access. Feeds the breed views and the booking autocomplete.

use std::sync::OnceLock;

use shared::BreedRecord;

/// Autocomplete suggestion cap
pub const MAX_SUGGESTIONS: usize = 5;

static BREEDS_JSON: &str = include_str!("../../data/breeds.json");
static BREEDS: OnceLock<Vec<BreedRecord>> = OnceLock::new();

/// The full dataset, in bundled order
pub fn all() -> &'static [BreedRecord] {
    BREEDS.get_or_init(|| {
        serde_json::from_str(BREEDS_JSON).expect("bundled breeds.json must parse")
    })
}

/// Find a breed by its stable id
pub fn by_id(id: &str) -> Option<&'static BreedRecord> {
    all().iter().find(|b| b.identification.id == id)
}

/// Autocomplete: case-insensitive substring match on the name, capped at
/// [`MAX_SUGGESTIONS`]. An empty query yields no suggestions.
pub fn search(query: &str) -> Vec<&'static BreedRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    all()
        .iter()
        .filter(|b| b.name_matches(query))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_parses_and_ids_are_unique() {
        let breeds = all();
        assert!(breeds.len() >= 8);
        let mut ids: Vec<&str> = breeds.iter().map(|b| b.identification.id.as_str()).collect();
        ids.sort();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len);
        for b in breeds {
            for score in [
                b.statistics.energy,
                b.statistics.intelligence,
                b.statistics.affection,
                b.statistics.guarding,
                b.statistics.trainability,
                b.statistics.barking,
                b.physical.shedding,
            ] {
                assert!((1..=5).contains(&score));
            }
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let hits = search("retriever");
        assert!(hits.iter().any(|b| b.identification.name == "Labrador Retriever"));
        assert!(hits.iter().any(|b| b.identification.name == "Golden Retriever"));

        let hits = search("BORDER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].identification.id, "border-collie");
    }

    #[test]
    fn search_caps_suggestions_and_ignores_empty_query() {
        assert!(search("").is_empty());
        // Every name contains at least one vowel-ish common letter
        assert!(search("e").len() <= MAX_SUGGESTIONS);
        assert!(search("zzzz").is_empty());
    }
}
