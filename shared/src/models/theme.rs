//! Theme Color Model
//!
//! The app theme is one color token out of a closed set of four. Every view
//! renders through the derived [`ThemeClasses`] record instead of splicing
//! color names into utility classes by hand, so an invalid color cannot be
//! persisted or rendered.

use serde::{Deserialize, Serialize};

/// Theme color token (closed set, selected via the admin swatches)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Orange,
    Blue,
    Green,
    Purple,
}

impl ThemeColor {
    /// All selectable tokens, in swatch display order
    pub const ALL: [ThemeColor; 4] = [
        ThemeColor::Orange,
        ThemeColor::Blue,
        ThemeColor::Green,
        ThemeColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeColor::Orange => "orange",
            ThemeColor::Blue => "blue",
            ThemeColor::Green => "green",
            ThemeColor::Purple => "purple",
        }
    }

    /// Derive the six style tokens for this color.
    ///
    /// Pure and total: every token is a function of the color alone.
    pub fn classes(&self) -> ThemeClasses {
        let c = self.as_str();
        ThemeClasses {
            primary: format!("bg-{c}-500 hover:bg-{c}-600"),
            primary_bg: format!("bg-{c}-50"),
            primary_text: format!("text-{c}-500"),
            secondary_bg: format!("bg-{c}-100"),
            border: format!("border-{c}-200"),
            shadow: format!("shadow-{c}-500/30"),
        }
    }
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived style tokens consumed by the views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeClasses {
    pub primary: String,
    pub primary_bg: String,
    pub primary_text: String,
    pub secondary_bg: String,
    pub border: String,
    pub shadow: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_non_empty_for_every_token() {
        for color in ThemeColor::ALL {
            let t = color.classes();
            for token in [
                &t.primary,
                &t.primary_bg,
                &t.primary_text,
                &t.secondary_bg,
                &t.border,
                &t.shadow,
            ] {
                assert!(!token.is_empty(), "empty token for {color}");
                assert!(token.contains(color.as_str()), "cross-contaminated token for {color}");
            }
        }
    }

    #[test]
    fn classes_differ_between_tokens() {
        let orange = ThemeColor::Orange.classes();
        let blue = ThemeColor::Blue.classes();
        assert_ne!(orange, blue);
        assert_eq!(orange, ThemeColor::Orange.classes());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ThemeColor::Purple).unwrap(), "\"purple\"");
        let back: ThemeColor = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(back, ThemeColor::Green);
    }
}
