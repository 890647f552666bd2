//! Category Settings
//!
//! Persisted form of a category, addressed by slot `0..MAX_CATEGORIES`.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// One category as the settings editor stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySettings {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Regex filter applied to symbol names (empty matches nothing)
    #[serde(default)]
    pub filter: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: Rgb,
    #[serde(default = "default_fg_color")]
    pub fg_color: Rgb,
}

fn default_bg_color() -> Rgb {
    Rgb::RED
}

fn default_fg_color() -> Rgb {
    Rgb::BLACK
}

impl Default for CategorySettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            filter: String::new(),
            bg_color: default_bg_color(),
            fg_color: default_fg_color(),
        }
    }
}

impl CategorySettings {
    /// A slot with no filter never selects any symbol
    pub fn is_unused(&self) -> bool {
        self.filter.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_empty_slot() {
        let settings = CategorySettings::default();
        assert!(settings.is_unused());
        assert_eq!(settings.bg_color, Rgb::RED);
        assert_eq!(settings.fg_color, Rgb::BLACK);
    }

    #[test]
    fn test_deserialize_record_shape() {
        let json = r#"{"name": "Faults", "filter": "Def", "bg_color": [165, 42, 42], "fg_color": [0, 0, 0]}"#;
        let settings: CategorySettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.name, "Faults");
        assert_eq!(settings.filter, "Def");
        assert_eq!(settings.bg_color, Rgb(165, 42, 42));
    }

    #[test]
    fn test_deserialize_missing_fields_uses_defaults() {
        let settings: CategorySettings = serde_json::from_str(r#"{"filter": "x"}"#).unwrap();
        assert_eq!(settings.name, "");
        assert_eq!(settings.bg_color, Rgb::RED);
        assert_eq!(settings.fg_color, Rgb::BLACK);
    }
}
