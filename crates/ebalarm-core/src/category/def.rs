//! Category Definition
//!
//! A compiled, immutable classification rule. Identity comes from a
//! process-wide counter and survives `with_pattern`.

use std::sync::atomic::{AtomicU32, Ordering};

use regex::Regex;
use serde::Serialize;

use crate::error::{AlarmError, Result};

use super::color::Rgb;
use super::settings::CategorySettings;

static NEXT_CATEGORY_ID: AtomicU32 = AtomicU32::new(0);

fn next_id() -> u32 {
    NEXT_CATEGORY_ID.fetch_add(1, Ordering::Relaxed)
}

/// Display colors of a category, keyed by id in a `StyleTable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Runtime category
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    id: u32,
    name: String,
    filter: String,
    /// `None` for an empty filter
    #[serde(skip)]
    pattern: Option<Regex>,
    background: Rgb,
    foreground: Rgb,
}

impl Category {
    /// Compile `filter` and assign the next id.
    pub fn new(filter: &str, background: Rgb, foreground: Rgb) -> Result<Self> {
        Ok(Self {
            id: next_id(),
            name: String::new(),
            filter: filter.to_string(),
            pattern: compile(filter)?,
            background,
            foreground,
        })
    }

    pub fn from_settings(settings: &CategorySettings) -> Result<Self> {
        Self::new(&settings.filter, settings.bg_color, settings.fg_color)
            .map(|category| category.with_name(&settings.name))
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Same category (id, name, colors) with a new filter.
    pub fn with_pattern(&self, filter: &str) -> Result<Self> {
        Ok(Self {
            id: self.id,
            name: self.name.clone(),
            filter: filter.to_string(),
            pattern: compile(filter)?,
            background: self.background,
            foreground: self.foreground,
        })
    }

    /// Unanchored search of the filter in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn foreground(&self) -> Rgb {
        self.foreground
    }

    pub fn style(&self) -> CategoryStyle {
        CategoryStyle {
            background: self.background,
            foreground: self.foreground,
        }
    }

    /// Label of the category column in the alarm table
    pub fn label(&self) -> String {
        format!("{id}: Category {id}", id = self.id)
    }
}

fn compile(filter: &str) -> Result<Option<Regex>> {
    if filter.is_empty() {
        return Ok(None);
    }
    Regex::new(filter)
        .map(Some)
        .map_err(|source| AlarmError::Pattern {
            pattern: filter.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(filter: &str) -> Category {
        Category::new(filter, Rgb::RED, Rgb::BLACK).unwrap()
    }

    #[test]
    fn test_is_match_is_unanchored() {
        let cat = category(r"Def\w*\.");
        assert!(cat.is_match("stS12DefImdt.bAlarm"));
        assert!(!cat.is_match("stS12Avert.bAlarm"));
    }

    #[test]
    fn test_anchors_in_filter_are_honored() {
        let cat = category("^stS");
        assert!(cat.is_match("stS1Message.x"));
        assert!(!cat.is_match("xstS1Message.x"));
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let cat = category("");
        assert!(!cat.is_match(""));
        assert!(!cat.is_match("anything"));
    }

    #[test]
    fn test_invalid_filter_fails_at_construction() {
        let err = Category::new("stS(", Rgb::RED, Rgb::BLACK).unwrap_err();
        assert!(matches!(err, AlarmError::Pattern { ref pattern, .. } if pattern == "stS("));
    }

    #[test]
    fn test_ids_increase_in_creation_order() {
        let first = category("a");
        let second = category("b");
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_with_pattern_keeps_identity_and_colors() {
        let original = Category::new("A", Rgb(1, 2, 3), Rgb::WHITE)
            .unwrap()
            .with_name("Faults");
        let edited = original.with_pattern("B").unwrap();

        assert_eq!(edited.id(), original.id());
        assert_eq!(edited.name(), "Faults");
        assert_eq!(edited.style(), original.style());
        assert!(edited.is_match("B1"));
        assert!(!edited.is_match("A1"));
        // original value is untouched
        assert!(original.is_match("A1"));
    }

    #[test]
    fn test_with_pattern_rejects_invalid_filter() {
        let original = category("A");
        assert!(original.with_pattern("[").is_err());
    }

    #[test]
    fn test_label_uses_id() {
        let cat = category("x");
        assert_eq!(cat.label(), format!("{0}: Category {0}", cat.id()));
    }

    #[test]
    fn test_from_settings_carries_name_and_colors() {
        let settings = CategorySettings {
            name: "Warnings".to_string(),
            filter: r"Avert\w*\.".to_string(),
            bg_color: Rgb(255, 215, 0),
            fg_color: Rgb::BLACK,
        };
        let cat = Category::from_settings(&settings).unwrap();
        assert_eq!(cat.name(), "Warnings");
        assert_eq!(cat.filter(), r"Avert\w*\.");
        assert_eq!(cat.background(), Rgb(255, 215, 0));
        assert_eq!(cat.foreground(), Rgb::BLACK);
    }
}
