//! Category Registry
//!
//! Ordered category list. Position is priority: the first category whose
//! filter matches wins, regardless of how specific later filters are.

use std::collections::HashMap;

use crate::error::{AlarmError, Result};

use super::def::{Category, CategoryStyle};
use super::settings::CategorySettings;

/// Maximum number of categories (settings slots `0..256`)
pub const MAX_CATEGORIES: usize = 256;

#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one category per settings record, in slot order.
    pub fn from_settings(settings: &[CategorySettings]) -> Result<Self> {
        let mut registry = Self::new();
        for entry in settings {
            registry.push(Category::from_settings(entry)?)?;
        }
        Ok(registry)
    }

    /// Append with the lowest priority so far
    pub fn push(&mut self, category: Category) -> Result<()> {
        if self.categories.len() >= MAX_CATEGORIES {
            return Err(AlarmError::RegistryFull {
                max: MAX_CATEGORIES,
            });
        }
        self.categories.push(category);
        Ok(())
    }

    /// First category in list order whose filter matches `text`.
    pub fn first_match(&self, text: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.is_match(text))
    }

    pub fn get(&self, position: usize) -> Option<&Category> {
        self.categories.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Colors keyed by category id, for the export writer
    pub fn style_table(&self) -> StyleTable {
        self.categories.iter().collect()
    }
}

/// Category colors looked up by id at export time
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    styles: HashMap<u32, CategoryStyle>,
}

impl StyleTable {
    pub fn insert(&mut self, id: u32, style: CategoryStyle) {
        self.styles.insert(id, style);
    }

    pub fn get(&self, id: u32) -> Option<&CategoryStyle> {
        self.styles.get(&id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl<'a> FromIterator<&'a Category> for StyleTable {
    fn from_iter<I: IntoIterator<Item = &'a Category>>(iter: I) -> Self {
        let styles = iter
            .into_iter()
            .map(|category| (category.id(), category.style()))
            .collect();
        Self { styles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Rgb;

    fn registry(filters: &[&str]) -> CategoryRegistry {
        let settings: Vec<CategorySettings> = filters
            .iter()
            .map(|filter| CategorySettings {
                filter: filter.to_string(),
                ..Default::default()
            })
            .collect();
        CategoryRegistry::from_settings(&settings).unwrap()
    }

    #[test]
    fn test_first_match_position_beats_specificity() {
        let registry = registry(&["A", "AB"]);
        let matched = registry.first_match("AB123").unwrap();
        assert_eq!(matched.filter(), "A");
        assert_eq!(matched.id(), registry.get(0).unwrap().id());
    }

    #[test]
    fn test_first_match_skips_non_matching_and_empty() {
        let registry = registry(&["", "Avert", "Message"]);
        let matched = registry.first_match("stS3Message1.x").unwrap();
        assert_eq!(matched.filter(), "Message");
    }

    #[test]
    fn test_first_match_none_when_nothing_matches() {
        let registry = registry(&["Def", "Avert"]);
        assert!(registry.first_match("stS1Message.x").is_none());
        assert!(CategoryRegistry::new().first_match("anything").is_none());
    }

    #[test]
    fn test_from_settings_keeps_slot_order_and_ids() {
        let registry = registry(&["a", "b", "c"]);
        let ids: Vec<u32> = registry.iter().map(Category::id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_settings_reports_bad_filter() {
        let settings = vec![
            CategorySettings {
                filter: "ok".to_string(),
                ..Default::default()
            },
            CategorySettings {
                filter: "(unclosed".to_string(),
                ..Default::default()
            },
        ];
        let err = CategoryRegistry::from_settings(&settings).unwrap_err();
        assert!(matches!(err, AlarmError::Pattern { .. }));
    }

    #[test]
    fn test_capacity_is_bounded() {
        let settings = vec![CategorySettings::default(); MAX_CATEGORIES];
        let mut registry = CategoryRegistry::from_settings(&settings).unwrap();
        assert_eq!(registry.len(), MAX_CATEGORIES);

        let extra = Category::new("x", Rgb::RED, Rgb::BLACK).unwrap();
        assert!(matches!(
            registry.push(extra),
            Err(AlarmError::RegistryFull { max: MAX_CATEGORIES })
        ));
    }

    #[test]
    fn test_style_table_keyed_by_id() {
        let settings = vec![CategorySettings {
            filter: "Def".to_string(),
            bg_color: Rgb(165, 42, 42),
            fg_color: Rgb::WHITE,
            ..Default::default()
        }];
        let registry = CategoryRegistry::from_settings(&settings).unwrap();
        let id = registry.get(0).unwrap().id();

        let styles = registry.style_table();
        assert_eq!(styles.len(), 1);
        let style = styles.get(id).unwrap();
        assert_eq!(style.background, Rgb(165, 42, 42));
        assert_eq!(style.foreground, Rgb::WHITE);
    }
}
