//! Selection accumulator
//!
//! Holds the value chosen for each [`Category`]. Filled one field per quiz
//! step and only submitted once every field is set.

use super::category::Category;
use serde::{Deserialize, Serialize};

/// The user's answers for one quiz attempt (Entity)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub mood: String,
    pub weather: String,
    pub situation: String,
    pub physical: String,
    pub temp: String,
    pub caffeine: String,
    pub sweetness: String,
    pub flavor: String,
    pub texture: String,
    pub volume: String,
    pub pairing: String,
    pub vibe: String,
}

impl Selection {
    /// An all-empty selection
    pub fn new() -> Self {
        Self::default()
    }

    fn field_mut(&mut self, category: Category) -> &mut String {
        match category {
            Category::Mood => &mut self.mood,
            Category::Weather => &mut self.weather,
            Category::Situation => &mut self.situation,
            Category::Physical => &mut self.physical,
            Category::Temp => &mut self.temp,
            Category::Caffeine => &mut self.caffeine,
            Category::Sweetness => &mut self.sweetness,
            Category::Flavor => &mut self.flavor,
            Category::Texture => &mut self.texture,
            Category::Volume => &mut self.volume,
            Category::Pairing => &mut self.pairing,
            Category::Vibe => &mut self.vibe,
        }
    }

    /// Record the value chosen for a category
    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        *self.field_mut(category) = value.into();
    }

    /// Value recorded for a category (empty if unanswered)
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Mood => &self.mood,
            Category::Weather => &self.weather,
            Category::Situation => &self.situation,
            Category::Physical => &self.physical,
            Category::Temp => &self.temp,
            Category::Caffeine => &self.caffeine,
            Category::Sweetness => &self.sweetness,
            Category::Flavor => &self.flavor,
            Category::Texture => &self.texture,
            Category::Volume => &self.volume,
            Category::Pairing => &self.pairing,
            Category::Vibe => &self.vibe,
        }
    }

    /// Categories that have not been answered yet
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|c| self.get(*c).is_empty())
            .collect()
    }

    /// True once every category has a value — the only state that may be submitted
    pub fn is_complete(&self) -> bool {
        Category::ALL.iter().all(|c| !self.get(*c).is_empty())
    }

    /// `(category, value)` pairs in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = Selection::new();
        assert!(!selection.is_complete());
        assert_eq!(selection.missing().len(), 12);
    }

    #[test]
    fn test_set_only_touches_one_field() {
        let mut selection = Selection::new();
        selection.set(Category::Flavor, "Nutty and bold");

        assert_eq!(selection.flavor, "Nutty and bold");
        assert_eq!(selection.get(Category::Flavor), "Nutty and bold");
        assert_eq!(selection.missing().len(), 11);
        assert!(!selection.missing().contains(&Category::Flavor));
    }

    #[test]
    fn test_complete_after_all_categories() {
        let mut selection = Selection::new();
        for category in Category::ALL {
            selection.set(category, format!("value-{}", category.as_str()));
        }
        assert!(selection.is_complete());
        assert!(selection.missing().is_empty());
        assert_eq!(selection.vibe, "value-VIBE");
    }

    #[test]
    fn test_entries_in_catalog_order() {
        let mut selection = Selection::new();
        selection.set(Category::Mood, "Calm");
        let entries: Vec<_> = selection.entries().collect();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0], (Category::Mood, "Calm"));
        assert_eq!(entries[11], (Category::Vibe, ""));
    }
}
