//! Category value object — the twelve preference axes of the quiz

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A preference axis asked about by exactly one catalog question (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Mood,
    Weather,
    Situation,
    Physical,
    Temp,
    Caffeine,
    Sweetness,
    Flavor,
    Texture,
    Volume,
    Pairing,
    Vibe,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Category; 12] = [
        Category::Mood,
        Category::Weather,
        Category::Situation,
        Category::Physical,
        Category::Temp,
        Category::Caffeine,
        Category::Sweetness,
        Category::Flavor,
        Category::Texture,
        Category::Volume,
        Category::Pairing,
        Category::Vibe,
    ];

    /// Wire/config identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mood => "MOOD",
            Category::Weather => "WEATHER",
            Category::Situation => "SITUATION",
            Category::Physical => "PHYSICAL",
            Category::Temp => "TEMP",
            Category::Caffeine => "CAFFEINE",
            Category::Sweetness => "SWEETNESS",
            Category::Flavor => "FLAVOR",
            Category::Texture => "TEXTURE",
            Category::Volume => "VOLUME",
            Category::Pairing => "PAIRING",
            Category::Vibe => "VIBE",
        }
    }

    /// Label used when the preference is written into a model prompt
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Category::Mood => "Mood",
            Category::Weather => "Weather",
            Category::Situation => "Situation",
            Category::Physical => "Physical Condition",
            Category::Temp => "Temperature Preference",
            Category::Caffeine => "Caffeine Tolerance",
            Category::Sweetness => "Sweetness Level",
            Category::Flavor => "Flavor Preference",
            Category::Texture => "Texture Preference",
            Category::Volume => "Volume/Amount",
            Category::Pairing => "Pairing Preference",
            Category::Vibe => "Aesthetic/Vibe",
        }
    }

    /// Position in catalog order (0-based)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}
