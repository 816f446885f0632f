//! Prompt templates for the persona pipeline

use crate::persona::location::Coordinates;
use crate::persona::recommendation::Recommendation;
use crate::quiz::category::Category;
use crate::quiz::selection::Selection;
use serde_json::{Value, json};

/// Templates for generating prompts at each pipeline stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Persona prompt enumerating all twelve preferences.
    ///
    /// Every field is written in `language` except `visualPrompt`, which is
    /// always English and follows a fixed character template.
    pub fn persona_prompt(selection: &Selection, language: &str) -> String {
        let mut prompt = String::from("User Context:\n");
        for (i, (category, value)) in selection.entries().enumerate() {
            prompt.push_str(&format!(
                "{}. {}: {}\n",
                i + 1,
                category.prompt_label(),
                value
            ));
        }

        prompt.push_str(&format!(
            r#"
Task: Recommend a specific coffee drink that perfectly suits this complex context and create a "Coffee Character" description for it.
The output MUST be in {language}, except for the visualPrompt which must be in English.

Rules:
1. Choose a coffee drink that matches ALL criteria (temp, sweetness, caffeine, etc.) as closely as possible.
2. 'coffeeName': Be specific (e.g., "Iced Vanilla Oat Latte" instead of just "Latte").
3. 'tagline': A cheering or empathetic one-liner.
4. 'description': Explain why this specific combination is the perfect prescription for today.
5. 'traits': 3 keywords describing the vibe.
6. 'snackPairing': A dessert or snack that goes well with this coffee.
7. 'musicPairing': A specific song title and artist (e.g., "IU - Palette") matching the vibe.
8. 'brewingStyle': A short philosophical advice for today.
9. 'visualPrompt': A descriptive prompt in English for an AI image generator to create a CUTE 3D CHARACTER representing this coffee.
   - Format: "A cute 3D render of a [Coffee Type] character, [Appearance details reflecting '{mood}' and '{vibe}'], expressive face, holding [snack or accessory], soft studio lighting, pixar style, 8k"
"#,
            language = language,
            mood = selection.get(Category::Mood),
            vibe = selection.get(Category::Vibe),
        ));

        prompt
    }

    /// Response schema constraining the persona to its eight fields
    pub fn persona_schema(language: &str) -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "coffeeName": { "type": "STRING", "description": format!("Name of the coffee drink in {}", language) },
                "tagline": { "type": "STRING", "description": format!("A witty one-liner caption in {}", language) },
                "description": { "type": "STRING", "description": format!("Reason for recommendation in {}", language) },
                "traits": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": format!("3 vibe keywords in {}", language)
                },
                "snackPairing": { "type": "STRING", "description": "Best food pairing" },
                "musicPairing": { "type": "STRING", "description": "Best music pairing (Song - Artist)" },
                "brewingStyle": { "type": "STRING", "description": "Advice for the day" },
                "visualPrompt": { "type": "STRING", "description": "English prompt for 3D character image generation" }
            },
            "required": Recommendation::FIELDS,
        })
    }

    /// Nearby café search; the maps tool rules out a response schema,
    /// so the JSON shape is requested in prose.
    pub fn cafe_search_prompt(at: Coordinates, coffee_name: &str, count: usize) -> String {
        format!(
            r#"Find {count} highly rated cafes near this location (lat: {lat}, lng: {lng}) that serve great coffee or similar drinks to "{coffee_name}".

You must Output the result strictly as a valid JSON array matching this structure:
[
  {{
    "name": "Cafe Name",
    "rating": "4.5",
    "address": "123 Main St",
    "openStatus": "Open Now",
    "mapsUrl": "https://maps.google.com/..."
  }}
]

Do not include any conversational text outside the JSON block.
"#,
            count = count,
            lat = at.latitude,
            lng = at.longitude,
            coffee_name = coffee_name,
        )
    }

    /// Official music video lookup for a "Song - Artist" description
    pub fn video_search_prompt(song: &str) -> String {
        format!(
            r#"Find the official YouTube video URL for the song "{}".
Output ONLY the full URL (e.g., https://www.youtube.com/watch?v=dQw4w9WgXcQ).
Do NOT provide just the ID."#,
            song
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_selection() -> Selection {
        let mut selection = Selection::new();
        for category in Category::ALL {
            selection.set(category, format!("<{}>", category.as_str().to_lowercase()));
        }
        selection
    }

    #[test]
    fn test_persona_prompt_lists_all_preferences_in_order() {
        let prompt = PromptTemplate::persona_prompt(&full_selection(), "Korean");
        assert!(prompt.contains("1. Mood: <mood>"));
        assert!(prompt.contains("5. Temperature Preference: <temp>"));
        assert!(prompt.contains("12. Aesthetic/Vibe: <vibe>"));

        let mood_pos = prompt.find("Mood:").unwrap();
        let vibe_pos = prompt.find("Aesthetic/Vibe:").unwrap();
        assert!(mood_pos < vibe_pos);
    }

    #[test]
    fn test_persona_prompt_language_policy() {
        let prompt = PromptTemplate::persona_prompt(&full_selection(), "Japanese");
        assert!(prompt.contains("MUST be in Japanese"));
        assert!(prompt.contains("visualPrompt which must be in English"));
        assert!(prompt.contains("reflecting '<mood>' and '<vibe>'"));
    }

    #[test]
    fn test_persona_schema_requires_all_fields() {
        let schema = PromptTemplate::persona_schema("Korean");
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 8);
        assert_eq!(schema["properties"]["traits"]["type"], "ARRAY");
        assert_eq!(
            schema["properties"]["coffeeName"]["description"],
            "Name of the coffee drink in Korean"
        );
    }

    #[test]
    fn test_cafe_prompt_embeds_location_and_drink() {
        let at = Coordinates::try_new(37.5665, 126.978).unwrap();
        let prompt = PromptTemplate::cafe_search_prompt(at, "Flat White", 3);
        assert!(prompt.contains("Find 3 highly rated cafes"));
        assert!(prompt.contains("lat: 37.5665, lng: 126.978"));
        assert!(prompt.contains("\"Flat White\""));
        assert!(prompt.contains("\"mapsUrl\""));
    }

    #[test]
    fn test_video_prompt() {
        let prompt = PromptTemplate::video_search_prompt("IU - Palette");
        assert!(prompt.contains("\"IU - Palette\""));
        assert!(prompt.contains("Output ONLY the full URL"));
    }
}
