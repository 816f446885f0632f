//! Recommendation entity — the generated "coffee persona"

use serde::{Deserialize, Serialize};

/// The coffee persona produced for one completed quiz.
///
/// Field names follow the JSON the model is asked to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub coffee_name: String,
    pub tagline: String,
    pub description: String,
    pub traits: Vec<String>,
    pub snack_pairing: String,
    pub music_pairing: String,
    pub brewing_style: String,
    pub visual_prompt: String,
}

impl Recommendation {
    /// Field names the model must return (in schema order)
    pub const FIELDS: [&'static str; 8] = [
        "coffeeName",
        "tagline",
        "description",
        "traits",
        "snackPairing",
        "musicPairing",
        "brewingStyle",
        "visualPrompt",
    ];

    /// The fixed persona used whenever generation fails
    pub fn fallback() -> Self {
        Self {
            coffee_name: "오늘의 믹스커피".to_string(),
            tagline: "이러나 저러나, 역시 이게 최고".to_string(),
            description: "복잡한 분석보다는, 익숙한 달달함이 당신을 위로해줄 거예요.".to_string(),
            traits: vec![
                "익숙함".to_string(),
                "달달함".to_string(),
                "편안함".to_string(),
            ],
            snack_pairing: "에이스 크래커".to_string(),
            music_pairing: "10cm - 아메리카노".to_string(),
            brewing_style: "잠시 내려놓고 쉬어가세요".to_string(),
            visual_prompt:
                "A cute 3D coffee mix stick character, cozy atmosphere, pixar style, 8k"
                    .to_string(),
        }
    }
}
