//! Scripted port implementations shared by the use case tests.

use crate::ports::generative_model::{GatewayError, GenerationRequest, GenerativeModel, Grounding};
use crate::ports::location::{LocationError, LocationProvider};
use async_trait::async_trait;
use persona_domain::{Category, Coordinates, Selection};
use std::sync::Mutex;

type Reply = Result<String, GatewayError>;

/// Model that answers by request kind and records every request it sees
pub(crate) struct MockModel {
    persona: Mutex<Option<Reply>>,
    cafes: Mutex<Option<Reply>>,
    video: Mutex<Option<Reply>>,
    pub(crate) requests: Mutex<Vec<GenerationRequest>>,
}

impl MockModel {
    pub(crate) fn new() -> Self {
        Self {
            persona: Mutex::new(None),
            cafes: Mutex::new(None),
            video: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self::new()
    }

    pub(crate) fn with_persona(self, reply: Reply) -> Self {
        *self.persona.lock().unwrap() = Some(reply);
        self
    }

    pub(crate) fn with_cafes(self, reply: Reply) -> Self {
        *self.cafes.lock().unwrap() = Some(reply);
        self
    }

    pub(crate) fn with_video(self, reply: Reply) -> Self {
        *self.video.lock().unwrap() = Some(reply);
        self
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        let slot = match request.grounding {
            None => &self.persona,
            Some(Grounding::Maps(_)) => &self.cafes,
            Some(Grounding::WebSearch) => &self.video,
        };
        slot.lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(GatewayError::ConnectionError("unreachable".to_string())))
    }
}

/// Location source with a fixed answer
pub(crate) struct StaticLocation(pub(crate) Option<Coordinates>);

#[async_trait]
impl LocationProvider for StaticLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.0.ok_or(LocationError::Denied)
    }
}

/// Location source that never answers
pub(crate) struct HangingLocation;

#[async_trait]
impl LocationProvider for HangingLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        std::future::pending().await
    }
}

pub(crate) fn seoul() -> Coordinates {
    Coordinates::try_new(37.5665, 126.978).unwrap()
}

pub(crate) fn complete_selection() -> Selection {
    let mut selection = Selection::new();
    for category in Category::ALL {
        selection.set(category, format!("{}-value", category.as_str().to_lowercase()));
    }
    selection
}

pub(crate) const PERSONA_JSON: &str = r#"```json
{
  "coffeeName": "Rainy Day Latte",
  "tagline": "Soft and slow",
  "description": "A gentle latte for grey afternoons.",
  "traits": ["calm", "warm", "cozy"],
  "snackPairing": "Butter cookie",
  "musicPairing": "Norah Jones - Don't Know Why",
  "brewingStyle": "Take a deep breath first.",
  "visualPrompt": "A cute 3D render of a latte character"
}
```"#;

pub(crate) const CAFES_TEXT: &str = r#"Here you go:
```json
[
  {"name": "Cafe A", "rating": "4.5", "address": "1 Main St", "openStatus": "Open", "mapsUrl": "https://maps.example/a"},
  {"name": "Cafe B", "rating": 4.2, "address": "2 Main St", "mapsUrl": "https://maps.example/b"},
  {"name": "Cafe C", "address": "3 Main St", "mapsUrl": "https://maps.example/c"}
]
```"#;
