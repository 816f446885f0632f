//! Recommendation client
//!
//! Turns a completed quiz into a coffee persona, substituting the fixed
//! fallback persona whenever the model call or the parse fails.

use crate::ports::generative_model::{GenerationRequest, GenerativeModel};
use persona_domain::{Generated, PromptTemplate, Recommendation, Selection, parse_recommendation};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct RecommendationClient<G: GenerativeModel + ?Sized> {
    model: Arc<G>,
    language: String,
}

impl<G: GenerativeModel + ?Sized> RecommendationClient<G> {
    pub fn new(model: Arc<G>, language: impl Into<String>) -> Self {
        Self {
            model,
            language: language.into(),
        }
    }

    /// Generate a persona for `selection`. Never fails.
    pub async fn recommend(&self, selection: &Selection) -> Generated<Recommendation> {
        let request = GenerationRequest::new(PromptTemplate::persona_prompt(
            selection,
            &self.language,
        ))
        .with_json_schema(PromptTemplate::persona_schema(&self.language));

        debug!(model = self.model.name(), "Requesting persona");

        let text = match self.model.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Persona generation failed, using fallback: {}", e);
                return Generated::Fallback(Recommendation::fallback());
            }
        };

        match parse_recommendation(&text) {
            Ok(recommendation) => Generated::Fresh(recommendation),
            Err(e) => {
                warn!("Persona response could not be parsed, using fallback: {}", e);
                debug!("Unparsable persona response: {}", text);
                Generated::Fallback(Recommendation::fallback())
            }
        }
    }
}
