//! Places client
//!
//! Maps-grounded search for cafés near the user that serve the persona's
//! drink. The grounded model cannot be given a response schema, so the
//! café array is dug out of free text.

use crate::ports::generative_model::{GenerationRequest, GenerativeModel, Grounding};
use persona_domain::{Cafe, Coordinates, Generated, PromptTemplate, parse_cafe_list};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct PlacesClient<G: GenerativeModel + ?Sized> {
    model: Arc<G>,
    count: usize,
}

impl<G: GenerativeModel + ?Sized> PlacesClient<G> {
    pub fn new(model: Arc<G>, count: usize) -> Self {
        Self { model, count }
    }

    /// Find up to `count` cafés near `at`. Any failure yields an empty list.
    pub async fn find(&self, at: Coordinates, coffee_name: &str) -> Generated<Vec<Cafe>> {
        let request = GenerationRequest::new(PromptTemplate::cafe_search_prompt(
            at,
            coffee_name,
            self.count,
        ))
        .with_grounding(Grounding::Maps(at));

        debug!(model = self.model.name(), %at, "Searching cafes");

        let text = match self.model.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Cafe search failed: {}", e);
                return Generated::Fallback(Vec::new());
            }
        };

        match parse_cafe_list(&text) {
            Ok(mut cafes) => {
                cafes.truncate(self.count);
                debug!("Found {} cafes", cafes.len());
                Generated::Fresh(cafes)
            }
            Err(e) => {
                warn!("Cafe response could not be parsed: {}", e);
                Generated::Fallback(Vec::new())
            }
        }
    }
}
