//! Video lookup client
//!
//! Web-search-grounded lookup of the official YouTube video for a song.

use crate::ports::generative_model::{GenerationRequest, GenerativeModel, Grounding};
use persona_domain::{PromptTemplate, VideoId, extract_video_id};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct VideoLookupClient<G: GenerativeModel + ?Sized> {
    model: Arc<G>,
}

impl<G: GenerativeModel + ?Sized> VideoLookupClient<G> {
    pub fn new(model: Arc<G>) -> Self {
        Self { model }
    }

    /// Look up a video id for `song`; `None` when nothing usable comes back.
    pub async fn find(&self, song: &str) -> Option<VideoId> {
        let request = GenerationRequest::new(PromptTemplate::video_search_prompt(song))
            .with_grounding(Grounding::WebSearch);

        debug!(model = self.model.name(), song, "Looking up music video");

        match self.model.generate(&request).await {
            Ok(text) => {
                let id = extract_video_id(&text);
                if id.is_none() {
                    debug!("No video id in response: {}", text);
                }
                id
            }
            Err(e) => {
                warn!("Video lookup failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::generative_model::GatewayError;
    use crate::use_cases::testing::MockModel;

    #[tokio::test]
    async fn test_watch_url_yields_id() {
        let model = Arc::new(MockModel::new().with_video(Ok(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&foo=bar".to_string(),
        )));
        let client = VideoLookupClient::new(model.clone());

        let id = client.find("Rick Astley - Never Gonna Give You Up").await;

        assert_eq!(id.map(|id| id.to_string()).as_deref(), Some("dQw4w9WgXcQ"));
        let requests = model.requests.lock().unwrap();
        assert_eq!(requests[0].grounding, Some(Grounding::WebSearch));
    }

    #[tokio::test]
    async fn test_no_url_is_absent() {
        let model = Arc::new(MockModel::new().with_video(Ok("I could not find it.".to_string())));
        let client = VideoLookupClient::new(model);

        assert!(client.find("Unknown - Song").await.is_none());
    }

    #[tokio::test]
    async fn test_gateway_failure_is_absent() {
        let model = Arc::new(
            MockModel::new().with_video(Err(GatewayError::ConnectionError("offline".into()))),
        );
        let client = VideoLookupClient::new(model);

        assert!(client.find("10cm - 아메리카노").await.is_none());
    }
}
