//! Wire types for the `generateContent` REST endpoint

use persona_application::{GenerationRequest, Grounding};
use serde::{Deserialize, Serialize};

// ==================== Request ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub(crate) enum Tool {
    #[serde(rename = "googleMaps")]
    GoogleMaps {},
    #[serde(rename = "google_search")]
    GoogleSearch {},
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
pub(crate) struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(request: &GenerationRequest) -> Self {
        let generation_config = request
            .response_schema
            .clone()
            .map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            });

        let (tools, tool_config) = match request.grounding {
            None => (Vec::new(), None),
            Some(Grounding::WebSearch) => (vec![Tool::GoogleSearch {}], None),
            Some(Grounding::Maps(at)) => (
                vec![Tool::GoogleMaps {}],
                Some(ToolConfig {
                    retrieval_config: RetrievalConfig {
                        lat_lng: LatLng {
                            latitude: at.latitude,
                            longitude: at.longitude,
                        },
                    },
                }),
            ),
        };

        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config,
            tools,
            tool_config,
        }
    }
}

// ==================== Response ====================

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentResponse {
    #[serde(default)]
    pub parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PartResponse {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorWrapper {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    pub status: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn into_text(self) -> Option<String> {
        let content = self.candidates?.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_domain::Coordinates;
    use serde_json::json;

    #[test]
    fn test_plain_request_shape() {
        let body = GenerateContentRequest::from(&GenerationRequest::new("hello"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn test_schema_request_shape() {
        let request =
            GenerationRequest::new("persona").with_json_schema(json!({ "type": "OBJECT" }));
        let value = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();
        assert_eq!(
            value["generationConfig"],
            json!({ "responseMimeType": "application/json", "responseSchema": { "type": "OBJECT" } })
        );
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn test_maps_request_shape() {
        let at = Coordinates::try_new(37.5, 127.0).unwrap();
        let request = GenerationRequest::new("cafes").with_grounding(Grounding::Maps(at));
        let value = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();
        assert_eq!(value["tools"], json!([{ "googleMaps": {} }]));
        assert_eq!(
            value["toolConfig"],
            json!({ "retrievalConfig": { "latLng": { "latitude": 37.5, "longitude": 127.0 } } })
        );
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_search_request_shape() {
        let request = GenerationRequest::new("video").with_grounding(Grounding::WebSearch);
        let value = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();
        assert_eq!(value["tools"], json!([{ "google_search": {} }]));
        assert!(value.get("toolConfig").is_none());
    }

    #[test]
    fn test_text_parts_are_joined() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hello, " }, { "text": "world" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.into_text().as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_no_candidates_is_none() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_text().is_none());

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
        assert!(blocked.into_text().is_none());
    }
}
