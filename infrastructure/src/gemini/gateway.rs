//! Gemini `generateContent` adapter for the [`GenerativeModel`] port

use super::types::{ErrorWrapper, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use persona_application::{GatewayError, GenerationRequest, GenerativeModel};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, trace};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gemini REST client bound to one model
pub struct GeminiModel {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let body = GenerateContentRequest::from(request);
        debug!(
            model = %self.model,
            grounded = request.grounding.is_some(),
            structured = request.response_schema.is_some(),
            "Sending generateContent request"
        );
        trace!("Prompt: {}", request.prompt);

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(format!("Gemini API request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.without_url().to_string()))?;

        let text = parsed.into_text().ok_or(GatewayError::EmptyResponse)?;
        trace!("Response: {}", text);
        Ok(text)
    }
}

fn map_http_error(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            match wrapper.error.status {
                Some(status_text) if !status_text.is_empty() => format!("{status_text}: {msg}"),
                _ => msg,
            }
        })
        .unwrap_or_else(|_| body.to_string());

    GatewayError::RequestFailed {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        let model = GeminiModel::new("KEY", "gemini-2.5-flash", "https://example.com/v1beta/models/")
            .unwrap();
        assert_eq!(
            model.endpoint(),
            "https://example.com/v1beta/models/gemini-2.5-flash:generateContent?key=KEY"
        );
        assert_eq!(model.name(), "gemini-2.5-flash");
    }

    #[test]
    fn test_map_http_error_reads_error_body() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        match map_http_error(StatusCode::TOO_MANY_REQUESTS, body) {
            GatewayError::RequestFailed { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "RESOURCE_EXHAUSTED: Quota exceeded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_map_http_error_plain_body() {
        match map_http_error(StatusCode::BAD_GATEWAY, "upstream down") {
            GatewayError::RequestFailed { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
