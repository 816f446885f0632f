//! Generative model port
//!
//! Defines the interface for calling a generative text model.

use async_trait::async_trait;
use persona_domain::Coordinates;
use thiserror::Error;

/// Errors that can occur while calling the model
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// External data the model may consult while answering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grounding {
    /// Maps search centered on a position
    Maps(Coordinates),
    /// Web search
    WebSearch,
}

/// A single generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// JSON response schema; when set the model is asked for `application/json`
    pub response_schema: Option<serde_json::Value>,
    pub grounding: Option<Grounding>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
            grounding: None,
        }
    }

    pub fn with_json_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_grounding(mut self, grounding: Grounding) -> Self {
        self.grounding = Some(grounding);
        self
    }
}

/// Gateway to a generative text model
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Model identifier, for logging
    fn name(&self) -> &str;

    /// Run one generation and return the response text
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;
}
