//! Application layer for coffee-persona
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PersonaConfig;
pub use ports::{
    generative_model::{GatewayError, GenerationRequest, GenerativeModel, Grounding},
    location::{LocationError, LocationProvider},
    progress::{NoProgress, PipelineProgress, PipelineStage},
    share::{ShareError, SharePayload, ShareTarget},
};
pub use use_cases::find_cafes::PlacesClient;
pub use use_cases::find_video::VideoLookupClient;
pub use use_cases::locate::LocationService;
pub use use_cases::recommend::RecommendationClient;
pub use use_cases::run_pipeline::{PipelineError, PipelineOutput, RunPipelineUseCase};
pub use use_cases::share_result::{SHARE_TITLE, ShareAction, ShareResultUseCase, share_text};
