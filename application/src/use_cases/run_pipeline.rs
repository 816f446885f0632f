//! Run Pipeline use case
//!
//! Orchestrates the full recommendation flow for one completed quiz:
//! persona first, then location and music video concurrently, then cafés.

use crate::config::PersonaConfig;
use crate::ports::generative_model::GenerativeModel;
use crate::ports::location::LocationProvider;
use crate::ports::progress::{NoProgress, PipelineProgress, PipelineStage};
use crate::use_cases::find_cafes::PlacesClient;
use crate::use_cases::find_video::VideoLookupClient;
use crate::use_cases::locate::LocationService;
use crate::use_cases::recommend::RecommendationClient;
use persona_domain::{
    Cafe, Category, Generated, PersonaResult, Recommendation, Selection, VideoId,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can escape the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Quiz is incomplete: {} answer(s) missing", .0.len())]
    IncompleteSelection(Vec<Category>),

    #[error("Pipeline aborted: {0}")]
    Aborted(String),
}

/// Everything the pipeline produced, with fallback status per stage
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub recommendation: Generated<Recommendation>,
    pub cafes: Generated<Vec<Cafe>>,
    pub video_id: Option<VideoId>,
    /// Whether a position was available for the café search
    pub located: bool,
}

impl PipelineOutput {
    /// Stages whose value was substituted by a default
    pub fn fell_back(&self) -> Vec<PipelineStage> {
        let mut stages = Vec::new();
        if self.recommendation.is_fallback() {
            stages.push(PipelineStage::Persona);
        }
        if self.video_id.is_none() {
            stages.push(PipelineStage::LocationAndMusic);
        }
        if self.cafes.is_fallback() {
            stages.push(PipelineStage::Cafes);
        }
        stages
    }

    pub fn into_result(self) -> PersonaResult {
        PersonaResult::new(
            self.recommendation.into_inner(),
            self.cafes.into_inner(),
            self.video_id,
        )
    }
}

/// Use case for turning a completed quiz into a [`PersonaResult`]
pub struct RunPipelineUseCase<G: GenerativeModel + ?Sized + 'static> {
    recommender: RecommendationClient<G>,
    places: PlacesClient<G>,
    videos: VideoLookupClient<G>,
    location: LocationService,
}

impl<G: GenerativeModel + ?Sized + 'static> RunPipelineUseCase<G> {
    pub fn new(
        model: Arc<G>,
        location: Arc<dyn LocationProvider>,
        config: &PersonaConfig,
    ) -> Self {
        Self {
            recommender: RecommendationClient::new(model.clone(), config.language.clone()),
            places: PlacesClient::new(model.clone(), config.cafe_count),
            videos: VideoLookupClient::new(model),
            location: LocationService::new(location, config.location_timeout),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, selection: &Selection) -> Result<PipelineOutput, PipelineError> {
        self.execute_with_progress(selection, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        selection: &Selection,
        progress: &dyn PipelineProgress,
    ) -> Result<PipelineOutput, PipelineError> {
        let missing = selection.missing();
        if !missing.is_empty() {
            return Err(PipelineError::IncompleteSelection(missing));
        }

        info!("Generating coffee persona");
        progress.on_stage_start(PipelineStage::Persona);
        let recommendation = self.recommender.recommend(selection).await;
        progress.on_stage_complete(PipelineStage::Persona, recommendation.is_fallback());

        let persona = recommendation.value();
        info!("Persona: {}", persona.coffee_name);

        progress.on_stage_start(PipelineStage::LocationAndMusic);
        let (position, video_id) = tokio::join!(
            self.location.locate(),
            self.videos.find(&persona.music_pairing),
        );
        progress.on_stage_complete(PipelineStage::LocationAndMusic, video_id.is_none());

        let cafes = match position {
            Some(at) => {
                progress.on_stage_start(PipelineStage::Cafes);
                let cafes = self.places.find(at, &persona.coffee_name).await;
                progress.on_stage_complete(PipelineStage::Cafes, cafes.is_fallback());
                cafes
            }
            None => {
                info!("No position available, skipping cafe search");
                Generated::Fresh(Vec::new())
            }
        };

        let output = PipelineOutput {
            recommendation,
            cafes,
            video_id,
            located: position.is_some(),
        };

        let fell_back = output.fell_back();
        if !fell_back.is_empty() {
            let names: Vec<_> = fell_back.iter().map(|s| s.as_str()).collect();
            warn!("Pipeline finished with defaults for: {}", names.join(", "));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::generative_model::GatewayError;
    use crate::use_cases::testing::{
        CAFES_TEXT, MockModel, PERSONA_JSON, StaticLocation, complete_selection, seoul,
    };
    use std::sync::Mutex;

    struct RecordingProgress {
        events: Mutex<Vec<(PipelineStage, Option<bool>)>>,
    }

    impl RecordingProgress {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    impl PipelineProgress for RecordingProgress {
        fn on_stage_start(&self, stage: PipelineStage) {
            self.events.lock().unwrap().push((stage, None));
        }

        fn on_stage_complete(&self, stage: PipelineStage, fell_back: bool) {
            self.events.lock().unwrap().push((stage, Some(fell_back)));
        }
    }

    fn happy_model() -> MockModel {
        MockModel::new()
            .with_persona(Ok(PERSONA_JSON.to_string()))
            .with_video(Ok("https://youtu.be/dQw4w9WgXcQ".to_string()))
            .with_cafes(Ok(CAFES_TEXT.to_string()))
    }

    fn use_case(model: MockModel, at: Option<persona_domain::Coordinates>) -> RunPipelineUseCase<MockModel> {
        RunPipelineUseCase::new(
            Arc::new(model),
            Arc::new(StaticLocation(at)),
            &PersonaConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_full_run() {
        let output = use_case(happy_model(), Some(seoul()))
            .execute(&complete_selection())
            .await
            .unwrap();

        assert!(output.fell_back().is_empty());
        assert!(output.located);
        let result = output.into_result();
        assert_eq!(result.recommendation.coffee_name, "Rainy Day Latte");
        assert_eq!(result.cafes.len(), 3);
        assert_eq!(result.video_id.map(|v| v.to_string()).as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_cafe_search_uses_persona_name() {
        let model = Arc::new(happy_model());
        let pipeline = RunPipelineUseCase::new(
            model.clone(),
            Arc::new(StaticLocation(Some(seoul()))),
            &PersonaConfig::default(),
        );

        pipeline.execute(&complete_selection()).await.unwrap();

        let requests = model.requests.lock().unwrap();
        assert_eq!(requests.len(), 3);
        assert!(requests[2].prompt.contains("Rainy Day Latte"));
    }

    #[tokio::test]
    async fn test_failing_model_still_reaches_result() {
        let output = use_case(MockModel::failing(), Some(seoul()))
            .execute(&complete_selection())
            .await
            .unwrap();

        assert_eq!(
            output.fell_back(),
            [
                PipelineStage::Persona,
                PipelineStage::LocationAndMusic,
                PipelineStage::Cafes
            ]
        );
        let result = output.into_result();
        assert_eq!(result.recommendation, Recommendation::fallback());
        assert!(result.cafes.is_empty());
        assert!(result.video_id.is_none());
    }

    #[tokio::test]
    async fn test_fallback_persona_music_is_looked_up() {
        let model = Arc::new(
            MockModel::new()
                .with_persona(Err(GatewayError::EmptyResponse))
                .with_video(Ok("none".to_string())),
        );
        let pipeline = RunPipelineUseCase::new(
            model.clone(),
            Arc::new(StaticLocation(None)),
            &PersonaConfig::default(),
        );

        pipeline.execute(&complete_selection()).await.unwrap();

        let requests = model.requests.lock().unwrap();
        assert!(requests[1].prompt.contains("10cm - 아메리카노"));
    }

    #[tokio::test]
    async fn test_no_location_skips_cafe_search() {
        let model = Arc::new(happy_model());
        let pipeline = RunPipelineUseCase::new(
            model.clone(),
            Arc::new(StaticLocation(None)),
            &PersonaConfig::default(),
        );

        let output = pipeline.execute(&complete_selection()).await.unwrap();

        assert!(!output.located);
        assert!(!output.cafes.is_fallback());
        assert!(output.cafes.value().is_empty());
        assert_eq!(model.request_count(), 2);
    }

    #[tokio::test]
    async fn test_incomplete_selection_is_rejected() {
        let mut selection = Selection::new();
        selection.set(Category::Mood, "happy");

        let err = use_case(happy_model(), Some(seoul()))
            .execute(&selection)
            .await
            .unwrap_err();

        match err {
            PipelineError::IncompleteSelection(missing) => assert_eq!(missing.len(), 11),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_progress_stages_in_order() {
        let progress = RecordingProgress::new();
        use_case(happy_model(), Some(seoul()))
            .execute_with_progress(&complete_selection(), &progress)
            .await
            .unwrap();

        let events = progress.events.into_inner().unwrap();
        assert_eq!(
            events,
            vec![
                (PipelineStage::Persona, None),
                (PipelineStage::Persona, Some(false)),
                (PipelineStage::LocationAndMusic, None),
                (PipelineStage::LocationAndMusic, Some(false)),
                (PipelineStage::Cafes, None),
                (PipelineStage::Cafes, Some(false)),
            ]
        );
    }
}
