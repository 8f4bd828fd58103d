use std::sync::Arc;

use crate::{
    config::Config,
    repositories::InMemoryFlashcardSetRepository,
    services::{
        flashcard_pipeline::FlashcardPipeline,
        flashcard_service::FlashcardService,
        history_service::FlashcardHistoryService,
        model_service::{GenerationClient, ModelService},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub flashcard_service: Arc<FlashcardService>,
    pub history_service: Arc<FlashcardHistoryService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(ModelService::from_config(&config));
        Self::with_generation_client(config, client)
    }

    /// Wires the services around a caller-supplied generation client.
    pub fn with_generation_client(config: Config, client: Arc<dyn GenerationClient>) -> Self {
        let history_repository = Arc::new(InMemoryFlashcardSetRepository::new());
        let history_service = Arc::new(FlashcardHistoryService::new(history_repository));

        let flashcard_service = Arc::new(FlashcardService::new(
            FlashcardPipeline::new(client),
            config.gemini_api_key.clone(),
            history_service.clone(),
        ));

        Self {
            flashcard_service,
            history_service,
            config: Arc::new(config),
        }
    }
}
