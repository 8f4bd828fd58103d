use std::sync::Arc;

use secrecy::SecretString;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::FlashcardRecord,
        dto::{request::GenerateFlashcardsRequest, response::GenerateFlashcardsResponse},
    },
    services::{flashcard_pipeline::FlashcardPipeline, history_service::FlashcardHistoryService},
};

/// Caller-facing generation API. Holds the configured credential so callers
/// only supply text and a count.
pub struct FlashcardService {
    pipeline: FlashcardPipeline,
    credential: Option<SecretString>,
    history: Arc<FlashcardHistoryService>,
}

impl FlashcardService {
    pub fn new(
        pipeline: FlashcardPipeline,
        credential: Option<SecretString>,
        history: Arc<FlashcardHistoryService>,
    ) -> Self {
        Self {
            pipeline,
            credential,
            history,
        }
    }

    pub async fn generate(
        &self,
        source_text: &str,
        requested_count: i32,
    ) -> AppResult<Vec<FlashcardRecord>> {
        self.pipeline
            .generate(source_text, requested_count, self.credential.as_ref())
            .await
    }

    /// Validates the request, generates, and optionally records the result in
    /// history. Nothing is saved when generation fails.
    pub async fn generate_flashcards(
        &self,
        request: GenerateFlashcardsRequest,
    ) -> AppResult<GenerateFlashcardsResponse> {
        request.validate()?;

        log::info!(
            "Generating {} flashcards from {} chars of text",
            request.count,
            request.text.chars().count()
        );
        let flashcards = self.generate(&request.text, request.count).await?;

        let set_id = if request.save {
            Some(
                self.history
                    .save_set(flashcards.clone(), request.title.as_deref())
                    .await?,
            )
        } else {
            None
        };

        Ok(GenerateFlashcardsResponse::new(flashcards, set_id))
    }
}
