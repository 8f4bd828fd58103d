use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    errors::{AppError, AppResult},
    models::domain::FlashcardRecord,
    services::{
        json_extractor, model_service::GenerationClient, prompt_builder::PromptBuilder,
        response_sanitizer, schema_validator,
    },
};

/// Prompt -> service call -> sanitize -> extract -> validate.
///
/// Stages run strictly in order and the first failure is returned as is.
/// Each call makes exactly one outbound request; nothing is cached and no
/// state is shared between calls. Dropping the returned future aborts the
/// in-flight request.
#[derive(Clone)]
pub struct FlashcardPipeline {
    client: Arc<dyn GenerationClient>,
    prompt_builder: PromptBuilder,
}

impl FlashcardPipeline {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            client,
            prompt_builder: PromptBuilder::new(),
        }
    }

    pub async fn generate(
        &self,
        source_text: &str,
        requested_count: i32,
        credential: Option<&SecretString>,
    ) -> AppResult<Vec<FlashcardRecord>> {
        if source_text.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }

        let credential = credential
            .filter(|c| !c.expose_secret().trim().is_empty())
            .ok_or(AppError::MissingCredential)?;

        let prompt = self.prompt_builder.build(source_text, requested_count);
        let raw = self.client.invoke(&prompt, credential).await?;
        log::debug!("Received generation reply ({} chars)", raw.chars().count());

        let sanitized = response_sanitizer::sanitize(&raw);
        let candidate = json_extractor::extract(&sanitized);
        let flashcards = schema_validator::validate(candidate)?;

        if flashcards.len() != requested_count.max(0) as usize {
            log::info!(
                "Requested {} flashcards, service produced {}",
                requested_count,
                flashcards.len()
            );
        }

        Ok(flashcards)
    }
}
