use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{FlashcardRecord, FlashcardSet},
    repositories::FlashcardSetRepository,
};

/// Caller-held history of generated sets. The generation pipeline never
/// reads or writes it.
pub struct FlashcardHistoryService {
    repository: Arc<dyn FlashcardSetRepository>,
}

impl FlashcardHistoryService {
    pub fn new(repository: Arc<dyn FlashcardSetRepository>) -> Self {
        Self { repository }
    }

    pub async fn save_set(
        &self,
        flashcards: Vec<FlashcardRecord>,
        title: Option<&str>,
    ) -> AppResult<String> {
        let set = self
            .repository
            .insert(FlashcardSet::new(title, flashcards))
            .await?;

        log::info!(
            "Saved flashcard set {} ({} cards)",
            set.id,
            set.flashcards.len()
        );
        Ok(set.id)
    }

    pub async fn get_set(&self, id: &str) -> AppResult<FlashcardSet> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Flashcard set with id '{}' not found", id)))
    }

    pub async fn list_sets(&self) -> AppResult<Vec<FlashcardSet>> {
        self.repository.list().await
    }

    pub async fn delete_set(&self, id: &str) -> AppResult<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::NotFound(format!(
                "Flashcard set with id '{}' not found",
                id
            )));
        }

        log::info!("Deleted flashcard set {}", id);
        Ok(())
    }
}
