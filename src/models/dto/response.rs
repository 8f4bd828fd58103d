use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{FlashcardRecord, FlashcardSet};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateFlashcardsResponse {
    pub count: usize,
    pub flashcards: Vec<FlashcardRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_id: Option<String>,
}

impl GenerateFlashcardsResponse {
    pub fn new(flashcards: Vec<FlashcardRecord>, set_id: Option<String>) -> Self {
        GenerateFlashcardsResponse {
            count: flashcards.len(),
            flashcards,
            set_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveFlashcardSetResponse {
    pub id: String,
}

/// History listing entry; the cards themselves are fetched per set.
#[derive(Debug, Clone, Serialize)]
pub struct FlashcardSetSummaryDto {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub flashcard_count: usize,
}

impl From<FlashcardSet> for FlashcardSetSummaryDto {
    fn from(set: FlashcardSet) -> Self {
        FlashcardSetSummaryDto {
            id: set.id,
            title: set.title,
            created_at: set.created_at,
            flashcard_count: set.flashcards.len(),
        }
    }
}
