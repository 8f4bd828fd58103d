use serde::Deserialize;
use validator::Validate;

use crate::models::domain::FlashcardRecord;

pub const DEFAULT_FLASHCARD_COUNT: i32 = 10;

fn default_count() -> i32 {
    DEFAULT_FLASHCARD_COUNT
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateFlashcardsRequest {
    // Whitespace-only text passes here and is rejected as EMPTY_INPUT by the
    // pipeline itself.
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,

    #[serde(default = "default_count")]
    #[validate(range(min = 3, max = 30, message = "count must be between 3 and 30"))]
    pub count: i32,

    #[serde(default)]
    pub save: bool,

    #[validate(length(max = 200))]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveFlashcardSetRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,

    pub flashcards: Vec<FlashcardRecord>,
}
