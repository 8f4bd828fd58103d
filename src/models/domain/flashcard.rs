use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated question with a brief and an explanatory answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardRecord {
    pub question: String,
    pub short_answer: String,
    pub long_answer: String,
}

impl FlashcardRecord {
    pub fn new(question: &str, short_answer: &str, long_answer: &str) -> Self {
        FlashcardRecord {
            question: question.to_string(),
            short_answer: short_answer.to_string(),
            long_answer: long_answer.to_string(),
        }
    }
}

/// A titled batch of flashcards kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardSet {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub flashcards: Vec<FlashcardRecord>,
}

impl FlashcardSet {
    pub fn new(title: Option<&str>, flashcards: Vec<FlashcardRecord>) -> Self {
        let created_at = Utc::now();
        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => default_title(&created_at),
        };

        FlashcardSet {
            id: Uuid::new_v4().to_string(),
            title,
            created_at,
            flashcards,
        }
    }
}

fn default_title(created_at: &DateTime<Utc>) -> String {
    format!("Flashcards - {}", created_at.format("%Y-%m-%d"))
}
