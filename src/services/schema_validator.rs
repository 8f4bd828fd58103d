use serde_json::{Map, Value};

use crate::{
    errors::{AppError, AppResult},
    models::domain::FlashcardRecord,
};

/// Upper bound on how much of a rejected reply is carried in errors and logs.
pub const EXCERPT_CHAR_LIMIT: usize = 400;

const REQUIRED_FIELDS: [&str; 3] = ["question", "short_answer", "long_answer"];

/// Parses candidate text and checks it against the `{"flashcards": [...]}`
/// shape. Every element must carry all three fields as non-blank strings;
/// a single bad element rejects the whole reply.
///
/// The number of records is whatever the service produced.
pub fn validate(candidate: &str) -> AppResult<Vec<FlashcardRecord>> {
    let value: Value = serde_json::from_str(candidate).map_err(|e| {
        let excerpt = excerpt(candidate);
        log::error!("Failed to parse generation reply: {}", e);
        log::error!("Raw output snippet: {}", excerpt);
        AppError::MalformedResponse {
            reason: format!("reply is not valid JSON: {}", e),
            excerpt: Some(excerpt),
        }
    })?;

    let flashcards = value
        .get("flashcards")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::malformed("missing flashcards array"))?;

    flashcards
        .iter()
        .enumerate()
        .map(|(index, element)| parse_record(index, element))
        .collect()
}

fn parse_record(index: usize, element: &Value) -> AppResult<FlashcardRecord> {
    let object = element.as_object().ok_or_else(|| {
        AppError::malformed(format!("flashcard at index {} is not an object", index))
    })?;

    let [question, short_answer, long_answer] =
        REQUIRED_FIELDS.map(|field| required_string(object, index, field));

    Ok(FlashcardRecord {
        question: question?,
        short_answer: short_answer?,
        long_answer: long_answer?,
    })
}

fn required_string(object: &Map<String, Value>, index: usize, field: &str) -> AppResult<String> {
    match object.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(AppError::malformed(format!(
            "flashcard at index {} has an empty '{}'",
            index, field
        ))),
        Some(_) => Err(AppError::malformed(format!(
            "flashcard at index {} has a non-string '{}'",
            index, field
        ))),
        None => Err(AppError::malformed(format!(
            "flashcard at index {} is missing '{}'",
            index, field
        ))),
    }
}

/// Character-bounded prefix; never splits a UTF-8 sequence.
pub fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHAR_LIMIT).collect()
}
