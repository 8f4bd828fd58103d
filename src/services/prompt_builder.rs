use crate::constants::prompts::{
    CONTENT_PLACEHOLDER, COUNT_PLACEHOLDER, FLASHCARD_GENERATION_PROMPT,
};

/// Renders the generation prompt for a piece of study text.
///
/// The count is embedded exactly as given; bounds are the caller's concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        PromptBuilder
    }

    pub fn build(&self, source_text: &str, requested_count: i32) -> String {
        FLASHCARD_GENERATION_PROMPT
            .replacen(COUNT_PLACEHOLDER, &requested_count.to_string(), 1)
            .replacen(CONTENT_PLACEHOLDER, source_text, 1)
    }
}
