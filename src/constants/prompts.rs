/// Generation instructions. `{count}` and `{content}` are substituted by
/// `PromptBuilder`; the content placeholder must stay last so the source text
/// is appended verbatim after every instruction.
pub const FLASHCARD_GENERATION_PROMPT: &str = "
Generate exactly {count} flashcards from the following text.
Each flashcard must include:
- question (clear and specific)
- short_answer (1-2 sentences)
- long_answer (3-5 sentences, explanatory)

Return ONLY valid JSON in this EXACT format:
{
  \"flashcards\": [
    {\"question\": \"...\", \"short_answer\": \"...\", \"long_answer\": \"...\"}
  ]
}

Content:
{content}
";

pub const COUNT_PLACEHOLDER: &str = "{count}";
pub const CONTENT_PLACEHOLDER: &str = "{content}";
