#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::FlashcardRecord;

    /// Three cards in a fixed order.
    pub fn sample_flashcards() -> Vec<FlashcardRecord> {
        vec![
            FlashcardRecord::new(
                "What is the basic unit of life?",
                "The cell.",
                "The cell is the smallest structure that carries out all life processes. Every organism is made of one or more cells.",
            ),
            FlashcardRecord::new(
                "Which organelle produces most of a cell's ATP?",
                "The mitochondrion.",
                "Mitochondria run cellular respiration. They convert nutrients into ATP, the cell's energy currency.",
            ),
            FlashcardRecord::new(
                "What controls what enters and leaves a cell?",
                "The cell membrane.",
                "The membrane is a selectively permeable lipid bilayer. Proteins embedded in it move specific molecules across.",
            ),
        ]
    }

    /// `sample_flashcards` as a noisy service reply: prose, a fenced block and
    /// CRLF line endings.
    pub fn sample_reply() -> String {
        let body = serde_json::json!({ "flashcards": sample_flashcards() });
        format!(
            "Here are your flashcards:\r\n```json\r\n{}\r\n```\r\nLet me know if you need more!",
            body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::{json_extractor, response_sanitizer, schema_validator};

    #[test]
    fn test_fixtures_sample_flashcards() {
        let cards = sample_flashcards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].short_answer, "The cell.");
    }

    #[test]
    fn test_fixtures_sample_reply_recovers_to_sample_flashcards() {
        let sanitized = response_sanitizer::sanitize(&sample_reply());
        let cards = schema_validator::validate(json_extractor::extract(&sanitized)).unwrap();
        assert_eq!(cards, sample_flashcards());
    }
}
