pub mod flashcard;
pub use flashcard::{FlashcardRecord, FlashcardSet};
