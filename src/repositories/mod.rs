pub mod flashcard_set_repository;

pub use flashcard_set_repository::{FlashcardSetRepository, InMemoryFlashcardSetRepository};
