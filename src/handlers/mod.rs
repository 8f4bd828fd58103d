pub mod flashcard_handler;
pub mod health_handler;

pub use flashcard_handler::{
    delete_flashcard_set, generate_flashcards, get_flashcard_set, list_flashcard_sets,
    save_flashcard_set,
};
pub use health_handler::{health_check, health_check_live, health_check_ready};
