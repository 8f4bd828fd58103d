pub mod flashcard_pipeline;
pub mod flashcard_service;
pub mod history_service;
pub mod json_extractor;
pub mod model_service;
pub mod prompt_builder;
pub mod response_sanitizer;
pub mod schema_validator;

pub use flashcard_pipeline::FlashcardPipeline;
pub use model_service::{GenerationClient, ModelService};
