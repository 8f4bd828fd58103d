use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateFlashcardsRequest, SaveFlashcardSetRequest},
        response::{FlashcardSetSummaryDto, SaveFlashcardSetResponse},
    },
};

#[post("/api/flashcards/generate")]
pub async fn generate_flashcards(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateFlashcardsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .flashcard_service
        .generate_flashcards(request.into_inner())
        .await
        .inspect_err(|e| {
            log::warn!(
                "[{}] flashcard generation failed ({}): {}",
                get_request_id(&req).unwrap_or_else(|| "-".to_string()),
                e.error_code(),
                e
            );
        })?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/flashcard-sets")]
pub async fn save_flashcard_set(
    state: web::Data<AppState>,
    request: web::Json<SaveFlashcardSetRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let id = state
        .history_service
        .save_set(request.flashcards, request.title.as_deref())
        .await?;
    Ok(HttpResponse::Created().json(SaveFlashcardSetResponse { id }))
}

#[get("/api/flashcard-sets")]
pub async fn list_flashcard_sets(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let sets: Vec<FlashcardSetSummaryDto> = state
        .history_service
        .list_sets()
        .await?
        .into_iter()
        .map(FlashcardSetSummaryDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(sets))
}

#[get("/api/flashcard-sets/{id}")]
pub async fn get_flashcard_set(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let set = state.history_service.get_set(&id).await?;
    Ok(HttpResponse::Ok().json(set))
}

#[delete("/api/flashcard-sets/{id}")]
pub async fn delete_flashcard_set(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.history_service.delete_set(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_flashcards)
        .service(save_flashcard_set)
        .service(list_flashcard_sets)
        .service(get_flashcard_set)
        .service(delete_flashcard_set);
}
