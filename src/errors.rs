use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Empty input: source text is blank")]
    EmptyInput,

    #[error("Missing credential: no generation service API key configured")]
    MissingCredential,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Malformed response: {reason}")]
    MalformedResponse {
        reason: String,
        /// Bounded prefix of the offending text, kept for diagnostics only.
        excerpt: Option<String>,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        AppError::MalformedResponse {
            reason: reason.into(),
            excerpt: None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::EmptyInput => "EMPTY_INPUT",
            AppError::MissingCredential => "MISSING_CREDENTIAL",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }

    /// One message per kind, suitable for showing to the person who asked
    /// for the cards.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::EmptyInput => "Please enter some text to generate flashcards.",
            AppError::MissingCredential => {
                "Flashcard generation is not configured. Set GEMINI_API_KEY and restart the server."
            }
            AppError::ServiceUnavailable(_) => {
                "The flashcard generator could not be reached. Please try again."
            }
            AppError::MalformedResponse { .. } => {
                "Failed to parse AI response. Please try again with clearer content."
            }
            AppError::ValidationError(_) => "The request was invalid.",
            AppError::NotFound(_) => "The requested flashcard set does not exist.",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub message: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyInput => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
            message: self.user_message(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::EmptyInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MissingCredential.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::ServiceUnavailable("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::malformed("missing flashcards array").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::NotFound("set".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            AppError::EmptyInput,
            AppError::MissingCredential,
            AppError::ServiceUnavailable(String::new()),
            AppError::malformed(""),
            AppError::ValidationError(String::new()),
            AppError::NotFound(String::new()),
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::malformed("missing flashcards array");
        assert_eq!(err.to_string(), "Malformed response: missing flashcards array");

        let err = AppError::ServiceUnavailable("connection refused".into());
        assert_eq!(err.to_string(), "Service unavailable: connection refused");
    }
}
