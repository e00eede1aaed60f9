use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::services::http_helpers::detail_response;

pub const NO_LESSONS_MESSAGE: &str = "Sem aulas cadastradas neste curso.";

/// Failures of a single drafting attempt. None of them is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("{}", NO_LESSONS_MESSAGE)]
    NoLessons,

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Invalid draft: {0}")]
    InvalidDraft(String),
}

/// Errors raised by a `QuizModel` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("model '{model}' is not available: {message}")]
    UnknownModel { model: String, message: String },

    #[error("{0}")]
    Request(String),
}

impl From<ModelError> for DraftError {
    fn from(err: ModelError) -> Self {
        DraftError::Generation(err.to_string())
    }
}

impl From<reqwest::Error> for DraftError {
    fn from(err: reqwest::Error) -> Self {
        DraftError::DataSource(err.to_string())
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Draft(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        detail_response(self.status_code(), self)
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type DraftResult<T> = Result<T, DraftError>;
