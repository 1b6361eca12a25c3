//! Persistence error type shared by the repos and HTTP handlers.
//!
//! `StoreError` is the typed persistence contract: the variants repos return
//! map to stable HTTP statuses (400 / 404 / 500) via `actix_web::ResponseError`.
//! Client-facing messages are terse; database/serialization internals are
//! logged rather than leaked in the response body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Request violated a domain/validation rule → 400.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist → 404.
    #[error("{0} not found")]
    NotFound(String),

    /// Underlying database failure → 500 (details logged, not leaked).
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    /// Response serialization failure → 500 (details logged, not leaked).
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Db(_) | StoreError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            StoreError::Validation(msg) => msg.clone(),
            StoreError::NotFound(_) => self.to_string(),
            StoreError::Db(e) => {
                log::error!("database error: {e}");
                "internal server error".to_string()
            }
            StoreError::Encode(e) => {
                log::error!("encode error: {e}");
                "internal server error".to_string()
            }
        };

        HttpResponse::build(status).json(json!({ "error": message }))
    }
}
