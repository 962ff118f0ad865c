//! Mapping of service errors to HTTP responses.

use crate::logic::AllocationError;
use crate::models::ModelError;
use crate::store::StoreError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No {kind} found for {key}")]
    NotFound { kind: &'static str, key: String },
    /// Body, path or query could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Invalid group id: {0}")]
    UnknownGroup(Uuid),
    #[error(transparent)]
    Invalid(#[from] ModelError),
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    pub fn not_found(kind: &'static str, id: Uuid) -> Self {
        ApiError::NotFound {
            kind,
            key: id.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. }
            | ApiError::Invalid(ModelError::NotOnRoster(_))
            | ApiError::Allocation(AllocationError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_)
            | ApiError::UnknownGroup(_)
            | ApiError::Invalid(_)
            | ApiError::Allocation(AllocationError::InvalidArgument(_))
            | ApiError::Allocation(AllocationError::InvalidState) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Allocation(AllocationError::Storage(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::warn!("Request failed: {}", self);
        }
        HttpResponse::build(status).json(serde_json::json!({ "error": self.to_string() }))
    }
}
