use crate::errors::internal::{InternalError, ItemError};
use crate::errors::ValidationError;
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{payload::Json, ApiResponse};

/// Item operation error types
///
/// Every variant carries a JSON body with an `error` field.
#[derive(ApiResponse, Debug)]
pub enum ItemsApiError {
    /// Missing fields, negative quantity or malformed request
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// No item with the given name
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// An item with the given name already exists
    #[oai(status = 409)]
    DuplicateName(Json<ErrorResponse>),

    /// Store failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemsApiError {
    /// Create a BadRequest error
    pub fn bad_request(message: impl Into<String>) -> Self {
        ItemsApiError::BadRequest(Json(ErrorResponse {
            error: message.into(),
            status_code: 400,
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemsApiError::NotFound(Json(ErrorResponse {
            error: "Item not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create a DuplicateName error
    pub fn duplicate_name(name: &str) -> Self {
        ItemsApiError::DuplicateName(Json(ErrorResponse {
            error: format!("Item already exists: {}", name),
            status_code: 409,
        }))
    }

    /// Create an InternalError carrying the failure detail
    pub fn internal_error(message: impl Into<String>) -> Self {
        ItemsApiError::InternalError(Json(ErrorResponse {
            error: message.into(),
            status_code: 500,
        }))
    }

    /// Convert a ValidationError to a 400 response
    pub fn from_validation(err: ValidationError) -> Self {
        tracing::debug!("Rejected request: {}", err);
        Self::bad_request(err.to_string())
    }

    /// Convert InternalError to ItemsApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// `context` prefixes the store failure detail, which is passed through to
    /// the client as well as logged.
    pub fn from_internal_error(err: InternalError, context: &str) -> Self {
        match err {
            InternalError::Item(ItemError::NotFound(name)) => {
                tracing::debug!("Item not found: {}", name);
                Self::not_found()
            }
            InternalError::Item(ItemError::DuplicateName(name)) => {
                tracing::warn!("Duplicate item name rejected: {}", name);
                Self::duplicate_name(&name)
            }
            other => {
                tracing::error!("{}: {}", context, other);
                Self::internal_error(format!("{}: {}", context, other))
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemsApiError::BadRequest(json) => json.0.error.clone(),
            ItemsApiError::NotFound(json) => json.0.error.clone(),
            ItemsApiError::DuplicateName(json) => json.0.error.clone(),
            ItemsApiError::InternalError(json) => json.0.error.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemsApiError::BadRequest(json) => json.0.status_code,
            ItemsApiError::NotFound(json) => json.0.status_code,
            ItemsApiError::DuplicateName(json) => json.0.status_code,
            ItemsApiError::InternalError(json) => json.0.status_code,
        }
    }
}
