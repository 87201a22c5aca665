use poem_openapi::Object;

/// Body of `GET /health`
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Always `healthy` when the service answers
    pub status: String,

    /// Crate version of the running binary
    pub version: String,

    /// Time of the check, RFC 3339 in UTC
    pub timestamp: String,
}

/// Standardized error response model
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Plain acknowledgement
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
