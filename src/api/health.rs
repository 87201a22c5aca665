use chrono::{SecondsFormat, Utc};
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::types::dto::common::HealthResponse;

/// Liveness endpoint for the inventory backend
pub struct HealthApi;

#[derive(Tags)]
enum ApiTags {
    /// Service liveness
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Report that the service is up, with the running build version
    ///
    /// Does not touch the item store.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}
